#![warn(clippy::all, rust_2018_idioms)]
//! egui widgets for masked text input and sortable tables, plus a demo app.

pub mod app;
pub mod config;
pub mod utils;
pub mod widgets;

pub use app::FormkitApp;
