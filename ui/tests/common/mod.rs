use egui_kittest::Harness;
use formkit_business::{MountedTable, mount_json};
use formkit_ui::FormkitApp;
use formkit_ui::config::SAMPLE_TABLE;

/// Harness over the demo app mounted with the bundled sample table.
#[allow(unused)]
pub fn sample_app<'a>() -> Harness<'a, FormkitApp> {
    app_with(mount_json(SAMPLE_TABLE).map_err(anyhow::Error::from))
}

/// Harness over the demo app mounted from `table`, after one frame.
pub fn app_with<'a>(table: anyhow::Result<MountedTable>) -> Harness<'a, FormkitApp> {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut harness = Harness::new_ui_state(
        |ui, app: &mut FormkitApp| app.ui(ui),
        FormkitApp::new(table),
    );
    harness.step();
    harness
}
