//! Demo configuration.
//!
//! The demo table is read from the JSON file named by `FORMKIT_TABLE`, or
//! from the bundled sample when the variable is unset.

use std::path::Path;

use anyhow::Context as _;
use formkit_business::{MountedTable, mount_json};

/// Environment variable naming a JSON table props file.
pub const TABLE_PATH_ENV: &str = "FORMKIT_TABLE";

/// Table props bundled with the demo.
pub const SAMPLE_TABLE: &str = include_str!("../assets/sample_table.json");

/// Loads the demo table from `FORMKIT_TABLE` or the bundled sample.
pub fn load_table() -> anyhow::Result<MountedTable> {
    match std::env::var_os(TABLE_PATH_ENV) {
        Some(path) => load_table_file(Path::new(&path)),
        None => {
            log::info!("{TABLE_PATH_ENV} not set, using the bundled sample table");
            Ok(mount_json(SAMPLE_TABLE)?)
        }
    }
}

/// Loads and mounts table props from a JSON file.
pub fn load_table_file(path: &Path) -> anyhow::Result<MountedTable> {
    log::info!("Loading table props from {}", path.display());
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read table props from {}", path.display()))?;
    mount_json(&json).with_context(|| format!("Invalid table props in {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_table_mounts() {
        let mounted = mount_json(SAMPLE_TABLE).expect("bundled sample should mount");
        assert_eq!(mounted.layout.columns().len(), 6);
        assert_eq!(mounted.rows.len(), 3);
        assert_eq!(mounted.state.sort_order().key, "name");
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = load_table_file(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}
