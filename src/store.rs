// src/store.rs
//
// Snapshot persistence: one JSON file, fully overwritten each run.

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::snapshot::Snapshot;

/// Load the previous snapshot, or an empty one if no state file exists yet.
pub fn load_snapshot(path: &Path) -> Result<Snapshot> {
    if !path.exists() {
        return Ok(Snapshot::new());
    }
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Overwrite the state file with the current snapshot. Pretty-printed so a
/// human can diff two revisions of the file.
pub fn save_snapshot(path: &Path, snapshot: &Snapshot) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let text = serde_json::to_string_pretty(snapshot)?;
    fs::write(path, text)?;
    Ok(())
}
