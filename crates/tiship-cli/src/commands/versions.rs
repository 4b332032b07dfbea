//! Versions command handler for listing available game data versions.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// List version directories found under the data directory.
pub fn handle_versions(data_dir: &Path) -> Result<()> {
    let mut versions = Vec::new();
    let entries = fs::read_dir(data_dir)
        .with_context(|| format!("failed to read data directory {}", data_dir.display()))?;
    for entry in entries {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            versions.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    versions.sort();

    if versions.is_empty() {
        println!("No versions found under {}", data_dir.display());
        return Ok(());
    }

    println!("Available versions ({}):", versions.len());
    for version in versions {
        println!("- {version}");
    }
    Ok(())
}
