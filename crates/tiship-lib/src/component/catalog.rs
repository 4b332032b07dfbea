//! Version-directory loading for the six raw component tables.
//!
//! A game version lives under `<root>/<version>/` as six JSON template
//! files. Tables are read wholesale; there is no incremental update path.
//! Fetching the files onto disk is the caller's concern.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::error::{Error, Result};

use super::records::{Drive, PowerPlant, Radiator, ShipArmor, ShipHull, UtilityModule};

const DRIVE_TABLE: &str = "TIDriveTemplate.json";
const POWER_PLANT_TABLE: &str = "TIPowerPlantTemplate.json";
const RADIATOR_TABLE: &str = "TIRadiatorTemplate.json";
const UTILITY_TABLE: &str = "TIUtilityTemplate.json";
const HULL_TABLE: &str = "TIShipHullTemplate.json";
const ARMOR_TABLE: &str = "TIShipArmorTemplate.json";

/// Raw catalogs for one game version, exactly as loaded from disk.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTables {
    pub drives: Vec<Drive>,
    pub power_plants: Vec<PowerPlant>,
    pub radiators: Vec<Radiator>,
    pub utility_modules: Vec<UtilityModule>,
    pub hulls: Vec<ShipHull>,
    pub armors: Vec<ShipArmor>,
}

impl RawTables {
    /// Load all six tables for `version` from `<root>/<version>/`.
    pub fn from_version_dir(root: &Path, version: &str) -> Result<Self> {
        let dir = root.join(version);
        if !dir.is_dir() {
            return Err(Error::VersionNotFound { path: dir });
        }

        let tables = RawTables {
            drives: load_table(&dir, DRIVE_TABLE, "drive")?,
            power_plants: load_table(&dir, POWER_PLANT_TABLE, "power plant")?,
            radiators: load_table(&dir, RADIATOR_TABLE, "radiator")?,
            utility_modules: load_table(&dir, UTILITY_TABLE, "utility module")?,
            hulls: load_table(&dir, HULL_TABLE, "ship hull")?,
            armors: load_table(&dir, ARMOR_TABLE, "ship armor")?,
        };

        info!(
            version,
            drives = tables.drives.len(),
            power_plants = tables.power_plants.len(),
            radiators = tables.radiators.len(),
            utility_modules = tables.utility_modules.len(),
            hulls = tables.hulls.len(),
            armors = tables.armors.len(),
            "loaded raw component tables"
        );

        Ok(tables)
    }
}

fn load_table<T: DeserializeOwned>(dir: &Path, file: &str, table: &'static str) -> Result<Vec<T>> {
    let path: PathBuf = dir.join(file);
    let raw = fs::read_to_string(&path)?;
    let records: Vec<T> =
        serde_json::from_str(&raw).map_err(|source| Error::TableParse { table, path: path.clone(), source })?;
    debug!(table, path = %path.display(), records = records.len(), "parsed table");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_version_directory_is_reported() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let err = RawTables::from_version_dir(tmp.path(), "0.0.0").unwrap_err();
        assert!(matches!(err, Error::VersionNotFound { .. }));
    }

    #[test]
    fn missing_table_file_surfaces_io_error() {
        let tmp = tempfile::tempdir().expect("tempdir");
        fs::create_dir(tmp.path().join("0.1.0")).expect("mkdir");
        let err = RawTables::from_version_dir(tmp.path(), "0.1.0").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
