//! Loaded dataset for one game version.
//!
//! [`DataSet`] owns the raw catalogs plus every preprocessed dictionary
//! derived from them. It is constructed wholesale by [`DataSet::load_version`]
//! and is read-only afterwards: switching versions means building a new
//! value, so stale cross-version pairings cannot survive a reload.

use std::collections::HashMap;
use std::path::Path;

use tracing::info;

use crate::component::catalog::RawTables;
use crate::component::records::{PowerPlant, Radiator, ShipArmor, ShipHull, UtilityModule};
use crate::derive::{drive_stats, pairing_stats, DriveStats, PairingStats};
use crate::error::Result;
use crate::preprocess::{
    armor_mass_per_area, best_power_plants, group_drive_families, hull_geometry, DriveFamily,
    HullGeometry,
};

/// Catalogs and preprocessed dictionaries for a single game version.
#[derive(Debug, Clone)]
pub struct DataSet {
    version: String,
    raw: RawTables,
    families: Vec<DriveFamily>,
    best_plants: HashMap<String, PowerPlant>,
    plants_by_name: HashMap<String, PowerPlant>,
    radiators: HashMap<String, Radiator>,
    utility_modules: HashMap<String, UtilityModule>,
    hulls: HashMap<String, ShipHull>,
    hull_geometry: HashMap<String, HullGeometry>,
    armors: HashMap<String, ShipArmor>,
    armor_mass_per_area: HashMap<String, f64>,
    drive_stats: HashMap<String, DriveStats>,
    pairing_stats: HashMap<String, PairingStats>,
}

impl DataSet {
    /// Load and preprocess all catalogs for `version` under `root`.
    ///
    /// Fails on missing files, unparsable tables, or data-integrity
    /// defects (malformed drive identifiers, unrecognized cooling
    /// modes). A returned dataset is fully derived and internally
    /// consistent.
    pub fn load_version(root: &Path, version: &str) -> Result<Self> {
        let raw = RawTables::from_version_dir(root, version)?;
        Self::from_tables(version, raw)
    }

    /// Preprocess already-loaded tables. Split out so tests can build
    /// datasets without touching the filesystem.
    pub fn from_tables(version: &str, raw: RawTables) -> Result<Self> {
        let families = group_drive_families(&raw.drives)?;
        let best_plants = best_power_plants(&raw.power_plants);

        let plants_by_name = raw
            .power_plants
            .iter()
            .map(|plant| (plant.data_name.clone(), plant.clone()))
            .collect();

        let radiators: HashMap<String, Radiator> = raw
            .radiators
            .iter()
            .filter(|radiator| !radiator.alien_exclusive)
            .map(|radiator| (radiator.data_name.clone(), radiator.clone()))
            .collect();
        let utility_modules: HashMap<String, UtilityModule> = raw
            .utility_modules
            .iter()
            .filter(|module| !module.alien_exclusive)
            .map(|module| (module.data_name.clone(), module.clone()))
            .collect();
        let hulls: HashMap<String, ShipHull> = raw
            .hulls
            .iter()
            .filter(|hull| !hull.alien_exclusive)
            .map(|hull| (hull.data_name.clone(), hull.clone()))
            .collect();
        let armors: HashMap<String, ShipArmor> = raw
            .armors
            .iter()
            .filter(|armor| !armor.alien_exclusive)
            .map(|armor| (armor.data_name.clone(), armor.clone()))
            .collect();

        let hull_geometry = hulls
            .values()
            .map(|hull| (hull.data_name.clone(), hull_geometry(hull)))
            .collect();
        let armor_mass_per_area = armors
            .values()
            .map(|armor| (armor.data_name.clone(), armor_mass_per_area(armor)))
            .collect();

        let mut drive_stats_map = HashMap::new();
        let mut pairing_stats_map = HashMap::new();
        for family in &families {
            let plant = family
                .required_power_plant()
                .and_then(|class| best_plants.get(class));
            for drive in &family.drives {
                drive_stats_map.insert(drive.data_name.clone(), drive_stats(drive));
                match plant {
                    Some(plant) => {
                        pairing_stats_map
                            .insert(drive.data_name.clone(), pairing_stats(drive, plant)?);
                    }
                    // Reactorless or unresolved class: validate cooling now
                    // so defects abort the load, derive at evaluation time.
                    None => {
                        drive.cooling_mode()?;
                    }
                }
            }
        }

        info!(
            version,
            families = families.len(),
            power_plant_classes = best_plants.len(),
            "preprocessed dataset"
        );

        Ok(DataSet {
            version: version.to_string(),
            raw,
            families,
            best_plants,
            plants_by_name,
            radiators,
            utility_modules,
            hulls,
            hull_geometry,
            armors,
            armor_mass_per_area,
            drive_stats: drive_stats_map,
            pairing_stats: pairing_stats_map,
        })
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Raw catalogs exactly as loaded, including excluded variants.
    pub fn raw_tables(&self) -> &RawTables {
        &self.raw
    }

    /// Drive families in catalog order.
    pub fn families(&self) -> &[DriveFamily] {
        &self.families
    }

    /// Best power plant for a class, when the class exists.
    pub fn best_plant_for_class(&self, class: &str) -> Option<&PowerPlant> {
        self.best_plants.get(class)
    }

    /// Power plant by identifier (for default-plant selection).
    pub fn power_plant(&self, data_name: &str) -> Option<&PowerPlant> {
        self.plants_by_name.get(data_name)
    }

    pub fn radiator(&self, data_name: &str) -> Option<&Radiator> {
        self.radiators.get(data_name)
    }

    pub fn utility_module(&self, data_name: &str) -> Option<&UtilityModule> {
        self.utility_modules.get(data_name)
    }

    pub fn hull(&self, data_name: &str) -> Option<&ShipHull> {
        self.hulls.get(data_name)
    }

    pub fn armor(&self, data_name: &str) -> Option<&ShipArmor> {
        self.armors.get(data_name)
    }

    /// Effective areas for a non-excluded hull.
    pub fn hull_geometry(&self, data_name: &str) -> Option<HullGeometry> {
        self.hull_geometry.get(data_name).copied()
    }

    /// Ablative mass-per-area for a non-excluded armor.
    pub fn armor_mass_per_area(&self, data_name: &str) -> Option<f64> {
        self.armor_mass_per_area.get(data_name).copied()
    }

    /// Plant-independent stats derived at load for a drive variant.
    pub fn drive_stats(&self, data_name: &str) -> Option<DriveStats> {
        self.drive_stats.get(data_name).copied()
    }

    /// Pairing stats derived at load, present only for drives whose
    /// required power plant class resolved to a best-of-class entry.
    pub fn pairing_stats(&self, data_name: &str) -> Option<PairingStats> {
        self.pairing_stats.get(data_name).copied()
    }

    /// Sorted identifiers of selectable radiators.
    pub fn radiator_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.radiators.keys().cloned().collect();
        names.sort();
        names
    }

    /// Sorted identifiers of selectable hulls.
    pub fn hull_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.hulls.keys().cloned().collect();
        names.sort();
        names
    }

    /// Sorted identifiers of selectable armors.
    pub fn armor_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.armors.keys().cloned().collect();
        names.sort();
        names
    }

    /// Sorted identifiers of selectable utility modules.
    pub fn utility_module_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.utility_modules.keys().cloned().collect();
        names.sort();
        names
    }

    /// Sorted identifiers of all power plants.
    pub fn power_plant_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.plants_by_name.keys().cloned().collect();
        names.sort();
        names
    }
}
