//! Once-per-version preprocessing passes.
//!
//! These run synchronously after a raw table load: best-of-class power
//! plant selection, drive family grouping, and structural geometry for
//! hulls and armor. All of it is a pure function of the loaded tables.

use std::collections::HashMap;
use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::component::constants::{ARMOR_ABLATION_NUMERATOR, ARMOR_VAPORIZATION_FACTOR};
use crate::component::records::{Drive, PowerPlant, ShipArmor, ShipHull};
use crate::error::Result;

/// Drive variants sharing a family key, in catalog order.
#[derive(Debug, Clone, PartialEq)]
pub struct DriveFamily {
    pub key: String,
    pub drives: Vec<Drive>,
}

impl DriveFamily {
    /// Power plant class required by this family; `None` for reactorless
    /// families. All variants of a family share the same requirement.
    pub fn required_power_plant(&self) -> Option<&str> {
        self.drives
            .first()
            .and_then(|drive| drive.required_power_plant.as_deref())
    }
}

/// Effective exposed areas of a hull, in m^2.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HullGeometry {
    /// Side-section area: half-cylinder approximation.
    pub side_area_m2: f64,
    /// Nose or tail cap area: circular cross-section.
    pub cap_area_m2: f64,
}

/// Reduce the power plant catalog to the single best entry per class.
///
/// "Best" is strictly-higher efficiency; the first-encountered entry
/// wins ties. An empty catalog yields an empty map.
pub fn best_power_plants(plants: &[PowerPlant]) -> HashMap<String, PowerPlant> {
    let mut best: HashMap<String, PowerPlant> = HashMap::new();
    for plant in plants {
        match best.get(&plant.power_plant_class) {
            Some(current) if current.efficiency >= plant.efficiency => {}
            _ => {
                best.insert(plant.power_plant_class.clone(), plant.clone());
            }
        }
    }
    best
}

/// Group drive variants into families keyed by the identifier minus its
/// multiplier suffix. Families appear in first-encounter order and
/// variants keep catalog order; a too-short identifier aborts grouping.
pub fn group_drive_families(drives: &[Drive]) -> Result<Vec<DriveFamily>> {
    let mut families: Vec<DriveFamily> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for drive in drives {
        let key = drive.family_key()?.to_string();
        match index.get(&key) {
            Some(&at) => families[at].drives.push(drive.clone()),
            None => {
                index.insert(key.clone(), families.len());
                families.push(DriveFamily {
                    key,
                    drives: vec![drive.clone()],
                });
            }
        }
    }

    Ok(families)
}

/// Effective areas for a hull from its static dimensions.
pub fn hull_geometry(hull: &ShipHull) -> HullGeometry {
    let radius = hull.width_m / 2.0;
    HullGeometry {
        side_area_m2: PI * hull.width_m * hull.length_m / 2.0,
        cap_area_m2: PI * radius * radius,
    }
}

/// Ablative mass-per-area coefficient for an armor material.
pub fn armor_mass_per_area(armor: &ShipArmor) -> f64 {
    ARMOR_ABLATION_NUMERATOR / (armor.heat_of_vaporization * ARMOR_VAPORIZATION_FACTOR)
}
