//! Configuration evaluation: fold preprocessed drive data and live user
//! options into final mass, delta-v, and acceleration figures.
//!
//! Evaluation is a pure function of a [`DataSet`] and a
//! [`ConfigOptions`]; output is rebuilt from scratch on every call and
//! nothing is written back to the dataset, so repeated calls with the
//! same inputs are bit-identical.

use serde::{Deserialize, Serialize};

use crate::component::constants::{
    FUEL_TANK_CAPACITY_TONS, FUSION_DRIVE_CLASSIFICATIONS, HYDROGEN_PROPELLANT,
    NUCLEAR_DRIVE_CLASSIFICATIONS, STANDARD_GRAVITY,
};
use crate::component::records::{Drive, PowerPlant, UtilityModule};
use crate::dataset::DataSet;
use crate::derive::{pairing_stats, PairingStats};
use crate::error::{Error, Result};

/// Armor thickness multipliers per hull section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionThickness {
    pub nose: f64,
    pub sides: f64,
    pub tail: f64,
}

impl Default for SectionThickness {
    fn default() -> Self {
        Self {
            nose: 1.0,
            sides: 1.0,
            tail: 1.0,
        }
    }
}

/// User-selected loadout evaluated against a loaded dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigOptions {
    /// Payload mass in tons.
    pub payload_tons: f64,
    /// Radiator identifier.
    pub radiator: String,
    /// Number of propellant tanks.
    pub fuel_tanks: u32,
    /// Default power plant identifier paired with reactorless families.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_power_plant: Option<String>,
    /// Optional hydrogen tank module identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hydrogen_module: Option<String>,
    /// Optional thrust spiker module identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spiker: Option<String>,
    /// Hull identifier.
    pub hull: String,
    /// Armor identifier.
    pub armor: String,
    /// Per-section armor thickness multipliers.
    #[serde(default)]
    pub armor_thickness: SectionThickness,
}

/// Structural and propellant mass shared by every drive in a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StructuralSummary {
    pub hull_mass_tons: f64,
    pub armor_nose_tons: f64,
    pub armor_sides_tons: f64,
    pub armor_tail_tons: f64,
    pub fuel_mass_tons: f64,
}

impl StructuralSummary {
    /// Total armor mass across the three sections.
    pub fn armor_mass_tons(&self) -> f64 {
        self.armor_nose_tons + self.armor_sides_tons + self.armor_tail_tons
    }
}

/// Final per-drive figures for one configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrivePerformance {
    pub power_w: f64,
    pub total_mass_tons: f64,
    pub power_plant_mass_tons: f64,
    pub waste_heat_w: f64,
    pub radiator_mass_tons: f64,
    pub dry_mass_tons: f64,
    pub wet_mass_tons: f64,
    pub delta_v_kps: f64,
    pub accel_g: f64,
}

/// A drive variant annotated with its per-configuration figures.
/// `performance` is absent for drives with no power plant pairing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluatedDrive {
    pub drive: Drive,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance: Option<DrivePerformance>,
}

/// A drive family together with the power plant it was evaluated against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluatedPairing {
    pub family: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power_plant: Option<PowerPlant>,
    pub drives: Vec<EvaluatedDrive>,
}

/// Full evaluator output: annotated pairings plus the structural breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub version: String,
    pub structure: StructuralSummary,
    pub pairings: Vec<EvaluatedPairing>,
}

impl DataSet {
    /// Evaluate a configuration against this dataset.
    ///
    /// Reference defects (identifiers absent from the current catalogs)
    /// fail the whole call; drives with no resolvable power plant pass
    /// through with no performance figures attached.
    pub fn evaluate(&self, options: &ConfigOptions) -> Result<Evaluation> {
        let radiator =
            self.radiator(&options.radiator)
                .ok_or_else(|| Error::UnknownRadiator {
                    name: options.radiator.clone(),
                })?;
        let hull = self.hull(&options.hull).ok_or_else(|| Error::UnknownHull {
            name: options.hull.clone(),
        })?;
        let geometry = self
            .hull_geometry(&options.hull)
            .ok_or_else(|| Error::UnknownHull {
                name: options.hull.clone(),
            })?;
        let mass_per_area =
            self.armor_mass_per_area(&options.armor)
                .ok_or_else(|| Error::UnknownArmor {
                    name: options.armor.clone(),
                })?;

        let default_plant = match options.default_power_plant.as_deref() {
            Some(name) => Some(self.power_plant(name).ok_or_else(|| {
                Error::UnknownPowerPlant {
                    name: name.to_string(),
                }
            })?),
            None => None,
        };
        let hydrogen = self.lookup_module(options.hydrogen_module.as_deref())?;
        let spiker = self.lookup_module(options.spiker.as_deref())?;

        let thickness = options.armor_thickness;
        let structure = StructuralSummary {
            hull_mass_tons: hull.mass_tons,
            armor_nose_tons: mass_per_area * geometry.cap_area_m2 * thickness.nose / 1000.0,
            armor_sides_tons: mass_per_area * geometry.side_area_m2 * thickness.sides / 1000.0,
            armor_tail_tons: mass_per_area * geometry.cap_area_m2 * thickness.tail / 1000.0,
            fuel_mass_tons: f64::from(options.fuel_tanks) * FUEL_TANK_CAPACITY_TONS,
        };

        let tons_per_waste_heat = 1000.0 / radiator.specific_power_2s_kw_kg;

        let mut pairings = Vec::with_capacity(self.families().len());
        for family in self.families() {
            let plant = match family.required_power_plant() {
                Some(class) => self.best_plant_for_class(class),
                None => default_plant,
            };

            let mut drives = Vec::with_capacity(family.drives.len());
            for drive in &family.drives {
                let performance = match plant {
                    Some(plant) => {
                        // Required-class pairings were derived at load;
                        // reactorless ones derive fresh against the default.
                        let pairing = match self.pairing_stats(&drive.data_name) {
                            Some(stats) => stats,
                            None => pairing_stats(drive, plant)?,
                        };
                        Some(self.drive_performance(
                            drive,
                            pairing,
                            tons_per_waste_heat,
                            &structure,
                            options.payload_tons,
                            hydrogen,
                            spiker,
                        ))
                    }
                    None => None,
                };
                drives.push(EvaluatedDrive {
                    drive: drive.clone(),
                    performance,
                });
            }

            pairings.push(EvaluatedPairing {
                family: family.key.clone(),
                power_plant: plant.cloned(),
                drives,
            });
        }

        Ok(Evaluation {
            version: self.version().to_string(),
            structure,
            pairings,
        })
    }

    fn lookup_module(&self, name: Option<&str>) -> Result<Option<&UtilityModule>> {
        match name {
            Some(name) => self
                .utility_module(name)
                .map(Some)
                .ok_or_else(|| Error::UnknownUtilityModule {
                    name: name.to_string(),
                }),
            None => Ok(None),
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn drive_performance(
        &self,
        drive: &Drive,
        pairing: PairingStats,
        tons_per_waste_heat: f64,
        structure: &StructuralSummary,
        payload_tons: f64,
        hydrogen: Option<&UtilityModule>,
        spiker: Option<&UtilityModule>,
    ) -> DrivePerformance {
        let stats = self
            .drive_stats(&drive.data_name)
            .unwrap_or_else(|| crate::derive::drive_stats(drive));

        let radiator_mass_tons = pairing.waste_heat_w * tons_per_waste_heat * 1e-9;
        let dry_mass_tons = stats.total_mass_tons
            + pairing.power_plant_mass_tons
            + radiator_mass_tons
            + structure.hull_mass_tons
            + structure.armor_mass_tons()
            + payload_tons;
        let wet_mass_tons = dry_mass_tons + structure.fuel_mass_tons;

        let ev_multiplier = hydrogen
            .filter(|_| drive.propellant == HYDROGEN_PROPELLANT)
            .and_then(|module| module.ev_multiplier)
            .unwrap_or(1.0);
        let delta_v_kps = ev_multiplier * drive.ev_kps * (wet_mass_tons / dry_mass_tons).ln();

        let thrust_multiplier = spiker
            .filter(|module| spiker_applies(module, &drive.drive_classification))
            .and_then(|module| module.thrust_multiplier)
            .unwrap_or(1.0);
        let accel_g =
            thrust_multiplier * (drive.thrust_n * drive.thrust_cap / wet_mass_tons) / STANDARD_GRAVITY;

        DrivePerformance {
            power_w: stats.power_w,
            total_mass_tons: stats.total_mass_tons,
            power_plant_mass_tons: pairing.power_plant_mass_tons,
            waste_heat_w: pairing.waste_heat_w,
            radiator_mass_tons,
            dry_mass_tons,
            wet_mass_tons,
            delta_v_kps,
            accel_g,
        }
    }
}

/// Whether a spiker's drive requirement matches a classification.
/// Fusion-only spikers bind tighter than nuclear ones; a module with
/// neither requirement flag boosts nothing.
fn spiker_applies(module: &UtilityModule, classification: &str) -> bool {
    if module.requires_fusion_drive {
        FUSION_DRIVE_CLASSIFICATIONS.contains(&classification)
    } else if module.requires_nuclear_drive {
        NUCLEAR_DRIVE_CLASSIFICATIONS.contains(&classification)
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spiker(nuclear: bool, fusion: bool) -> UtilityModule {
        UtilityModule {
            data_name: "spiker".to_string(),
            friendly_name: "Spiker".to_string(),
            required_project: None,
            thrust_multiplier: Some(2.0),
            ev_multiplier: None,
            requires_nuclear_drive: nuclear,
            requires_fusion_drive: fusion,
            alien_exclusive: false,
        }
    }

    #[test]
    fn nuclear_spiker_matches_both_thermal_families() {
        let module = spiker(true, false);
        assert!(spiker_applies(&module, "Fission_Thermal"));
        assert!(spiker_applies(&module, "Fusion_Thermal"));
        assert!(!spiker_applies(&module, "Chemical"));
    }

    #[test]
    fn fusion_spiker_matches_fusion_only() {
        let module = spiker(false, true);
        assert!(!spiker_applies(&module, "Fission_Thermal"));
        assert!(spiker_applies(&module, "Fusion_Thermal"));
    }

    #[test]
    fn unflagged_module_never_applies() {
        let module = spiker(false, false);
        assert!(!spiker_applies(&module, "Fusion_Thermal"));
    }
}
