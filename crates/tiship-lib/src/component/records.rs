//! Raw catalog records for the six component tables.
//!
//! Field names mirror the game's JSON templates (`dataName`, `thrust_N`,
//! `EV_kps`, ...). Records are immutable after load: all derived
//! quantities live in separate structs produced by [`crate::derive`] and
//! [`crate::evaluate`], never written back onto these types. Fields that
//! appeared in later game versions are modeled as `Option` with serde
//! defaults so older tables still parse.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Build-material cost set attached to drives (weighted build cost and
/// per-tank propellant cost). Carried as data; nothing computes on it yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialCostSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metals: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volatiles: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fissiles: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exotics: Option<f64>,
}

/// Drive cooling mode. Anything else in the data is a defect, not a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cooling {
    /// Closed-cycle cooling; waste heat must be radiated.
    Closed,
    /// Calculated cooling; treated like closed for waste heat purposes.
    Calc,
    /// Open-cycle cooling; heat leaves with the exhaust stream.
    Open,
}

impl FromStr for Cooling {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "Closed" => Ok(Cooling::Closed),
            "Calc" => Ok(Cooling::Calc),
            "Open" => Ok(Cooling::Open),
            _ => Err(()),
        }
    }
}

/// A drive variant as loaded from `TIDriveTemplate.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Drive {
    pub data_name: String,
    pub friendly_name: String,
    /// Research gate, when the drive is locked behind a project.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_project: Option<String>,
    /// Propulsion family tag, e.g. `Chemical`, `Fission_Thermal`.
    pub drive_classification: String,
    #[serde(rename = "thrust_N")]
    pub thrust_n: f64,
    #[serde(rename = "EV_kps")]
    pub ev_kps: f64,
    #[serde(rename = "specificPower_kgMW")]
    pub specific_power_kg_mw: f64,
    pub efficiency: f64,
    #[serde(rename = "flatMass_tons")]
    pub flat_mass_tons: f64,
    /// Power plant class this drive requires; absent for reactorless drives.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_power_plant: Option<String>,
    pub thrust_cap: f64,
    /// Raw cooling mode string; parsed by [`Drive::cooling_mode`].
    pub cooling: String,
    pub propellant: String,
    #[serde(default)]
    pub weighted_build_materials: MaterialCostSet,
    #[serde(default)]
    pub per_tank_propellant_materials: MaterialCostSet,
}

impl Drive {
    /// Family key shared by all multiplier tiers of this drive: the
    /// identifier with its trailing two characters (`x1`, `x5`, ...)
    /// removed. Identifiers too short to carry a suffix are a
    /// data-integrity defect.
    pub fn family_key(&self) -> Result<&str> {
        if self.data_name.chars().count() < 3 {
            return Err(Error::MalformedDriveName {
                data_name: self.data_name.clone(),
            });
        }
        let cut = self
            .data_name
            .char_indices()
            .rev()
            .nth(1)
            .map(|(idx, _)| idx)
            .unwrap_or(0);
        Ok(&self.data_name[..cut])
    }

    /// Parse the raw cooling string, failing fast on unrecognized modes.
    pub fn cooling_mode(&self) -> Result<Cooling> {
        self.cooling
            .parse()
            .map_err(|()| Error::UnsupportedCooling {
                data_name: self.data_name.clone(),
                cooling: self.cooling.clone(),
            })
    }
}

/// A power plant as loaded from `TIPowerPlantTemplate.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PowerPlant {
    pub data_name: String,
    pub friendly_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_project: Option<String>,
    pub power_plant_class: String,
    /// Conversion efficiency in 0..=1.
    pub efficiency: f64,
    #[serde(rename = "specificPower_tGW")]
    pub specific_power_t_gw: f64,
}

/// A radiator as loaded from `TIRadiatorTemplate.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Radiator {
    pub data_name: String,
    pub friendly_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_project: Option<String>,
    /// Two-sided specific power in kW per kg of radiator.
    #[serde(rename = "specificPower_2s_KWkg")]
    pub specific_power_2s_kw_kg: f64,
    #[serde(default)]
    pub alien_exclusive: bool,
}

/// A utility module (hydrogen tank or thrust spiker) from
/// `TIUtilityTemplate.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UtilityModule {
    pub data_name: String,
    pub friendly_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_project: Option<String>,
    /// Thrust multiplier applied by spikers to compatible drives.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thrust_multiplier: Option<f64>,
    /// Exhaust-velocity multiplier applied by hydrogen modules.
    #[serde(rename = "EVMultiplier", default, skip_serializing_if = "Option::is_none")]
    pub ev_multiplier: Option<f64>,
    /// Spiker compatibility: requires a nuclear-thermal drive.
    #[serde(default)]
    pub requires_nuclear_drive: bool,
    /// Spiker compatibility: requires a fusion-thermal drive.
    #[serde(default)]
    pub requires_fusion_drive: bool,
    #[serde(default)]
    pub alien_exclusive: bool,
}

/// A ship hull as loaded from `TIShipHullTemplate.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipHull {
    pub data_name: String,
    pub friendly_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_project: Option<String>,
    #[serde(rename = "mass_tons")]
    pub mass_tons: f64,
    #[serde(rename = "width_m")]
    pub width_m: f64,
    #[serde(rename = "length_m")]
    pub length_m: f64,
    #[serde(default)]
    pub alien_exclusive: bool,
}

/// A ship armor material as loaded from `TIShipArmorTemplate.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipArmor {
    pub data_name: String,
    pub friendly_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_project: Option<String>,
    /// Heat of vaporization driving the ablative mass-per-area coefficient.
    pub heat_of_vaporization: f64,
    #[serde(default)]
    pub alien_exclusive: bool,
}
