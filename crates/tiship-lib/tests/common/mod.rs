//! Shared builders for integration tests: a small but complete
//! component universe exercising every catalog table.

use tiship_lib::component::records::{
    Drive, MaterialCostSet, PowerPlant, Radiator, ShipArmor, ShipHull, UtilityModule,
};
use tiship_lib::{ConfigOptions, RawTables, SectionThickness};

#[allow(dead_code)]
pub fn drive(data_name: &str, classification: &str, required_plant: Option<&str>) -> Drive {
    Drive {
        data_name: data_name.to_string(),
        friendly_name: format!("{data_name} (friendly)"),
        required_project: None,
        drive_classification: classification.to_string(),
        thrust_n: 1000.0,
        ev_kps: 50.0,
        specific_power_kg_mw: 1.0,
        efficiency: 0.8,
        flat_mass_tons: 5.0,
        required_power_plant: required_plant.map(str::to_string),
        thrust_cap: 1.0,
        cooling: "Closed".to_string(),
        propellant: "Hydrogen".to_string(),
        weighted_build_materials: MaterialCostSet::default(),
        per_tank_propellant_materials: MaterialCostSet::default(),
    }
}

#[allow(dead_code)]
pub fn plant(data_name: &str, class: &str, efficiency: f64, specific_power: f64) -> PowerPlant {
    PowerPlant {
        data_name: data_name.to_string(),
        friendly_name: format!("{data_name} (friendly)"),
        required_project: None,
        power_plant_class: class.to_string(),
        efficiency,
        specific_power_t_gw: specific_power,
    }
}

#[allow(dead_code)]
pub fn radiator(data_name: &str, specific_power: f64) -> Radiator {
    Radiator {
        data_name: data_name.to_string(),
        friendly_name: format!("{data_name} (friendly)"),
        required_project: None,
        specific_power_2s_kw_kg: specific_power,
        alien_exclusive: false,
    }
}

#[allow(dead_code)]
pub fn hull(data_name: &str, mass_tons: f64, width_m: f64, length_m: f64) -> ShipHull {
    ShipHull {
        data_name: data_name.to_string(),
        friendly_name: format!("{data_name} (friendly)"),
        required_project: None,
        mass_tons,
        width_m,
        length_m,
        alien_exclusive: false,
    }
}

#[allow(dead_code)]
pub fn armor(data_name: &str, heat_of_vaporization: f64) -> ShipArmor {
    ShipArmor {
        data_name: data_name.to_string(),
        friendly_name: format!("{data_name} (friendly)"),
        required_project: None,
        heat_of_vaporization,
        alien_exclusive: false,
    }
}

#[allow(dead_code)]
pub fn hydrogen_module(data_name: &str, ev_multiplier: f64) -> UtilityModule {
    UtilityModule {
        data_name: data_name.to_string(),
        friendly_name: format!("{data_name} (friendly)"),
        required_project: None,
        thrust_multiplier: None,
        ev_multiplier: Some(ev_multiplier),
        requires_nuclear_drive: false,
        requires_fusion_drive: false,
        alien_exclusive: false,
    }
}

#[allow(dead_code)]
pub fn spiker_module(data_name: &str, thrust_multiplier: f64, nuclear: bool, fusion: bool) -> UtilityModule {
    UtilityModule {
        data_name: data_name.to_string(),
        friendly_name: format!("{data_name} (friendly)"),
        required_project: None,
        thrust_multiplier: Some(thrust_multiplier),
        ev_multiplier: None,
        requires_nuclear_drive: nuclear,
        requires_fusion_drive: fusion,
        alien_exclusive: false,
    }
}

/// A complete test universe: two fission drive tiers, a chemical drive,
/// and a reactorless fusion drive, plus supporting components.
#[allow(dead_code)]
pub fn sample_tables() -> RawTables {
    RawTables {
        drives: vec![
            drive("NervaDrive_x1", "Fission_Thermal", Some("Solid_Core_Fission")),
            drive("NervaDrive_x5", "Fission_Thermal", Some("Solid_Core_Fission")),
            {
                let mut d = drive("RocketDrive_x1", "Chemical", None);
                d.cooling = "Open".to_string();
                d.propellant = "Kerolox".to_string();
                d
            },
            drive("FusionTorch_x1", "Fusion_Thermal", None),
        ],
        power_plants: vec![
            plant("SolidCoreI", "Solid_Core_Fission", 0.8, 4.0),
            plant("SolidCoreII", "Solid_Core_Fission", 0.9, 2.0),
            plant("GasCoreI", "Gas_Core_Fission", 0.85, 1.5),
        ],
        radiators: vec![radiator("AluminumRadiator", 50.0)],
        utility_modules: vec![
            hydrogen_module("HydrogenBooster", 1.2),
            spiker_module("NuclearSpiker", 2.0, true, false),
            spiker_module("FusionSpiker", 3.0, false, true),
        ],
        hulls: vec![hull("LanceHull", 10.0, 20.0, 100.0)],
        armors: vec![armor("SteelArmor", 8.0)],
    }
}

/// Baseline options matching `sample_tables`, with no optional modules.
#[allow(dead_code)]
pub fn sample_options() -> ConfigOptions {
    ConfigOptions {
        payload_tons: 100.0,
        radiator: "AluminumRadiator".to_string(),
        fuel_tanks: 2,
        default_power_plant: None,
        hydrogen_module: None,
        spiker: None,
        hull: "LanceHull".to_string(),
        armor: "SteelArmor".to_string(),
        armor_thickness: SectionThickness::default(),
    }
}
