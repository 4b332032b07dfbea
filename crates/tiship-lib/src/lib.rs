//! Terra Invicta ship performance library entry points.
//!
//! This crate loads the game's component tables for a chosen data
//! version, preprocesses them (best power plant per class, drive family
//! grouping, hull/armor geometry), and evaluates user configurations
//! into delta-v and acceleration figures. Higher-level consumers (CLI,
//! UI layers) should depend on the types exported here instead of
//! reimplementing the derivation pipeline.

#![deny(warnings)]

pub mod component;
pub mod dataset;
pub mod derive;
pub mod error;
pub mod evaluate;
pub mod preprocess;

pub use component::{Cooling, Drive, PowerPlant, Radiator, RawTables, ShipArmor, ShipHull, UtilityModule};
pub use dataset::DataSet;
pub use derive::{drive_stats, pairing_stats, DriveStats, PairingStats};
pub use error::{Error, Result};
pub use evaluate::{
    ConfigOptions, DrivePerformance, EvaluatedDrive, EvaluatedPairing, Evaluation,
    SectionThickness, StructuralSummary,
};
pub use preprocess::{
    armor_mass_per_area, best_power_plants, group_drive_families, hull_geometry, DriveFamily,
    HullGeometry,
};
