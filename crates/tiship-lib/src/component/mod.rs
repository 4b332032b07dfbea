//! Raw component catalogs: record types, table loading, and shared
//! constants.
//!
//! - [`records`] - immutable catalog record types for all six tables
//! - [`catalog`] - version-directory loading into [`catalog::RawTables`]
//! - [`constants`] - game constants used by derivation and evaluation

pub mod catalog;
pub mod constants;
pub mod records;

pub use catalog::RawTables;
pub use constants::{
    ARMOR_ABLATION_NUMERATOR, ARMOR_VAPORIZATION_FACTOR, FUEL_TANK_CAPACITY_TONS,
    FUSION_DRIVE_CLASSIFICATIONS, HYDROGEN_PROPELLANT, NUCLEAR_DRIVE_CLASSIFICATIONS,
    SELF_POWERED_CLASSIFICATIONS, STANDARD_GRAVITY,
};
pub use records::{
    Cooling, Drive, MaterialCostSet, PowerPlant, Radiator, ShipArmor, ShipHull, UtilityModule,
};
