//! Game constants shared across derivation and evaluation.

/// Propellant capacity of a single fuel tank, in tons.
pub const FUEL_TANK_CAPACITY_TONS: f64 = 100.0;

/// Numerator of the empirical ablative armor coefficient.
pub const ARMOR_ABLATION_NUMERATOR: f64 = 20.0;

/// Scale applied to an armor's heat of vaporization in the ablative
/// mass-per-area coefficient.
pub const ARMOR_VAPORIZATION_FACTOR: f64 = 0.005;

/// Standard gravity in m/s^2, used to express acceleration in gravities.
pub const STANDARD_GRAVITY: f64 = 9.81;

/// Propellant tag that hydrogen modules boost.
pub const HYDROGEN_PROPELLANT: &str = "Hydrogen";

/// Drive classifications that carry their own power source; the paired
/// power plant contributes no mass for these.
pub const SELF_POWERED_CLASSIFICATIONS: &[&str] = &["Chemical", "Fission_Pulse"];

/// Drive classifications satisfying a spiker's nuclear-drive requirement.
pub const NUCLEAR_DRIVE_CLASSIFICATIONS: &[&str] = &["Fission_Thermal", "Fusion_Thermal"];

/// Drive classifications satisfying a spiker's fusion-drive requirement.
pub const FUSION_DRIVE_CLASSIFICATIONS: &[&str] = &["Fusion_Thermal"];
