//! Drive and drive/power-plant derived quantities.
//!
//! Pure functions over immutable catalog records. Plant-independent
//! stats are computed once per drive at preprocessing time; pairing
//! stats are recomputed whenever the plant changes (reactorless drives
//! paired with a user-chosen default plant at evaluation time).

use serde::{Deserialize, Serialize};

use crate::component::constants::SELF_POWERED_CLASSIFICATIONS;
use crate::component::records::{Cooling, Drive, PowerPlant};
use crate::error::Result;

/// Plant-independent derived values for a single drive variant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DriveStats {
    /// Kinetic power delivered by the exhaust stream, in watts.
    pub power_w: f64,
    /// Drive mass: flat mass plus the specific-power contribution, tons.
    pub total_mass_tons: f64,
}

/// Derived values from the interaction of a drive with a power plant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PairingStats {
    pub power_plant_mass_tons: f64,
    pub waste_heat_w: f64,
}

/// Compute the plant-independent stats for a drive.
///
/// `power = 0.5 * thrust_N * 1000 * EV_kps`; the specific-power term is
/// normalized from kg/MW down to the tons scale used elsewhere.
pub fn drive_stats(drive: &Drive) -> DriveStats {
    let power_w = 0.5 * drive.thrust_n * 1000.0 * drive.ev_kps;
    let total_mass_tons = drive.flat_mass_tons + power_w * drive.specific_power_kg_mw * 1e-6 * 1e-3;
    DriveStats {
        power_w,
        total_mass_tons,
    }
}

/// Compute the stats a drive derives from a paired power plant.
///
/// Self-powered classifications (chemical and pulse drives) carry their
/// own power source inside the flat mass, so the plant contributes no
/// mass for them. Open-cycle cooling expels heat with the exhaust and
/// needs no radiator; an unrecognized cooling mode is a data defect.
pub fn pairing_stats(drive: &Drive, plant: &PowerPlant) -> Result<PairingStats> {
    let stats = drive_stats(drive);

    let power_plant_mass_tons =
        if SELF_POWERED_CLASSIFICATIONS.contains(&drive.drive_classification.as_str()) {
            0.0
        } else {
            stats.power_w * plant.specific_power_t_gw * 1e-9
        };

    let waste_heat_w = match drive.cooling_mode()? {
        Cooling::Closed | Cooling::Calc => stats.power_w * (1.0 - plant.efficiency),
        Cooling::Open => 0.0,
    };

    Ok(PairingStats {
        power_plant_mass_tons,
        waste_heat_w,
    })
}
