//! Drives command handler for listing drive families and their
//! load-time derived values.

use std::path::Path;

use anyhow::{Context, Result};

use tiship_lib::DataSet;

/// Load a version and print every drive family with per-variant power
/// and mass, plus the power plant the family was paired with.
pub fn handle_drives(data_dir: &Path, version: &str) -> Result<()> {
    let dataset = DataSet::load_version(data_dir, version)
        .with_context(|| format!("failed to load game data version {version}"))?;

    println!("Drive families for {} ({}):", dataset.version(), dataset.families().len());
    for family in dataset.families() {
        let plant = family
            .required_power_plant()
            .and_then(|class| dataset.best_plant_for_class(class));
        match plant {
            Some(plant) => println!("{} [{}]", family.key, plant.friendly_name),
            None => println!("{} [no required power plant]", family.key),
        }

        println!(
            "  {:<24} {:>12} {:>12} {:>12}",
            "Variant", "Power (GW)", "Mass (t)", "EV (kps)"
        );
        for drive in &family.drives {
            let stats = dataset
                .drive_stats(&drive.data_name)
                .context("drive stats derived at load")?;
            println!(
                "  {:<24} {:>12.3} {:>12.3} {:>12.1}",
                drive.data_name,
                stats.power_w / 1e9,
                stats.total_mass_tons,
                drive.ev_kps
            );
        }
    }

    Ok(())
}
