//! Evaluate command handler: run a full configuration against a loaded
//! version and print the per-drive performance table.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;

use tiship_lib::{ConfigOptions, DataSet, Evaluation, SectionThickness};

#[derive(Args, Debug)]
pub struct EvaluateArgs {
    /// Game data version to load.
    #[arg(long)]
    pub version: String,

    /// Payload mass in tons.
    #[arg(long, default_value_t = 100.0)]
    pub payload: f64,

    /// Radiator identifier.
    #[arg(long)]
    pub radiator: String,

    /// Number of propellant tanks (100 t each).
    #[arg(long, default_value_t = 1)]
    pub fuel_tanks: u32,

    /// Default power plant identifier for reactorless drive families.
    #[arg(long)]
    pub default_power_plant: Option<String>,

    /// Hydrogen tank module identifier.
    #[arg(long)]
    pub hydrogen_module: Option<String>,

    /// Thrust spiker module identifier.
    #[arg(long)]
    pub spiker: Option<String>,

    /// Hull identifier.
    #[arg(long)]
    pub hull: String,

    /// Armor identifier.
    #[arg(long)]
    pub armor: String,

    /// Nose armor thickness multiplier.
    #[arg(long, default_value_t = 1.0)]
    pub nose_armor: f64,

    /// Side armor thickness multiplier.
    #[arg(long, default_value_t = 1.0)]
    pub side_armor: f64,

    /// Tail armor thickness multiplier.
    #[arg(long, default_value_t = 1.0)]
    pub tail_armor: f64,

    /// Emit the full evaluation as JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

impl EvaluateArgs {
    fn to_options(&self) -> ConfigOptions {
        ConfigOptions {
            payload_tons: self.payload,
            radiator: self.radiator.clone(),
            fuel_tanks: self.fuel_tanks,
            default_power_plant: self.default_power_plant.clone(),
            hydrogen_module: self.hydrogen_module.clone(),
            spiker: self.spiker.clone(),
            hull: self.hull.clone(),
            armor: self.armor.clone(),
            armor_thickness: SectionThickness {
                nose: self.nose_armor,
                sides: self.side_armor,
                tail: self.tail_armor,
            },
        }
    }
}

/// Handle the evaluate subcommand.
pub fn handle_evaluate(data_dir: &Path, args: &EvaluateArgs) -> Result<()> {
    let dataset = DataSet::load_version(data_dir, &args.version)
        .with_context(|| format!("failed to load game data version {}", args.version))?;
    let evaluation = dataset
        .evaluate(&args.to_options())
        .context("failed to evaluate configuration")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&evaluation)?);
        return Ok(());
    }

    print_evaluation(&evaluation);
    Ok(())
}

fn print_evaluation(evaluation: &Evaluation) {
    let structure = &evaluation.structure;
    println!("Structure for {}:", evaluation.version);
    println!("  hull  {:>12.3} t", structure.hull_mass_tons);
    println!(
        "  armor {:>12.3} t (nose {:.3} / sides {:.3} / tail {:.3})",
        structure.armor_mass_tons(),
        structure.armor_nose_tons,
        structure.armor_sides_tons,
        structure.armor_tail_tons
    );
    println!("  fuel  {:>12.3} t", structure.fuel_mass_tons);
    println!();

    println!(
        "{:<24} {:<28} {:>10} {:>10} {:>12} {:>10}",
        "Drive", "Power Plant", "Dry (t)", "Wet (t)", "Delta-v", "Accel (g)"
    );
    for pairing in &evaluation.pairings {
        let plant_name = pairing
            .power_plant
            .as_ref()
            .map(|plant| plant.friendly_name.as_str())
            .unwrap_or("-");
        for entry in &pairing.drives {
            match &entry.performance {
                Some(perf) => println!(
                    "{:<24} {:<28} {:>10.1} {:>10.1} {:>9.2} kps {:>10.4}",
                    entry.drive.data_name,
                    plant_name,
                    perf.dry_mass_tons,
                    perf.wet_mass_tons,
                    perf.delta_v_kps,
                    perf.accel_g
                ),
                None => println!(
                    "{:<24} {:<28} {:>10} {:>10} {:>12} {:>10}",
                    entry.drive.data_name, "(unpaired)", "-", "-", "-", "-"
                ),
            }
        }
    }
}
