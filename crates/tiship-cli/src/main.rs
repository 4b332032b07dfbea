use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod commands;

use commands::evaluate::EvaluateArgs;

#[derive(Parser, Debug)]
#[command(author, version, about = "Terra Invicta ship performance utilities")]
struct Cli {
    /// Override the versions data directory.
    #[arg(long)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List game data versions available in the data directory.
    Versions,
    /// List drive families with load-time derived values for a version.
    Drives {
        /// Game data version to load.
        #[arg(long)]
        version: String,
    },
    /// Evaluate a ship configuration and print per-drive performance.
    Evaluate(EvaluateArgs),
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let data_dir = commands::resolve_data_dir(cli.data_dir.as_deref());

    match cli.command {
        Command::Versions => commands::versions::handle_versions(&data_dir),
        Command::Drives { version } => commands::drives::handle_drives(&data_dir, &version),
        Command::Evaluate(args) => commands::evaluate::handle_evaluate(&data_dir, &args),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
