use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueHint};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use lenscap_cli::args::{ComputeArgs, SurfaceArgs};
use lenscap_cli::commands::{compute, recipes, surface};
use lenscap_cli::output::print_logo;
use lenscap_lib::{resolve_config, ModelConfig};

#[derive(Parser, Debug)]
#[command(author, version, about = "AR coating line capacity model")]
struct Cli {
    /// JSON configuration file (defaults to $LENSCAP_CONFIG, then the platform config dir).
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    config: Option<PathBuf>,

    /// Suppress the banner.
    #[arg(long, global = true)]
    no_logo: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluate lenses, jobs and chambers per day for one set of parameters.
    Compute(ComputeArgs),
    /// Sweep lenses/day over hours per day and OEE.
    Surface(SurfaceArgs),
    /// List the recipe catalog.
    Recipes,
}

impl Command {
    fn wants_logo(&self) -> bool {
        match self {
            Command::Compute(args) => !args.format.is_machine_readable(),
            Command::Surface(args) => !args.format.is_machine_readable(),
            Command::Recipes => true,
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    if !cli.no_logo && cli.command.wants_logo() {
        print_logo();
    }

    match &cli.command {
        Command::Compute(args) => compute::handle_compute(load_config(&cli)?, args),
        Command::Surface(args) => surface::handle_surface(load_config(&cli)?, args),
        Command::Recipes => {
            recipes::handle_list_recipes();
            Ok(())
        }
    }
}

fn load_config(cli: &Cli) -> Result<ModelConfig> {
    resolve_config(cli.config.as_deref()).context("failed to load the model configuration")
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
