//! CLI Adapter.

mod configs;
mod init;
mod sync;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "mili-release")]
#[command(version)]
#[command(
    about = "Scaffold Shopify theme projects with semantic-release, commitlint and GitHub Actions",
    long_about = None
)]
struct Cli {
    /// Log every external command to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Scaffold a Shopify theme project in the current directory (default)
    #[clap(visible_alias = "i")]
    Init(init::InitArgs),
    /// Refresh release workflows and configuration in an existing project
    #[clap(visible_alias = "s")]
    Sync(sync::SyncArgs),
    /// Manage cached store credentials
    #[clap(visible_alias = "c")]
    Configs {
        #[command(subcommand)]
        command: configs::ConfigsCommands,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result: Result<(), AppError> = match cli.command {
        None => init::run_init(init::InitArgs::from_env()),
        Some(Commands::Init(args)) => init::run_init(args),
        Some(Commands::Sync(args)) => sync::run_sync(args),
        Some(Commands::Configs { command }) => configs::run_configs(command),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// `RUST_LOG` wins; otherwise `--verbose` selects debug and the default is warn.
fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
