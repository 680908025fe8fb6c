use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use carousel_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "carousel")]
#[command(author, version, about = "Compute slide positions for a carousel layout")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (defaults to ~/.config/carousel/config.toml)
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one layout pass and print every slide
    Layout(commands::layout::LayoutArgs),
    /// Resolve the movement direction between two slide indices
    Direction {
        /// Starting slide index
        start: usize,
        /// Ending slide index
        end: usize,
        /// A wrap-around transition is in progress
        #[arg(short, long)]
        wrapping: bool,
    },
    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Print the configuration file path
    Path,
    /// Write the default configuration
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config.unwrap_or_else(AppConfig::config_path);

    // Initialize logging; a broken config must not stop `config init` or `config path`
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        AppConfig::load_from(&config_path)
            .map(|config| config.general.log_level)
            .unwrap_or_else(|_| "info".into())
    });
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(log_level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Commands::Layout(args) => {
            let config = AppConfig::load_from(&config_path)?;
            commands::layout::run(&config, &args)
        }
        Commands::Direction { start, end, wrapping } => {
            commands::direction::run(start, end, wrapping)
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show(&AppConfig::load_from(&config_path)?),
            ConfigAction::Path => commands::config::path(&config_path),
            ConfigAction::Init { force } => commands::config::init(&config_path, force),
        },
    }
}
