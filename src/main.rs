//! Veintiuna - Main entrypoint.
//!
//! This is the main entry point for the veintiuna console blackjack game.
//! It initializes the logging system, loads configuration, and runs the
//! table loop.

use clap::{Parser, Subcommand};
use dialoguer::{Confirm, Input};
use std::path::PathBuf;
use std::process;
use tracing::info;

use veintiuna_lib::config::{self, ConfigLoader, LogConfig, VeintiunaConfig};
use veintiuna_lib::error::game::GameError;
use veintiuna_lib::error::{VeintiunaError, VeintiunaResult};
use veintiuna_lib::game::{PromptStrategy, Table};

/// Command line arguments for the card game.
#[derive(Parser, Debug)]
#[clap(name = "Veintiuna", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Play at the table
    Play,

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
fn init_logging(log: &LogConfig) -> VeintiunaResult<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log.level.clone()));

    let result = if log.json {
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_file(log.source_location)
            .with_line_number(log.source_location)
            .json()
            .finish();
        tracing::subscriber::set_global_default(subscriber)
    } else {
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_file(log.source_location)
            .with_line_number(log.source_location)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
    };

    result
        .map_err(|e| VeintiunaError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Runs the interactive table loop.
fn run_game(config: &VeintiunaConfig) -> VeintiunaResult<()> {
    println!("====================================");
    println!("       WELCOME TO VEINTIUNA");
    println!("====================================");

    let name: String = Input::new()
        .with_prompt("Your name")
        .default(config.game.player_name.clone())
        .interact_text()
        .map_err(GameError::from)?;
    let name = if name.trim().is_empty() {
        config.game.player_name.clone()
    } else {
        name.trim().to_string()
    };

    let mut table = Table::new(&config.game)?;
    table.add_player(name.clone(), Box::new(PromptStrategy::new()))?;

    loop {
        {
            let record = table.play_round()?;
            println!("\n{record}");
            println!("{}", record.history_text());
        }

        if let Some(player) = table.registry().get(&name) {
            println!("\n{player}");
        }
        if let Some(dealer) = table.registry().get(table.dealer_name()) {
            println!("\n{dealer}");
        }

        let again = Confirm::new()
            .with_prompt("Play another round?")
            .default(true)
            .interact()
            .map_err(GameError::from)?;
        if !again {
            break;
        }
    }

    println!("\n{}", table.standings_text()?);
    println!("Thanks for playing!");
    Ok(())
}

/// Main entry point for the application.
fn main() -> VeintiunaResult<()> {
    // Parse command-line arguments
    let args = Args::parse();

    // Load configuration
    let config_loader = ConfigLoader::new(args.config.as_deref(), "VEINTIUNA");

    match args.command.unwrap_or(Command::Play) {
        Command::Play => {
            // Load and validate configuration
            let loaded = match config_loader.load() {
                Ok(loaded) => loaded,
                Err(e) => {
                    eprintln!("Configuration error: {e}");
                    process::exit(1);
                }
            };

            init_logging(&loaded.log)?;
            config::init_global_config(loaded);

            let config = config::get_global_config();
            info!(
                version = veintiuna_lib::VERSION,
                dealer = %config.get().game.dealer_name,
                "starting veintiuna"
            );

            run_game(config.get())
        }
        Command::Validate => {
            init_logging(&LogConfig::default())?;
            info!("Validating configuration");
            match config_loader.load() {
                Ok(_) => {
                    info!("Configuration validated successfully");
                    Ok(())
                }
                Err(e) => {
                    tracing::error!("Configuration validation error: {}", e);
                    process::exit(1);
                }
            }
        }
        Command::GenConfig { output } => {
            init_logging(&LogConfig::default())?;
            info!("Generating default configuration");
            let default_config = VeintiunaConfig::default();

            // Create parent directories if they don't exist
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent).map_err(VeintiunaError::Io)?;
            }

            // Serialize to TOML
            let toml = toml::to_string_pretty(&default_config)
                .map_err(|e| VeintiunaError::Custom(format!("Failed to serialize config: {e}")))?;

            // Write to file
            std::fs::write(&output, toml).map_err(VeintiunaError::Io)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}
