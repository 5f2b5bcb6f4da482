//! Foodhub CLI - data file management tools.
//!
//! # Usage
//!
//! ```bash
//! # Create missing data files
//! foodhub init
//!
//! # Register vendors and their items from a YAML file
//! foodhub seed vendors.yaml --password-storage argon2
//!
//! # Show record counts
//! foodhub --data-dir /var/lib/foodhub stats
//! ```
//!
//! # Commands
//!
//! - `init` - Create missing collection files
//! - `seed` - Seed vendors and catalog items
//! - `stats` - Log record counts

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use foodhub_server::services::PasswordStorage;

mod commands;

#[derive(Parser)]
#[command(name = "foodhub")]
#[command(author, version, about = "Foodhub CLI tools")]
struct Cli {
    /// Directory holding the collection files
    #[arg(long, global = true, env = "FOODHUB_DATA_DIR", default_value = ".")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create missing data files
    Init,
    /// Seed vendors and their items from a YAML file
    Seed {
        /// Path to the YAML seed file
        file: PathBuf,

        /// How vendor passwords are stored (`plaintext`, `argon2`)
        #[arg(long, default_value = "plaintext")]
        password_storage: PasswordStorage,
    },
    /// Log record counts
    Stats,
}

#[tokio::main]
async fn main() {
    // Load .env before clap reads FOODHUB_DATA_DIR
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Init => commands::init::run(&cli.data_dir).await?,
        Commands::Seed {
            file,
            password_storage,
        } => commands::seed::run(&cli.data_dir, &file, password_storage).await?,
        Commands::Stats => commands::stats::run(&cli.data_dir).await?,
    }
    Ok(())
}
