//! Furniture Shop CLI - terminal point of sale.
//!
//! # Usage
//!
//! ```bash
//! # Walk a shopper through selecting items and checking out
//! shop purchase
//!
//! # Serve several shoppers in a row
//! shop purchase --repeat
//!
//! # Price an order without prompts
//! shop quote --item chair=2 --item table=1 --state CA
//!
//! # Show the inventory
//! shop catalog
//! ```
//!
//! # Commands
//!
//! - `purchase` - Interactive checkout
//! - `quote` - One-shot pricing from arguments, as a table or JSON
//! - `catalog` - List items and unit prices

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io;

use clap::{Parser, Subcommand};
use furniture_shop_core::PricingEngine;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{LogFormat, ShopConfig};
use crate::error::CliError;
use crate::terminal::Terminal;

mod commands;
mod config;
mod error;
mod render;
mod terminal;

#[derive(Parser)]
#[command(name = "shop")]
#[command(author, version, about = "Furniture Shop point of sale")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive purchase
    Purchase {
        /// Offer another transaction after each one finishes
        #[arg(short, long)]
        repeat: bool,
    },
    /// Price an order without prompting
    Quote {
        /// Item and quantity as NAME=QTY (repeatable; QTY defaults to 1)
        #[arg(short, long = "item", value_name = "NAME=QTY", required = true)]
        items: Vec<String>,

        /// Two-letter destination state code
        #[arg(short, long)]
        state: String,

        /// Print the invoice as JSON
        #[arg(long)]
        json: bool,
    },
    /// List items for sale
    Catalog,
}

fn main() {
    let cli = Cli::parse();

    // Load configuration first so the log format is known
    let config = ShopConfig::from_env();
    init_tracing(config.as_ref().map_or(LogFormat::Text, |c| c.log_format));

    let result = config.map_err(CliError::from).and_then(|config| run(cli, &config));

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing on stderr so prompts and invoices on stdout stay clean.
fn init_tracing(format: LogFormat) {
    // Defaults to info for the CLI and warnings from the core if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "furniture_shop_cli=info,furniture_shop_core=warn".into());

    let json_layer = (format == LogFormat::Json).then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(io::stderr)
    });
    let text_layer = (format == LogFormat::Text)
        .then(|| tracing_subscriber::fmt::layer().with_writer(io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}

fn run(cli: Cli, config: &ShopConfig) -> Result<(), CliError> {
    let engine = PricingEngine::default().with_policy(config.pricing);

    match cli.command {
        Commands::Purchase { repeat } => {
            commands::purchase::run(engine, &mut Terminal::stdio(), repeat)?;
        }
        Commands::Quote { items, state, json } => {
            commands::quote::run(&engine, &items, &state, json, &mut io::stdout().lock())?;
        }
        Commands::Catalog => {
            commands::catalog::run(engine.catalog(), &mut io::stdout().lock())?;
        }
    }
    Ok(())
}
