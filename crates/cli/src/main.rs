//! Game Mania CLI - drive the storefront cart and pages from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # Add a product to the cart
//! gm-cli cart add -n "Controle DualSense" -p "R$ 449,90" -i img/dualsense.png
//!
//! # Show the cart and its total
//! gm-cli cart list
//!
//! # Remove the first item
//! gm-cli cart remove 0
//!
//! # Checkout summary
//! gm-cli checkout
//!
//! # Search the catalog
//! gm-cli search rtx
//!
//! # Filter catalog products by category
//! gm-cli filter hardware
//!
//! # Assemble a page and print its mount points
//! gm-cli page /checkout.html
//! ```
//!
//! The cart is persisted in the file named by `GM_STORAGE_PATH`, so
//! successive invocations share it the way pages of one browser do.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use game_mania_storefront::config::StorefrontConfig;
use game_mania_storefront::error::StorefrontError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "gm-cli")]
#[command(author, version, about = "Game Mania storefront tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect and change the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Show the checkout summary
    Checkout,
    /// Search the product catalog
    Search {
        /// Term matched against product names and categories
        term: String,

        /// Print the search page markup instead of a listing
        #[arg(long)]
        html: bool,
    },
    /// Filter catalog products by category (`todos` shows everything)
    Filter {
        /// Category to keep
        category: String,
    },
    /// Run the page start-up sequence and print the resulting mounts
    Page {
        /// Page location, e.g. `/index.html`
        path: String,

        /// Mount points present on the page (defaults depend on the path)
        #[arg(short, long = "mount")]
        mounts: Vec<String>,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// List the items in the cart
    List,
    /// Add an item to the cart
    Add {
        /// Product name
        #[arg(short, long)]
        name: String,

        /// Display price, e.g. "R$ 1.299,90"
        #[arg(short, long)]
        price: String,

        /// Product image URL
        #[arg(short, long, default_value = "")]
        image: String,
    },
    /// Remove the item at a position (0-based)
    Remove {
        /// Position in the cart listing
        index: usize,
    },
    /// Print the cart total
    Total,
}

#[tokio::main]
async fn main() {
    // Load .env before the filter so RUST_LOG can come from it
    let _ = dotenvy::dotenv();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "game_mania_storefront=info,gm_cli=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), StorefrontError> {
    let config = StorefrontConfig::from_env()?;

    match cli.command {
        Commands::Cart { action } => match action {
            CartAction::List => commands::cart::list(&config)?,
            CartAction::Add { name, price, image } => {
                commands::cart::add(&config, name, price, image)?;
            }
            CartAction::Remove { index } => commands::cart::remove(&config, index)?,
            CartAction::Total => commands::cart::total(&config)?,
        },
        Commands::Checkout => commands::cart::checkout(&config)?,
        Commands::Search { term, html } => commands::catalog::search(&config, &term, html)?,
        Commands::Filter { category } => commands::catalog::filter(&config, &category)?,
        Commands::Page { path, mounts } => commands::page::boot_page(&config, &path, mounts).await?,
    }
    Ok(())
}
