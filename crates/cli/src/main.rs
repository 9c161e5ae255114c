//! Shopdesk - terminal dashboard for the shop admin API.
//!
//! # Usage
//!
//! ```bash
//! # Log in and persist the session token
//! shopdesk login
//!
//! # Fetch and render categories and products
//! shopdesk dashboard
//!
//! # Create entities
//! shopdesk category add --name Books
//! shopdesk product add --name Pen --price 1.50 --category-id 1
//!
//! # Re-fetch a single list
//! shopdesk refresh categories
//!
//! # Clear the session
//! shopdesk logout
//! ```
//!
//! # Commands
//!
//! - `login` - Authenticate and store the session token
//! - `logout` - Clear the session (server outcome is ignored)
//! - `dashboard` - Fetch and render both lists
//! - `category add` / `product add` - Create entities
//! - `refresh` - Re-fetch one list

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

use crate::kind::EntityKind;

mod commands;
mod flows;
mod kind;
mod notify;
mod views;

#[derive(Parser)]
#[command(name = "shopdesk")]
#[command(author, version, about = "Terminal dashboard for the shop admin API")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and persist the session token
    Login {
        /// Email address (prompted when omitted)
        #[arg(short, long)]
        email: Option<String>,
    },
    /// Log out and clear the stored session token
    Logout,
    /// Fetch and render the category and product lists
    Dashboard,
    /// Manage categories
    Category {
        #[command(subcommand)]
        action: CategoryAction,
    },
    /// Manage products
    Product {
        #[command(subcommand)]
        action: ProductAction,
    },
    /// Re-fetch and render one list
    Refresh {
        #[command(subcommand)]
        target: RefreshTarget,
    },
}

#[derive(Subcommand)]
enum CategoryAction {
    /// Create a new category
    Add {
        /// Category name
        #[arg(short, long)]
        name: String,
    },
}

#[derive(Subcommand)]
enum ProductAction {
    /// Create a new product
    Add {
        /// Product name
        #[arg(short, long)]
        name: String,

        /// Product price
        #[arg(short, long)]
        price: String,

        /// ID of the category the product belongs to
        #[arg(short, long)]
        category_id: String,
    },
}

#[derive(Subcommand)]
enum RefreshTarget {
    /// Re-fetch the category list
    Categories,
    /// Re-fetch the product list
    Products,
}

#[tokio::main]
async fn main() {
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
        Commands::Login { email } => commands::login::run(email).await?,
        Commands::Logout => commands::logout::run().await?,
        Commands::Dashboard => commands::dashboard::run().await?,
        Commands::Category { action } => match action {
            CategoryAction::Add { name } => commands::create::category(name).await?,
        },
        Commands::Product { action } => match action {
            ProductAction::Add {
                name,
                price,
                category_id,
            } => commands::create::product(name, price, category_id).await?,
        },
        Commands::Refresh { target } => match target {
            RefreshTarget::Categories => commands::dashboard::refresh(EntityKind::Category).await?,
            RefreshTarget::Products => commands::dashboard::refresh(EntityKind::Product).await?,
        },
    }
    Ok(())
}
