//! AppBay CLI - catalog browsing, cart quotes, and install management.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog
//! appbay catalog list
//! appbay catalog list --category Defense --sort desc
//! appbay catalog show 3
//!
//! # Price a cart (ID or IDxQTY per argument)
//! appbay quote 1 2x3
//!
//! # Manage installed apps (persisted under APPBAY_DATA_DIR)
//! appbay install 7
//! appbay installed --sort desc
//! appbay uninstall 7
//! ```
//!
//! # Commands
//!
//! - `catalog` - List or inspect catalog items
//! - `quote` - Build a cart from arguments and print its totals
//! - `install` / `uninstall` / `installed` - Durable install registry

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand, ValueEnum};

use appbay_storefront::{SortOrder, StorefrontConfig};

mod commands;

#[derive(Parser)]
#[command(name = "appbay")]
#[command(author, version, about = "AppBay storefront CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Build a cart from the given items and print its totals
    Quote {
        /// Items as `ID` or `IDxQTY` (e.g. `3` or `3x2`)
        #[arg(required = true)]
        items: Vec<String>,
    },
    /// Install an app into the durable registry
    Install {
        /// Catalog item id
        id: i32,
    },
    /// Remove an app from the durable registry
    Uninstall {
        /// Catalog item id
        id: i32,
    },
    /// List installed apps
    Installed {
        /// Sort by download count
        #[arg(long, value_enum)]
        sort: Option<SortArg>,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List catalog items
    List {
        /// Only items in this category
        #[arg(short, long)]
        category: Option<String>,

        /// Only items whose title contains this text
        #[arg(short, long)]
        search: Option<String>,

        /// Sort by download count
        #[arg(long, value_enum)]
        sort: Option<SortArg>,
    },
    /// Show one item in detail
    Show {
        /// Catalog item id
        id: i32,
    },
}

/// Sort direction argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum SortArg {
    /// Downloads low to high
    Asc,
    /// Downloads high to low
    Desc,
}

impl From<SortArg> for SortOrder {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Asc => Self::Ascending,
            SortArg::Desc => Self::Descending,
        }
    }
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;

    match cli.command {
        Commands::Catalog { action } => {
            let catalog = commands::load_catalog(&config)?;
            match action {
                CatalogAction::List {
                    category,
                    search,
                    sort,
                } => commands::catalog::list(
                    &catalog,
                    category.as_deref(),
                    search.as_deref(),
                    sort.map(SortOrder::from),
                ),
                CatalogAction::Show { id } => commands::catalog::show(&catalog, id)?,
            }
        }
        Commands::Quote { items } => {
            let catalog = commands::load_catalog(&config)?;
            commands::cart::quote(&catalog, config.checkout.clone(), &items)?;
        }
        Commands::Install { id } => {
            let catalog = commands::load_catalog(&config)?;
            commands::installs::install(&catalog, &config, id)?;
        }
        Commands::Uninstall { id } => commands::installs::uninstall(&config, id)?,
        Commands::Installed { sort } => {
            commands::installs::list(&config, sort.map(SortOrder::from));
        }
    }
    Ok(())
}
