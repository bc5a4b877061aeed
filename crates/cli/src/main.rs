//! EShopper CLI - Inspect and edit a file-backed cart.
//!
//! # Usage
//!
//! ```bash
//! # Add a product (id, name, unit price)
//! eshopper add 1 "Shirt" 20.00 -q 2 --size M --color Blue
//!
//! # Show the cart, its total and the badge count
//! eshopper list
//! eshopper total
//! eshopper count
//!
//! # Change or remove rows by their listed position
//! eshopper update 1 5
//! eshopper remove 1
//!
//! # Print an order summary and start over
//! eshopper summary --first-name Ada --email ada@example.com
//! eshopper clear
//! ```
//!
//! # Commands
//!
//! - `add`, `remove`, `update`, `clear` - Change the cart
//! - `list`, `total`, `count`, `summary` - Report on the cart
//! - `format-price` - Format an amount the way the cart does
//!
//! Configuration comes from `ESHOPPER_*` environment variables (see
//! `eshopper_cart::config`); `--data-dir` overrides `ESHOPPER_DATA_DIR`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use eshopper_cart::{CartConfig, CartStore, CustomerInfo, FileStorage, Product};
use eshopper_core::{Price, ProductId};
use tracing_subscriber::EnvFilter;

mod commands;

use commands::TerminalObserver;
use commands::items::AddRequest;

#[derive(Parser)]
#[command(name = "eshopper")]
#[command(author, version, about = "EShopper cart tools")]
struct Cli {
    /// Directory holding the cart file
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a product to the cart
    Add {
        /// Product id (integers are numeric ids, anything else is text)
        id: ProductId,

        /// Display name
        name: String,

        /// Unit price
        price: Price,

        /// Number of units
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,

        /// Pre-discount price
        #[arg(long)]
        original_price: Option<Price>,

        /// Image reference
        #[arg(long)]
        image: Option<String>,

        /// Size variant
        #[arg(short, long)]
        size: Option<String>,

        /// Color variant
        #[arg(short, long)]
        color: Option<String>,
    },
    /// Remove the item at a listed position
    Remove {
        /// Position as shown by `list` (starting at 1)
        position: usize,
    },
    /// Set the quantity of the item at a listed position (0 removes it)
    Update {
        /// Position as shown by `list` (starting at 1)
        position: usize,

        /// New quantity
        quantity: u32,
    },
    /// List cart items
    List,
    /// Print the cart total
    Total,
    /// Print the number of items in the cart
    Count,
    /// Delete the stored cart
    Clear,
    /// Print a plain-text order summary
    Summary(CustomerArgs),
    /// Format an amount with two decimals and a currency symbol
    FormatPrice {
        /// Amount to format
        amount: Price,

        /// Currency symbol
        #[arg(long, default_value = "$")]
        currency: String,
    },
}

#[derive(Args)]
struct CustomerArgs {
    #[arg(long)]
    first_name: Option<String>,
    #[arg(long)]
    last_name: Option<String>,
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    phone: Option<String>,
    #[arg(long)]
    address: Option<String>,
    #[arg(long)]
    city: Option<String>,
    #[arg(long)]
    country: Option<String>,
    #[arg(long)]
    zip: Option<String>,
}

impl From<CustomerArgs> for CustomerInfo {
    fn from(args: CustomerArgs) -> Self {
        Self {
            first_name: args.first_name,
            last_name: args.last_name,
            email: args.email,
            phone: args.phone,
            address: args.address,
            city: args.city,
            country: args.country,
            zip: args.zip,
        }
    }
}

fn main() {
    // Logs go to stderr so command output stays pipeable
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "eshopper=info,eshopper_cart=warn".into());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = CartConfig::from_env()?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }
    tracing::debug!(data_dir = %config.data_dir.display(), key = %config.storage_key, "Opening cart");

    let storage = FileStorage::new(config.data_dir.clone());
    let mut store = CartStore::with_config(storage, config);
    store.subscribe(Arc::new(TerminalObserver));

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Add {
            id,
            name,
            price,
            quantity,
            original_price,
            image,
            size,
            color,
        } => {
            let request = AddRequest {
                product: Product {
                    id,
                    name,
                    price,
                    original_price,
                    image,
                },
                quantity,
                size,
                color,
            };
            commands::items::add(&store, &request, &mut out)?;
        }
        Commands::Remove { position } => commands::items::remove(&store, position, &mut out)?,
        Commands::Update { position, quantity } => {
            commands::items::update(&store, position, quantity, &mut out)?;
        }
        Commands::List => commands::report::list(&store, &mut out)?,
        Commands::Total => commands::report::total(&store, &mut out)?,
        Commands::Count => commands::report::count(&store, &mut out)?,
        Commands::Clear => commands::items::clear(&store, &mut out)?,
        Commands::Summary(customer) => {
            commands::report::summary(&store, &customer.into(), &mut out)?;
        }
        Commands::FormatPrice { amount, currency } => {
            commands::report::format(amount, &currency, &mut out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_add() {
        let cli = Cli::try_parse_from([
            "eshopper", "add", "sku-1", "Shirt", "19.99", "-q", "2", "--size", "M",
        ])
        .expect("valid arguments");

        match cli.command {
            Commands::Add {
                id,
                price,
                quantity,
                size,
                color,
                ..
            } => {
                assert_eq!(id, ProductId::from("sku-1"));
                assert_eq!(price, Price::from_cents(1999));
                assert_eq!(quantity, 2);
                assert_eq!(size.as_deref(), Some("M"));
                assert_eq!(color, None);
            }
            _ => panic!("expected add"),
        }
    }

    #[test]
    fn test_parse_rejects_bad_price() {
        assert!(Cli::try_parse_from(["eshopper", "add", "1", "Shirt", "cheap"]).is_err());
    }

    #[test]
    fn test_data_dir_is_global() {
        let cli = Cli::try_parse_from(["eshopper", "list", "--data-dir", "/tmp/cart"])
            .expect("valid arguments");
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/cart")));
    }

    #[test]
    fn test_end_to_end_against_file_storage() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = CartStore::new(FileStorage::new(dir.path()));
        let request = AddRequest {
            product: Product::new(7_i64, "Mug", Price::from_cents(850)),
            quantity: 2,
            size: None,
            color: None,
        };

        commands::items::add(&store, &request, &mut Vec::new()).expect("add");

        let reopened = CartStore::new(FileStorage::new(dir.path()));
        let mut buf = Vec::new();
        commands::report::total(&reopened, &mut buf).expect("total");
        assert_eq!(String::from_utf8(buf).expect("utf8"), "$17.00\n");
    }
}
