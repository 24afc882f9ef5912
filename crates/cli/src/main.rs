//! Checkout CLI - offline tools for the checkout service.
//!
//! # Usage
//!
//! ```bash
//! # Render the view model for a cart snapshot
//! checkout-cli render --cart cart.json
//!
//! # With a catalog, a signed-in customer and the shipping section in edit mode
//! checkout-cli render --cart cart.json --catalog catalog.yaml --customer 7 --edit-shipping
//! ```
//!
//! # Commands
//!
//! - `render` - Print the checkout view model for a cart as JSON
//!
//! Help messages, the default locale and the expiration year count come
//! from the same `CHECKOUT_*` environment variables the server reads.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "checkout-cli")]
#[command(author, version, about = "Checkout service CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the checkout view model for a cart snapshot
    Render(RenderArgs),
}

#[derive(clap::Args, Debug)]
struct RenderArgs {
    /// Cart snapshot (JSON order)
    #[arg(long)]
    cart: PathBuf,

    /// Catalog file (YAML); defaults to `CHECKOUT_CATALOG_PATH` or the built-in catalog
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Signed-in customer ID
    #[arg(long)]
    customer: Option<i64>,

    /// Open the order info section for editing
    #[arg(long)]
    edit_order_info: bool,

    /// Open the billing section for editing
    #[arg(long)]
    edit_billing: bool,

    /// Open the shipping section for editing
    #[arg(long)]
    edit_shipping: bool,

    /// Payment processing error to display
    #[arg(long)]
    payment_error: Option<String>,

    /// Locale for month names (e.g. `fr_FR` or `fr-FR`)
    #[arg(long)]
    locale: Option<String>,

    /// First expiration year (defaults to the current year)
    #[arg(long)]
    year: Option<i32>,
}

#[tokio::main]
async fn main() {
    // Logs go to stderr so the rendered JSON stays clean on stdout
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), commands::render::RenderError> {
    match cli.command {
        Commands::Render(args) => {
            let options = commands::render::RenderOptions {
                cart: args.cart,
                catalog: args.catalog,
                customer: args.customer.map(Into::into),
                edit_order_info: args.edit_order_info,
                edit_billing: args.edit_billing,
                edit_shipping: args.edit_shipping,
                payment_error: args.payment_error,
                locale: args.locale,
                year: args.year,
            };
            let stdout = std::io::stdout();
            commands::render::render(&options, &mut stdout.lock()).await?;
        }
    }
    Ok(())
}
