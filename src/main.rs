//! amz-spapi - Typed async client for Amazon's Selling Partner API
//!
//! CLI front end: one subcommand per SP-API operation.

use amz_spapi::commands::{
    CatalogCommand, FeesCommand, FeesOptions, OffersCommand, RestrictionsCommand, TokenCommand,
};
use amz_spapi::config::{Config, OutputFormat};
use amz_spapi::spapi::models::IdType;
use amz_spapi::spapi::{Marketplace, Region};
use anyhow::Result;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "amz-spapi",
    version,
    about = "Typed client for Amazon's Selling Partner API",
    long_about = "Query offers, catalog items, fee estimates and listing restrictions through Amazon's Selling Partner API."
)]
struct Cli {
    /// Selling region (na, eu, fe)
    #[arg(short, long, global = true)]
    region: Option<Region>,

    /// SP-API base URL, overrides the region (sandbox, mock servers)
    #[arg(long, global = true)]
    endpoint: Option<String>,

    /// Proxy URL (e.g., socks5://host:port)
    #[arg(long, global = true, env = "SPAPI_PROXY")]
    proxy: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true)]
    format: Option<OutputFormat>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Exchange the refresh token for an access token
    Token,

    /// Fetch offer summaries for ASINs
    #[command(alias = "o")]
    Offers {
        /// Marketplace (country code or id)
        #[arg(short, long)]
        marketplace: Option<Marketplace>,

        /// Item condition (New, Used, Collectible, Refurbished, Club)
        #[arg(long, default_value = "New")]
        condition: String,

        /// Customer type (Consumer, Business)
        #[arg(long, default_value = "Consumer")]
        customer_type: String,

        /// ASIN(s) to price
        #[arg(required = true)]
        asins: Vec<String>,
    },

    /// Look up catalog items by identifier
    #[command(alias = "c")]
    Catalog {
        /// Marketplaces (comma-separated country codes or ids)
        #[arg(short, long, value_delimiter = ',')]
        marketplace: Vec<Marketplace>,

        /// Identifier type (ASIN, EAN, GTIN, ISBN, JAN, MINSAN, SKU, UPC)
        #[arg(long, default_value = "ASIN")]
        identifiers_type: String,

        /// Data sets to include (comma-separated)
        #[arg(long, default_value = "summaries")]
        included_data: String,

        /// Identifier(s) to look up
        #[arg(required = true)]
        identifiers: Vec<String>,
    },

    /// Estimate seller fees at a given price
    #[command(alias = "f")]
    Fees {
        /// Marketplace (country code or id)
        #[arg(short, long)]
        marketplace: Option<Marketplace>,

        /// Listing price
        #[arg(long)]
        price: Decimal,

        /// Currency code, defaults to the marketplace currency
        #[arg(long)]
        currency: Option<String>,

        /// Shipping price
        #[arg(long)]
        shipping: Option<Decimal>,

        /// Estimate as fulfilled by Amazon
        #[arg(long)]
        fba: bool,

        /// Identifier type (asin, sku)
        #[arg(long, default_value = "asin")]
        id_type: IdType,

        /// ASIN(s) or SKU(s)
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Check whether a seller may list an ASIN
    #[command(alias = "r")]
    Restrictions {
        /// Marketplaces (comma-separated country codes or ids)
        #[arg(short, long, value_delimiter = ',')]
        marketplace: Vec<Marketplace>,

        /// Seller (merchant) id
        #[arg(long, env = "SPAPI_SELLER_ID")]
        seller: Option<String>,

        /// Listing condition (new_new, used_like_new, ...)
        #[arg(long, default_value = "new_new")]
        condition: String,

        /// ASIN to check
        asin: String,
    },

    /// List supported marketplaces
    Marketplaces,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Load config with layered overrides
    let mut config = Config::load(cli.config.as_deref())?.with_env();

    // Apply CLI overrides
    if let Some(region) = cli.region {
        config.region = region;
    }
    if let Some(endpoint) = cli.endpoint {
        config.endpoint = Some(endpoint);
    }
    if let Some(proxy) = cli.proxy {
        config.proxy = Some(proxy);
    }
    if let Some(timeout) = cli.timeout {
        config.timeout_secs = timeout;
    }
    if let Some(format) = cli.format {
        config.format = format;
    }

    let output = tokio::select! {
        result = run(cli.command, config) => result?,
        _ = tokio::signal::ctrl_c() => anyhow::bail!("Interrupted"),
    };

    println!("{}", output);
    Ok(())
}

async fn run(command: Commands, config: Config) -> Result<String> {
    match command {
        Commands::Token => TokenCommand::new(config).execute().await,

        Commands::Offers { marketplace, condition, customer_type, asins } => {
            OffersCommand::new(config).execute(marketplace, &condition, &customer_type, &asins).await
        }

        Commands::Catalog { marketplace, identifiers_type, included_data, identifiers } => {
            CatalogCommand::new(config)
                .execute(&marketplace, &identifiers_type, &identifiers, &included_data)
                .await
        }

        Commands::Fees { marketplace, price, currency, shipping, fba, id_type, ids } => {
            let options = FeesOptions {
                marketplace,
                price,
                currency,
                shipping,
                amazon_fulfilled: fba,
                id_type,
            };
            FeesCommand::new(config).execute(&options, &ids).await
        }

        Commands::Restrictions { marketplace, seller, condition, asin } => {
            RestrictionsCommand::new(config)
                .execute(&asin, &condition, seller.as_deref(), &marketplace)
                .await
        }

        Commands::Marketplaces => Ok(list_marketplaces()),
    }
}

fn list_marketplaces() -> String {
    let mut lines = vec![
        "Supported marketplaces:\n".to_string(),
        format!("{:<6} {:<16} {:<20} {:<8} {:<6}", "Code", "Id", "Domain", "Currency", "Region"),
        format!("{:-<6} {:-<16} {:-<20} {:-<8} {:-<6}", "", "", "", "", ""),
    ];

    for marketplace in Marketplace::all() {
        lines.push(format!(
            "{:<6} {:<16} {:<20} {:<8} {:<6}",
            marketplace.to_string(),
            marketplace.id(),
            marketplace.domain(),
            marketplace.currency(),
            marketplace.region().to_string()
        ));
    }

    lines.join("\n")
}
