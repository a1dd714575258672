//! Facturo CLI - invoicing and stock management against the REST backend.
//!
//! # Usage
//!
//! ```bash
//! # Log in and capture the token for later calls
//! facturo login -e ana@example.com -p secret
//!
//! # Browse stock
//! facturo stock list --page 1
//! facturo stock search widget
//!
//! # Build a cart and create an invoice from it
//! facturo invoice create --item 1:3 --item 7:2
//!
//! # Dashboard
//! facturo metrics
//! ```
//!
//! The API base URL comes from `FACTURO_API_URL`; authentication comes from
//! `FACTURO_TOKEN` / `FACTURO_TENANT_ID` (or the matching flags), as printed
//! by a successful `login`.

use anyhow::Result;
use clap::{Parser, Subcommand};

use facturo_client::{ApiClient, ClientConfig};
use facturo_core::TenantId;

mod commands;

use commands::{dashboard, invoice, stock, supplier, users};

#[derive(Parser)]
#[command(name = "facturo")]
#[command(author, version, about = "Facturo invoicing & inventory CLI")]
struct Cli {
    /// Bearer token from a previous login
    #[arg(long, global = true, env = "FACTURO_TOKEN")]
    token: Option<String>,

    /// Active tenant id
    #[arg(long, global = true, env = "FACTURO_TENANT_ID")]
    tenant: Option<i64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and print the token to export for later commands
    Login {
        /// Account email
        #[arg(short, long)]
        email: String,

        /// Account password
        #[arg(short, long)]
        password: String,
    },
    /// Show the authenticated user
    Whoami,
    /// Invalidate the current token server-side
    Logout,
    /// Stock (product) management
    Stock {
        #[command(subcommand)]
        action: stock::StockAction,
    },
    /// Invoice listing and creation
    Invoice {
        #[command(subcommand)]
        action: invoice::InvoiceAction,
    },
    /// Supplier management
    Supplier {
        #[command(subcommand)]
        action: supplier::SupplierAction,
    },
    /// User administration
    Users {
        #[command(subcommand)]
        action: users::UsersAction,
    },
    /// Dashboard metrics
    Metrics(dashboard::MetricsArgs),
    /// Dashboard reports
    Reports(dashboard::ReportsArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    if std::env::var_os("FACTURO_LOG_JSON").is_some() {
        facturo_observability::init_json();
    } else {
        facturo_observability::init();
    }

    let cli = Cli::parse();

    let client = ApiClient::new(ClientConfig::from_env())?;
    if let Some(token) = &cli.token {
        client
            .session()
            .set(token.clone(), cli.tenant.map(TenantId::new));
    }

    match cli.command {
        Commands::Login { email, password } => commands::auth::login(&client, email, password).await,
        Commands::Whoami => commands::auth::whoami(&client).await,
        Commands::Logout => commands::auth::logout(&client).await,
        Commands::Stock { action } => stock::run(&client, action).await,
        Commands::Invoice { action } => invoice::run(&client, action).await,
        Commands::Supplier { action } => supplier::run(&client, action).await,
        Commands::Users { action } => users::run(&client, action).await,
        Commands::Metrics(args) => dashboard::metrics(&client, args).await,
        Commands::Reports(args) => dashboard::reports(&client, args).await,
    }
}
