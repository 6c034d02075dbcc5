//! itemd - CRUD HTTP service for item records
//!
//! Startup sequence: parse flags, build the connection pool, ensure the
//! schema exists, then serve until Ctrl+C or SIGTERM.

use std::net::SocketAddr;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use itemd_server::db::{create_pool, migrations};
use itemd_server::http::{run_server, ServerConfig};

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "itemd", version, about = "CRUD HTTP service for item records")]
struct Args {
    /// Address to bind to
    #[arg(long, short = 'b', default_value = "127.0.0.1:8000")]
    bind: SocketAddr,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    /// Enable debug logging (RUST_LOG overrides this)
    #[arg(long)]
    debug: bool,
}

/// Initialize tracing with console output.
fn init_tracing(debug: bool) -> Result<()> {
    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(debug) // show targets in debug mode
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

#[tokio::main]
async fn main() -> Result<()> {
    // Pick up DATABASE_URL from a local .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();
    init_tracing(args.debug)?;

    let database_url = args
        .database_url
        .context("DATABASE_URL is not set. Pass --database-url or set it in the environment.")?;

    tracing::info!("Starting itemd on {}", args.bind);

    let pool = create_pool(&database_url)
        .await
        .context("Failed to create database pool")?;

    migrations::run(&pool)
        .await
        .context("Failed to create schema")?;

    let config = ServerConfig {
        bind_addr: args.bind,
    };

    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
