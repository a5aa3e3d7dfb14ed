//! Cinema booking HTTP server.
//!
//! Loads layered configuration, connects to the database, applies
//! migrations and serves the cinema REST API until Ctrl+C / SIGTERM.

mod config;

use anyhow::{Context, Result};
use cinema_service::CinemaServiceModule;
use clap::Parser;
use config::AppConfig;
use sea_orm::{ConnectOptions, Database};
use std::path::PathBuf;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Parser)]
#[command(name = "cinema-server", version, about = "Cinema ticket-booking backend")]
struct Cli {
    /// Path to a YAML config file (defaults to config/cinema.yaml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the effective configuration as YAML and exit
    #[arg(long)]
    print_config: bool,

    /// Apply database migrations and exit
    #[arg(long)]
    migrate_only: bool,

    /// Log at debug level regardless of configuration
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;

    if cli.print_config {
        print!("{}", config.to_yaml()?);
        return Ok(());
    }

    init_tracing(&config, cli.verbose);

    info!(
        bind_addr = %config.server.bind_addr,
        max_connections = config.database.max_connections,
        "Configuration loaded"
    );

    let mut options = ConnectOptions::new(config.database.url.clone());
    options
        .max_connections(config.database.max_connections)
        .sqlx_logging(false);

    info!("Connecting to database...");
    let db = Database::connect(options)
        .await
        .context("failed to connect to database")?;
    info!("Database connected");

    CinemaServiceModule::migrate(&db).await?;
    if cli.migrate_only {
        info!("Migrations applied, exiting");
        return Ok(());
    }

    let module = CinemaServiceModule::init(db, config.cinema.clone());
    let app = module
        .register_rest(axum::Router::new())
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&config.server.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.server.bind_addr))?;
    info!("Server listening on {}", config.server.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// `RUST_LOG` wins over the configured level; `--verbose` wins over both.
fn init_tracing(config: &AppConfig, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level))
    };

    let json = config.logging.json;
    tracing_subscriber::registry()
        .with(filter)
        .with(json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json).then(tracing_subscriber::fmt::layer))
        .init();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C signal, shutting down gracefully...");
        },
        () = terminate => {
            info!("Received SIGTERM signal, shutting down gracefully...");
        },
    }
}
