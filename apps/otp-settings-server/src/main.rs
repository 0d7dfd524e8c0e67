mod config;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use config::{AppConfig, LoggingConfig};
use otp_settings::OtpSettingsModule;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

/// OTP Settings Server - per-action OTP notification channels
#[derive(Parser)]
#[command(name = "otp-settings-server")]
#[command(about = "OTP Settings Server - per-action OTP notification channels")]
#[command(version = "0.1.0")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port override for HTTP server (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print effective configuration (YAML) and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Use mock database (sqlite::memory:)
    #[arg(long)]
    mock: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Run,
    /// Validate configuration and exit
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // defaults -> YAML (if provided) -> env (OTP_SETTINGS__*) -> CLI overrides
    let mut config = AppConfig::load(cli.config.as_deref())?;
    config.apply_port_override(cli.port);
    if cli.mock {
        config.apply_mock_database();
    }

    init_logging(&config.logging, cli.verbose)?;

    if cli.print_config {
        println!("Effective configuration:\n{}", config.to_yaml()?);
        return Ok(());
    }

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_server(config).await,
        Commands::Check => check_config(&config),
    }
}

/// Filter used when `RUST_LOG` is unset: `-v` beats the configured level
fn default_directive(level: &str, verbose: u8) -> &str {
    match verbose {
        0 => level,
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn init_logging(logging: &LoggingConfig, verbose: u8) -> Result<()> {
    let fallback = default_directive(&logging.level, verbose);
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .context("invalid log filter")?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
    Ok(())
}

fn check_config(config: &AppConfig) -> Result<()> {
    tracing::info!("Checking configuration...");
    println!("Configuration is valid");
    println!("{}", config.to_yaml()?);
    Ok(())
}

async fn connect_database(config: &AppConfig) -> Result<DatabaseConnection> {
    let mut opts = ConnectOptions::new(config.database.url.clone());
    opts.max_connections(config.database.max_connections)
        .sqlx_logging(false);
    if config.database.max_connections == 1 {
        // An in-memory SQLite database only lives as long as its connection
        opts.min_connections(1);
    }

    let db = Database::connect(opts)
        .await
        .with_context(|| format!("failed to connect to {}", config.database.url))?;
    tracing::info!(max_connections = config.database.max_connections, "Database connected");
    Ok(db)
}

async fn run_server(config: AppConfig) -> Result<()> {
    tracing::info!("OTP Settings Server starting");

    let db = Arc::new(connect_database(&config).await?);

    let module = OtpSettingsModule::default();
    module.migrate(&db).await?;
    module.init(config.otp_settings.clone(), db)?;

    let app = module
        .register_rest(axum::Router::new())?
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.server.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.server.bind_addr))?;
    tracing::info!(addr = %config.server.bind_addr, "HTTP server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("OTP Settings Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_overrides_configured_level() {
        assert_eq!(default_directive("warn", 0), "warn");
        assert_eq!(default_directive("warn", 1), "info");
        assert_eq!(default_directive("warn", 2), "debug");
        assert_eq!(default_directive("warn", 5), "trace");
    }

    #[test]
    fn cli_parses_flags_and_subcommand() {
        let cli = Cli::try_parse_from(["otp-settings-server", "-vv", "--mock", "-p", "9000", "check"])
            .unwrap();

        assert_eq!(cli.verbose, 2);
        assert!(cli.mock);
        assert_eq!(cli.port, Some(9000));
        assert!(matches!(cli.command, Some(Commands::Check)));
    }
}
