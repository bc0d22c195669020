use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::http::StatusCode;
use clap::{Parser, Subcommand};
use sea_orm::{ConnectOptions, Database};
use sea_orm_migration::MigratorTrait;
use tracing_subscriber::EnvFilter;

use empregados_service::api::rest::routes;
use empregados_service::config::{AppConfig, CliArgs};
use empregados_service::domain::service::Service;
use empregados_service::infra::storage::migrations::Migrator;
use empregados_service::infra::storage::sea_orm_repo::SeaOrmEmployeeRepository;

/// Empregados Server - CRUD REST service for employee records
#[derive(Parser)]
#[command(name = "empregados-server")]
#[command(about = "CRUD REST service for employee records")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port for HTTP server (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print current configuration and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Run,
    /// Check configuration
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // CLI args passed down to config
    let args = CliArgs {
        config: cli.config.as_ref().map(|p| p.to_string_lossy().to_string()),
        port: cli.port,
        print_config: cli.print_config,
        verbose: cli.verbose,
    };

    // Load configuration and apply CLI overrides (port / verbosity)
    let mut config = AppConfig::load_or_default(cli.config.as_deref())?;
    config.apply_cli_overrides(&args);

    init_logging(&config.logging.level);
    tracing::info!("Empregados server starting");

    // Print config and exit if requested
    if cli.print_config {
        println!("{}", config.to_yaml()?);
        return Ok(());
    }

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_server(config).await,
        Commands::Check => check_config(config),
    }
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Validate the configured duplicate-email status up front so a bad config
/// fails at startup, not on the first conflicting request.
fn duplicate_email_status(config: &AppConfig) -> Result<StatusCode> {
    StatusCode::from_u16(config.api.duplicate_email_status).with_context(|| {
        format!(
            "api.duplicate_email_status is not a valid HTTP status: {}",
            config.api.duplicate_email_status
        )
    })
}

async fn run_server(config: AppConfig) -> Result<()> {
    let duplicate_status = duplicate_email_status(&config)?;

    let mut opts = ConnectOptions::new(config.database.url.clone());
    if let Some(max_conns) = config.database.max_conns {
        opts.max_connections(max_conns);
    }

    tracing::info!("Connecting to database: {}", config.database.url);
    let db = Database::connect(opts)
        .await
        .context("Failed to connect to database")?;

    Migrator::up(&db, None)
        .await
        .context("Failed to run migrations")?;

    let repo = Arc::new(SeaOrmEmployeeRepository::new(db));
    let service = Arc::new(Service::new(repo));
    let app = routes::router(service, duplicate_status);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        tracing::error!("Failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutdown signal received");
}

fn check_config(config: AppConfig) -> Result<()> {
    tracing::info!("Checking configuration...");
    duplicate_email_status(&config)?;

    println!("Configuration check passed");
    println!("{}", config.to_yaml()?);
    Ok(())
}
