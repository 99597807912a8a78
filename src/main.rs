//! Orgmng - employee and skill management from the command line.

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use orgmng as app;
use serde::de::DeserializeOwned;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

use app::EmpService;
use app::config::{AppConfig, ConfigLoadResult, LoggingConfig};
use app::db;
use app::models::{CreateEmpRequest, UpdateEmpRequest};

/// Employee and skill management.
#[derive(Parser)]
#[command(name = "orgmng")]
struct Cli {
    /// Use config.toml from current directory (dev mode)
    #[arg(long)]
    dev: bool,

    /// Path to the config file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write the default configuration file
    InitConfig,
    /// Create tables and indexes if they are missing
    InitDb,
    /// Add an employee from a JSON create request
    Add {
        #[arg(long)]
        file: PathBuf,
        /// Acting user id
        #[arg(long)]
        user: i32,
    },
    /// Update an employee from a JSON update request
    Update {
        #[arg(long)]
        tenant: i32,
        #[arg(long)]
        id: i32,
        #[arg(long)]
        file: PathBuf,
        /// Acting user id
        #[arg(long)]
        user: i32,
    },
    /// Print an employee as JSON
    Show {
        #[arg(long)]
        tenant: i32,
        #[arg(long)]
        id: i32,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Determine config path based on mode
    let config_path = match (&cli.config, cli.dev) {
        (Some(path), _) => path.clone(),
        (None, true) => PathBuf::from("config.toml"),
        (None, false) => AppConfig::default_path(),
    };

    let (config, missing) = match AppConfig::try_load(&config_path) {
        ConfigLoadResult::Loaded(config) => (config, false),
        ConfigLoadResult::Missing => (AppConfig::default(), true),
        ConfigLoadResult::Invalid(e) => bail!("Config {} is invalid: {e}", config_path.display()),
    };

    let _guard = init_logging(&config.logging);
    if missing {
        tracing::info!("Config missing at {:?}, using defaults", config_path);
    } else {
        tracing::info!("Config loaded from {:?}", config_path);
    }

    if let Command::InitConfig = cli.command {
        config.save(&config_path)?;
        tracing::info!("Config written to {:?}", config_path);
        return Ok(());
    }

    let conn = db::connect(&config.database)
        .await
        .context("Failed to connect to database")?;
    db::test_connection(&conn).await?;

    match cli.command {
        Command::InitConfig => {}
        Command::InitDb => {
            db::create_schema(&conn).await?;
            let counts = db::get_table_counts(&conn).await?;
            tracing::info!("Schema ready: {} employees, {} skills", counts.emps, counts.skills);
        }
        Command::Add { file, user } => {
            let request: CreateEmpRequest = read_json(&file)?;
            let response = EmpService::new(conn).add_emp(&request, user).await?;
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        Command::Update { tenant, id, file, user } => {
            let request: UpdateEmpRequest = read_json(&file)?;
            let service = EmpService::new(conn);
            service.update_emp(id, &request, tenant, user).await?;
            if let Some(response) = service.find_emp(tenant, id).await? {
                println!("{}", serde_json::to_string_pretty(&response)?);
            }
        }
        Command::Show { tenant, id } => match EmpService::new(conn).find_emp(tenant, id).await? {
            Some(response) => println!("{}", serde_json::to_string_pretty(&response)?),
            None => bail!("Employee {id} of tenant {tenant} not found"),
        },
    }

    Ok(())
}

/// Log to stderr, plus a daily rolling file when a directory is configured.
fn init_logging(logging: &LoggingConfig) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let (file_layer, guard) = match &logging.directory {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "orgmng.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (Some(fmt::layer().with_writer(writer).with_ansi(false)), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .init();

    guard
}

fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let content = std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
}
