//! Command-line interface: argument parsing and command handlers.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Settings;
use crate::db::MIGRATIONS;
use crate::error::{AppError, AppResult};

/// Catalog and lead-capture service for providers.
#[derive(Debug, Parser)]
#[command(name = "vitrina", version = crate::pkg_version(), long_version = crate::clap_long_version())]
pub struct Cli {
    /// Path to a configuration file (overrides config/default.toml)
    #[arg(short, long, env = "VITRINA_CONFIG_FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP server (default)
    Serve,
    /// Apply pending database migrations
    Migrate,
}

/// Applies all pending embedded migrations.
///
/// Runs on a blocking thread because the migration harness uses a
/// synchronous connection.
pub async fn run_migrations(settings: &Settings) -> AppResult<()> {
    settings.database.validate()?;
    let database_url = settings.database.url.clone();

    let applied: usize = tokio::task::spawn_blocking(move || {
        use diesel::Connection;
        use diesel::pg::PgConnection;
        use diesel_migrations::MigrationHarness;

        let mut conn = PgConnection::establish(&database_url).map_err(|e| AppError::Database {
            operation: "establish connection for migrations".to_string(),
            source: anyhow::anyhow!("Connection error: {}", e),
        })?;

        let versions = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|e| AppError::Database {
                operation: "run pending migrations".to_string(),
                source: anyhow::anyhow!("Migration error: {}", e),
            })?;

        Ok::<_, AppError>(versions.len())
    })
    .await
    .map_err(|e| AppError::Internal {
        source: anyhow::Error::from(e),
    })??;

    tracing::info!(applied, "Database migrations applied");
    Ok(())
}
