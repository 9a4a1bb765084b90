//! CLI command definitions and dispatch.

pub mod config;
pub mod folder;
pub mod migrate;
pub mod serve;
pub mod user;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use dochub_core::error::AppError;

/// DocHub — Document & Folder Content Management Server
#[derive(Debug, Parser)]
#[command(name = "dochub", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the DocHub server
    Serve(serve::ServeArgs),
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// User management
    User(user::UserArgs),
    /// Folder inspection
    Folder(folder::FolderArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Serve(args) => serve::execute(args, &self.config).await,
            Commands::Migrate(args) => migrate::execute(args, &self.config).await,
            Commands::User(args) => user::execute(args, &self.config, self.format).await,
            Commands::Folder(args) => folder::execute(args, &self.config).await,
            Commands::Config(args) => config::execute(args, &self.config).await,
        }
    }
}

/// Helper: load configuration from the given path
pub fn load_config(config_path: &str) -> Result<dochub_core::config::AppConfig, AppError> {
    dochub_core::config::AppConfig::load(config_path)
}

/// Helper: create database pool from config
pub async fn create_db_pool(
    config: &dochub_core::config::AppConfig,
) -> Result<sqlx::PgPool, AppError> {
    let pool = dochub_database::connection::DatabasePool::connect(&config.database).await?;
    Ok(pool.into_pool())
}
