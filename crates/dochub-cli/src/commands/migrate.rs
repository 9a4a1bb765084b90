//! Database migration management commands.

use clap::{Args, Subcommand};

use crate::output;
use dochub_core::error::{AppError, ErrorKind};

/// Arguments for the migrate command
#[derive(Debug, Args)]
pub struct MigrateArgs {
    /// Migration subcommand
    #[command(subcommand)]
    pub command: MigrateCommand,
}

/// Migration subcommands
#[derive(Debug, Subcommand)]
pub enum MigrateCommand {
    /// Run all pending migrations
    Run,
    /// Show applied migrations
    Status,
    /// Reset database (drop all tables and re-run)
    Reset {
        /// Skip confirmation prompt
        #[arg(long)]
        force: bool,
    },
}

/// Execute migration commands
pub async fn execute(args: &MigrateArgs, config_path: &str) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let pool = super::create_db_pool(&config).await?;

    match &args.command {
        MigrateCommand::Run => {
            println!("Running database migrations...");
            dochub_database::migration::run_migrations(&pool).await?;
            output::print_success("All migrations applied successfully.");
        }
        MigrateCommand::Status => {
            let applied = dochub_database::migration::applied_migrations(&pool).await?;
            if applied.is_empty() {
                println!("No migrations applied.");
            } else {
                println!("Applied migrations:");
                for (version, description) in &applied {
                    println!("  {} - {}", version, description);
                }
            }
        }
        MigrateCommand::Reset { force } => {
            if !force {
                let confirm = dialoguer::Confirm::new()
                    .with_prompt("This will DROP all tables and re-run migrations. Continue?")
                    .default(false)
                    .interact()
                    .map_err(|e| AppError::internal(format!("Input error: {}", e)))?;

                if !confirm {
                    println!("Cancelled.");
                    return Ok(());
                }
            }

            println!("Resetting database...");
            sqlx::query(
                "DROP TABLE IF EXISTS documents, folders, content_types, users, \
                 _sqlx_migrations CASCADE",
            )
            .execute(&pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to drop tables", e))?;

            dochub_database::migration::run_migrations(&pool).await?;
            output::print_success("Database reset complete.");
        }
    }

    Ok(())
}
