//! Configuration inspection commands.

use clap::{Args, Subcommand};

use crate::output;
use dochub_core::error::AppError;

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the resolved configuration
    Show,
}

/// Execute config commands
pub async fn execute(args: &ConfigArgs, config_path: &str) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => {
            let mut config = super::load_config(config_path)?;
            // Never echo the signing secret
            config.auth.jwt_secret = "********".to_string();
            output::print_json(&config);
        }
    }

    Ok(())
}
