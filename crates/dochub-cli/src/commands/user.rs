//! User management CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use dochub_auth::password::hasher::PasswordHasher;
use dochub_auth::password::validator::PasswordValidator;
use dochub_core::error::AppError;
use dochub_core::types::pagination::PageRequest;
use dochub_database::repositories::user::UserRepository;
use dochub_entity::user::CreateUser;

/// Arguments for user commands
#[derive(Debug, Args)]
pub struct UserArgs {
    /// User subcommand
    #[command(subcommand)]
    pub command: UserCommand,
}

/// User subcommands
#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// List users
    List {
        /// Page number
        #[arg(short, long, default_value = "1")]
        page: u64,
    },
    /// Create a user directly in the database
    Create {
        /// Username
        #[arg(short, long)]
        username: String,
        /// Email address
        #[arg(short, long)]
        email: String,
        /// Password (policy enforced)
        #[arg(long)]
        password: String,
    },
}

/// User display row for table output
#[derive(Debug, Serialize, Tabled)]
struct UserRow {
    /// User ID
    id: String,
    /// Username
    username: String,
    /// Email
    email: String,
    /// Created at
    created_at: String,
}

/// Execute user commands
pub async fn execute(
    args: &UserArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let pool = super::create_db_pool(&config).await?;
    let user_repo = UserRepository::new(pool.clone());

    match &args.command {
        UserCommand::List { page } => {
            let page = PageRequest::new(*page, 50);
            let users = user_repo.find_all(&page).await?;

            let rows: Vec<UserRow> = users
                .items
                .iter()
                .map(|u| UserRow {
                    id: u.id.to_string(),
                    username: u.username.clone(),
                    email: u.email.clone(),
                    created_at: u.created_at.format("%Y-%m-%d %H:%M").to_string(),
                })
                .collect();

            output::print_list(&rows, format);
            println!(
                "Page {}/{} ({} users total)",
                users.page, users.total_pages, users.total_items
            );
        }
        UserCommand::Create {
            username,
            email,
            password,
        } => {
            PasswordValidator::new(&config.auth).validate(password)?;
            let password_hash = PasswordHasher::new().hash_password(password)?;

            let user = user_repo
                .create(&CreateUser {
                    username: username.clone(),
                    email: email.clone(),
                    password_hash,
                })
                .await?;

            output::print_success(&format!("User '{}' created ({})", user.username, user.id));
        }
    }

    Ok(())
}
