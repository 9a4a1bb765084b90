//! Folder inspection CLI commands.

use clap::{Args, Subcommand};

use dochub_core::error::AppError;
use dochub_database::repositories::folder::FolderRepository;
use dochub_database::repositories::user::UserRepository;
use dochub_entity::folder::FolderNode;
use dochub_service::folder::tree::build_forest;

/// Arguments for folder commands
#[derive(Debug, Args)]
pub struct FolderArgs {
    /// Folder subcommand
    #[command(subcommand)]
    pub command: FolderCommand,
}

/// Folder subcommands
#[derive(Debug, Subcommand)]
pub enum FolderCommand {
    /// Print a user's folder tree
    Tree {
        /// Username whose folders to display
        #[arg(short, long)]
        username: String,
    },
}

/// Execute folder commands
pub async fn execute(args: &FolderArgs, config_path: &str) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let pool = super::create_db_pool(&config).await?;

    match &args.command {
        FolderCommand::Tree { username } => {
            let user = UserRepository::new(pool.clone())
                .find_by_username(username)
                .await?
                .ok_or_else(|| AppError::not_found(format!("User '{username}' not found")))?;

            let folders = FolderRepository::new(pool).find_by_owner(user.id).await?;
            let tree = build_forest(&folders);

            if tree.roots.is_empty() {
                println!("No folders for user '{}'.", user.username);
                return Ok(());
            }

            println!("{} ({} folders)", user.username, tree.total_folders);
            for root in &tree.roots {
                print_node(root, 0);
            }
        }
    }

    Ok(())
}

/// Recursively print a folder node with indentation
fn print_node(node: &FolderNode, depth: usize) {
    println!("{}{} ({})", "  ".repeat(depth), node.name, node.id);
    for child in &node.children {
        print_node(child, depth + 1);
    }
}
