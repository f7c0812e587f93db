use clap::{Parser, Subcommand};
use sqlx::{Pool, Postgres};
use tracing::{info, warn};

use crate::db::user_repository::UserRepository;

/// Job board API server
#[derive(Parser)]
#[command(name = "hireboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Grant admin privileges to an existing user
    MakeAdmin {
        /// Email of the user to promote
        email: String,
    },
}

/// Run a one-shot administrative command against the database
pub async fn run(command: Command, pool: &Pool<Postgres>) -> Result<(), sqlx::Error> {
    match command {
        Command::MakeAdmin { email } => {
            match UserRepository::grant_admin(pool, &email).await? {
                Some(user) => info!("Successfully made {} an admin", user.email),
                None => warn!("No user found with email {}", email),
            }
        }
    }
    Ok(())
}
