use anyhow::Result;
use clap::{Args, Subcommand};
use lmsctl_core::schema::USER;
use lmsctl_core::Value;
use sqlx::PgPool;

#[derive(Args, Debug)]
pub struct UserArgs {
    #[command(subcommand)]
    command: UserCommand,
}

#[derive(Subcommand, Debug)]
enum UserCommand {
    /// Create a new user
    Create {
        /// User's name
        #[arg(long)]
        name: String,
        /// User's email
        #[arg(long)]
        email: String,
        /// User's role (e.g., student, instructor)
        #[arg(long)]
        role: String,
    },
    /// List all users
    List,
    /// Get a user by ID
    Get {
        /// User ID to retrieve
        #[arg(long)]
        id: i64,
    },
    /// Update a user's details
    Update {
        /// User ID to update
        #[arg(long)]
        id: i64,
        /// New name
        #[arg(long)]
        name: Option<String>,
        /// New email
        #[arg(long)]
        email: Option<String>,
        /// New role
        #[arg(long)]
        role: Option<String>,
    },
    /// Delete a user by ID
    Delete {
        /// User ID to delete
        #[arg(long)]
        id: i64,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

pub async fn run_user(pool: &PgPool, args: UserArgs) -> Result<()> {
    match args.command {
        UserCommand::Create { name, email, role } => {
            super::create(
                pool,
                &USER,
                vec![Value::Text(name), Value::Text(email), Value::Text(role)],
            )
            .await
        }
        UserCommand::List => super::list(pool, &USER).await,
        UserCommand::Get { id } => super::get(pool, &USER, id).await,
        UserCommand::Update {
            id,
            name,
            email,
            role,
        } => {
            super::update(
                pool,
                &USER,
                id,
                vec![
                    name.map(Value::Text),
                    email.map(Value::Text),
                    role.map(Value::Text),
                ],
            )
            .await
        }
        UserCommand::Delete { id, yes } => super::delete(pool, &USER, id, yes).await,
    }
}
