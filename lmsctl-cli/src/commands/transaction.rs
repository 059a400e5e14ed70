use anyhow::Result;
use clap::{Args, Subcommand};
use lmsctl_core::schema::TRANSACTION;
use lmsctl_core::Value;
use sqlx::PgPool;

#[derive(Args, Debug)]
pub struct TransactionArgs {
    #[command(subcommand)]
    command: TransactionCommand,
}

#[derive(Subcommand, Debug)]
enum TransactionCommand {
    /// Create a new transaction
    Create {
        /// User ID
        #[arg(long)]
        user_id: i64,
        /// Course ID
        #[arg(long)]
        course_id: i64,
        /// Transaction amount
        #[arg(long)]
        amount: f64,
    },
    /// List all transactions
    List,
    /// Get a transaction by ID
    Get {
        /// Transaction ID to retrieve
        #[arg(long)]
        id: i64,
    },
    /// Update a transaction's amount
    Update {
        /// Transaction ID to update
        #[arg(long)]
        id: i64,
        /// New transaction amount
        #[arg(long)]
        amount: Option<f64>,
    },
    /// Delete a transaction by ID
    Delete {
        /// Transaction ID to delete
        #[arg(long)]
        id: i64,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

pub async fn run_transaction(pool: &PgPool, args: TransactionArgs) -> Result<()> {
    match args.command {
        TransactionCommand::Create {
            user_id,
            course_id,
            amount,
        } => {
            super::create(
                pool,
                &TRANSACTION,
                vec![
                    Value::Int(user_id),
                    Value::Int(course_id),
                    Value::Money(amount),
                ],
            )
            .await
        }
        TransactionCommand::List => super::list(pool, &TRANSACTION).await,
        TransactionCommand::Get { id } => super::get(pool, &TRANSACTION, id).await,
        TransactionCommand::Update { id, amount } => {
            super::update(pool, &TRANSACTION, id, vec![amount.map(Value::Money)]).await
        }
        TransactionCommand::Delete { id, yes } => {
            super::delete(pool, &TRANSACTION, id, yes).await
        }
    }
}
