use anyhow::Result;
use clap::{Args, Subcommand};
use lmsctl_core::schema::FEATURE_STORE;
use lmsctl_core::Value;
use sqlx::PgPool;

#[derive(Args, Debug)]
pub struct FeatureStoreArgs {
    #[command(subcommand)]
    command: FeatureStoreCommand,
}

#[derive(Subcommand, Debug)]
enum FeatureStoreCommand {
    /// Create a new feature_store entry
    Create {
        /// Course ID
        #[arg(long)]
        course_id: i64,
        /// Feature metadata (JSON string)
        #[arg(long)]
        metadata: String,
        /// Feature version
        #[arg(long)]
        version: i64,
    },
    /// List all feature_store entries
    List,
    /// Get a feature_store entry by ID
    Get {
        /// Feature_Store ID to retrieve
        #[arg(long)]
        id: i64,
    },
    /// Update a feature_store entry's details
    Update {
        /// Feature_Store ID to update
        #[arg(long)]
        id: i64,
        /// New metadata (JSON string)
        #[arg(long)]
        metadata: Option<String>,
        /// New version
        #[arg(long)]
        version: Option<i64>,
    },
    /// Delete a feature_store entry by ID
    Delete {
        /// Feature_Store ID to delete
        #[arg(long)]
        id: i64,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

pub async fn run_feature_store(pool: &PgPool, args: FeatureStoreArgs) -> Result<()> {
    match args.command {
        FeatureStoreCommand::Create {
            course_id,
            metadata,
            version,
        } => {
            super::create(
                pool,
                &FEATURE_STORE,
                vec![
                    Value::Int(course_id),
                    Value::Text(metadata),
                    Value::Int(version),
                ],
            )
            .await
        }
        FeatureStoreCommand::List => super::list(pool, &FEATURE_STORE).await,
        FeatureStoreCommand::Get { id } => super::get(pool, &FEATURE_STORE, id).await,
        FeatureStoreCommand::Update {
            id,
            metadata,
            version,
        } => {
            super::update(
                pool,
                &FEATURE_STORE,
                id,
                vec![metadata.map(Value::Text), version.map(Value::Int)],
            )
            .await
        }
        FeatureStoreCommand::Delete { id, yes } => {
            super::delete(pool, &FEATURE_STORE, id, yes).await
        }
    }
}
