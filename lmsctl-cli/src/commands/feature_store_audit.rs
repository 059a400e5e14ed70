use anyhow::Result;
use clap::{Args, Subcommand};
use lmsctl_core::schema::FEATURE_STORE_AUDIT;
use lmsctl_core::Value;
use sqlx::PgPool;

#[derive(Args, Debug)]
pub struct FeatureStoreAuditArgs {
    #[command(subcommand)]
    command: FeatureStoreAuditCommand,
}

// Audit records are immutable once written: no update verb.
#[derive(Subcommand, Debug)]
enum FeatureStoreAuditCommand {
    /// Create a new feature_store_audit entry
    Create {
        /// Feature_Store ID
        #[arg(long)]
        feature_store_id: i64,
        /// Description of the change
        #[arg(long)]
        change_description: String,
    },
    /// List all feature_store_audit entries
    List,
    /// Get a feature_store_audit entry by ID
    Get {
        /// Feature_Store_Audit ID to retrieve
        #[arg(long)]
        id: i64,
    },
    /// Delete a feature_store_audit entry by ID
    Delete {
        /// Feature_Store_Audit ID to delete
        #[arg(long)]
        id: i64,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

pub async fn run_feature_store_audit(pool: &PgPool, args: FeatureStoreAuditArgs) -> Result<()> {
    match args.command {
        FeatureStoreAuditCommand::Create {
            feature_store_id,
            change_description,
        } => {
            super::create(
                pool,
                &FEATURE_STORE_AUDIT,
                vec![
                    Value::Int(feature_store_id),
                    Value::Text(change_description),
                ],
            )
            .await
        }
        FeatureStoreAuditCommand::List => super::list(pool, &FEATURE_STORE_AUDIT).await,
        FeatureStoreAuditCommand::Get { id } => super::get(pool, &FEATURE_STORE_AUDIT, id).await,
        FeatureStoreAuditCommand::Delete { id, yes } => {
            super::delete(pool, &FEATURE_STORE_AUDIT, id, yes).await
        }
    }
}
