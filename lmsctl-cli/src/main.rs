//! lmsctl - administrative CRUD tool for the LMS database
//!
//! One command group per managed table (User, Course, Chapter, Enrollment,
//! Transaction, Feature_Store, Feature_Store_Audit), each with
//! create/list/get/update/delete verbs, plus `migrate` and
//! `init-sample-data` utilities.

use std::process::ExitCode;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use lmsctl_core::{DbConfig, MIGRATOR};
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser, Debug)]
#[command(
    name = "lmsctl",
    version,
    about = "Administrative CRUD tool for the LMS database"
)]
struct Cli {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", global = true, hide_env_values = true)]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Commands for managing the User table
    User(commands::user::UserArgs),
    /// Commands for managing the Course table
    Course(commands::course::CourseArgs),
    /// Commands for managing the Chapter table
    Chapter(commands::chapter::ChapterArgs),
    /// Commands for managing the Enrollment table
    Enrollment(commands::enrollment::EnrollmentArgs),
    /// Commands for managing the Transaction table
    Transaction(commands::transaction::TransactionArgs),
    /// Commands for managing the Feature_Store table
    FeatureStore(commands::feature_store::FeatureStoreArgs),
    /// Commands for managing the Feature_Store_Audit table
    FeatureStoreAudit(commands::feature_store_audit::FeatureStoreAuditArgs),
    /// Apply the bundled schema migrations
    Migrate,
    /// Insert sample data into the database for testing
    InitSampleData,
}

fn init_tracing() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    init_tracing().ok();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        // Expected not-found outcomes print their message and exit 0; only
        // store failures land here.
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let url = cli.database_url.context("DATABASE_URL not set")?;
    let config = DbConfig::new(url);
    let pool = config.connect().await?;
    debug!("connected to the LMS database");

    match cli.command {
        Commands::User(args) => commands::run_user(&pool, args).await?,
        Commands::Course(args) => commands::run_course(&pool, args).await?,
        Commands::Chapter(args) => commands::run_chapter(&pool, args).await?,
        Commands::Enrollment(args) => commands::run_enrollment(&pool, args).await?,
        Commands::Transaction(args) => commands::run_transaction(&pool, args).await?,
        Commands::FeatureStore(args) => commands::run_feature_store(&pool, args).await?,
        Commands::FeatureStoreAudit(args) => {
            commands::run_feature_store_audit(&pool, args).await?
        }
        Commands::Migrate => {
            MIGRATOR
                .run(&pool)
                .await
                .context("applying migrations")?;
            println!("Migrations applied.");
        }
        Commands::InitSampleData => {
            lmsctl_core::seed::insert_sample_data(&pool)
                .await
                .context("inserting sample data")?;
            println!("Sample data inserted: 2 users, 1 course.");
        }
    }

    // The pool (and its single connection) closes when dropped, on every
    // exit path.
    Ok(())
}
