use anyhow::Result;
use clap::{Args, Subcommand};
use lmsctl_core::schema::ENROLLMENT;
use lmsctl_core::Value;
use sqlx::PgPool;

#[derive(Args, Debug)]
pub struct EnrollmentArgs {
    #[command(subcommand)]
    command: EnrollmentCommand,
}

#[derive(Subcommand, Debug)]
enum EnrollmentCommand {
    /// Create a new enrollment
    Create {
        /// User ID
        #[arg(long)]
        user_id: i64,
        /// Course ID
        #[arg(long)]
        course_id: i64,
    },
    /// List all enrollments
    List,
    /// Get an enrollment by ID
    Get {
        /// Enrollment ID to retrieve
        #[arg(long)]
        id: i64,
    },
    /// Update an enrollment's details
    Update {
        /// Enrollment ID to update
        #[arg(long)]
        id: i64,
        /// New user ID
        #[arg(long)]
        user_id: Option<i64>,
        /// New course ID
        #[arg(long)]
        course_id: Option<i64>,
    },
    /// Delete an enrollment by ID
    Delete {
        /// Enrollment ID to delete
        #[arg(long)]
        id: i64,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

pub async fn run_enrollment(pool: &PgPool, args: EnrollmentArgs) -> Result<()> {
    match args.command {
        EnrollmentCommand::Create { user_id, course_id } => {
            super::create(
                pool,
                &ENROLLMENT,
                vec![Value::Int(user_id), Value::Int(course_id)],
            )
            .await
        }
        EnrollmentCommand::List => super::list(pool, &ENROLLMENT).await,
        EnrollmentCommand::Get { id } => super::get(pool, &ENROLLMENT, id).await,
        EnrollmentCommand::Update {
            id,
            user_id,
            course_id,
        } => {
            super::update(
                pool,
                &ENROLLMENT,
                id,
                vec![user_id.map(Value::Int), course_id.map(Value::Int)],
            )
            .await
        }
        EnrollmentCommand::Delete { id, yes } => super::delete(pool, &ENROLLMENT, id, yes).await,
    }
}
