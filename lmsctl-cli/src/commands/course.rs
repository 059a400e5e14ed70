use anyhow::Result;
use clap::{Args, Subcommand};
use lmsctl_core::schema::COURSE;
use lmsctl_core::Value;
use sqlx::PgPool;

#[derive(Args, Debug)]
pub struct CourseArgs {
    #[command(subcommand)]
    command: CourseCommand,
}

#[derive(Subcommand, Debug)]
enum CourseCommand {
    /// Create a new course
    Create {
        /// Course title
        #[arg(long)]
        title: String,
        /// Instructor's user ID
        #[arg(long)]
        instructor_id: i64,
        /// Course description
        #[arg(long)]
        description: String,
        /// Course price
        #[arg(long)]
        price: f64,
    },
    /// List all courses
    List,
    /// Get a course by ID
    Get {
        /// Course ID to retrieve
        #[arg(long)]
        id: i64,
    },
    /// Update a course's details (the instructor cannot be changed)
    Update {
        /// Course ID to update
        #[arg(long)]
        id: i64,
        /// New title
        #[arg(long)]
        title: Option<String>,
        /// New description
        #[arg(long)]
        description: Option<String>,
        /// New price
        #[arg(long)]
        price: Option<f64>,
    },
    /// Delete a course by ID
    Delete {
        /// Course ID to delete
        #[arg(long)]
        id: i64,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

pub async fn run_course(pool: &PgPool, args: CourseArgs) -> Result<()> {
    match args.command {
        CourseCommand::Create {
            title,
            instructor_id,
            description,
            price,
        } => {
            super::create(
                pool,
                &COURSE,
                vec![
                    Value::Text(title),
                    Value::Int(instructor_id),
                    Value::Text(description),
                    Value::Money(price),
                ],
            )
            .await
        }
        CourseCommand::List => super::list(pool, &COURSE).await,
        CourseCommand::Get { id } => super::get(pool, &COURSE, id).await,
        CourseCommand::Update {
            id,
            title,
            description,
            price,
        } => {
            super::update(
                pool,
                &COURSE,
                id,
                vec![
                    title.map(Value::Text),
                    description.map(Value::Text),
                    price.map(Value::Money),
                ],
            )
            .await
        }
        CourseCommand::Delete { id, yes } => super::delete(pool, &COURSE, id, yes).await,
    }
}
