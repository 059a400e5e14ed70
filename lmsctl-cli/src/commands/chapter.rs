use anyhow::Result;
use clap::{Args, Subcommand};
use lmsctl_core::schema::CHAPTER;
use lmsctl_core::Value;
use sqlx::PgPool;

#[derive(Args, Debug)]
pub struct ChapterArgs {
    #[command(subcommand)]
    command: ChapterCommand,
}

#[derive(Subcommand, Debug)]
enum ChapterCommand {
    /// Create a new chapter
    Create {
        /// Course ID
        #[arg(long)]
        course_id: i64,
        /// Chapter title
        #[arg(long)]
        title: String,
        /// Video URL
        #[arg(long)]
        video_url: String,
        /// Chapter content
        #[arg(long)]
        content: String,
    },
    /// List all chapters
    List,
    /// Get a chapter by ID
    Get {
        /// Chapter ID to retrieve
        #[arg(long)]
        id: i64,
    },
    /// Update a chapter's details
    Update {
        /// Chapter ID to update
        #[arg(long)]
        id: i64,
        /// New course ID
        #[arg(long)]
        course_id: Option<i64>,
        /// New title
        #[arg(long)]
        title: Option<String>,
        /// New video URL
        #[arg(long)]
        video_url: Option<String>,
        /// New content
        #[arg(long)]
        content: Option<String>,
    },
    /// Delete a chapter by ID
    Delete {
        /// Chapter ID to delete
        #[arg(long)]
        id: i64,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

pub async fn run_chapter(pool: &PgPool, args: ChapterArgs) -> Result<()> {
    match args.command {
        ChapterCommand::Create {
            course_id,
            title,
            video_url,
            content,
        } => {
            super::create(
                pool,
                &CHAPTER,
                vec![
                    Value::Int(course_id),
                    Value::Text(title),
                    Value::Text(video_url),
                    Value::Text(content),
                ],
            )
            .await
        }
        ChapterCommand::List => super::list(pool, &CHAPTER).await,
        ChapterCommand::Get { id } => super::get(pool, &CHAPTER, id).await,
        ChapterCommand::Update {
            id,
            course_id,
            title,
            video_url,
            content,
        } => {
            super::update(
                pool,
                &CHAPTER,
                id,
                vec![
                    course_id.map(Value::Int),
                    title.map(Value::Text),
                    video_url.map(Value::Text),
                    content.map(Value::Text),
                ],
            )
            .await
        }
        ChapterCommand::Delete { id, yes } => super::delete(pool, &CHAPTER, id, yes).await,
    }
}
