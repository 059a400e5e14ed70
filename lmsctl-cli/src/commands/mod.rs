//! Entity command groups for the lmsctl CLI.
//!
//! Each entity module declares its clap flag structs and maps them onto the
//! generic verbs below; the verbs drive `lmsctl_core::engine` and own the
//! fixed output layout.

pub mod chapter;
pub mod course;
pub mod enrollment;
pub mod feature_store;
pub mod feature_store_audit;
pub mod transaction;
pub mod user;

// Re-export main dispatcher functions for flat access from main.rs
pub use chapter::run_chapter;
pub use course::run_course;
pub use enrollment::run_enrollment;
pub use feature_store::run_feature_store;
pub use feature_store_audit::run_feature_store_audit;
pub use transaction::run_transaction;
pub use user::run_user;

use anyhow::{Context, Result};
use inquire::Confirm;
use lmsctl_core::{engine, Table, Value};
use sqlx::PgPool;

pub(crate) async fn create(pool: &PgPool, table: &Table, values: Vec<Value>) -> Result<()> {
    let id = engine::create(pool, table, &values)
        .await
        .with_context(|| format!("creating {}", table.entity))?;
    println!("Created {} with ID: {}", table.entity, id);
    Ok(())
}

pub(crate) async fn list(pool: &PgPool, table: &Table) -> Result<()> {
    let records = engine::list(pool, table)
        .await
        .with_context(|| format!("listing {}", table.plural))?;
    if records.is_empty() {
        println!("No {} found.", table.plural);
        return Ok(());
    }
    for record in &records {
        println!("{}", engine::render_row(table, record));
    }
    Ok(())
}

pub(crate) async fn get(pool: &PgPool, table: &Table, id: i64) -> Result<()> {
    let record = engine::get(pool, table, id)
        .await
        .with_context(|| format!("retrieving {}", table.entity))?;
    match record {
        Some(record) => println!("{}", engine::render_row(table, &record)),
        None => println!("{} with ID {} not found.", table.title, id),
    }
    Ok(())
}

pub(crate) async fn update(
    pool: &PgPool,
    table: &Table,
    id: i64,
    changes: Vec<Option<Value>>,
) -> Result<()> {
    let updated = engine::update(pool, table, id, &changes)
        .await
        .with_context(|| format!("updating {}", table.entity))?;
    if updated {
        println!("Updated {} ID: {}", table.entity, id);
    } else {
        println!("{} with ID {} not found.", table.title, id);
    }
    Ok(())
}

pub(crate) async fn delete(pool: &PgPool, table: &Table, id: i64, yes: bool) -> Result<()> {
    if !yes {
        let confirmed = Confirm::new(&format!(
            "Are you sure you want to delete this {}?",
            table.entity
        ))
        .with_default(false)
        .prompt()
        .context("confirmation prompt failed")?;
        if !confirmed {
            println!("Aborted.");
            return Ok(());
        }
    }
    let deleted = engine::delete(pool, table, id)
        .await
        .with_context(|| format!("deleting {}", table.entity))?;
    if deleted {
        println!("Deleted {} ID: {}", table.entity, id);
    } else {
        println!("{} with ID {} not found.", table.title, id);
    }
    Ok(())
}
