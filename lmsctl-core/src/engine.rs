//! Generic table-driven CRUD engine.
//!
//! One implementation of the five operations, parameterized by a
//! [`Table`] descriptor. SQL text is built from the descriptor with `$n`
//! placeholders and bound through [`Value`], so the statement builders stay
//! pure and unit-testable.
//!
//! Transaction discipline: every write runs inside an explicit
//! `begin()`/`commit()` pair on a short-lived connection; the sqlx
//! transaction guard rolls back on every early-error path.

use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::Query;
use sqlx::{PgPool, Postgres, Row};
use tracing::debug;

use crate::error::Result;
use crate::schema::{ColumnKind, Table};
use crate::value::Value;

/// One decoded row: the primary key plus the non-key columns in
/// `Table::columns` order.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub id: i64,
    pub values: Vec<Value>,
}

pub fn insert_sql(table: &Table) -> String {
    let columns: Vec<&str> = table.columns.iter().map(|c| c.name).collect();
    let placeholders: Vec<String> = (1..=columns.len()).map(|n| format!("${n}")).collect();
    format!(
        "insert into \"{}\" ({}) values ({}) returning {}",
        table.name,
        columns.join(", "),
        placeholders.join(", "),
        table.id_column
    )
}

pub fn select_all_sql(table: &Table) -> String {
    let columns: Vec<&str> = table.columns.iter().map(|c| c.name).collect();
    format!(
        "select {}, {} from \"{}\" order by {}",
        table.id_column,
        columns.join(", "),
        table.name,
        table.id_column
    )
}

pub fn select_by_id_sql(table: &Table) -> String {
    let columns: Vec<&str> = table.columns.iter().map(|c| c.name).collect();
    format!(
        "select {}, {} from \"{}\" where {} = $1",
        table.id_column,
        columns.join(", "),
        table.name,
        table.id_column
    )
}

/// Full rewrite of the mutable column set; the merge happens in memory, never
/// as a partial SQL update.
pub fn update_sql(table: &Table) -> String {
    let assignments: Vec<String> = table
        .mutable_columns()
        .enumerate()
        .map(|(n, (_, column))| format!("{} = ${}", column.name, n + 1))
        .collect();
    format!(
        "update \"{}\" set {} where {} = ${}",
        table.name,
        assignments.join(", "),
        table.id_column,
        assignments.len() + 1
    )
}

pub fn delete_sql(table: &Table) -> String {
    format!(
        "delete from \"{}\" where {} = $1",
        table.name, table.id_column
    )
}

fn bind_value<'q>(
    query: Query<'q, Postgres, PgArguments>,
    value: &'q Value,
) -> Query<'q, Postgres, PgArguments> {
    match value {
        Value::Int(v) => query.bind(v),
        Value::Text(v) => query.bind(v.as_str()),
        Value::Money(v) => query.bind(v),
    }
}

fn decode_record(table: &Table, row: &PgRow) -> Result<Record> {
    let id = row.try_get(0)?;
    let mut values = Vec::with_capacity(table.columns.len());
    for (idx, column) in table.columns.iter().enumerate() {
        let value = match column.kind {
            ColumnKind::Int => Value::Int(row.try_get(idx + 1)?),
            ColumnKind::Text => Value::Text(row.try_get(idx + 1)?),
            ColumnKind::Money => Value::Money(row.try_get(idx + 1)?),
        };
        values.push(value);
    }
    Ok(Record { id, values })
}

/// Merge a partial update with the stored row: omitted fields keep the
/// stored value. `changes` aligns with `table.mutable_columns()` order.
fn merge_row(table: &Table, current: &Record, changes: &[Option<Value>]) -> Vec<Value> {
    table
        .mutable_columns()
        .zip(changes)
        .map(|((idx, _), change)| {
            change
                .clone()
                .unwrap_or_else(|| current.values[idx].clone())
        })
        .collect()
}

/// Insert a row with all columns supplied; returns the generated id.
pub async fn create(pool: &PgPool, table: &Table, values: &[Value]) -> Result<i64> {
    debug_assert_eq!(values.len(), table.columns.len());
    let sql = insert_sql(table);
    let mut tx = pool.begin().await?;
    let mut query = sqlx::query(&sql);
    for value in values {
        query = bind_value(query, value);
    }
    let row = query.fetch_one(&mut *tx).await?;
    let id: i64 = row.try_get(0)?;
    tx.commit().await?;
    debug!(table = table.name, id, "inserted row");
    Ok(id)
}

/// Unfiltered select of all rows, ordered by id.
pub async fn list(pool: &PgPool, table: &Table) -> Result<Vec<Record>> {
    let sql = select_all_sql(table);
    let rows = sqlx::query(&sql).fetch_all(pool).await?;
    rows.iter().map(|row| decode_record(table, row)).collect()
}

/// Select by primary key. `None` is the expected not-found outcome.
pub async fn get(pool: &PgPool, table: &Table, id: i64) -> Result<Option<Record>> {
    let sql = select_by_id_sql(table);
    let row = sqlx::query(&sql).bind(id).fetch_optional(pool).await?;
    row.map(|row| decode_record(table, &row)).transpose()
}

/// Read-merge-write under one transaction. Returns `false` without writing
/// when the id does not exist.
pub async fn update(
    pool: &PgPool,
    table: &Table,
    id: i64,
    changes: &[Option<Value>],
) -> Result<bool> {
    debug_assert_eq!(changes.len(), table.mutable_columns().count());
    let mut tx = pool.begin().await?;
    let select = select_by_id_sql(table);
    let Some(row) = sqlx::query(&select).bind(id).fetch_optional(&mut *tx).await? else {
        return Ok(false);
    };
    let current = decode_record(table, &row)?;
    let merged = merge_row(table, &current, changes);
    let sql = update_sql(table);
    let mut query = sqlx::query(&sql);
    for value in &merged {
        query = bind_value(query, value);
    }
    query.bind(id).execute(&mut *tx).await?;
    tx.commit().await?;
    debug!(table = table.name, id, "updated row");
    Ok(true)
}

/// Delete by primary key. Commits only when a row was actually removed;
/// zero affected rows reports `false`, not an error.
pub async fn delete(pool: &PgPool, table: &Table, id: i64) -> Result<bool> {
    let sql = delete_sql(table);
    let mut tx = pool.begin().await?;
    let result = sqlx::query(&sql).bind(id).execute(&mut *tx).await?;
    if result.rows_affected() == 0 {
        return Ok(false);
    }
    tx.commit().await?;
    debug!(table = table.name, id, "deleted row");
    Ok(true)
}

/// Fixed textual layout: `ID: 1, Name: Alice, Email: ..., Role: instructor`.
pub fn render_row(table: &Table, record: &Record) -> String {
    let mut line = format!("ID: {}", record.id);
    for (column, value) in table.columns.iter().zip(&record.values) {
        line.push_str(&format!(", {}: {}", column.label, value));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{IntegrityKind, StoreError};
    use crate::schema::{CHAPTER, COURSE, ENROLLMENT, FEATURE_STORE_AUDIT, TRANSACTION, USER};
    use crate::MIGRATOR;
    use anyhow::Result;

    fn text(s: &str) -> Value {
        Value::Text(s.to_owned())
    }

    #[test]
    fn insert_sql_lists_all_columns() {
        assert_eq!(
            insert_sql(&USER),
            "insert into \"User\" (name, email, role) values ($1, $2, $3) returning user_id"
        );
        assert_eq!(
            insert_sql(&FEATURE_STORE_AUDIT),
            "insert into \"Feature_Store_Audit\" (feature_store_id, change_description) \
             values ($1, $2) returning audit_id"
        );
    }

    #[test]
    fn select_sql_orders_by_id() {
        assert_eq!(
            select_all_sql(&ENROLLMENT),
            "select enrollment_id, user_id, course_id from \"Enrollment\" order by enrollment_id"
        );
        assert_eq!(
            select_by_id_sql(&USER),
            "select user_id, name, email, role from \"User\" where user_id = $1"
        );
    }

    #[test]
    fn update_sql_covers_only_mutable_columns() {
        assert_eq!(
            update_sql(&COURSE),
            "update \"Course\" set title = $1, description = $2, price = $3 where course_id = $4"
        );
        assert_eq!(
            update_sql(&TRANSACTION),
            "update \"Transaction\" set amount = $1 where transaction_id = $2"
        );
    }

    #[test]
    fn delete_sql_targets_the_id_column() {
        assert_eq!(
            delete_sql(&CHAPTER),
            "delete from \"Chapter\" where chapter_id = $1"
        );
    }

    #[test]
    fn merge_keeps_stored_values_for_omitted_fields() {
        let current = Record {
            id: 1,
            values: vec![text("Alice"), text("alice@example.com"), text("student")],
        };
        let merged = merge_row(&USER, &current, &[None, None, Some(text("instructor"))]);
        assert_eq!(
            merged,
            vec![text("Alice"), text("alice@example.com"), text("instructor")]
        );
    }

    #[test]
    fn merge_skips_immutable_columns() {
        let current = Record {
            id: 9,
            values: vec![
                text("Python 101"),
                Value::Int(3),
                text("Intro to Python"),
                Value::Money(49.99),
            ],
        };
        let merged = merge_row(&COURSE, &current, &[Some(text("Python 102")), None, None]);
        // instructor_id is absent: only title, description, price are written.
        assert_eq!(
            merged,
            vec![text("Python 102"), text("Intro to Python"), Value::Money(49.99)]
        );
    }

    #[test]
    fn render_row_uses_fixed_layout() {
        let record = Record {
            id: 2,
            values: vec![
                text("Python 101"),
                Value::Int(1),
                text("Intro to Python"),
                Value::Money(49.99),
            ],
        };
        assert_eq!(
            render_row(&COURSE, &record),
            "ID: 2, Title: Python 101, Instructor ID: 1, Description: Intro to Python, Price: $49.99"
        );
    }

    #[sqlx::test(migrator = "MIGRATOR")]
    #[ignore = "requires a postgres instance (DATABASE_URL)"]
    async fn create_then_get_roundtrip(pool: PgPool) -> Result<()> {
        let alice = create(
            &pool,
            &USER,
            &[text("Alice"), text("alice@example.com"), text("instructor")],
        )
        .await?;
        let record = get(&pool, &USER, alice).await?.expect("row should exist");
        assert_eq!(record.id, alice);
        assert_eq!(
            record.values,
            vec![text("Alice"), text("alice@example.com"), text("instructor")]
        );

        let bob = create(
            &pool,
            &USER,
            &[text("Bob"), text("bob@example.com"), text("student")],
        )
        .await?;
        assert!(bob > alice, "ids must be strictly increasing");
        Ok(())
    }

    #[sqlx::test(migrator = "MIGRATOR")]
    #[ignore = "requires a postgres instance (DATABASE_URL)"]
    async fn foreign_key_violation_inserts_nothing(pool: PgPool) -> Result<()> {
        let err = create(
            &pool,
            &COURSE,
            &[
                text("Python 101"),
                Value::Int(999),
                text("Intro to Python"),
                Value::Money(49.99),
            ],
        )
        .await
        .unwrap_err();
        assert!(matches!(
            err,
            StoreError::Integrity {
                kind: IntegrityKind::ForeignKey,
                ..
            }
        ));
        assert!(list(&pool, &COURSE).await?.is_empty());
        Ok(())
    }

    #[sqlx::test(migrator = "MIGRATOR")]
    #[ignore = "requires a postgres instance (DATABASE_URL)"]
    async fn duplicate_email_is_a_unique_violation(pool: PgPool) -> Result<()> {
        create(
            &pool,
            &USER,
            &[text("Alice"), text("alice@example.com"), text("instructor")],
        )
        .await?;
        let err = create(
            &pool,
            &USER,
            &[text("Alicia"), text("alice@example.com"), text("student")],
        )
        .await
        .unwrap_err();
        assert!(matches!(
            err,
            StoreError::Integrity {
                kind: IntegrityKind::Unique,
                ..
            }
        ));
        Ok(())
    }

    #[sqlx::test(migrator = "MIGRATOR")]
    #[ignore = "requires a postgres instance (DATABASE_URL)"]
    async fn update_with_no_fields_is_a_content_noop(pool: PgPool) -> Result<()> {
        let id = create(
            &pool,
            &USER,
            &[text("Alice"), text("alice@example.com"), text("instructor")],
        )
        .await?;
        let before = get(&pool, &USER, id).await?;
        assert!(update(&pool, &USER, id, &[None, None, None]).await?);
        let after = get(&pool, &USER, id).await?;
        assert_eq!(before, after);
        Ok(())
    }

    #[sqlx::test(migrator = "MIGRATOR")]
    #[ignore = "requires a postgres instance (DATABASE_URL)"]
    async fn update_missing_id_writes_nothing(pool: PgPool) -> Result<()> {
        assert!(!update(&pool, &USER, 4242, &[Some(text("Zed")), None, None]).await?);
        assert!(list(&pool, &USER).await?.is_empty());
        Ok(())
    }

    #[sqlx::test(migrator = "MIGRATOR")]
    #[ignore = "requires a postgres instance (DATABASE_URL)"]
    async fn delete_is_idempotent_under_repetition(pool: PgPool) -> Result<()> {
        let alice = create(
            &pool,
            &USER,
            &[text("Alice"), text("alice@example.com"), text("instructor")],
        )
        .await?;
        let bob = create(
            &pool,
            &USER,
            &[text("Bob"), text("bob@example.com"), text("student")],
        )
        .await?;

        assert!(delete(&pool, &USER, alice).await?);
        assert!(get(&pool, &USER, alice).await?.is_none());
        // Exactly one row removed; the other survives.
        assert!(get(&pool, &USER, bob).await?.is_some());

        assert!(!delete(&pool, &USER, alice).await?);
        assert!(!delete(&pool, &USER, 4242).await?);
        Ok(())
    }

    #[sqlx::test(migrator = "MIGRATOR")]
    #[ignore = "requires a postgres instance (DATABASE_URL)"]
    async fn end_to_end_enrollment_scenario(pool: PgPool) -> Result<()> {
        let alice = create(
            &pool,
            &USER,
            &[text("Alice"), text("alice@example.com"), text("instructor")],
        )
        .await?;
        let course = create(
            &pool,
            &COURSE,
            &[
                text("Python 101"),
                Value::Int(alice),
                text("Intro to Python"),
                Value::Money(49.99),
            ],
        )
        .await?;

        let record = get(&pool, &COURSE, course).await?.expect("course exists");
        assert_eq!(
            render_row(&COURSE, &record),
            format!(
                "ID: {course}, Title: Python 101, Instructor ID: {alice}, \
                 Description: Intro to Python, Price: $49.99"
            )
        );

        let bob = create(
            &pool,
            &USER,
            &[text("Bob"), text("bob@example.com"), text("student")],
        )
        .await?;
        create(&pool, &ENROLLMENT, &[Value::Int(bob), Value::Int(course)]).await?;

        let enrollments = list(&pool, &ENROLLMENT).await?;
        let matching: Vec<_> = enrollments
            .iter()
            .filter(|r| r.values == vec![Value::Int(bob), Value::Int(course)])
            .collect();
        assert_eq!(matching.len(), 1);
        Ok(())
    }
}
