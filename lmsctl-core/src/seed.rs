//! Sample data for manual testing: two users and one course, inserted in a
//! single transaction.

use sqlx::{PgPool, Row};
use tracing::debug;

use crate::engine::insert_sql;
use crate::error::Result;
use crate::schema::{COURSE, USER};

pub async fn insert_sample_data(pool: &PgPool) -> Result<()> {
    let user_insert = insert_sql(&USER);
    let course_insert = insert_sql(&COURSE);

    let mut tx = pool.begin().await?;
    let alice: i64 = sqlx::query(&user_insert)
        .bind("Alice")
        .bind("alice@example.com")
        .bind("instructor")
        .fetch_one(&mut *tx)
        .await?
        .try_get(0)?;
    sqlx::query(&user_insert)
        .bind("Bob")
        .bind("bob@example.com")
        .bind("student")
        .fetch_one(&mut *tx)
        .await?;
    sqlx::query(&course_insert)
        .bind("Python 101")
        .bind(alice)
        .bind("Intro to Python")
        .bind(49.99_f64)
        .fetch_one(&mut *tx)
        .await?;
    tx.commit().await?;
    debug!("sample data committed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::list;
    use crate::MIGRATOR;
    use anyhow::Result;

    #[sqlx::test(migrator = "MIGRATOR")]
    #[ignore = "requires a postgres instance (DATABASE_URL)"]
    async fn seeds_two_users_and_one_course(pool: PgPool) -> Result<()> {
        insert_sample_data(&pool).await?;
        assert_eq!(list(&pool, &USER).await?.len(), 2);
        assert_eq!(list(&pool, &COURSE).await?.len(), 1);
        Ok(())
    }
}
