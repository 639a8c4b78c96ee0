//! Filter repository for PostgreSQL operations

use std::collections::HashMap;

use sqlx::PgPool;

use crate::data::postgres::PostgresError;
use crate::data::types::{FilterOptionRow, FilterView};

type FilterHead = (i64, String, i64, String, String);

fn filter_view(
    (filter_id, filter_name, category_id, category_name, filter_type): FilterHead,
    options: Vec<FilterOptionRow>,
) -> FilterView {
    FilterView {
        filter_id,
        filter_name,
        category_id,
        category_name,
        filter_type,
        options,
    }
}

/// List every filter with its category and options
///
/// Two statements total: one for the filter heads, one for all options,
/// grouped in memory by filter id.
pub async fn list_filters(pool: &PgPool) -> Result<Vec<FilterView>, PostgresError> {
    let heads = sqlx::query_as::<_, FilterHead>(
        "SELECT f.id, f.name, c.id, c.name, f.filter_type FROM filters f \
         INNER JOIN filter_categories fc ON f.id = fc.filter_id \
         INNER JOIN categories c ON fc.category_id = c.id \
         ORDER BY f.id",
    )
    .fetch_all(pool)
    .await?;

    let rows = sqlx::query_as::<_, (i64, i64, String)>(
        "SELECT filter_id, id, option_value FROM filter_options ORDER BY id",
    )
    .fetch_all(pool)
    .await?;

    let mut by_filter: HashMap<i64, Vec<FilterOptionRow>> = HashMap::new();
    for (filter_id, option_id, option_value) in rows {
        by_filter.entry(filter_id).or_default().push(FilterOptionRow {
            option_id,
            option_value,
        });
    }

    Ok(heads
        .into_iter()
        .map(|head| {
            let options = by_filter.remove(&head.0).unwrap_or_default();
            filter_view(head, options)
        })
        .collect())
}

/// Get one filter by id with its options
pub async fn get_filter(pool: &PgPool, id: i64) -> Result<Option<FilterView>, PostgresError> {
    let head = sqlx::query_as::<_, FilterHead>(
        "SELECT f.id, f.name, c.id, c.name, f.filter_type FROM filters f \
         INNER JOIN filter_categories fc ON f.id = fc.filter_id \
         INNER JOIN categories c ON fc.category_id = c.id \
         WHERE f.id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    let Some(head) = head else {
        return Ok(None);
    };

    let options = filter_options(pool, id).await?;
    Ok(Some(filter_view(head, options)))
}

async fn filter_options(
    pool: &PgPool,
    filter_id: i64,
) -> Result<Vec<FilterOptionRow>, PostgresError> {
    let rows = sqlx::query_as::<_, (i64, String)>(
        "SELECT id, option_value FROM filter_options WHERE filter_id = $1 ORDER BY id",
    )
    .bind(filter_id)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|(option_id, option_value)| FilterOptionRow {
            option_id,
            option_value,
        })
        .collect())
}

/// Create a filter with its category link and option values in one transaction
pub async fn create_filter(
    pool: &PgPool,
    name: &str,
    filter_type: &str,
    category_id: i64,
    options: &[String],
) -> Result<i64, PostgresError> {
    let mut tx = pool.begin().await?;

    let (id,): (i64,) = sqlx::query_as(
        "INSERT INTO filters (name, filter_type) VALUES ($1, $2) RETURNING id",
    )
    .bind(name)
    .bind(filter_type)
    .fetch_one(&mut *tx)
    .await?;

    sqlx::query("INSERT INTO filter_categories (filter_id, category_id) VALUES ($1, $2)")
        .bind(id)
        .bind(category_id)
        .execute(&mut *tx)
        .await?;

    if !options.is_empty() {
        sqlx::query(
            "INSERT INTO filter_options (filter_id, option_value) \
             SELECT $1, unnest($2::text[])",
        )
        .bind(id)
        .bind(options)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    Ok(id)
}

/// Replace a filter's name, type, category link, and full option set
///
/// Runs in a single transaction holding a row lock on the filter, so a
/// concurrent replace cannot interleave its deletes and inserts with ours,
/// and no reader observes the filter with zero options. Returns the merged
/// view re-read after commit, or `None` when the filter does not exist.
pub async fn replace_filter(
    pool: &PgPool,
    id: i64,
    name: &str,
    filter_type: &str,
    category_id: i64,
    options: &[String],
) -> Result<Option<FilterView>, PostgresError> {
    let mut tx = pool.begin().await?;

    let locked = sqlx::query_scalar::<_, i64>("SELECT id FROM filters WHERE id = $1 FOR UPDATE")
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;
    if locked.is_none() {
        return Ok(None);
    }

    sqlx::query("UPDATE filters SET name = $1, filter_type = $2, updated_at = NOW() WHERE id = $3")
        .bind(name)
        .bind(filter_type)
        .bind(id)
        .execute(&mut *tx)
        .await?;

    sqlx::query("DELETE FROM filter_categories WHERE filter_id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    sqlx::query("INSERT INTO filter_categories (filter_id, category_id) VALUES ($1, $2)")
        .bind(id)
        .bind(category_id)
        .execute(&mut *tx)
        .await?;

    sqlx::query("DELETE FROM filter_options WHERE filter_id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    if !options.is_empty() {
        sqlx::query(
            "INSERT INTO filter_options (filter_id, option_value) \
             SELECT $1, unnest($2::text[])",
        )
        .bind(id)
        .bind(options)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    get_filter(pool, id).await
}

/// Delete a filter; options and category links cascade
pub async fn delete_filter(pool: &PgPool, id: i64) -> Result<bool, PostgresError> {
    let result = sqlx::query("DELETE FROM filters WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
