//! Category repository for PostgreSQL operations

use sqlx::PgPool;

use crate::data::postgres::PostgresError;
use crate::data::types::CategoryRow;

const COLUMNS: &str = "id, name, description, parent_category_id";

type Row = (i64, String, Option<String>, Option<i64>);

fn category_row((category_id, name, description, parent_category_id): Row) -> CategoryRow {
    CategoryRow {
        category_id,
        name,
        description,
        parent_category_id,
    }
}

/// List categories that have not been soft-deleted
pub async fn list_categories(pool: &PgPool) -> Result<Vec<CategoryRow>, PostgresError> {
    let rows = sqlx::query_as::<_, Row>(&format!(
        "SELECT {} FROM categories WHERE deleted_at IS NULL ORDER BY id",
        COLUMNS
    ))
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(category_row).collect())
}

/// Get one category by name
pub async fn get_category(
    pool: &PgPool,
    name: &str,
) -> Result<Option<CategoryRow>, PostgresError> {
    let row = sqlx::query_as::<_, Row>(&format!(
        "SELECT {} FROM categories WHERE name = $1 AND deleted_at IS NULL",
        COLUMNS
    ))
    .bind(name)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(category_row))
}

/// Create a category; name uniqueness is enforced by the schema
pub async fn create_category(
    pool: &PgPool,
    name: &str,
    description: Option<&str>,
    parent_category_id: Option<i64>,
) -> Result<i64, PostgresError> {
    let (id,): (i64,) = sqlx::query_as(
        "INSERT INTO categories (name, description, parent_category_id) \
         VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(name)
    .bind(description)
    .bind(parent_category_id)
    .fetch_one(pool)
    .await?;

    Ok(id)
}

/// Update a category's description and parent, addressed by name
pub async fn update_category(
    pool: &PgPool,
    name: &str,
    description: Option<&str>,
    parent_category_id: Option<i64>,
) -> Result<bool, PostgresError> {
    let result = sqlx::query(
        "UPDATE categories SET description = $1, parent_category_id = $2, updated_at = NOW() \
         WHERE name = $3 AND deleted_at IS NULL",
    )
    .bind(description)
    .bind(parent_category_id)
    .bind(name)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Soft-delete a category by name
pub async fn delete_category(pool: &PgPool, name: &str) -> Result<bool, PostgresError> {
    let result = sqlx::query(
        "UPDATE categories SET deleted_at = NOW() WHERE name = $1 AND deleted_at IS NULL",
    )
    .bind(name)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
