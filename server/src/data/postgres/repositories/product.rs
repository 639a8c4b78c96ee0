//! Product repository for PostgreSQL operations

use sqlx::PgPool;

use crate::data::postgres::PostgresError;
use crate::data::postgres::filter_query::FilteredProductQuery;
use crate::data::types::{ProductFields, ProductRow, ProductSummaryRow, ResolvedOption};

/// Columns for the product listing view
const LIST_COLUMNS: &str = "id, name, description, price::text, image_urls";

fn product_row(
    (product_id, product_name, description, price, image_urls): (
        i64,
        String,
        Option<String>,
        String,
        Vec<String>,
    ),
) -> ProductRow {
    ProductRow {
        product_id,
        product_name,
        description,
        price,
        image_urls,
    }
}

/// Resolve a raw option value to its id and owning filter, constrained to
/// filters selectable in `category_id`. Unknown values resolve to `None`.
pub async fn resolve_option(
    pool: &PgPool,
    option_value: &str,
    category_id: i64,
) -> Result<Option<ResolvedOption>, PostgresError> {
    let row = sqlx::query_as::<_, (i64, i64)>(
        "SELECT fo.id, fo.filter_id FROM filter_options fo \
         INNER JOIN filter_categories fc ON fo.filter_id = fc.filter_id \
         WHERE fo.option_value = $1 AND fc.category_id = $2",
    )
    .bind(option_value)
    .bind(category_id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|(option_id, filter_id)| ResolvedOption {
        option_id,
        filter_id,
    }))
}

/// Select products of a category narrowed by the recognized filter options
///
/// Option values are resolved in input order; values with no match for the
/// category are silently skipped and contribute no constraint. The assembled
/// statement executes exactly once.
pub async fn filter_products(
    pool: &PgPool,
    category_id: i64,
    option_values: &[String],
) -> Result<Vec<ProductSummaryRow>, PostgresError> {
    let mut query = FilteredProductQuery::for_category(category_id);

    for value in option_values {
        match resolve_option(pool, value, category_id).await? {
            Some(resolved) => query.and_option(resolved),
            None => {
                tracing::debug!(option = %value, category_id, "Skipping unrecognized filter option")
            }
        }
    }

    let mut fetch =
        sqlx::query_as::<_, (i64, String, Option<String>, String, bool)>(query.sql());
    for &param in query.params() {
        fetch = fetch.bind(param);
    }
    let rows = fetch.fetch_all(pool).await?;

    tracing::debug!(
        category_id,
        requested = option_values.len(),
        applied = query.constraint_count(),
        matched = rows.len(),
        "Filtered products"
    );

    Ok(rows
        .into_iter()
        .map(
            |(id, name, description, price, featured)| ProductSummaryRow {
                id,
                name,
                description,
                price,
                featured,
            },
        )
        .collect())
}

/// List all products
pub async fn list_products(pool: &PgPool) -> Result<Vec<ProductRow>, PostgresError> {
    let rows = sqlx::query_as(&format!(
        "SELECT {} FROM products ORDER BY id",
        LIST_COLUMNS
    ))
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(product_row).collect())
}

/// Get one product by id
pub async fn get_product(pool: &PgPool, id: i64) -> Result<Option<ProductRow>, PostgresError> {
    let row = sqlx::query_as(&format!(
        "SELECT {} FROM products WHERE id = $1",
        LIST_COLUMNS
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(product_row))
}

/// Case-insensitive substring search over name and description
pub async fn search_products(
    pool: &PgPool,
    query: &str,
) -> Result<Vec<ProductRow>, PostgresError> {
    let pattern = format!("%{}%", query);
    let rows = sqlx::query_as(&format!(
        "SELECT {} FROM products WHERE name ILIKE $1 OR description ILIKE $1 ORDER BY id",
        LIST_COLUMNS
    ))
    .bind(&pattern)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(product_row).collect())
}

/// List featured products
pub async fn featured_products(pool: &PgPool) -> Result<Vec<ProductRow>, PostgresError> {
    let rows = sqlx::query_as(&format!(
        "SELECT {} FROM products WHERE featured = TRUE ORDER BY id",
        LIST_COLUMNS
    ))
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(product_row).collect())
}

/// Create a product and its category associations in one transaction
pub async fn create_product(
    pool: &PgPool,
    fields: &ProductFields,
    category_ids: &[i64],
) -> Result<i64, PostgresError> {
    let mut tx = pool.begin().await?;

    let (id,): (i64,) = sqlx::query_as(
        "INSERT INTO products (name, sku, description, price, discount_id, capacity, units, \
         available_quantity, featured, active, vendor_id, in_order, image_urls, tags) \
         VALUES ($1, $2, $3, $4::numeric, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14) \
         RETURNING id",
    )
    .bind(&fields.name)
    .bind(&fields.sku)
    .bind(&fields.description)
    .bind(&fields.price)
    .bind(fields.discount_id)
    .bind(&fields.capacity)
    .bind(fields.units)
    .bind(fields.available_quantity)
    .bind(fields.featured)
    .bind(fields.active)
    .bind(fields.vendor_id)
    .bind(fields.in_order)
    .bind(&fields.image_urls)
    .bind(&fields.tags)
    .fetch_one(&mut *tx)
    .await?;

    if !category_ids.is_empty() {
        sqlx::query(
            "INSERT INTO product_categories (product_id, category_id) \
             SELECT $1, unnest($2::bigint[])",
        )
        .bind(id)
        .bind(category_ids)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    Ok(id)
}

/// Full-row update; returns false when the product does not exist
pub async fn update_product(
    pool: &PgPool,
    id: i64,
    fields: &ProductFields,
) -> Result<bool, PostgresError> {
    let result = sqlx::query(
        "UPDATE products SET name = $1, sku = $2, description = $3, price = $4::numeric, \
         discount_id = $5, capacity = $6, units = $7, available_quantity = $8, featured = $9, \
         active = $10, vendor_id = $11, in_order = $12, image_urls = $13, tags = $14, \
         updated_at = NOW() WHERE id = $15",
    )
    .bind(&fields.name)
    .bind(&fields.sku)
    .bind(&fields.description)
    .bind(&fields.price)
    .bind(fields.discount_id)
    .bind(&fields.capacity)
    .bind(fields.units)
    .bind(fields.available_quantity)
    .bind(fields.featured)
    .bind(fields.active)
    .bind(fields.vendor_id)
    .bind(fields.in_order)
    .bind(&fields.image_urls)
    .bind(&fields.tags)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Hard delete; category associations cascade
pub async fn delete_product(pool: &PgPool, id: i64) -> Result<bool, PostgresError> {
    let result = sqlx::query("DELETE FROM products WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
