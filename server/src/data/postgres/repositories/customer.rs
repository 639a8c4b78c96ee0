//! Customer repository for PostgreSQL operations

use sqlx::PgPool;

use crate::data::postgres::PostgresError;
use crate::data::types::CustomerRow;

const COLUMNS: &str =
    "id, first_name, last_name, email, phone_number, address, points_balance, points_redeemed";

type Row = (
    i64,
    String,
    String,
    String,
    Option<String>,
    Option<String>,
    i64,
    i64,
);

fn customer_row(
    (customer_id, first_name, last_name, email, phone_number, address, points_balance, points_redeemed): Row,
) -> CustomerRow {
    CustomerRow {
        customer_id,
        first_name,
        last_name,
        email,
        phone_number,
        address,
        points_balance,
        points_redeemed,
    }
}

/// List customers that have not been soft-deleted
pub async fn list_customers(pool: &PgPool) -> Result<Vec<CustomerRow>, PostgresError> {
    let rows = sqlx::query_as::<_, Row>(&format!(
        "SELECT {} FROM customers WHERE deleted_at IS NULL ORDER BY id",
        COLUMNS
    ))
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(customer_row).collect())
}

/// Get one customer by id
pub async fn get_customer(pool: &PgPool, id: i64) -> Result<Option<CustomerRow>, PostgresError> {
    let row = sqlx::query_as::<_, Row>(&format!(
        "SELECT {} FROM customers WHERE id = $1 AND deleted_at IS NULL",
        COLUMNS
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(customer_row))
}

/// Create a customer with an already-hashed password
///
/// A duplicate email surfaces as a unique violation on the underlying error;
/// callers distinguish it with [`PostgresError::is_unique_violation`].
pub async fn create_customer(
    pool: &PgPool,
    first_name: &str,
    last_name: &str,
    email: &str,
    password_hash: &str,
    phone_number: Option<&str>,
    address: Option<&str>,
) -> Result<i64, PostgresError> {
    let (id,): (i64,) = sqlx::query_as(
        "INSERT INTO customers (first_name, last_name, email, password_hash, phone_number, address) \
         VALUES ($1, $2, $3, $4, $5, $6) RETURNING id",
    )
    .bind(first_name)
    .bind(last_name)
    .bind(email)
    .bind(password_hash)
    .bind(phone_number)
    .bind(address)
    .fetch_one(pool)
    .await?;

    Ok(id)
}

/// Update a customer's profile; a `None` password hash keeps the stored one
pub async fn update_customer(
    pool: &PgPool,
    id: i64,
    first_name: &str,
    last_name: &str,
    email: &str,
    password_hash: Option<&str>,
    phone_number: Option<&str>,
    address: Option<&str>,
) -> Result<bool, PostgresError> {
    let result = sqlx::query(
        "UPDATE customers SET first_name = $1, last_name = $2, email = $3, \
         password_hash = COALESCE($4, password_hash), phone_number = $5, address = $6, \
         updated_at = NOW() WHERE id = $7 AND deleted_at IS NULL",
    )
    .bind(first_name)
    .bind(last_name)
    .bind(email)
    .bind(password_hash)
    .bind(phone_number)
    .bind(address)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Soft-delete a customer by id
pub async fn delete_customer(pool: &PgPool, id: i64) -> Result<bool, PostgresError> {
    let result = sqlx::query(
        "UPDATE customers SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
