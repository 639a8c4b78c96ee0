//! Customer API endpoints

pub mod types;

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};

use crate::api::extractors::ValidatedJson;
use crate::api::types::ApiError;
use crate::data::PostgresService;
use crate::data::postgres::repositories::customer;
use crate::utils::crypto;

use types::{
    CreateCustomerRequest, CreateCustomerResponse, CustomerDto, CustomerIdRequest,
    UpdateCustomerRequest,
};

/// Shared state for Customer API endpoints
#[derive(Clone)]
pub struct CustomersApiState {
    pub database: Arc<PostgresService>,
}

/// Build Customer API routes
pub fn routes(database: Arc<PostgresService>) -> Router<()> {
    let state = CustomersApiState { database };

    Router::new()
        .route("/get_customers", get(get_customers))
        .route("/get_customer", get(get_customer))
        .route("/create_customer", post(create_customer))
        .route("/update_customer", put(update_customer))
        .route("/delete_customer", delete(delete_customer))
        .with_state(state)
}

/// Hash a password off the async runtime
async fn hash_password(password: String) -> Result<String, ApiError> {
    tokio::task::spawn_blocking(move || crypto::hash_password(&password))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Password hashing task failed");
            ApiError::internal("Internal server error")
        })?
        .map_err(|e| {
            tracing::error!(error = %e, "Password hashing failed");
            ApiError::internal("Internal server error")
        })
}

/// List customers (soft-deleted excluded)
#[utoipa::path(
    get,
    path = "/app/v1/customers/get_customers",
    tag = "customers",
    responses(
        (status = 200, description = "All live customers", body = [CustomerDto])
    )
)]
pub async fn get_customers(
    State(state): State<CustomersApiState>,
) -> Result<Json<Vec<CustomerDto>>, ApiError> {
    let rows = customer::list_customers(state.database.pool())
        .await
        .map_err(ApiError::from_postgres)?;

    Ok(Json(rows.into_iter().map(CustomerDto::from).collect()))
}

/// Get one customer by id
#[utoipa::path(
    get,
    path = "/app/v1/customers/get_customer",
    tag = "customers",
    request_body = CustomerIdRequest,
    responses(
        (status = 200, description = "Customer found", body = CustomerDto),
        (status = 404, description = "Customer not found")
    )
)]
pub async fn get_customer(
    State(state): State<CustomersApiState>,
    ValidatedJson(body): ValidatedJson<CustomerIdRequest>,
) -> Result<Json<CustomerDto>, ApiError> {
    let row = customer::get_customer(state.database.pool(), body.customer_id)
        .await
        .map_err(ApiError::from_postgres)?
        .ok_or_else(|| ApiError::not_found("Customer not found"))?;

    Ok(Json(CustomerDto::from(row)))
}

/// Register a customer
#[utoipa::path(
    post,
    path = "/app/v1/customers/create_customer",
    tag = "customers",
    request_body = CreateCustomerRequest,
    responses(
        (status = 201, description = "Customer created", body = CreateCustomerResponse),
        (status = 400, description = "Missing fields or email already registered")
    )
)]
pub async fn create_customer(
    State(state): State<CustomersApiState>,
    ValidatedJson(body): ValidatedJson<CreateCustomerRequest>,
) -> Result<(StatusCode, Json<CreateCustomerResponse>), ApiError> {
    let password_hash = hash_password(body.password).await?;

    let result = customer::create_customer(
        state.database.pool(),
        &body.first_name,
        &body.last_name,
        &body.email,
        &password_hash,
        body.phone_number.as_deref(),
        body.address.as_deref(),
    )
    .await;

    let customer_id = match result {
        Ok(id) => id,
        Err(e) if e.is_unique_violation() => {
            return Err(ApiError::conflict("Email already registered"));
        }
        Err(e) => return Err(ApiError::from_postgres(e)),
    };

    tracing::info!(customer_id, "Customer created");
    Ok((
        StatusCode::CREATED,
        Json(CreateCustomerResponse { customer_id }),
    ))
}

/// Update a customer's profile
#[utoipa::path(
    put,
    path = "/app/v1/customers/update_customer",
    tag = "customers",
    request_body = UpdateCustomerRequest,
    responses(
        (status = 200, description = "Customer updated", body = CustomerDto),
        (status = 400, description = "Email taken by another customer"),
        (status = 404, description = "Customer not found")
    )
)]
pub async fn update_customer(
    State(state): State<CustomersApiState>,
    ValidatedJson(body): ValidatedJson<UpdateCustomerRequest>,
) -> Result<Json<CustomerDto>, ApiError> {
    let pool = state.database.pool();

    let password_hash = match body.password {
        Some(password) => Some(hash_password(password).await?),
        None => None,
    };

    let result = customer::update_customer(
        pool,
        body.customer_id,
        &body.first_name,
        &body.last_name,
        &body.email,
        password_hash.as_deref(),
        body.phone_number.as_deref(),
        body.address.as_deref(),
    )
    .await;

    match result {
        Ok(true) => {}
        Ok(false) => return Err(ApiError::not_found("Customer not found")),
        Err(e) if e.is_unique_violation() => {
            return Err(ApiError::conflict("Email already taken by another customer"));
        }
        Err(e) => return Err(ApiError::from_postgres(e)),
    }

    let row = customer::get_customer(pool, body.customer_id)
        .await
        .map_err(ApiError::from_postgres)?
        .ok_or_else(|| ApiError::not_found("Customer not found"))?;

    Ok(Json(CustomerDto::from(row)))
}

/// Soft-delete a customer
#[utoipa::path(
    delete,
    path = "/app/v1/customers/delete_customer",
    tag = "customers",
    request_body = CustomerIdRequest,
    responses(
        (status = 200, description = "Customer deleted", body = CreateCustomerResponse),
        (status = 404, description = "Customer not found")
    )
)]
pub async fn delete_customer(
    State(state): State<CustomersApiState>,
    ValidatedJson(body): ValidatedJson<CustomerIdRequest>,
) -> Result<Json<CreateCustomerResponse>, ApiError> {
    let deleted = customer::delete_customer(state.database.pool(), body.customer_id)
        .await
        .map_err(ApiError::from_postgres)?;

    if !deleted {
        return Err(ApiError::not_found("Customer not found"));
    }
    tracing::info!(customer_id = body.customer_id, "Customer deleted");
    Ok(Json(CreateCustomerResponse {
        customer_id: body.customer_id,
    }))
}
