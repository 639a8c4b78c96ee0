//! Filter API endpoints

pub mod types;

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};

use crate::api::extractors::ValidatedJson;
use crate::api::types::ApiError;
use crate::data::PostgresService;
use crate::data::postgres::repositories::{category, filter};

use types::{
    CreateFilterRequest, CreateFilterResponse, DeleteFilterRequest, FilterDto, FilterResponse,
    FiltersResponse, GetFilterRequest, UpdateFilterRequest,
};

/// Shared state for Filter API endpoints
#[derive(Clone)]
pub struct FiltersApiState {
    pub database: Arc<PostgresService>,
}

/// Build Filter API routes
pub fn routes(database: Arc<PostgresService>) -> Router<()> {
    let state = FiltersApiState { database };

    Router::new()
        .route("/get_filters", get(get_filters))
        .route("/get_filter", get(get_filter))
        .route("/create_filter", post(create_filter))
        .route("/update_filter", put(update_filter))
        .route("/delete_filter", delete(delete_filter))
        .with_state(state)
}

/// List all filters with their options
#[utoipa::path(
    get,
    path = "/app/v1/filters/get_filters",
    tag = "filters",
    responses(
        (status = 200, description = "All filters", body = FiltersResponse)
    )
)]
pub async fn get_filters(
    State(state): State<FiltersApiState>,
) -> Result<Json<FiltersResponse>, ApiError> {
    let views = filter::list_filters(state.database.pool())
        .await
        .map_err(ApiError::from_postgres)?;

    Ok(Json(FiltersResponse {
        filters: views.into_iter().map(FilterDto::from).collect(),
    }))
}

/// Get one filter by id
#[utoipa::path(
    get,
    path = "/app/v1/filters/get_filter",
    tag = "filters",
    request_body = GetFilterRequest,
    responses(
        (status = 200, description = "Filter found", body = FilterResponse),
        (status = 404, description = "Filter not found")
    )
)]
pub async fn get_filter(
    State(state): State<FiltersApiState>,
    ValidatedJson(body): ValidatedJson<GetFilterRequest>,
) -> Result<Json<FilterResponse>, ApiError> {
    let view = filter::get_filter(state.database.pool(), body.filter_id)
        .await
        .map_err(ApiError::from_postgres)?
        .ok_or_else(|| ApiError::not_found("Filter not found"))?;

    Ok(Json(FilterResponse {
        filter: FilterDto::from(view),
    }))
}

/// Create a filter with its options
#[utoipa::path(
    post,
    path = "/app/v1/filters/create_filter",
    tag = "filters",
    request_body = CreateFilterRequest,
    responses(
        (status = 201, description = "Filter created", body = CreateFilterResponse),
        (status = 404, description = "Category not found")
    )
)]
pub async fn create_filter(
    State(state): State<FiltersApiState>,
    ValidatedJson(body): ValidatedJson<CreateFilterRequest>,
) -> Result<(StatusCode, Json<CreateFilterResponse>), ApiError> {
    let pool = state.database.pool();

    let category = category::get_category(pool, &body.category_name)
        .await
        .map_err(ApiError::from_postgres)?
        .ok_or_else(|| ApiError::not_found("Category not found"))?;

    let filter_id = filter::create_filter(
        pool,
        &body.filter_name,
        &body.filter_type,
        category.category_id,
        &body.filter_options,
    )
    .await
    .map_err(ApiError::from_postgres)?;

    tracing::info!(filter_id, name = %body.filter_name, "Filter created");
    Ok((StatusCode::CREATED, Json(CreateFilterResponse { filter_id })))
}

/// Replace a filter's fields and full option set
///
/// Options are replaced wholesale (delete-all, insert-all); there is no
/// option-level patch.
#[utoipa::path(
    put,
    path = "/app/v1/filters/update_filter",
    tag = "filters",
    request_body = UpdateFilterRequest,
    responses(
        (status = 200, description = "Updated filter with its new options", body = FilterResponse),
        (status = 400, description = "Missing or invalid fields"),
        (status = 404, description = "Filter or category not found")
    )
)]
pub async fn update_filter(
    State(state): State<FiltersApiState>,
    ValidatedJson(body): ValidatedJson<UpdateFilterRequest>,
) -> Result<Json<FilterResponse>, ApiError> {
    let pool = state.database.pool();

    let category = category::get_category(pool, &body.category_name)
        .await
        .map_err(ApiError::from_postgres)?
        .ok_or_else(|| ApiError::not_found("Category not found"))?;

    let view = filter::replace_filter(
        pool,
        body.filter_id,
        &body.filter_name,
        &body.filter_type,
        category.category_id,
        &body.options,
    )
    .await
    .map_err(ApiError::from_postgres)?
    .ok_or_else(|| ApiError::not_found("Filter not found"))?;

    Ok(Json(FilterResponse {
        filter: FilterDto::from(view),
    }))
}

/// Delete a filter
#[utoipa::path(
    delete,
    path = "/app/v1/filters/delete_filter",
    tag = "filters",
    request_body = DeleteFilterRequest,
    responses(
        (status = 204, description = "Filter deleted"),
        (status = 404, description = "Filter not found")
    )
)]
pub async fn delete_filter(
    State(state): State<FiltersApiState>,
    ValidatedJson(body): ValidatedJson<DeleteFilterRequest>,
) -> Result<StatusCode, ApiError> {
    let deleted = filter::delete_filter(state.database.pool(), body.filter_id)
        .await
        .map_err(ApiError::from_postgres)?;

    if !deleted {
        return Err(ApiError::not_found("Filter not found"));
    }
    tracing::info!(filter_id = body.filter_id, "Filter deleted");
    Ok(StatusCode::NO_CONTENT)
}
