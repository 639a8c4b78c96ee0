//! Category API endpoints

pub mod types;

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};

use crate::api::extractors::ValidatedJson;
use crate::api::types::ApiError;
use crate::data::PostgresService;
use crate::data::postgres::repositories::category;

use types::{
    CategoryDto, CategoryNameRequest, CreateCategoryRequest, CreateCategoryResponse,
    UpdateCategoryRequest,
};

/// Shared state for Category API endpoints
#[derive(Clone)]
pub struct CategoriesApiState {
    pub database: Arc<PostgresService>,
}

/// Build Category API routes
pub fn routes(database: Arc<PostgresService>) -> Router<()> {
    let state = CategoriesApiState { database };

    Router::new()
        .route("/get_categories", get(get_categories))
        .route("/get_category", get(get_category))
        .route("/create_category", post(create_category))
        .route("/update_category", put(update_category))
        .route("/delete_category", delete(delete_category))
        .with_state(state)
}

/// List categories (soft-deleted excluded)
#[utoipa::path(
    get,
    path = "/app/v1/categories/get_categories",
    tag = "categories",
    responses(
        (status = 200, description = "All live categories", body = [CategoryDto])
    )
)]
pub async fn get_categories(
    State(state): State<CategoriesApiState>,
) -> Result<Json<Vec<CategoryDto>>, ApiError> {
    let rows = category::list_categories(state.database.pool())
        .await
        .map_err(ApiError::from_postgres)?;

    Ok(Json(rows.into_iter().map(CategoryDto::from).collect()))
}

/// Get one category by name
#[utoipa::path(
    get,
    path = "/app/v1/categories/get_category",
    tag = "categories",
    request_body = CategoryNameRequest,
    responses(
        (status = 200, description = "Category found", body = CategoryDto),
        (status = 404, description = "Category not found")
    )
)]
pub async fn get_category(
    State(state): State<CategoriesApiState>,
    ValidatedJson(body): ValidatedJson<CategoryNameRequest>,
) -> Result<Json<CategoryDto>, ApiError> {
    let row = category::get_category(state.database.pool(), &body.category_name)
        .await
        .map_err(ApiError::from_postgres)?
        .ok_or_else(|| ApiError::not_found("Category not found"))?;

    Ok(Json(CategoryDto::from(row)))
}

/// Create a category
#[utoipa::path(
    post,
    path = "/app/v1/categories/create_category",
    tag = "categories",
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Category created", body = CreateCategoryResponse),
        (status = 400, description = "Missing fields or duplicate name")
    )
)]
pub async fn create_category(
    State(state): State<CategoriesApiState>,
    ValidatedJson(body): ValidatedJson<CreateCategoryRequest>,
) -> Result<(StatusCode, Json<CreateCategoryResponse>), ApiError> {
    let result = category::create_category(
        state.database.pool(),
        &body.name,
        body.description.as_deref(),
        body.parent_category_id,
    )
    .await;

    let category_id = match result {
        Ok(id) => id,
        Err(e) if e.is_unique_violation() => {
            return Err(ApiError::conflict("Category name already exists"));
        }
        Err(e) => return Err(ApiError::from_postgres(e)),
    };

    tracing::info!(category_id, name = %body.name, "Category created");
    Ok((
        StatusCode::CREATED,
        Json(CreateCategoryResponse { category_id }),
    ))
}

/// Update a category's description and parent
#[utoipa::path(
    put,
    path = "/app/v1/categories/update_category",
    tag = "categories",
    request_body = UpdateCategoryRequest,
    responses(
        (status = 200, description = "Category updated", body = CategoryDto),
        (status = 404, description = "Category not found")
    )
)]
pub async fn update_category(
    State(state): State<CategoriesApiState>,
    ValidatedJson(body): ValidatedJson<UpdateCategoryRequest>,
) -> Result<Json<CategoryDto>, ApiError> {
    let pool = state.database.pool();

    let updated = category::update_category(
        pool,
        &body.name,
        body.description.as_deref(),
        body.parent_category_id,
    )
    .await
    .map_err(ApiError::from_postgres)?;

    if !updated {
        return Err(ApiError::not_found("Category not found"));
    }

    let row = category::get_category(pool, &body.name)
        .await
        .map_err(ApiError::from_postgres)?
        .ok_or_else(|| ApiError::not_found("Category not found"))?;

    Ok(Json(CategoryDto::from(row)))
}

/// Soft-delete a category
#[utoipa::path(
    delete,
    path = "/app/v1/categories/delete_category",
    tag = "categories",
    request_body = CategoryNameRequest,
    responses(
        (status = 204, description = "Category deleted"),
        (status = 404, description = "Category not found")
    )
)]
pub async fn delete_category(
    State(state): State<CategoriesApiState>,
    ValidatedJson(body): ValidatedJson<CategoryNameRequest>,
) -> Result<StatusCode, ApiError> {
    let deleted = category::delete_category(state.database.pool(), &body.category_name)
        .await
        .map_err(ApiError::from_postgres)?;

    if !deleted {
        return Err(ApiError::not_found("Category not found"));
    }
    tracing::info!(name = %body.category_name, "Category deleted");
    Ok(StatusCode::NO_CONTENT)
}
