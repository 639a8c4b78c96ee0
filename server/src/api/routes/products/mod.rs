//! Product API endpoints

pub mod types;

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};

use crate::api::extractors::ValidatedJson;
use crate::api::types::ApiError;
use crate::data::PostgresService;
use crate::data::postgres::repositories::product;

use types::{
    CreateProductRequest, CreateProductResponse, DeleteProductRequest, FilterProductsRequest,
    GetProductRequest, ProductDto, ProductResponse, ProductSummaryDto, ProductsResponse,
    SearchProductsRequest, UpdateProductRequest,
};

/// Shared state for Product API endpoints
#[derive(Clone)]
pub struct ProductsApiState {
    pub database: Arc<PostgresService>,
}

/// Build Product API routes
pub fn routes(database: Arc<PostgresService>) -> Router<()> {
    let state = ProductsApiState { database };

    Router::new()
        .route("/filter_products", get(filter_products))
        .route("/get_products", get(get_products))
        .route("/get_product", get(get_product))
        .route("/search_products", get(search_products))
        .route("/get_featured_products", get(get_featured_products))
        .route("/create_product", post(create_product))
        .route("/update_product", put(update_product))
        .route("/delete_product", delete(delete_product))
        .with_state(state)
}

/// Select products of a category narrowed by filter options
///
/// Option values the category does not recognize are skipped rather than
/// rejected, so a list of all-unknown options degrades to the full category
/// listing.
#[utoipa::path(
    get,
    path = "/app/v1/products/filter_products",
    tag = "products",
    request_body = FilterProductsRequest,
    responses(
        (status = 200, description = "Matching product summaries", body = [ProductSummaryDto])
    )
)]
pub async fn filter_products(
    State(state): State<ProductsApiState>,
    ValidatedJson(body): ValidatedJson<FilterProductsRequest>,
) -> Result<Json<Vec<ProductSummaryDto>>, ApiError> {
    let rows = product::filter_products(state.database.pool(), body.category, &body.filter_options)
        .await
        .map_err(ApiError::from_postgres)?;

    Ok(Json(rows.into_iter().map(ProductSummaryDto::from).collect()))
}

/// List all products
#[utoipa::path(
    get,
    path = "/app/v1/products/get_products",
    tag = "products",
    responses(
        (status = 200, description = "All products", body = ProductsResponse)
    )
)]
pub async fn get_products(
    State(state): State<ProductsApiState>,
) -> Result<Json<ProductsResponse>, ApiError> {
    let rows = product::list_products(state.database.pool())
        .await
        .map_err(ApiError::from_postgres)?;

    Ok(Json(ProductsResponse {
        products: rows.into_iter().map(ProductDto::from).collect(),
    }))
}

/// Get one product by id
#[utoipa::path(
    get,
    path = "/app/v1/products/get_product",
    tag = "products",
    request_body = GetProductRequest,
    responses(
        (status = 200, description = "Product found", body = ProductResponse),
        (status = 404, description = "Product not found")
    )
)]
pub async fn get_product(
    State(state): State<ProductsApiState>,
    ValidatedJson(body): ValidatedJson<GetProductRequest>,
) -> Result<Json<ProductResponse>, ApiError> {
    let row = product::get_product(state.database.pool(), body.product_id)
        .await
        .map_err(ApiError::from_postgres)?
        .ok_or_else(|| ApiError::not_found("Product not found"))?;

    Ok(Json(ProductResponse {
        product: ProductDto::from(row),
    }))
}

/// Search products by name or description
#[utoipa::path(
    get,
    path = "/app/v1/products/search_products",
    tag = "products",
    request_body = SearchProductsRequest,
    responses(
        (status = 200, description = "Matching products", body = ProductsResponse)
    )
)]
pub async fn search_products(
    State(state): State<ProductsApiState>,
    ValidatedJson(body): ValidatedJson<SearchProductsRequest>,
) -> Result<Json<ProductsResponse>, ApiError> {
    let rows = product::search_products(state.database.pool(), &body.query)
        .await
        .map_err(ApiError::from_postgres)?;

    Ok(Json(ProductsResponse {
        products: rows.into_iter().map(ProductDto::from).collect(),
    }))
}

/// List featured products
#[utoipa::path(
    get,
    path = "/app/v1/products/get_featured_products",
    tag = "products",
    responses(
        (status = 200, description = "Featured products", body = ProductsResponse)
    )
)]
pub async fn get_featured_products(
    State(state): State<ProductsApiState>,
) -> Result<Json<ProductsResponse>, ApiError> {
    let rows = product::featured_products(state.database.pool())
        .await
        .map_err(ApiError::from_postgres)?;

    Ok(Json(ProductsResponse {
        products: rows.into_iter().map(ProductDto::from).collect(),
    }))
}

/// Create a product
#[utoipa::path(
    post,
    path = "/app/v1/products/create_product",
    tag = "products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = CreateProductResponse),
        (status = 400, description = "Missing or invalid fields")
    )
)]
pub async fn create_product(
    State(state): State<ProductsApiState>,
    ValidatedJson(body): ValidatedJson<CreateProductRequest>,
) -> Result<(StatusCode, Json<CreateProductResponse>), ApiError> {
    let product_id =
        product::create_product(state.database.pool(), &body.fields(), &body.category_ids)
            .await
            .map_err(ApiError::from_postgres)?;

    tracing::info!(product_id, name = %body.name, "Product created");
    Ok((StatusCode::CREATED, Json(CreateProductResponse { product_id })))
}

/// Replace a product's fields
#[utoipa::path(
    put,
    path = "/app/v1/products/update_product",
    tag = "products",
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Product updated", body = CreateProductResponse),
        (status = 404, description = "Product not found")
    )
)]
pub async fn update_product(
    State(state): State<ProductsApiState>,
    ValidatedJson(body): ValidatedJson<UpdateProductRequest>,
) -> Result<Json<CreateProductResponse>, ApiError> {
    let updated = product::update_product(
        state.database.pool(),
        body.product_id,
        &body.product.fields(),
    )
    .await
    .map_err(ApiError::from_postgres)?;

    if !updated {
        return Err(ApiError::not_found("Product not found"));
    }
    Ok(Json(CreateProductResponse {
        product_id: body.product_id,
    }))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/app/v1/products/delete_product",
    tag = "products",
    request_body = DeleteProductRequest,
    responses(
        (status = 204, description = "Product deleted"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn delete_product(
    State(state): State<ProductsApiState>,
    ValidatedJson(body): ValidatedJson<DeleteProductRequest>,
) -> Result<StatusCode, ApiError> {
    let deleted = product::delete_product(state.database.pool(), body.product_id)
        .await
        .map_err(ApiError::from_postgres)?;

    if !deleted {
        return Err(ApiError::not_found("Product not found"));
    }
    tracing::info!(product_id = body.product_id, "Product deleted");
    Ok(StatusCode::NO_CONTENT)
}
