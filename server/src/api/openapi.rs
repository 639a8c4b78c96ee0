//! OpenAPI specification and Swagger UI

use axum::http::header;
use axum::response::{Html, IntoResponse, Json};
use utoipa::OpenApi;

use crate::api::routes::{categories, customers, filters, health, products};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Storefront API",
        version = env!("CARGO_PKG_VERSION"),
        description = "E-commerce catalog API"
    ),
    tags(
        (name = "health", description = "Health check endpoint"),
        (name = "products", description = "Product catalog and filter-matching queries"),
        (name = "filters", description = "Filter and option management"),
        (name = "categories", description = "Category management"),
        (name = "customers", description = "Customer accounts")
    ),
    paths(
        // Health
        health::health,
        // Products
        products::filter_products,
        products::get_products,
        products::get_product,
        products::search_products,
        products::get_featured_products,
        products::create_product,
        products::update_product,
        products::delete_product,
        // Filters
        filters::get_filters,
        filters::get_filter,
        filters::create_filter,
        filters::update_filter,
        filters::delete_filter,
        // Categories
        categories::get_categories,
        categories::get_category,
        categories::create_category,
        categories::update_category,
        categories::delete_category,
        // Customers
        customers::get_customers,
        customers::get_customer,
        customers::create_customer,
        customers::update_customer,
        customers::delete_customer,
    ),
    components(schemas(
        // Health
        health::HealthResponse,
        // Products
        products::types::FilterProductsRequest,
        products::types::ProductSummaryDto,
        products::types::ProductDto,
        products::types::ProductsResponse,
        products::types::ProductResponse,
        products::types::GetProductRequest,
        products::types::SearchProductsRequest,
        products::types::CreateProductRequest,
        products::types::UpdateProductRequest,
        products::types::CreateProductResponse,
        products::types::DeleteProductRequest,
        // Filters
        filters::types::FilterOptionDto,
        filters::types::FilterDto,
        filters::types::FiltersResponse,
        filters::types::FilterResponse,
        filters::types::GetFilterRequest,
        filters::types::CreateFilterRequest,
        filters::types::CreateFilterResponse,
        filters::types::UpdateFilterRequest,
        filters::types::DeleteFilterRequest,
        // Categories
        categories::types::CategoryDto,
        categories::types::CategoryNameRequest,
        categories::types::CreateCategoryRequest,
        categories::types::CreateCategoryResponse,
        categories::types::UpdateCategoryRequest,
        // Customers
        customers::types::CustomerDto,
        customers::types::CustomerIdRequest,
        customers::types::CreateCustomerRequest,
        customers::types::CreateCustomerResponse,
        customers::types::UpdateCustomerRequest,
    ))
)]
pub struct ApiDoc;

/// Serve OpenAPI JSON specification
pub async fn openapi_json() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/json")],
        Json(ApiDoc::openapi()),
    )
}

/// Serve Swagger UI from CDN
pub async fn swagger_ui_html() -> Html<&'static str> {
    Html(SWAGGER_UI_HTML)
}

const SWAGGER_UI_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Storefront API Documentation</title>
    <link rel="stylesheet" type="text/css" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css">
    <style>
        html { box-sizing: border-box; overflow-y: scroll; }
        *, *:before, *:after { box-sizing: inherit; }
        body { margin: 0; background: #fafafa; }
    </style>
</head>
<body>
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
    <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-standalone-preset.js"></script>
    <script>
        window.onload = () => {
            window.ui = SwaggerUIBundle({
                url: "/api/openapi.json",
                dom_id: '#swagger-ui',
                presets: [
                    SwaggerUIBundle.presets.apis,
                    SwaggerUIStandalonePreset
                ],
                layout: "StandaloneLayout",
                deepLinking: true
            });
        };
    </script>
</body>
</html>"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_document_lists_all_catalog_paths() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        assert!(paths.contains_key("/app/v1/products/filter_products"));
        assert!(paths.contains_key("/app/v1/filters/update_filter"));
        assert!(paths.contains_key("/app/v1/categories/create_category"));
        assert!(paths.contains_key("/app/v1/customers/create_customer"));
        assert!(paths.contains_key("/api/v1/health"));
    }
}
