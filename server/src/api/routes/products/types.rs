//! Product API types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::core::constants::MAX_FILTER_OPTIONS;
use crate::data::types::{ProductFields, ProductRow, ProductSummaryRow};

/// Validator for decimal price strings (e.g. "19.99")
pub fn validate_price(price: &str) -> Result<(), ValidationError> {
    let mut parts = price.splitn(2, '.');
    let whole = parts.next().unwrap_or_default();
    let fraction = parts.next();

    let whole_ok = !whole.is_empty() && whole.chars().all(|c| c.is_ascii_digit());
    let fraction_ok = fraction.is_none_or(|f| {
        !f.is_empty() && f.len() <= 2 && f.chars().all(|c| c.is_ascii_digit())
    });

    if !whole_ok || !fraction_ok {
        return Err(ValidationError::new("price_format")
            .with_message("Price must be a non-negative decimal with at most 2 places".into()));
    }
    Ok(())
}

/// Validator for the selected option list
pub fn validate_filter_options(options: &Vec<String>) -> Result<(), ValidationError> {
    if options.len() > MAX_FILTER_OPTIONS {
        return Err(ValidationError::new("too_many_options").with_message(
            format!("At most {} filter options per request", MAX_FILTER_OPTIONS).into(),
        ));
    }
    Ok(())
}

/// Request body for the filter-matching product query
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct FilterProductsRequest {
    pub category: i64,
    #[serde(default)]
    #[validate(custom(function = "validate_filter_options"))]
    pub filter_options: Vec<String>,
}

/// Product summary returned by filter_products
#[derive(Debug, Serialize, ToSchema)]
pub struct ProductSummaryDto {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: String,
    pub featured: bool,
}

impl From<ProductSummaryRow> for ProductSummaryDto {
    fn from(row: ProductSummaryRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            description: row.description,
            price: row.price,
            featured: row.featured,
        }
    }
}

/// Product DTO for listing responses
#[derive(Debug, Serialize, ToSchema)]
pub struct ProductDto {
    pub product_id: i64,
    pub product_name: String,
    pub description: Option<String>,
    pub price: String,
    pub image_urls: Vec<String>,
}

impl From<ProductRow> for ProductDto {
    fn from(row: ProductRow) -> Self {
        Self {
            product_id: row.product_id,
            product_name: row.product_name,
            description: row.description,
            price: row.price,
            image_urls: row.image_urls,
        }
    }
}

/// Response wrapper for product listings
#[derive(Debug, Serialize, ToSchema)]
pub struct ProductsResponse {
    pub products: Vec<ProductDto>,
}

/// Response wrapper for a single product
#[derive(Debug, Serialize, ToSchema)]
pub struct ProductResponse {
    pub product: ProductDto,
}

/// Request body for get_product
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct GetProductRequest {
    pub product_id: i64,
}

/// Request body for search_products
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SearchProductsRequest {
    #[validate(length(min = 1, message = "Search query cannot be empty"))]
    pub query: String,
}

/// Request body for create_product
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, message = "Product name cannot be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "SKU cannot be empty"))]
    pub sku: String,
    pub description: Option<String>,
    #[validate(custom(function = "validate_price"))]
    pub price: String,
    pub discount_id: Option<i64>,
    pub capacity: Option<String>,
    pub units: Option<i32>,
    #[serde(default)]
    pub available_quantity: i32,
    #[serde(default)]
    pub featured: bool,
    #[serde(default = "default_active")]
    pub active: bool,
    pub vendor_id: Option<i64>,
    #[serde(default)]
    pub in_order: bool,
    #[serde(default)]
    pub image_urls: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub category_ids: Vec<i64>,
}

fn default_active() -> bool {
    true
}

impl CreateProductRequest {
    pub fn fields(&self) -> ProductFields {
        ProductFields {
            name: self.name.clone(),
            sku: self.sku.clone(),
            description: self.description.clone(),
            price: self.price.clone(),
            discount_id: self.discount_id,
            capacity: self.capacity.clone(),
            units: self.units,
            available_quantity: self.available_quantity,
            featured: self.featured,
            active: self.active,
            vendor_id: self.vendor_id,
            in_order: self.in_order,
            image_urls: self.image_urls.clone(),
            tags: self.tags.clone(),
        }
    }
}

/// Request body for update_product (full-row replace)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateProductRequest {
    pub product_id: i64,
    #[validate(nested)]
    #[serde(flatten)]
    pub product: CreateProductRequest,
}

/// Response body for create_product
#[derive(Debug, Serialize, ToSchema)]
pub struct CreateProductResponse {
    pub product_id: i64,
}

/// Request body for delete_product
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct DeleteProductRequest {
    pub product_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_validator_accepts_decimal_strings() {
        assert!(validate_price("0").is_ok());
        assert!(validate_price("19.99").is_ok());
        assert!(validate_price("100.5").is_ok());
    }

    #[test]
    fn price_validator_rejects_malformed_strings() {
        assert!(validate_price("").is_err());
        assert!(validate_price("-1").is_err());
        assert!(validate_price("1.999").is_err());
        assert!(validate_price("abc").is_err());
        assert!(validate_price("1.").is_err());
        assert!(validate_price(".5").is_err());
    }

    #[test]
    fn filter_options_limit() {
        let under: Vec<String> = (0..MAX_FILTER_OPTIONS).map(|i| i.to_string()).collect();
        assert!(validate_filter_options(&under).is_ok());

        let over: Vec<String> = (0..=MAX_FILTER_OPTIONS).map(|i| i.to_string()).collect();
        assert!(validate_filter_options(&over).is_err());
    }

    #[test]
    fn summary_dto_preserves_price_text() {
        let dto = ProductSummaryDto::from(ProductSummaryRow {
            id: 1,
            name: "Widget".to_string(),
            description: None,
            price: "12.30".to_string(),
            featured: false,
        });
        assert_eq!(dto.price, "12.30");
    }
}
