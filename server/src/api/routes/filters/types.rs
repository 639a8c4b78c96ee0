//! Filter API types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::data::types::{FilterOptionRow, FilterView};

/// Validator for the filter type discriminator
pub fn validate_filter_type(filter_type: &str) -> Result<(), ValidationError> {
    if filter_type != "single" && filter_type != "multi" {
        return Err(ValidationError::new("filter_type")
            .with_message("Filter type must be 'single' or 'multi'".into()));
    }
    Ok(())
}

/// One selectable option in API responses
#[derive(Debug, Serialize, ToSchema)]
pub struct FilterOptionDto {
    pub option_id: i64,
    pub option_value: String,
}

impl From<FilterOptionRow> for FilterOptionDto {
    fn from(row: FilterOptionRow) -> Self {
        Self {
            option_id: row.option_id,
            option_value: row.option_value,
        }
    }
}

/// Merged filter view for API responses
#[derive(Debug, Serialize, ToSchema)]
pub struct FilterDto {
    pub filter_id: i64,
    pub filter_name: String,
    pub category_id: i64,
    pub category_name: String,
    pub filter_type: String,
    pub options: Vec<FilterOptionDto>,
}

impl From<FilterView> for FilterDto {
    fn from(view: FilterView) -> Self {
        Self {
            filter_id: view.filter_id,
            filter_name: view.filter_name,
            category_id: view.category_id,
            category_name: view.category_name,
            filter_type: view.filter_type,
            options: view.options.into_iter().map(FilterOptionDto::from).collect(),
        }
    }
}

/// Response wrapper for filter listings
#[derive(Debug, Serialize, ToSchema)]
pub struct FiltersResponse {
    pub filters: Vec<FilterDto>,
}

/// Response wrapper for a single filter
#[derive(Debug, Serialize, ToSchema)]
pub struct FilterResponse {
    pub filter: FilterDto,
}

/// Request body for get_filter
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct GetFilterRequest {
    pub filter_id: i64,
}

/// Request body for create_filter
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateFilterRequest {
    #[validate(length(min = 1, message = "Filter name cannot be empty"))]
    pub filter_name: String,
    #[validate(length(min = 1, message = "Category name cannot be empty"))]
    pub category_name: String,
    #[validate(custom(function = "validate_filter_type"))]
    pub filter_type: String,
    #[serde(default)]
    pub filter_options: Vec<String>,
}

/// Response body for create_filter
#[derive(Debug, Serialize, ToSchema)]
pub struct CreateFilterResponse {
    pub filter_id: i64,
}

/// Request body for update_filter (full replace of fields and options)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateFilterRequest {
    pub filter_id: i64,
    #[validate(length(min = 1, message = "Filter name cannot be empty"))]
    pub filter_name: String,
    #[validate(length(min = 1, message = "Category name cannot be empty"))]
    pub category_name: String,
    #[validate(custom(function = "validate_filter_type"))]
    pub filter_type: String,
    #[serde(default)]
    pub options: Vec<String>,
}

/// Request body for delete_filter
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct DeleteFilterRequest {
    pub filter_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_type_validator() {
        assert!(validate_filter_type("single").is_ok());
        assert!(validate_filter_type("multi").is_ok());
        assert!(validate_filter_type("range").is_err());
        assert!(validate_filter_type("").is_err());
    }

    #[test]
    fn dto_carries_option_ids() {
        let dto = FilterDto::from(FilterView {
            filter_id: 7,
            filter_name: "Size".to_string(),
            category_id: 2,
            category_name: "Shirts".to_string(),
            filter_type: "single".to_string(),
            options: vec![FilterOptionRow {
                option_id: 31,
                option_value: "XL".to_string(),
            }],
        });
        assert_eq!(dto.options.len(), 1);
        assert_eq!(dto.options[0].option_id, 31);
        assert_eq!(dto.options[0].option_value, "XL");
    }
}
