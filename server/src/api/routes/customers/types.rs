//! Customer API types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::data::types::CustomerRow;

/// Customer DTO for API responses (never includes the password hash)
#[derive(Debug, Serialize, ToSchema)]
pub struct CustomerDto {
    pub customer_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub points_balance: i64,
    pub points_redeemed: i64,
}

impl From<CustomerRow> for CustomerDto {
    fn from(row: CustomerRow) -> Self {
        Self {
            customer_id: row.customer_id,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            phone_number: row.phone_number,
            address: row.address,
            points_balance: row.points_balance,
            points_redeemed: row.points_redeemed,
        }
    }
}

/// Request body for get_customer and delete_customer
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CustomerIdRequest {
    pub customer_id: i64,
}

/// Request body for create_customer
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCustomerRequest {
    #[validate(length(min = 1, message = "First name cannot be empty"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Last name cannot be empty"))]
    pub last_name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    pub phone_number: Option<String>,
    pub address: Option<String>,
}

/// Response body for create_customer
#[derive(Debug, Serialize, ToSchema)]
pub struct CreateCustomerResponse {
    pub customer_id: i64,
}

/// Request body for update_customer
///
/// The password is optional; when omitted the stored hash is preserved.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateCustomerRequest {
    pub customer_id: i64,
    #[validate(length(min = 1, message = "First name cannot be empty"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Last name cannot be empty"))]
    pub last_name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
}
