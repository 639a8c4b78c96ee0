//! Shared row types returned by the data layer

/// Product summary returned by the filter-matching query
#[derive(Debug, Clone, PartialEq)]
pub struct ProductSummaryRow {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    /// Decimal-preserving price text (NUMERIC cast to text in SQL)
    pub price: String,
    pub featured: bool,
}

/// Product listing view (shared by list/get/search/featured reads)
#[derive(Debug, Clone)]
pub struct ProductRow {
    pub product_id: i64,
    pub product_name: String,
    pub description: Option<String>,
    pub price: String,
    pub image_urls: Vec<String>,
}

/// Full product field set accepted on create/update
#[derive(Debug, Clone)]
pub struct ProductFields {
    pub name: String,
    pub sku: String,
    pub description: Option<String>,
    pub price: String,
    pub discount_id: Option<i64>,
    pub capacity: Option<String>,
    pub units: Option<i32>,
    pub available_quantity: i32,
    pub featured: bool,
    pub active: bool,
    pub vendor_id: Option<i64>,
    pub in_order: bool,
    pub image_urls: Vec<String>,
    pub tags: Vec<String>,
}

/// Category row (soft-deleted rows are filtered at query level)
#[derive(Debug, Clone)]
pub struct CategoryRow {
    pub category_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub parent_category_id: Option<i64>,
}

/// One selectable option belonging to a filter
#[derive(Debug, Clone)]
pub struct FilterOptionRow {
    pub option_id: i64,
    pub option_value: String,
}

/// Merged filter view: scalar fields plus aggregated options
#[derive(Debug, Clone)]
pub struct FilterView {
    pub filter_id: i64,
    pub filter_name: String,
    pub category_id: i64,
    pub category_name: String,
    pub filter_type: String,
    pub options: Vec<FilterOptionRow>,
}

/// An option value resolved to its owning filter for a given category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedOption {
    pub option_id: i64,
    pub filter_id: i64,
}

/// Customer row (password hash never leaves the data layer)
#[derive(Debug, Clone)]
pub struct CustomerRow {
    pub customer_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub points_balance: i64,
    pub points_redeemed: i64,
}
