//! # Wire DTOs
//!
//! Request and response shapes for every backend endpoint. Field names are
//! the backend's (camelCase JSON); these types exist so the rest of the
//! workspace never handles raw `serde_json::Value`s.
//!
//! ## Money on the Wire
//! The backend speaks decimal amounts (`35.0` dollars), while everything
//! inside the workspace is integer cents. Use [`to_cents`] / [`to_dollars`]
//! at this boundary and nowhere else.

use serde::{Deserialize, Serialize};

use bodega_core::money::Money;

// =============================================================================
// Money Conversion
// =============================================================================

/// Converts a wire decimal amount to integer cents.
///
/// Rounds to the nearest cent: backend amounts are produced from cent
/// quantities in the first place, so this only undoes float representation
/// noise.
pub fn to_cents(amount: f64) -> Money {
    Money::from_cents((amount * 100.0).round() as i64)
}

/// Converts integer cents to the wire decimal representation.
pub fn to_dollars(amount: Money) -> f64 {
    amount.cents() as f64 / 100.0
}

// =============================================================================
// Auth
// =============================================================================

/// `POST /login` request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCredentials {
    pub email: String,
    pub password: String,
}

/// `POST /signup` request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupCredentials {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub shop_name: String,
    pub address: String,
    pub password: String,
    pub confirm_password: String,
}

/// The authenticated account, as the backend returns it.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub shop_name: Option<String>,
}

/// Response of `POST /login` and `POST /signup`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
    /// Login returns a greeting; signup does not.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

// =============================================================================
// Sales
// =============================================================================

/// Product snapshot embedded in a sale record from `GET /sales`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleProduct {
    pub id: i64,
    pub image_url: Option<String>,
    pub name: String,
    pub category: String,
    pub unit: String,
    pub cost_price: f64,
    pub selling_price: f64,
    pub supplier: String,
    pub stock_alert_level: i64,
    pub stock_quantity: i64,
    pub price: f64,
}

/// One record from `GET /sales`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleRecord {
    pub id: i64,
    pub product: SaleProduct,
    pub quantity_sold: i64,
    pub total_amount: f64,
    pub sale_date: String,
}

/// `POST /sales` request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSale {
    pub product_id: i64,
    pub quantity_sold: i64,
    pub total_amount: f64,
}

// =============================================================================
// Suppliers
// =============================================================================

/// Request body for `POST /suppliers/add` and `PUT /suppliers/:id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierPayload {
    pub name: String,
    pub category: String,
    pub contact_person: String,
    pub phone_number: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
    pub is_active: bool,
}

/// One record from `GET /suppliers/:id` and `GET /suppliers/all`.
///
/// Note the backend writes `isActive` on input but `active` on output.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierRecord {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub contact_person: String,
    pub phone_number: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
    pub active: bool,
}

// =============================================================================
// Debts
// =============================================================================

/// One record from `GET /debts` and `GET /debts/:id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtRecord {
    pub id: i64,
    pub customer_name: String,
    pub amount: f64,
    pub created_date: String,
    pub due_date: String,
    pub paid: bool,
}

/// Request body for `POST /debts/add` and `PUT /debts/:id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtPayload {
    pub customer_name: String,
    pub amount: f64,
    pub created_date: String,
    pub due_date: String,
    pub is_paid: bool,
}

// =============================================================================
// Inventory
// =============================================================================

/// Request body for `POST /inventory/add` and `PUT /inventory/:id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryPayload {
    pub name: String,
    pub category: String,
    pub quantity: i64,
    pub unit: String,
    pub cost_price: f64,
    pub selling_price: f64,
    pub supplier: String,
    pub stock_alert_level: i64,
    /// Optional image reference; the update endpoint does not accept one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// One record from the inventory query endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryRecord {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub quantity: i64,
    pub unit: String,
    pub cost_price: f64,
    pub selling_price: f64,
    pub supplier: String,
    pub stock_alert_level: i64,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Query parameters for `GET /inventory/search`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventorySearch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier: Option<String>,
}

// =============================================================================
// Reports
// =============================================================================

/// Query parameters for `GET /reports/generate`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    pub period: bodega_core::report::ReportPeriod,
    pub start_date: String,
    pub end_date: String,
}

// =============================================================================
// Error Body
// =============================================================================

/// The error body shape the backend uses for failed requests.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorBody {
    pub message: Option<String>,
}

// =============================================================================
// Unit Tests
// =============================================================================
