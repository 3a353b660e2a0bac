//! # Validation Module
//!
//! Input validation utilities for Bodega.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend                                                      │
//! │  ├── Basic format checks (empty, length)                               │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                   │
//! │  ├── Field-level rules shared by drafts and constructors               │
//! │  └── A failure aborts the operation before any state changes           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Constructors (LineItem::new, ProductDraft::new, ...)          │
//! │  └── Invalid combinations are rejected at construction, not at         │
//! │      scattered call sites                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a required, human-readable name field.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most 200 characters
fn validate_required_name(value: &str, field: &str) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.len() > 200 {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates a product name.
///
/// ## Example
/// ```rust
/// use bodega_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Rice").is_ok());
/// assert!(validate_product_name("").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    validate_required_name(name, "name")
}

/// Validates a product category.
pub fn validate_category(category: &str) -> ValidationResult<()> {
    validate_required_name(category, "category")
}

/// Validates a line item name.
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    validate_required_name(name, "item name")
}

/// Validates a customer name on a credit sale or debt.
pub fn validate_customer_name(name: &str) -> ValidationResult<()> {
    validate_required_name(name, "customer name")
}

/// Validates a supplier name.
pub fn validate_supplier_name(name: &str) -> ValidationResult<()> {
    validate_required_name(name, "supplier name")
}

/// Validates a supplier contact person.
pub fn validate_contact(contact: &str) -> ValidationResult<()> {
    validate_required_name(contact, "contact person")
}

/// Validates a supplier phone number.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 30 characters
/// - Must contain only digits, spaces, and `+ - ( )`
pub fn validate_phone(phone: &str) -> ValidationResult<()> {
    let phone = phone.trim();

    if phone.is_empty() {
        return Err(ValidationError::Required {
            field: "phone".to_string(),
        });
    }

    if phone.len() > 30 {
        return Err(ValidationError::TooLong {
            field: "phone".to_string(),
            max: 30,
        });
    }

    if !phone
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '(' | ')'))
    {
        return Err(ValidationError::InvalidFormat {
            field: "phone".to_string(),
            reason: "must contain only digits, spaces, and + - ( )".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity being sold or added to a cart.
///
/// ## Rules
/// - Must be positive (> 0); the stock ceiling is checked separately
///   against the selected product
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a stock level on a product draft.
///
/// ## Rules
/// - Must be non-negative (>= 0); zero stock is a valid (empty shelf) state
pub fn validate_stock_quantity(qty: i64) -> ValidationResult<()> {
    if qty < 0 {
        return Err(ValidationError::MustNotBeNegative {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
///
/// ## Example
/// ```rust
/// use bodega_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(350).is_ok());  // $3.50
/// assert!(validate_price_cents(0).is_ok());    // Free item
/// assert!(validate_price_cents(-100).is_err()); // Invalid
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a stock alert threshold.
pub fn validate_stock_alert(level: i64) -> ValidationResult<()> {
    if level < 0 {
        return Err(ValidationError::MustNotBeNegative {
            field: "stock alert".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
