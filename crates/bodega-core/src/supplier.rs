//! # Supplier Records
//!
//! Drafts and list queries for supplier contact records. Suppliers carry no
//! derived logic; the only rules are the required fields on the draft and
//! the list search.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::types::{Supplier, SupplierStatus};
use crate::validation::{validate_contact, validate_phone, validate_supplier_name};

// =============================================================================
// Supplier Draft
// =============================================================================

/// A validated, not-yet-identified supplier record.
///
/// Name, contact person and phone are required; everything else may be
/// empty (the original records leave address fields blank for new
/// suppliers until they are filled in).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierDraft {
    name: String,
    category: String,
    contact: String,
    phone: String,
    email: String,
    street: String,
    city: String,
    state: String,
    postal_code: String,
    country: String,
    status: SupplierStatus,
}

impl SupplierDraft {
    /// Creates a validated draft.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        contact: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
        street: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        postal_code: impl Into<String>,
        country: impl Into<String>,
        status: SupplierStatus,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let contact = contact.into();
        let phone = phone.into();

        validate_supplier_name(&name)?;
        validate_contact(&contact)?;
        validate_phone(&phone)?;

        Ok(SupplierDraft {
            name,
            category: category.into(),
            contact,
            phone,
            email: email.into(),
            street: street.into(),
            city: city.into(),
            state: state.into(),
            postal_code: postal_code.into(),
            country: country.into(),
            status,
        })
    }

    /// Builds a draft from an existing supplier, for edit flows.
    pub fn from_supplier(supplier: &Supplier) -> Self {
        SupplierDraft {
            name: supplier.name.clone(),
            category: supplier.category.clone(),
            contact: supplier.contact.clone(),
            phone: supplier.phone.clone(),
            email: supplier.email.clone(),
            street: supplier.street.clone(),
            city: supplier.city.clone(),
            state: supplier.state.clone(),
            postal_code: supplier.postal_code.clone(),
            country: supplier.country.clone(),
            status: supplier.status,
        }
    }

    /// Materializes the draft into a supplier under the given id.
    pub fn into_supplier(self, id: i64) -> Supplier {
        Supplier {
            id,
            name: self.name,
            category: self.category,
            contact: self.contact,
            phone: self.phone,
            email: self.email,
            street: self.street,
            city: self.city,
            state: self.state,
            postal_code: self.postal_code,
            country: self.country,
            status: self.status,
        }
    }
}

// =============================================================================
// Filtering
// =============================================================================

/// Filters suppliers by a case-insensitive substring across name, category
/// and contact person. An empty term matches everything.
pub fn filter(suppliers: &[Supplier], search_term: &str) -> Vec<Supplier> {
    let needle = search_term.to_lowercase();

    suppliers
        .iter()
        .filter(|s| {
            needle.is_empty()
                || s.name.to_lowercase().contains(&needle)
                || s.category.to_lowercase().contains(&needle)
                || s.contact.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
