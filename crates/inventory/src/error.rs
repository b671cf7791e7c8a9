//! Error types for the inventory service boundary.

use thiserror::Error;

/// Errors rejected at the service boundary, before any state changes.
///
/// Missing references are not errors anywhere in this crate: lookups that
/// fail resolve to logged no-ops, matching the registry semantics.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// A required text field was blank.
    #[error("{field} must not be blank")]
    BlankField { field: &'static str },

    /// Operation lines must move a positive quantity.
    #[error("invalid quantity: {quantity} (must be greater than 0)")]
    InvalidQuantity { quantity: i64 },

    /// Catalog prices must not be negative.
    #[error("invalid price: {cents} cents (must not be negative)")]
    InvalidPrice { cents: i64 },
}
