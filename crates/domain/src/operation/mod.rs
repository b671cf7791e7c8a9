//! Stock-moving operations.

mod state;

pub use state::OperationStatus;

use chrono::NaiveDate;
use common::{LocationId, OperationId, ProductId};
use serde::{Deserialize, Serialize};

/// The kind of stock movement an operation performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperationType {
    /// Incoming goods from a vendor.
    Receipt,

    /// Outgoing goods to a customer.
    Delivery,

    /// Warehouse-to-warehouse or rack-to-rack move.
    Internal,

    /// Manual correction. Declared but currently never produced; manual
    /// corrections go through the direct stock-adjustment path instead.
    Adjustment,
}

impl OperationType {
    /// Short code used in reference strings, e.g. the `IN` of `WH/IN/0001`.
    pub fn reference_code(&self) -> &'static str {
        match self {
            OperationType::Receipt => "IN",
            OperationType::Delivery => "OUT",
            OperationType::Internal => "INT",
            OperationType::Adjustment => "ADJ",
        }
    }

    /// Returns the type name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationType::Receipt => "RECEIPT",
            OperationType::Delivery => "DELIVERY",
            OperationType::Internal => "INTERNAL",
            OperationType::Adjustment => "ADJUSTMENT",
        }
    }
}

impl std::fmt::Display for OperationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One product movement within an operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationLine {
    pub product_id: ProductId,

    /// Product name captured when the line was written. Not re-synced if the
    /// product is later renamed, so past operations keep their historical
    /// wording.
    pub product_name: String,

    pub quantity: i64,
}

impl OperationLine {
    /// Creates a new operation line.
    pub fn new(
        product_id: impl Into<ProductId>,
        product_name: impl Into<String>,
        quantity: i64,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            product_name: product_name.into(),
            quantity,
        }
    }
}

/// A stock-moving transaction between a source and a destination location.
///
/// Once Done, an operation is immutable; validation is irreversible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    pub id: OperationId,
    pub kind: OperationType,

    /// Human-readable reference, e.g. `WH/IN/0001`.
    pub reference: String,

    pub source_location_id: LocationId,
    pub dest_location_id: LocationId,
    pub status: OperationStatus,
    pub date: NaiveDate,
    pub lines: Vec<OperationLine>,
}

impl Operation {
    /// Creates a new operation.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<OperationId>,
        kind: OperationType,
        reference: impl Into<String>,
        source_location_id: impl Into<LocationId>,
        dest_location_id: impl Into<LocationId>,
        status: OperationStatus,
        date: NaiveDate,
        lines: Vec<OperationLine>,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            reference: reference.into(),
            source_location_id: source_location_id.into(),
            dest_location_id: dest_location_id.into(),
            status,
            date,
            lines,
        }
    }

    /// Returns the total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|line| line.quantity).sum()
    }
}
