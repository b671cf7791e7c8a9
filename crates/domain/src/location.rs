//! Stock locations and their classification.

use common::LocationId;
use serde::{Deserialize, Serialize};

/// Classification of a stock location.
///
/// Internal locations are controlled warehouse storage. The other kinds are
/// external boundaries: the supplier side, the customer side, and write-offs.
/// Stock is only tracked while a product sits at an internal location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LocationKind {
    Vendor,
    Customer,
    Internal,
    InventoryLoss,
}

impl LocationKind {
    /// Returns true for controlled warehouse storage.
    pub fn is_internal(&self) -> bool {
        matches!(self, LocationKind::Internal)
    }

    /// Returns the kind name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            LocationKind::Vendor => "VENDOR",
            LocationKind::Customer => "CUSTOMER",
            LocationKind::Internal => "INTERNAL",
            LocationKind::InventoryLoss => "INVENTORY_LOSS",
        }
    }
}

impl std::fmt::Display for LocationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A stock location.
///
/// Identifier and kind never change after creation; there is no
/// reclassification and no deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub id: LocationId,
    pub name: String,
    pub kind: LocationKind,
}

impl Location {
    /// Creates a new location.
    pub fn new(id: impl Into<LocationId>, name: impl Into<String>, kind: LocationKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
        }
    }
}
