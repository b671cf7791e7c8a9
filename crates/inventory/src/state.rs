//! Process-wide application state.

use common::{LocationId, OperationId, ProductId};
use domain::{Location, Operation, Product};
use serde::{Deserialize, Serialize};

/// The three registries the whole system runs on.
///
/// Products and operations are ordered newest-first (creation prepends);
/// locations keep creation order. Entries are never deleted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppState {
    pub products: Vec<Product>,
    pub operations: Vec<Operation>,
    pub locations: Vec<Location>,
}

impl AppState {
    /// Creates a state from pre-built registries.
    pub fn new(
        products: Vec<Product>,
        operations: Vec<Operation>,
        locations: Vec<Location>,
    ) -> Self {
        Self {
            products,
            operations,
            locations,
        }
    }

    /// Looks up a product by id.
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Looks up an operation by id.
    pub fn operation(&self, id: &OperationId) -> Option<&Operation> {
        self.operations.iter().find(|o| &o.id == id)
    }

    /// Looks up a location by id.
    pub fn location(&self, id: &LocationId) -> Option<&Location> {
        self.locations.iter().find(|l| &l.id == id)
    }
}
