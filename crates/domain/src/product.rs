//! Catalog products.

use common::{LocationId, ProductId};
use serde::{Deserialize, Serialize};

use crate::Money;

/// A catalog product.
///
/// Stock is tracked at a single current location per product; there is no
/// split stock across locations. Quantity-on-hand is a plain integer and may
/// go negative, no floor is enforced anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Stock-keeping unit, free text. Uniqueness is not enforced.
    pub sku: String,
    pub category: String,
    /// Unit of measure, free text ("Units", "Box", "Liters").
    pub uom: String,
    pub stock: i64,
    pub location_id: LocationId,
    pub price: Money,
}

impl Product {
    /// Creates a new product.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        sku: impl Into<String>,
        category: impl Into<String>,
        uom: impl Into<String>,
        stock: i64,
        location_id: impl Into<LocationId>,
        price: Money,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            sku: sku.into(),
            category: category.into(),
            uom: uom.into(),
            stock,
            location_id: location_id.into(),
            price,
        }
    }
}
