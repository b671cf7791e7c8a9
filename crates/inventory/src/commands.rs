//! Request payloads for the mutating API surface.

use chrono::NaiveDate;
use common::{LocationId, ProductId};
use domain::{Money, OperationType};

/// Request to add a product to the catalog.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub sku: String,
    pub category: String,
    pub uom: String,
    pub stock: i64,
    pub location_id: LocationId,
    pub price: Money,
}

impl NewProduct {
    /// Creates a new product request.
    pub fn new(
        name: impl Into<String>,
        sku: impl Into<String>,
        category: impl Into<String>,
        uom: impl Into<String>,
        stock: i64,
        location_id: impl Into<LocationId>,
        price: Money,
    ) -> Self {
        Self {
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

/// One line of a new operation.
///
/// Carries only the product id and quantity; the product name snapshot is
/// taken from the catalog when the operation is created.
#[derive(Debug, Clone)]
pub struct NewOperationLine {
    pub product_id: ProductId,
    pub quantity: i64,
}

impl NewOperationLine {
    /// Creates a new operation line request.
    pub fn new(product_id: impl Into<ProductId>, quantity: i64) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
        }
    }
}

/// Request to create a stock-moving operation.
///
/// Operations are created ready to validate.
#[derive(Debug, Clone)]
pub struct NewOperation {
    pub kind: OperationType,
    pub reference: String,
    pub source_location_id: LocationId,
    pub dest_location_id: LocationId,
    pub date: NaiveDate,
    pub lines: Vec<NewOperationLine>,
}

impl NewOperation {
    /// Creates a new operation request.
    pub fn new(
        kind: OperationType,
        reference: impl Into<String>,
        source_location_id: impl Into<LocationId>,
        dest_location_id: impl Into<LocationId>,
        date: NaiveDate,
        lines: Vec<NewOperationLine>,
    ) -> Self {
        Self {
            kind,
            reference: reference.into(),
            source_location_id: source_location_id.into(),
            dest_location_id: dest_location_id.into(),
            date,
            lines,
        }
    }
}

/// Request to overwrite a product's stock and location outside the operation
/// workflow.
#[derive(Debug, Clone)]
pub struct StockAdjustment {
    pub product_id: ProductId,
    pub new_stock: i64,
    pub new_location_id: LocationId,
}

impl StockAdjustment {
    /// Creates a new stock adjustment request.
    pub fn new(
        product_id: impl Into<ProductId>,
        new_stock: i64,
        new_location_id: impl Into<LocationId>,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            new_stock,
            new_location_id: new_location_id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn new_product_request() {
        let cmd = NewProduct::new(
            "Wood Screws",
            "HDW-101",
            "Hardware",
            "Box",
            25,
            "loc_wh_stock",
            Money::from_cents(399),
        );
        assert_eq!(cmd.name, "Wood Screws");
        assert_eq!(cmd.location_id.as_str(), "loc_wh_stock");
    }

    #[test]
    fn new_operation_request() {
        let cmd = NewOperation::new(
            OperationType::Receipt,
            "WH/IN/0042",
            "loc_vendor",
            "loc_wh_stock",
            NaiveDate::from_ymd_opt(2023, 11, 2).unwrap(),
            vec![NewOperationLine::new("p1", 10)],
        );
        assert_eq!(cmd.kind, OperationType::Receipt);
        assert_eq!(cmd.lines.len(), 1);
        assert_eq!(cmd.lines[0].quantity, 10);
    }

    #[test]
    fn stock_adjustment_request() {
        let cmd = StockAdjustment::new("p5", 30, "loc_wh_pack");
        assert_eq!(cmd.product_id.as_str(), "p5");
        assert_eq!(cmd.new_stock, 30);
        assert_eq!(cmd.new_location_id.as_str(), "loc_wh_pack");
    }
}
