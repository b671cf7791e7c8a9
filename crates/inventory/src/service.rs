//! Single-owner service over the application state.

use common::{LocationId, OperationId, ProductId};
use domain::{Location, LocationKind, Operation, OperationLine, OperationStatus, Product, moves};
use metrics::counter;
use tracing::{instrument, warn};

use crate::commands::{NewOperation, NewProduct, StockAdjustment};
use crate::error::InventoryError;
use crate::seed;
use crate::state::AppState;

/// Owns the application state and applies every mutation.
///
/// Exactly one logical writer at a time: mutators take `&mut self` and run to
/// completion before the next call is accepted. To share the service across
/// threads, wrap it in a mutex; the service itself provides no locking.
#[derive(Debug, Default)]
pub struct InventoryService {
    state: AppState,
}

impl InventoryService {
    /// Creates a service over an initial state.
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Creates a service holding the seeded demo fixture.
    pub fn seeded() -> Self {
        Self::new(seed::initial_state())
    }

    /// Read access to the current state.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Adds a product to the front of the catalog.
    ///
    /// SKU uniqueness is not enforced.
    #[instrument(skip(self, cmd), fields(name = %cmd.name))]
    pub fn create_product(&mut self, cmd: NewProduct) -> Result<Product, InventoryError> {
        if cmd.name.trim().is_empty() {
            return Err(InventoryError::BlankField { field: "name" });
        }
        if cmd.sku.trim().is_empty() {
            return Err(InventoryError::BlankField { field: "sku" });
        }
        if cmd.price.is_negative() {
            return Err(InventoryError::InvalidPrice {
                cents: cmd.price.cents(),
            });
        }

        let product = Product::new(
            ProductId::generate(),
            cmd.name,
            cmd.sku,
            cmd.category,
            cmd.uom,
            cmd.stock,
            cmd.location_id,
            cmd.price,
        );
        self.state.products.insert(0, product.clone());

        counter!("inventory_products_created").increment(1);
        Ok(product)
    }

    /// Appends a fully formed operation to the front of the registry, in
    /// status Ready.
    ///
    /// Product and location references are not checked here; line names are
    /// snapshotted from the catalog at creation time, falling back to
    /// "Unknown" when the product is not in the catalog.
    #[instrument(skip(self, cmd), fields(reference = %cmd.reference))]
    pub fn create_operation(&mut self, cmd: NewOperation) -> Result<Operation, InventoryError> {
        if cmd.reference.trim().is_empty() {
            return Err(InventoryError::BlankField { field: "reference" });
        }
        for line in &cmd.lines {
            if line.quantity <= 0 {
                return Err(InventoryError::InvalidQuantity {
                    quantity: line.quantity,
                });
            }
        }

        let lines = cmd
            .lines
            .into_iter()
            .map(|line| {
                let name = self
                    .state
                    .product(&line.product_id)
                    .map(|p| p.name.clone())
                    .unwrap_or_else(|| "Unknown".to_string());
                OperationLine::new(line.product_id, name, line.quantity)
            })
            .collect();

        let operation = Operation::new(
            OperationId::generate(),
            cmd.kind,
            cmd.reference,
            cmd.source_location_id,
            cmd.dest_location_id,
            OperationStatus::Ready,
            cmd.date,
            lines,
        );
        self.state.operations.insert(0, operation.clone());

        counter!("inventory_operations_created").increment(1);
        Ok(operation)
    }

    /// Commits an operation's stock effects and marks it Done.
    ///
    /// An unknown id is a logged no-op, as is re-validating an operation that
    /// is already Done. The product registry is replaced wholesale with the
    /// engine's output, never patched entry by entry.
    #[instrument(skip(self))]
    pub fn validate_operation(&mut self, id: &OperationId) {
        let Some(index) = self.state.operations.iter().position(|o| &o.id == id) else {
            warn!(operation = %id, "validate requested for unknown operation");
            return;
        };
        if self.state.operations[index].status == OperationStatus::Done {
            return;
        }

        let (products, status) = moves::validate(
            &self.state.operations[index],
            &self.state.products,
            &self.state.locations,
        );

        self.state.products = products;
        let mut validated = self.state.operations[index].clone();
        validated.status = status;
        self.state.operations[index] = validated;

        counter!("inventory_operations_validated").increment(1);
    }

    /// Creates an internal warehouse location with a fresh id.
    #[instrument(skip(self))]
    pub fn add_location(&mut self, name: &str) -> Result<Location, InventoryError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(InventoryError::BlankField { field: "name" });
        }

        let location = Location::new(LocationId::generate(), name, LocationKind::Internal);
        self.state.locations.push(location.clone());

        counter!("inventory_locations_created").increment(1);
        Ok(location)
    }

    /// Overwrites a product's stock and location wholesale.
    ///
    /// The previous values are not recorded anywhere and no operation is
    /// created. An unknown product id is a logged no-op.
    #[instrument(skip(self, cmd), fields(product = %cmd.product_id))]
    pub fn adjust_stock(&mut self, cmd: StockAdjustment) {
        let Some(product) = self
            .state
            .products
            .iter_mut()
            .find(|p| p.id == cmd.product_id)
        else {
            warn!(product = %cmd.product_id, "adjustment requested for unknown product");
            return;
        };

        product.stock = cmd.new_stock;
        product.location_id = cmd.new_location_id;

        counter!("inventory_stock_adjustments").increment(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::NewOperationLine;
    use chrono::NaiveDate;
    use domain::{Money, OperationType};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 11, 2).unwrap()
    }

    fn new_product(name: &str, sku: &str) -> NewProduct {
        NewProduct::new(
            name,
            sku,
            "Hardware",
            "Units",
            10,
            "loc_wh_stock",
            Money::from_cents(500),
        )
    }

    #[test]
    fn create_product_prepends_to_catalog() {
        let mut service = InventoryService::seeded();

        let created = service
            .create_product(new_product("Wood Screws", "HDW-101"))
            .unwrap();

        assert_eq!(service.state().products.len(), 6);
        assert_eq!(service.state().products[0].id, created.id);
        assert!(created.id.as_str().starts_with("p_"));
    }

    #[test]
    fn create_product_rejects_blank_name() {
        let mut service = InventoryService::seeded();
        let result = service.create_product(new_product("   ", "HDW-101"));
        assert!(matches!(
            result,
            Err(InventoryError::BlankField { field: "name" })
        ));
        assert_eq!(service.state().products.len(), 5);
    }

    #[test]
    fn create_product_rejects_negative_price() {
        let mut service = InventoryService::seeded();
        let mut cmd = new_product("Wood Screws", "HDW-101");
        cmd.price = Money::from_cents(-1);
        assert!(matches!(
            service.create_product(cmd),
            Err(InventoryError::InvalidPrice { cents: -1 })
        ));
    }

    #[test]
    fn create_product_allows_duplicate_sku() {
        let mut service = InventoryService::seeded();
        // ST-1001 already exists in the seed catalog.
        let result = service.create_product(new_product("Steel Rods 12mm", "ST-1001"));
        assert!(result.is_ok());
    }

    #[test]
    fn create_operation_prepends_in_ready_status() {
        let mut service = InventoryService::seeded();

        let created = service
            .create_operation(NewOperation::new(
                OperationType::Receipt,
                "WH/IN/0042",
                "loc_vendor",
                "loc_wh_stock",
                today(),
                vec![NewOperationLine::new("p1", 10)],
            ))
            .unwrap();

        assert_eq!(created.status, OperationStatus::Ready);
        assert_eq!(service.state().operations.len(), 4);
        assert_eq!(service.state().operations[0].id, created.id);
    }

    #[test]
    fn create_operation_snapshots_product_name() {
        let mut service = InventoryService::seeded();

        let created = service
            .create_operation(NewOperation::new(
                OperationType::Delivery,
                "WH/OUT/0042",
                "loc_wh_stock",
                "loc_customer",
                today(),
                vec![
                    NewOperationLine::new("p2", 1),
                    NewOperationLine::new("p_ghost", 2),
                ],
            ))
            .unwrap();

        assert_eq!(created.lines[0].product_name, "Office Chair");
        assert_eq!(created.lines[1].product_name, "Unknown");
    }

    #[test]
    fn create_operation_rejects_non_positive_quantity() {
        let mut service = InventoryService::seeded();

        let result = service.create_operation(NewOperation::new(
            OperationType::Receipt,
            "WH/IN/0042",
            "loc_vendor",
            "loc_wh_stock",
            today(),
            vec![NewOperationLine::new("p1", 0)],
        ));

        assert!(matches!(
            result,
            Err(InventoryError::InvalidQuantity { quantity: 0 })
        ));
        assert_eq!(service.state().operations.len(), 3);
    }

    #[test]
    fn validate_unknown_operation_is_a_no_op() {
        let mut service = InventoryService::seeded();
        let before = service.state().clone();

        service.validate_operation(&OperationId::new("op99"));

        assert_eq!(service.state().products, before.products);
        assert_eq!(service.state().operations, before.operations);
    }

    #[test]
    fn validate_marks_operation_done() {
        let mut service = InventoryService::seeded();

        service.validate_operation(&OperationId::new("op2"));

        let op2 = service.state().operation(&OperationId::new("op2")).unwrap();
        assert_eq!(op2.status, OperationStatus::Done);
    }

    #[test]
    fn validate_does_not_reorder_operations() {
        let mut service = InventoryService::seeded();

        service.validate_operation(&OperationId::new("op2"));

        let ids: Vec<_> = service
            .state()
            .operations
            .iter()
            .map(|o| o.id.as_str().to_string())
            .collect();
        assert_eq!(ids, vec!["op1", "op2", "op3"]);
    }

    #[test]
    fn add_location_appends_internal_warehouse() {
        let mut service = InventoryService::seeded();

        let created = service.add_location("West Coast Distribution").unwrap();

        assert_eq!(created.kind, LocationKind::Internal);
        assert!(created.id.as_str().starts_with("loc_"));
        assert_eq!(service.state().locations.len(), 7);
        assert_eq!(service.state().locations[6].id, created.id);
    }

    #[test]
    fn add_location_rejects_blank_name() {
        let mut service = InventoryService::seeded();
        assert!(matches!(
            service.add_location("  "),
            Err(InventoryError::BlankField { field: "name" })
        ));
    }

    #[test]
    fn adjust_stock_overwrites_stock_and_location() {
        let mut service = InventoryService::seeded();

        service.adjust_stock(StockAdjustment::new("p5", 30, "loc_wh_pack"));

        let p5 = service.state().product(&ProductId::new("p5")).unwrap();
        assert_eq!(p5.stock, 30);
        assert_eq!(p5.location_id.as_str(), "loc_wh_pack");
    }

    #[test]
    fn adjust_stock_unknown_product_is_a_no_op() {
        let mut service = InventoryService::seeded();
        let before = service.state().products.clone();

        service.adjust_stock(StockAdjustment::new("p99", 30, "loc_wh_pack"));

        assert_eq!(service.state().products, before);
    }
}
