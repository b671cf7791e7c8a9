//! Fixed fixture every session starts from.

use chrono::NaiveDate;
use domain::{
    Location, LocationKind, Money, Operation, OperationLine, OperationStatus, OperationType,
    Product,
};

use crate::state::AppState;

/// Suggested product categories offered by the catalog form.
pub const PRODUCT_CATEGORIES: [&str; 5] = [
    "Hardware",
    "Raw Material",
    "Consumable",
    "Furniture",
    "Accessories",
];

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("seed date is valid")
}

/// The six locations every session starts with: one vendor, one customer,
/// three internal warehouses, one inventory-loss location.
pub fn locations() -> Vec<Location> {
    vec![
        Location::new("loc_vendor", "Vendors", LocationKind::Vendor),
        Location::new("loc_customer", "Customers", LocationKind::Customer),
        Location::new("loc_wh_stock", "WH/Stock", LocationKind::Internal),
        Location::new("loc_wh_pack", "WH/Packing Zone", LocationKind::Internal),
        Location::new("loc_wh_input", "WH/Input", LocationKind::Internal),
        Location::new("loc_loss", "Inventory Loss", LocationKind::InventoryLoss),
    ]
}

/// The five catalog products every session starts with, all at WH/Stock.
pub fn products() -> Vec<Product> {
    vec![
        Product::new(
            "p1",
            "Steel Rods 10mm",
            "ST-1001",
            "Raw Material",
            "Units",
            150,
            "loc_wh_stock",
            Money::from_cents(1250),
        ),
        Product::new(
            "p2",
            "Office Chair",
            "FURN-001",
            "Furniture",
            "Units",
            45,
            "loc_wh_stock",
            Money::from_dollars(85),
        ),
        Product::new(
            "p3",
            "Bolt M4",
            "HDW-022",
            "Hardware",
            "Box",
            500,
            "loc_wh_stock",
            Money::from_cents(50),
        ),
        Product::new(
            "p4",
            "Red Paint",
            "PNT-RED",
            "Consumable",
            "Liters",
            20,
            "loc_wh_stock",
            Money::from_dollars(18),
        ),
        Product::new(
            "p5",
            "Laptop Stand",
            "ACC-LAP",
            "Accessories",
            "Units",
            0,
            "loc_wh_stock",
            Money::from_dollars(25),
        ),
    ]
}

/// The three operations every session starts with: a Done receipt, a Ready
/// delivery, and a Draft internal transfer.
pub fn operations() -> Vec<Operation> {
    vec![
        Operation::new(
            "op1",
            OperationType::Receipt,
            "WH/IN/0001",
            "loc_vendor",
            "loc_wh_stock",
            OperationStatus::Done,
            date(2023, 10, 25),
            vec![OperationLine::new("p1", "Steel Rods 10mm", 50)],
        ),
        Operation::new(
            "op2",
            OperationType::Delivery,
            "WH/OUT/0001",
            "loc_wh_stock",
            "loc_customer",
            OperationStatus::Ready,
            date(2023, 10, 26),
            vec![OperationLine::new("p2", "Office Chair", 5)],
        ),
        Operation::new(
            "op3",
            OperationType::Internal,
            "WH/INT/0001",
            "loc_wh_stock",
            "loc_wh_pack",
            OperationStatus::Draft,
            date(2023, 10, 27),
            vec![OperationLine::new("p3", "Bolt M4", 100)],
        ),
    ]
}

/// The initial application state.
pub fn initial_state() -> AppState {
    AppState::new(products(), operations(), locations())
}
