//! Domain layer for the stockmaster inventory system.
//!
//! This crate provides the core domain types:
//! - Entity definitions (Location, Product, Operation, OperationLine)
//! - The enumerations governing their state
//! - The stock-mutation engine applied when an operation is validated

pub mod location;
pub mod money;
pub mod moves;
pub mod operation;
pub mod product;

pub use location::{Location, LocationKind};
pub use money::Money;
pub use moves::MoveKind;
pub use operation::{Operation, OperationLine, OperationStatus, OperationType};
pub use product::Product;
