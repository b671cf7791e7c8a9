//! Shared identifier types for the stockmaster inventory system.

mod types;

pub use types::{LocationId, OperationId, ProductId};
