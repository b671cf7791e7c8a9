//! Application state and registries for the stockmaster inventory system.
//!
//! This crate holds the three in-memory registries (products, operations,
//! locations) behind a single-owner service. Every mutation runs to
//! completion before the next one is accepted; nothing here is persisted and
//! the state lives exactly as long as the process.

pub mod commands;
pub mod error;
pub mod seed;
pub mod service;
pub mod state;

pub use commands::{NewOperation, NewOperationLine, NewProduct, StockAdjustment};
pub use error::InventoryError;
pub use service::InventoryService;
pub use state::AppState;
