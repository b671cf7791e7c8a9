//! Dashboard read models for the stockmaster inventory system.
//!
//! The query side of the system: pure functions that compute the dashboard
//! figures from a state snapshot. Nothing in this crate mutates state.

pub mod category;
pub mod config;
pub mod summary;

pub use category::{CategoryStock, products_at_location, stock_by_category};
pub use config::ReportConfig;
pub use summary::{
    DashboardSummary, OperationsOverview, dashboard_summary, operations_overview, recent_moves,
};
