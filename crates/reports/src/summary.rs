//! Dashboard headline figures.

use domain::{Operation, OperationStatus, OperationType};
use inventory::AppState;

use crate::config::ReportConfig;

/// The headline stat cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSummary {
    /// Sum of quantity-on-hand across the whole catalog.
    pub total_stock: i64,

    /// Products whose stock sits below the configured threshold.
    pub low_stock_alerts: usize,

    /// Receipts that are neither Done nor Cancelled.
    pub pending_receipts: usize,

    /// Deliveries that are neither Done nor Cancelled.
    pub pending_deliveries: usize,
}

/// Open-work counts per operation kind for the overview chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationsOverview {
    pub receipts: usize,
    pub deliveries: usize,
    /// Internal transfers count only those Ready to validate; drafts are not
    /// shown in the overview.
    pub internal: usize,
}

fn pending_count(operations: &[Operation], kind: OperationType) -> usize {
    operations
        .iter()
        .filter(|o| o.kind == kind && o.status.is_pending())
        .count()
}

/// Computes the headline figures for the dashboard stat cards.
pub fn dashboard_summary(state: &AppState, config: &ReportConfig) -> DashboardSummary {
    DashboardSummary {
        total_stock: state.products.iter().map(|p| p.stock).sum(),
        low_stock_alerts: state
            .products
            .iter()
            .filter(|p| p.stock < config.low_stock_threshold)
            .count(),
        pending_receipts: pending_count(&state.operations, OperationType::Receipt),
        pending_deliveries: pending_count(&state.operations, OperationType::Delivery),
    }
}

/// Counts open work per operation kind.
pub fn operations_overview(state: &AppState) -> OperationsOverview {
    OperationsOverview {
        receipts: pending_count(&state.operations, OperationType::Receipt),
        deliveries: pending_count(&state.operations, OperationType::Delivery),
        internal: state
            .operations
            .iter()
            .filter(|o| o.kind == OperationType::Internal && o.status == OperationStatus::Ready)
            .count(),
    }
}

/// The most recent operations in registry order (newest first).
pub fn recent_moves<'a>(state: &'a AppState, config: &ReportConfig) -> &'a [Operation] {
    let n = config.recent_moves_limit.min(state.operations.len());
    &state.operations[..n]
}
