//! Demo entry point.
//!
//! Seeds the registries, prints the dashboard, validates every operation that
//! is ready, and prints the dashboard again.

use domain::OperationStatus;
use inventory::InventoryService;
use reports::ReportConfig;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn print_dashboard(service: &InventoryService, config: &ReportConfig) {
    let state = service.state();
    let summary = reports::dashboard_summary(state, config);
    let overview = reports::operations_overview(state);

    println!("Total items in stock  {}", summary.total_stock);
    println!("Low stock alerts      {}", summary.low_stock_alerts);
    println!("Pending receipts      {}", summary.pending_receipts);
    println!("Pending deliveries    {}", summary.pending_deliveries);
    println!("Ready internal moves  {}", overview.internal);

    println!("\nStock by category");
    for entry in reports::stock_by_category(state) {
        println!("  {:<14} {:>6}", entry.category, entry.total);
    }

    println!("\nRecent moves");
    for op in reports::recent_moves(state, config) {
        println!(
            "  {:<12} {}  {} -> {}  [{}]",
            op.reference, op.date, op.source_location_id, op.dest_location_id, op.status
        );
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ReportConfig::from_env();
    let mut service = InventoryService::seeded();

    println!("== StockMaster ==\n");
    print_dashboard(&service, &config);

    let ready: Vec<_> = service
        .state()
        .operations
        .iter()
        .filter(|o| o.status == OperationStatus::Ready)
        .map(|o| (o.id.clone(), o.reference.clone()))
        .collect();

    for (id, reference) in ready {
        tracing::info!(%reference, "validating operation");
        service.validate_operation(&id);
    }

    println!("\n== After validating ready operations ==\n");
    print_dashboard(&service, &config);
}
