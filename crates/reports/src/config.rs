//! Report configuration loaded from environment variables.

/// Thresholds for the dashboard queries, with sensible defaults.
///
/// Reads from environment variables:
/// - `STOCK_LOW_THRESHOLD` — low-stock alert cutoff (default: `10`)
/// - `STOCK_RECENT_MOVES` — rows in the recent-moves table (default: `5`)
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub low_stock_threshold: i64,
    pub recent_moves_limit: usize,
}

impl ReportConfig {
    /// Loads configuration from environment variables, falling back to
    /// defaults.
    pub fn from_env() -> Self {
        Self {
            low_stock_threshold: std::env::var("STOCK_LOW_THRESHOLD")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            recent_moves_limit: std::env::var("STOCK_RECENT_MOVES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            low_stock_threshold: 10,
            recent_moves_limit: 5,
        }
    }
}
