//! Stock breakdowns by category and by location.

use common::LocationId;
use inventory::AppState;

/// Total on-hand quantity for one product category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryStock {
    pub category: String,
    pub total: i64,
}

/// Sums stock per category, keeping first-seen category order.
pub fn stock_by_category(state: &AppState) -> Vec<CategoryStock> {
    let mut breakdown: Vec<CategoryStock> = Vec::new();
    for product in &state.products {
        match breakdown.iter_mut().find(|c| c.category == product.category) {
            Some(entry) => entry.total += product.stock,
            None => breakdown.push(CategoryStock {
                category: product.category.clone(),
                total: product.stock,
            }),
        }
    }
    breakdown
}

/// Counts how many catalog products currently sit at a location.
pub fn products_at_location(state: &AppState, location: &LocationId) -> usize {
    state
        .products
        .iter()
        .filter(|p| &p.location_id == location)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::ProductId;
    use inventory::{InventoryService, StockAdjustment, seed};

    #[test]
    fn seeded_breakdown_keeps_catalog_order() {
        let state = seed::initial_state();
        let breakdown = stock_by_category(&state);

        let rows: Vec<_> = breakdown
            .iter()
            .map(|c| (c.category.as_str(), c.total))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("Raw Material", 150),
                ("Furniture", 45),
                ("Hardware", 500),
                ("Consumable", 20),
                ("Accessories", 0),
            ]
        );
    }

    #[test]
    fn same_category_products_accumulate() {
        let mut state = seed::initial_state();
        let mut extra = state.products[0].clone();
        extra.id = ProductId::new("p6");
        extra.name = "Steel Rods 12mm".to_string();
        extra.stock = 50;
        state.products.push(extra);

        let breakdown = stock_by_category(&state);
        let raw = breakdown
            .iter()
            .find(|c| c.category == "Raw Material")
            .unwrap();
        assert_eq!(raw.total, 200);
    }

    #[test]
    fn products_at_location_follows_adjustments() {
        let mut service = InventoryService::seeded();
        let wh_stock = LocationId::new("loc_wh_stock");
        let wh_pack = LocationId::new("loc_wh_pack");

        assert_eq!(products_at_location(service.state(), &wh_stock), 5);
        assert_eq!(products_at_location(service.state(), &wh_pack), 0);

        service.adjust_stock(StockAdjustment::new("p5", 30, "loc_wh_pack"));

        assert_eq!(products_at_location(service.state(), &wh_stock), 4);
        assert_eq!(products_at_location(service.state(), &wh_pack), 1);
    }
}
