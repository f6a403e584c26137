//! Integration tests for inventory optimization

use crate::monthly;
use rust_decimal_macros::dec;
use smb_analytics::inventory::InventoryInput;
use smb_analytics::optimize_inventory;

fn request() -> InventoryInput {
    InventoryInput {
        historical_demand: monthly(&[220.0, 180.0, 260.0, 240.0, 200.0, 300.0]),
        lead_time_days: 21,
        holding_cost_per_unit: dec!(1.75),
        ordering_cost: dec!(85),
        stockout_cost: Some(dec!(400)),
    }
}

#[test]
fn test_idempotent() {
    let req = request();
    let a = optimize_inventory(&req).unwrap();
    let b = optimize_inventory(&req).unwrap();

    assert_eq!(a.economic_order_quantity, b.economic_order_quantity);
    assert_eq!(a.safety_stock, b.safety_stock);
    assert_eq!(a.reorder_point, b.reorder_point);
    assert_eq!(a, b);
}

#[test]
fn test_policy_relationships() {
    let result = optimize_inventory(&request()).unwrap();

    assert!(result.economic_order_quantity > 0.0);
    assert!(result.safety_stock > 0.0);
    assert!(result.reorder_point >= result.safety_stock);
    assert!(result.optimal_stock_level > result.reorder_point);
    assert!(result.total_cost > result.annual_holding_cost + result.annual_ordering_cost);
    assert!(result
        .recommendations
        .iter()
        .any(|r| r.starts_with("Reorder when stock falls to")));
}

#[test]
fn test_rejects_non_positive_costs() {
    let mut req = request();
    req.holding_cost_per_unit = dec!(0);
    assert!(optimize_inventory(&req).unwrap_err().is_validation());

    let mut req = request();
    req.ordering_cost = dec!(0);
    assert!(optimize_inventory(&req).unwrap_err().is_validation());

    let mut req = request();
    req.historical_demand.clear();
    assert!(optimize_inventory(&req).unwrap_err().is_validation());
}
