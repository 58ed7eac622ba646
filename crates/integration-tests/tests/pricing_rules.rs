//! Integration tests for pricing invariants.
//!
//! Each test sweeps the catalog, a range of quantities, and every state code
//! rather than checking a single hand-picked order.

use std::num::NonZeroU32;

use furniture_shop_core::{
    Catalog, Order, OrderLine, Price, PricingEngine, STATE_ABBREVIATIONS, ShippingTable,
    ShippingZone, StateCode,
};
use rust_decimal::Decimal;

fn qty(n: u32) -> NonZeroU32 {
    NonZeroU32::new(n).unwrap_or(NonZeroU32::MIN)
}

/// Every single-item order of 1..=5 units.
fn small_orders() -> Vec<Vec<OrderLine>> {
    let catalog = Catalog::furniture();
    catalog
        .entries()
        .iter()
        .flat_map(|entry| {
            (1..=5).map(move |quantity| {
                vec![OrderLine {
                    item_name: entry.name().to_owned(),
                    quantity,
                }]
            })
        })
        .collect()
}

fn expected_subtotal(lines: &[OrderLine]) -> Price {
    let catalog = Catalog::furniture();
    lines
        .iter()
        .map(|line| {
            catalog
                .unit_price(&line.item_name)
                .unwrap_or(Price::ZERO)
                .times(line.quantity)
        })
        .sum::<Price>()
        .rounded()
}

// =============================================================================
// Shipping
// =============================================================================

#[test]
fn test_free_shipping_above_threshold_for_every_state() {
    let engine = PricingEngine::default();
    let threshold = Price::from_cents(10_000);

    for lines in small_orders() {
        for state in STATE_ABBREVIATIONS {
            let summary = engine.compute_order(&lines, state);
            if summary.subtotal > threshold {
                assert!(summary.is_free_shipping, "{lines:?} {state}");
                assert_eq!(summary.shipping_charge, Price::ZERO, "{lines:?} {state}");
            } else {
                assert!(!summary.is_free_shipping, "{lines:?} {state}");
                assert_eq!(
                    summary.shipping_charge,
                    summary.zone.base_cost(),
                    "{lines:?} {state}"
                );
            }
        }
    }
}

#[test]
fn test_every_valid_state_maps_to_zone_1_through_6() {
    let table = ShippingTable::united_states();
    for state in STATE_ABBREVIATIONS {
        let code = StateCode::parse(state).map(|c| c.to_string());
        assert_eq!(code.as_deref(), Ok(state));

        let zone = table.zone_for(state).number();
        assert!((1..=6).contains(&zone), "{state} -> {zone}");
    }
}

#[test]
fn test_unmapped_codes_use_zone_5_rate() {
    let engine = PricingEngine::default();
    let lines = [OrderLine {
        item_name: "Chair".to_owned(),
        quantity: 1,
    }];

    for code in ["ZZ", "PR", "GU", "ca", ""] {
        let summary = engine.compute_order(&lines, code);
        assert_eq!(summary.zone, ShippingZone::new(5), "{code:?}");
        assert_eq!(summary.shipping_charge, Price::from_cents(4500), "{code:?}");
    }
}

// =============================================================================
// Subtotal, Tax and Total
// =============================================================================

#[test]
fn test_subtotal_is_sum_of_lines() {
    let engine = PricingEngine::default();
    for lines in small_orders() {
        assert_eq!(engine.subtotal(&lines), expected_subtotal(&lines), "{lines:?}");
    }
}

#[test]
fn test_subtotal_independent_of_selection_order() {
    let engine = PricingEngine::default();
    let selections = [("Chair", 2), ("Umbrella", 3), ("Table", 1), ("Recliner", 4)];

    let mut forward = Order::new();
    for (name, n) in selections {
        forward.add_selection(name, qty(n));
    }
    let mut backward = Order::new();
    for (name, n) in selections.iter().rev() {
        backward.add_selection(name, qty(*n));
    }

    assert_eq!(
        engine.subtotal(forward.lines()),
        engine.subtotal(backward.lines())
    );
}

#[test]
fn test_tax_and_total_use_rounded_subtotal() {
    let engine = PricingEngine::default();
    let rate = Decimal::new(15, 2);

    for lines in small_orders() {
        for state in ["NY", "TX", "HI"] {
            let summary = engine.compute_order(&lines, state);

            assert_eq!(summary.tax, summary.subtotal.scaled(rate).rounded());
            assert_eq!(
                summary.total,
                (summary.subtotal + summary.shipping_charge + summary.tax).rounded()
            );
        }
    }
}

#[test]
fn test_summary_json_amounts_have_two_decimals() {
    let engine = PricingEngine::default();
    let summary = engine.compute_order(
        &[OrderLine {
            item_name: "Recliner".to_owned(),
            quantity: 3,
        }],
        "CA",
    );
    let json = serde_json::to_value(&summary).unwrap_or_default();

    for field in ["subtotal", "shipping_charge", "tax", "total"] {
        let value = json[field].as_str().unwrap_or_default();
        let decimals = value.split_once('.').map(|(_, d)| d.len());
        assert_eq!(decimals, Some(2), "{field} = {value}");
    }
}
