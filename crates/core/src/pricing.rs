//! Order pricing: subtotal, shipping, tax and total.
//!
//! Rounding happens at three independent points: after the subtotal is
//! summed, after tax is computed, and after the total is added up. Each
//! later step consumes the already-rounded subtotal.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::order::OrderLine;
use crate::shipping::{ShippingTable, ShippingZone};
use crate::types::Price;

/// Tunable pricing rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingPolicy {
    /// Fraction of the subtotal charged as tax.
    pub tax_rate: Decimal,
    /// Subtotals strictly above this ship for free.
    pub free_shipping_threshold: Price,
}

impl PricingPolicy {
    /// Returns `true` if a subtotal earns free shipping.
    #[must_use]
    pub fn ships_free(&self, subtotal: Price) -> bool {
        subtotal > self.free_shipping_threshold
    }
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            tax_rate: Decimal::new(15, 2),
            free_shipping_threshold: Price::from_cents(10_000),
        }
    }
}

/// Computed totals for an order shipped to one destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    /// Destination as given to [`PricingEngine::compute_order`].
    pub state_code: String,
    pub zone: ShippingZone,
    /// Rounded sum of all line amounts.
    pub subtotal: Price,
    /// Zero when `is_free_shipping`, otherwise the zone's flat rate.
    pub shipping_charge: Price,
    pub is_free_shipping: bool,
    pub tax: Price,
    pub total: Price,
}

/// Prices orders against a catalog and shipping table.
#[derive(Debug, Clone, Copy, Default)]
pub struct PricingEngine {
    catalog: Catalog,
    shipping: ShippingTable,
    policy: PricingPolicy,
}

impl PricingEngine {
    #[must_use]
    pub const fn new(catalog: Catalog, shipping: ShippingTable, policy: PricingPolicy) -> Self {
        Self {
            catalog,
            shipping,
            policy,
        }
    }

    /// Replace the pricing policy.
    #[must_use]
    pub const fn with_policy(mut self, policy: PricingPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn policy(&self) -> &PricingPolicy {
        &self.policy
    }

    /// Sum of unit price times quantity, rounded once at the end.
    ///
    /// Lines for items the catalog does not carry contribute nothing.
    #[must_use]
    pub fn subtotal(&self, lines: &[OrderLine]) -> Price {
        lines
            .iter()
            .map(|line| match self.catalog.unit_price(&line.item_name) {
                Some(unit_price) => unit_price.times(line.quantity),
                None => {
                    tracing::warn!(
                        item = %line.item_name,
                        "Order line not in catalog, priced at zero"
                    );
                    Price::ZERO
                }
            })
            .sum::<Price>()
            .rounded()
    }

    /// Price an order for delivery to `state_code`.
    ///
    /// Unknown state codes ship at the zone 5 rate. There are no error
    /// paths: an empty order costs only its shipping.
    #[must_use]
    pub fn compute_order(&self, lines: &[OrderLine], state_code: &str) -> OrderSummary {
        let subtotal = self.subtotal(lines);

        let zone = self.shipping.zone_for(state_code);
        let is_free_shipping = self.policy.ships_free(subtotal);
        let shipping_charge = if is_free_shipping {
            Price::from_cents(0)
        } else {
            zone.base_cost()
        };

        let tax = subtotal.scaled(self.policy.tax_rate).rounded();
        let total = (subtotal + shipping_charge + tax).rounded();

        tracing::debug!(
            state = state_code,
            zone = zone.number(),
            %subtotal,
            %shipping_charge,
            %tax,
            %total,
            "Computed order"
        );

        OrderSummary {
            state_code: state_code.to_owned(),
            zone,
            subtotal,
            shipping_charge,
            is_free_shipping,
            tax,
            total,
        }
    }
}
