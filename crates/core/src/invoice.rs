//! Invoice model handed to presentation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::order::OrderLine;
use crate::pricing::OrderSummary;
use crate::types::{Price, TransactionId};

/// One printed row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceLine {
    pub item_name: String,
    pub quantity: u32,
    pub unit_price: Price,
    /// Unit price times quantity, rounded to cents. Display only; the
    /// subtotal is computed from unrounded line amounts.
    pub line_total: Price,
}

/// A completed transaction, ready to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    pub transaction_id: TransactionId,
    pub issued_at: DateTime<Utc>,
    pub lines: Vec<InvoiceLine>,
    pub summary: OrderSummary,
}

impl Invoice {
    /// Assemble an invoice from order lines and their computed summary.
    ///
    /// Lines whose item is not in `catalog` are listed at a zero price.
    #[must_use]
    pub fn build(
        transaction_id: TransactionId,
        lines: &[OrderLine],
        summary: OrderSummary,
        catalog: &Catalog,
    ) -> Self {
        let lines = lines
            .iter()
            .map(|line| {
                let unit_price = catalog.unit_price(&line.item_name).unwrap_or(Price::ZERO);
                InvoiceLine {
                    item_name: line.item_name.clone(),
                    quantity: line.quantity,
                    unit_price,
                    line_total: unit_price.times(line.quantity).rounded(),
                }
            })
            .collect();

        Self {
            transaction_id,
            issued_at: Utc::now(),
            lines,
            summary,
        }
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn unit_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Serialize as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::pricing::PricingEngine;

    fn lines() -> Vec<OrderLine> {
        vec![
            OrderLine {
                item_name: "Chair".to_owned(),
                quantity: 2,
            },
            OrderLine {
                item_name: "Table".to_owned(),
                quantity: 1,
            },
        ]
    }

    fn invoice() -> Invoice {
        let engine = PricingEngine::default();
        let summary = engine.compute_order(&lines(), "NY");
        Invoice::build(TransactionId::new(), &lines(), summary, engine.catalog())
    }

    #[test]
    fn test_build_rows() {
        let invoice = invoice();

        assert_eq!(invoice.lines.len(), 2);
        let chair = invoice.lines.first().unwrap();
        assert_eq!(chair.item_name, "Chair");
        assert_eq!(chair.quantity, 2);
        assert_eq!(chair.unit_price, Price::from_cents(2550));
        assert_eq!(chair.line_total, Price::from_cents(5100));
        assert_eq!(invoice.summary.subtotal, Price::from_cents(10_095));
        assert_eq!(invoice.unit_count(), 3);
    }

    #[test]
    fn test_unknown_item_row() {
        let orphan = [OrderLine {
            item_name: "Sofa".to_owned(),
            quantity: 1,
        }];
        let engine = PricingEngine::default();
        let summary = engine.compute_order(&orphan, "CA");
        let invoice = Invoice::build(TransactionId::new(), &orphan, summary, engine.catalog());

        assert_eq!(invoice.lines.first().unwrap().line_total, Price::ZERO);
    }

    #[test]
    fn test_json_shape() {
        let json: serde_json::Value =
            serde_json::from_str(&invoice().to_json_pretty().unwrap()).unwrap();

        assert_eq!(json["lines"][1]["item_name"], "Table");
        assert_eq!(json["lines"][1]["line_total"], "49.95");
        assert_eq!(json["summary"]["state_code"], "NY");
        assert_eq!(json["summary"]["total"], "116.09");
        assert!(json["transaction_id"].is_string());
    }
}
