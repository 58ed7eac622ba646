//! Order accumulation.
//!
//! An [`Order`] holds one line per distinct item. Selecting the same item
//! again, in any capitalization, adds to the existing line.

use core::num::NonZeroU32;

use serde::{Deserialize, Serialize};

/// One distinct item and its accumulated quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    /// Item name as first selected.
    pub item_name: String,
    /// Sum of every selection of this item. Always greater than zero.
    pub quantity: u32,
}

impl OrderLine {
    fn is_item(&self, name: &str) -> bool {
        self.item_name.to_lowercase() == name.to_lowercase()
    }
}

/// The in-progress order of a single transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    lines: Vec<OrderLine>,
}

impl Order {
    /// Create an empty order.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Record a selection, merging with an existing line for the same item.
    ///
    /// Quantities saturate at `u32::MAX`.
    pub fn add_selection(&mut self, item_name: &str, quantity: NonZeroU32) {
        if let Some(line) = self.lines.iter_mut().find(|line| line.is_item(item_name)) {
            line.quantity = line.quantity.saturating_add(quantity.get());
            tracing::debug!(item = %line.item_name, quantity = line.quantity, "Merged selection");
            return;
        }

        self.lines.push(OrderLine {
            item_name: item_name.to_owned(),
            quantity: quantity.get(),
        });
        tracing::debug!(item = %item_name, quantity = quantity.get(), "Added order line");
    }

    /// Remove every line.
    pub fn reset(&mut self) {
        self.lines.clear();
    }

    /// Lines in first-selection order.
    #[must_use]
    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    /// Number of distinct items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns `true` if nothing has been selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Accumulated quantity for an item, or zero if it was never selected.
    #[must_use]
    pub fn quantity_of(&self, item_name: &str) -> u32 {
        self.lines
            .iter()
            .find(|line| line.is_item(item_name))
            .map_or(0, |line| line.quantity)
    }
}
