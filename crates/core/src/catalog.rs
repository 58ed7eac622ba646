//! Fixed item catalog.

use crate::types::Price;

/// Errors that can occur when resolving an item name.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ItemError {
    /// Nothing was entered.
    #[error("No item was entered. Please enter a valid item name.")]
    Empty,
    /// The name does not match any catalog entry.
    #[error("\"{input}\" is not a valid item. Please choose from: {choices}.")]
    Unknown {
        /// Trimmed user input.
        input: String,
        /// Human-readable list of valid names.
        choices: String,
    },
}

/// One item for sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    name: &'static str,
    unit_price_cents: i64,
}

impl CatalogEntry {
    /// Create an entry. `unit_price_cents` must not be negative.
    #[must_use]
    pub const fn new(name: &'static str, unit_price_cents: i64) -> Self {
        Self {
            name,
            unit_price_cents,
        }
    }

    /// Display name, in its canonical capitalization.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Price of a single unit.
    #[must_use]
    pub fn unit_price(&self) -> Price {
        Price::from_cents(self.unit_price_cents)
    }

    fn matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

const FURNITURE: &[CatalogEntry] = &[
    CatalogEntry::new("Chair", 2550),
    CatalogEntry::new("Recliner", 3775),
    CatalogEntry::new("Table", 4995),
    CatalogEntry::new("Umbrella", 2489),
];

/// A read-only list of items, in display order.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    entries: &'static [CatalogEntry],
}

impl Catalog {
    /// Build a catalog over a static entry table.
    #[must_use]
    pub const fn new(entries: &'static [CatalogEntry]) -> Self {
        Self { entries }
    }

    /// The shop's standard furniture catalog.
    #[must_use]
    pub const fn furniture() -> Self {
        Self::new(FURNITURE)
    }

    /// All entries in display order.
    #[must_use]
    pub const fn entries(&self) -> &'static [CatalogEntry] {
        self.entries
    }

    /// Case-insensitive lookup. The first matching entry wins.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&'static CatalogEntry> {
        self.entries.iter().find(|entry| entry.matches(name))
    }

    /// Unit price of the named item, if it is sold here.
    #[must_use]
    pub fn unit_price(&self, name: &str) -> Option<Price> {
        self.find(name).map(CatalogEntry::unit_price)
    }

    /// Resolve raw user input to an entry, trimming whitespace first.
    ///
    /// # Errors
    ///
    /// Returns [`ItemError::Empty`] for blank input and
    /// [`ItemError::Unknown`] when no entry matches.
    pub fn resolve(&self, input: &str) -> Result<&'static CatalogEntry, ItemError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ItemError::Empty);
        }

        self.find(trimmed).ok_or_else(|| ItemError::Unknown {
            input: trimmed.to_owned(),
            choices: self.choices(),
        })
    }

    /// Item names joined for a prompt, e.g. `"Chair, Table, or Umbrella"`.
    #[must_use]
    pub fn choices(&self) -> String {
        let names: Vec<&str> = self.entries.iter().map(CatalogEntry::name).collect();
        match names.as_slice() {
            [] => String::new(),
            [only] => (*only).to_owned(),
            [a, b] => format!("{a} or {b}"),
            [rest @ .., last] => format!("{}, or {last}", rest.join(", ")),
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::furniture()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_furniture_prices() {
        let catalog = Catalog::furniture();
        assert_eq!(catalog.unit_price("Chair"), Some(Price::from_cents(2550)));
        assert_eq!(catalog.unit_price("Recliner"), Some(Price::from_cents(3775)));
        assert_eq!(catalog.unit_price("Table"), Some(Price::from_cents(4995)));
        assert_eq!(catalog.unit_price("Umbrella"), Some(Price::from_cents(2489)));
        assert_eq!(catalog.unit_price("Sofa"), None);
    }

    #[test]
    fn test_find_is_case_insensitive() {
        let catalog = Catalog::furniture();
        assert_eq!(catalog.find("rEcLiNeR").unwrap().name(), "Recliner");
        assert_eq!(catalog.find("TABLE").unwrap().name(), "Table");
    }

    #[test]
    fn test_find_first_match_wins() {
        const DUPLICATES: &[CatalogEntry] = &[
            CatalogEntry::new("Lamp", 1000),
            CatalogEntry::new("LAMP", 2000),
        ];
        let catalog = Catalog::new(DUPLICATES);
        assert_eq!(catalog.unit_price("lamp"), Some(Price::from_cents(1000)));
    }

    #[test]
    fn test_resolve_trims() {
        let entry = Catalog::furniture().resolve("  chair ").unwrap();
        assert_eq!(entry.name(), "Chair");
    }

    #[test]
    fn test_resolve_empty() {
        assert_eq!(Catalog::furniture().resolve(" \t"), Err(ItemError::Empty));
    }

    #[test]
    fn test_resolve_unknown_message() {
        let err = Catalog::furniture().resolve(" Sofa ").unwrap_err();
        assert_eq!(
            err.to_string(),
            "\"Sofa\" is not a valid item. Please choose from: Chair, Recliner, Table, or Umbrella."
        );
    }

    #[test]
    fn test_choices_short_lists() {
        const ONE: &[CatalogEntry] = &[CatalogEntry::new("Desk", 100)];
        const TWO: &[CatalogEntry] =
            &[CatalogEntry::new("Desk", 100), CatalogEntry::new("Bed", 200)];
        assert_eq!(Catalog::new(ONE).choices(), "Desk");
        assert_eq!(Catalog::new(TWO).choices(), "Desk or Bed");
        assert_eq!(Catalog::new(&[]).choices(), "");
    }
}
