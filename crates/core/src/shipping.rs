//! Shipping zones and flat zone rates.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::types::Price;

/// Zone used for any state code missing from the zone table.
pub const FALLBACK_ZONE: ShippingZone = ShippingZone(5);

/// Cost charged for a zone number outside the rate table.
const FALLBACK_COST_CENTS: i64 = 4500;

#[rustfmt::skip]
const STATE_ZONES: &[(&str, u8)] = &[
    // Northeast
    ("CT", 1), ("DE", 1), ("MA", 1), ("MD", 1), ("ME", 1), ("NH", 1),
    ("NJ", 1), ("NY", 1), ("PA", 1), ("RI", 1), ("VT", 1), ("DC", 1),
    // Southeast
    ("AL", 2), ("FL", 2), ("GA", 2), ("MS", 2), ("NC", 2), ("SC", 2),
    ("TN", 2), ("VA", 2), ("WV", 2),
    // Great Lakes
    ("IL", 3), ("IN", 3), ("KY", 3), ("MI", 3), ("MN", 3), ("OH", 3),
    ("WI", 3),
    // Central
    ("AR", 4), ("IA", 4), ("KS", 4), ("LA", 4), ("MO", 4), ("ND", 4),
    ("NE", 4), ("OK", 4), ("SD", 4), ("TX", 4),
    // West
    ("AZ", 5), ("CA", 5), ("CO", 5), ("ID", 5), ("MT", 5), ("NM", 5),
    ("NV", 5), ("OR", 5), ("UT", 5), ("WA", 5), ("WY", 5),
    // Non-contiguous
    ("AK", 6), ("HI", 6),
];

/// A shipping cost bucket, normally 1 through 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShippingZone(u8);

impl ShippingZone {
    /// Wrap a zone number. Numbers outside 1-6 are allowed and priced at
    /// the fallback rate.
    #[must_use]
    pub const fn new(zone: u8) -> Self {
        Self(zone)
    }

    /// The zone number.
    #[must_use]
    pub const fn number(&self) -> u8 {
        self.0
    }

    /// Flat cost to ship an order to this zone.
    #[must_use]
    pub fn base_cost(&self) -> Price {
        let cents = match self.0 {
            1 => 0,
            2 => 2000,
            3 => 3000,
            4 => 3500,
            5 => 4500,
            6 => 5000,
            _ => FALLBACK_COST_CENTS,
        };
        Price::from_cents(cents)
    }
}

impl fmt::Display for ShippingZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Maps state codes to shipping zones.
#[derive(Debug, Clone, Copy)]
pub struct ShippingTable {
    zones: &'static [(&'static str, u8)],
}

impl ShippingTable {
    /// Build a table over a static `(state, zone)` list.
    #[must_use]
    pub const fn new(zones: &'static [(&'static str, u8)]) -> Self {
        Self { zones }
    }

    /// The continental US zone table (plus Alaska, Hawaii and DC).
    #[must_use]
    pub const fn united_states() -> Self {
        Self::new(STATE_ZONES)
    }

    /// Zone for an uppercase two-letter code, or [`FALLBACK_ZONE`].
    ///
    /// The lookup is case-sensitive; callers normalize first.
    #[must_use]
    pub fn zone_for(&self, state_code: &str) -> ShippingZone {
        self.zones
            .iter()
            .find(|(code, _)| *code == state_code)
            .map_or(FALLBACK_ZONE, |&(_, zone)| ShippingZone(zone))
    }
}

impl Default for ShippingTable {
    fn default() -> Self {
        Self::united_states()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::STATE_ABBREVIATIONS;

    #[test]
    fn test_zone_lookup() {
        let table = ShippingTable::united_states();
        assert_eq!(table.zone_for("NY"), ShippingZone::new(1));
        assert_eq!(table.zone_for("FL"), ShippingZone::new(2));
        assert_eq!(table.zone_for("OH"), ShippingZone::new(3));
        assert_eq!(table.zone_for("TX"), ShippingZone::new(4));
        assert_eq!(table.zone_for("CA"), ShippingZone::new(5));
        assert_eq!(table.zone_for("HI"), ShippingZone::new(6));
    }

    #[test]
    fn test_unknown_code_falls_back_to_zone_5() {
        let table = ShippingTable::united_states();
        assert_eq!(table.zone_for("ZZ"), FALLBACK_ZONE);
        assert_eq!(table.zone_for(""), FALLBACK_ZONE);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(ShippingTable::united_states().zone_for("ny"), FALLBACK_ZONE);
    }

    #[test]
    fn test_every_state_is_zoned() {
        let table = ShippingTable::united_states();
        for code in STATE_ABBREVIATIONS {
            assert!(
                table.zones.iter().any(|(zoned, _)| *zoned == code),
                "{code} missing from zone table"
            );
        }
        assert_eq!(table.zones.len(), STATE_ABBREVIATIONS.len());
    }

    #[test]
    fn test_base_costs() {
        let expected = [0, 2000, 3000, 3500, 4500, 5000];
        for (zone, cents) in (1..=6).zip(expected) {
            assert_eq!(
                ShippingZone::new(zone).base_cost(),
                Price::from_cents(cents),
                "zone {zone}"
            );
        }
    }

    #[test]
    fn test_out_of_range_zone_uses_fallback_cost() {
        assert_eq!(ShippingZone::new(0).base_cost(), Price::from_cents(4500));
        assert_eq!(ShippingZone::new(7).base_cost(), Price::from_cents(4500));
        assert_eq!(ShippingZone::new(u8::MAX).base_cost(), Price::from_cents(4500));
    }
}
