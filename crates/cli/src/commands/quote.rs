//! Non-interactive quote.
//!
//! # Usage
//!
//! ```bash
//! # Two chairs and a table shipped to California
//! shop quote --item chair=2 --item table=1 --state CA
//!
//! # Same order as JSON
//! shop quote -i chair=2 -i table=1 -s ca --json
//! ```

use std::io::Write;

use furniture_shop_core::{Invoice, Order, PricingEngine, StateCode, TransactionId, parse_quantity};

use crate::error::CliError;
use crate::render;

/// Split a `NAME=QTY` argument. The quantity defaults to 1 when omitted.
fn split_item_arg(arg: &str) -> (&str, &str) {
    arg.rsplit_once('=').unwrap_or((arg, "1"))
}

/// Price the given `NAME=QTY` selections for delivery to `state`.
///
/// Items are validated against the catalog and merged exactly as in an
/// interactive purchase.
///
/// # Errors
///
/// Returns an error for an unknown item, a bad quantity, or an invalid
/// state code.
pub fn build(engine: &PricingEngine, items: &[String], state: &str) -> Result<Invoice, CliError> {
    let mut order = Order::new();
    for arg in items {
        let (name, quantity) = split_item_arg(arg);
        let entry = engine.catalog().resolve(name)?;
        order.add_selection(entry.name(), parse_quantity(quantity)?);
    }
    let state_code = StateCode::parse(state)?;

    let summary = engine.compute_order(order.lines(), state_code.as_str());
    Ok(Invoice::build(
        TransactionId::new(),
        order.lines(),
        summary,
        engine.catalog(),
    ))
}

/// Print a quote to `out`, as a rendered invoice or as JSON.
///
/// # Errors
///
/// Returns the errors of [`build`], or an error if the output cannot be
/// written.
pub fn run(
    engine: &PricingEngine,
    items: &[String],
    state: &str,
    json: bool,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let invoice = build(engine, items, state)?;
    tracing::info!(
        state = %invoice.summary.state_code,
        total = %invoice.summary.total,
        "Quote computed"
    );

    if json {
        writeln!(out, "{}", invoice.to_json_pretty()?)?;
    } else {
        let threshold = engine.policy().free_shipping_threshold;
        writeln!(out, "{}", render::invoice(&invoice, threshold))?;
    }
    Ok(())
}
