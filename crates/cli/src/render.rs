//! Plain-text rendering of invoices and the catalog.

use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use furniture_shop_core::{Catalog, Invoice, Price};

const LABEL_WIDTH: usize = 22;
const VALUE_WIDTH: usize = 28;

fn right_align(table: &mut Table, columns: &[usize]) {
    for &index in columns {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }
}

fn total_row(label: &str, value: &str) -> String {
    format!("{label:<LABEL_WIDTH$}{value:>VALUE_WIDTH$}")
}

/// Render an invoice with its line items and totals.
///
/// `free_shipping_threshold` is only used to label a waived shipping charge.
#[must_use]
pub fn invoice(invoice: &Invoice, free_shipping_threshold: Price) -> String {
    let summary = &invoice.summary;

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Item", "Qty", "Unit Price", "Line Total"]);
    for line in &invoice.lines {
        table.add_row(vec![
            Cell::new(&line.item_name),
            Cell::new(line.quantity),
            Cell::new(line.unit_price),
            Cell::new(line.line_total),
        ]);
    }
    right_align(&mut table, &[1, 2, 3]);

    let shipping = if summary.is_free_shipping {
        format!("FREE (order over {free_shipping_threshold})")
    } else {
        summary.shipping_charge.to_string()
    };

    let mut out = Vec::with_capacity(10);
    out.push(format!(
        "Invoice {}    {}",
        invoice.transaction_id.short(),
        invoice.issued_at.format("%Y-%m-%d %H:%M UTC")
    ));
    out.push(format!("Ship to: {} (Zone {})", summary.state_code, summary.zone));
    out.push(table.to_string());
    out.push(total_row("Subtotal:", &summary.subtotal.to_string()));
    out.push(total_row(&format!("Shipping (Zone {}):", summary.zone), &shipping));
    out.push(total_row("Tax:", &summary.tax.to_string()));
    out.push(total_row("Total:", &summary.total.to_string()));
    out.join("\n")
}

/// Render the catalog as an inventory table.
#[must_use]
pub fn catalog(catalog: &Catalog) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Item", "Price"]);
    for entry in catalog.entries() {
        table.add_row(vec![Cell::new(entry.name()), Cell::new(entry.unit_price())]);
    }
    right_align(&mut table, &[1]);
    table.to_string()
}
