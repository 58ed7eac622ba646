//! Inventory listing.

use std::io::Write;

use furniture_shop_core::Catalog;

use crate::error::CliError;
use crate::render;

/// Print the catalog table to `out`.
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn run(catalog: &Catalog, out: &mut impl Write) -> Result<(), CliError> {
    writeln!(out, "{}", render::catalog(catalog))?;
    Ok(())
}
