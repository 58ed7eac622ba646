//! Interactive purchase.
//!
//! # Usage
//!
//! ```bash
//! # One transaction
//! shop purchase
//!
//! # Keep serving shoppers until someone answers "n" to "Shop again?"
//! shop purchase --repeat
//! ```
//!
//! Press Ctrl-D at any prompt to cancel the current transaction.

use std::io::{BufRead, Write};

use furniture_shop_core::session::parse_yes_no;
use furniture_shop_core::{CheckoutSession, Outcome, PricingEngine, Prompter};

use crate::error::CliError;
use crate::render;
use crate::terminal::Terminal;

const SHOP_AGAIN_PROMPT: &str = "Shop again? y/n";
const SHOP_AGAIN_ERROR: &str = "Please enter 'y' for yes or 'n' for no.";

/// Tally of finished transactions.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PurchaseStats {
    pub completed: u32,
    pub cancelled: u32,
}

/// Run checkout transactions against a terminal.
///
/// Without `repeat` exactly one transaction runs. With it, the shopper is
/// asked whether to start another after each one.
///
/// # Errors
///
/// Returns an error if an invoice cannot be written.
pub fn run<R: BufRead, W: Write>(
    engine: PricingEngine,
    terminal: &mut Terminal<R, W>,
    repeat: bool,
) -> Result<PurchaseStats, CliError> {
    let threshold = engine.policy().free_shipping_threshold;
    let mut session = CheckoutSession::new(engine);
    let mut stats = PurchaseStats::default();

    loop {
        match session.run(&mut *terminal) {
            Outcome::Completed(invoice) => {
                stats.completed += 1;
                terminal.write_block(&render::invoice(&invoice, threshold))?;
            }
            Outcome::Cancelled => stats.cancelled += 1,
        }

        if !repeat || !shop_again(terminal) {
            break;
        }
    }

    tracing::info!(
        completed = stats.completed,
        cancelled = stats.cancelled,
        "Purchase session finished"
    );
    Ok(stats)
}

fn shop_again(port: &mut impl Prompter) -> bool {
    loop {
        let Some(answer) = port.prompt(SHOP_AGAIN_PROMPT) else {
            return false;
        };
        match parse_yes_no(&answer) {
            Some(again) => return again,
            None => port.notify(SHOP_AGAIN_ERROR),
        }
    }
}
