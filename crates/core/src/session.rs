//! Interactive checkout as an explicit state machine.
//!
//! The session never touches a terminal. Every question goes through a
//! [`Prompter`], so the same flow runs against stdin in the CLI and against
//! scripted answers in tests.
//!
//! ```text
//! SelectItem -> SelectQuantity -> ContinueOrCheckout -+-> SelectItem
//!                                                     +-> SelectState -> Compute -> Done
//! (any prompt) -> Cancelled
//! ```

use crate::catalog::CatalogEntry;
use crate::invoice::Invoice;
use crate::order::Order;
use crate::pricing::PricingEngine;
use crate::types::{StateCode, TransactionId, parse_quantity};

/// Shown when the user abandons a transaction.
pub const CANCELLED_MESSAGE: &str =
    "Your transaction has been cancelled. We hope to see you again soon!";

const CONTINUE_PROMPT: &str = "Continue shopping? y/n";
const CONTINUE_ERROR: &str = "Please enter 'y' for yes or 'n' for no.";
const STATE_PROMPT: &str = "Please enter the two-letter state abbreviation: ";

/// Input/output port used by [`CheckoutSession`].
pub trait Prompter {
    /// Ask a question. `None` means the user cancelled.
    fn prompt(&mut self, message: &str) -> Option<String>;

    /// Show a message that needs no answer.
    fn notify(&mut self, message: &str);
}

impl<P: Prompter + ?Sized> Prompter for &mut P {
    fn prompt(&mut self, message: &str) -> Option<String> {
        (**self).prompt(message)
    }

    fn notify(&mut self, message: &str) {
        (**self).notify(message);
    }
}

/// Interpret a yes/no answer. Accepts `y`, `yes`, `n`, `no` in any case.
#[must_use]
pub fn parse_yes_no(input: &str) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Position in the checkout flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    SelectItem,
    SelectQuantity(&'static CatalogEntry),
    ContinueOrCheckout,
    SelectState,
    Compute(StateCode),
    Done(Box<Invoice>),
    Cancelled,
}

impl Step {
    /// Returns `true` for `Done` and `Cancelled`.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Done(_) | Self::Cancelled)
    }
}

/// How a transaction ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Completed(Box<Invoice>),
    Cancelled,
}

/// One shopper's checkout. Owns the in-progress order.
#[derive(Debug)]
pub struct CheckoutSession {
    engine: PricingEngine,
    order: Order,
    transaction_id: TransactionId,
}

impl CheckoutSession {
    #[must_use]
    pub fn new(engine: PricingEngine) -> Self {
        Self {
            engine,
            order: Order::new(),
            transaction_id: TransactionId::new(),
        }
    }

    /// The order as accumulated so far.
    #[must_use]
    pub const fn order(&self) -> &Order {
        &self.order
    }

    #[must_use]
    pub const fn transaction_id(&self) -> TransactionId {
        self.transaction_id
    }

    /// Start a fresh transaction: empty order, new ID.
    pub fn begin(&mut self) {
        self.order.reset();
        self.transaction_id = TransactionId::new();
        tracing::info!(transaction_id = %self.transaction_id, "Transaction started");
    }

    /// Run one full transaction to completion or cancellation.
    ///
    /// The order is empty again when this returns, whatever the outcome.
    pub fn run<P: Prompter>(&mut self, mut port: P) -> Outcome {
        self.begin();

        let mut step = Step::SelectItem;
        while !step.is_terminal() {
            step = self.advance(step, &mut port);
        }

        self.order.reset();
        match step {
            Step::Done(invoice) => Outcome::Completed(invoice),
            _ => Outcome::Cancelled,
        }
    }

    /// Perform a single transition.
    ///
    /// Invalid input notifies the port and returns the same step so the
    /// question is asked again. Terminal steps are returned unchanged.
    pub fn advance<P: Prompter>(&mut self, step: Step, port: &mut P) -> Step {
        match step {
            Step::SelectItem => self.select_item(port),
            Step::SelectQuantity(entry) => self.select_quantity(entry, port),
            Step::ContinueOrCheckout => self.continue_or_checkout(port),
            Step::SelectState => self.select_state(port),
            Step::Compute(state_code) => self.compute(&state_code),
            terminal @ (Step::Done(_) | Step::Cancelled) => terminal,
        }
    }

    fn select_item<P: Prompter>(&self, port: &mut P) -> Step {
        let catalog = self.engine.catalog();
        let message = format!(
            "What item would you like to buy today: {}?",
            catalog.choices()
        );
        let Some(input) = port.prompt(&message) else {
            return self.cancel(port);
        };

        match catalog.resolve(&input) {
            Ok(entry) => Step::SelectQuantity(entry),
            Err(e) => {
                tracing::debug!(input = %input.trim(), "Rejected item");
                port.notify(&e.to_string());
                Step::SelectItem
            }
        }
    }

    fn select_quantity<P: Prompter>(&mut self, entry: &'static CatalogEntry, port: &mut P) -> Step {
        let message = format!("How many {}(s) would you like to buy?", entry.name());
        let Some(input) = port.prompt(&message) else {
            return self.cancel(port);
        };

        match parse_quantity(&input) {
            Ok(quantity) => {
                self.order.add_selection(entry.name(), quantity);
                Step::ContinueOrCheckout
            }
            Err(e) => {
                tracing::debug!(input = %input.trim(), "Rejected quantity");
                port.notify(&e.to_string());
                Step::SelectQuantity(entry)
            }
        }
    }

    fn continue_or_checkout<P: Prompter>(&self, port: &mut P) -> Step {
        let Some(input) = port.prompt(CONTINUE_PROMPT) else {
            return self.cancel(port);
        };

        match parse_yes_no(&input) {
            Some(true) => Step::SelectItem,
            Some(false) => Step::SelectState,
            None => {
                port.notify(CONTINUE_ERROR);
                Step::ContinueOrCheckout
            }
        }
    }

    fn select_state<P: Prompter>(&self, port: &mut P) -> Step {
        let Some(input) = port.prompt(STATE_PROMPT) else {
            return self.cancel(port);
        };

        match StateCode::parse(&input) {
            Ok(code) => Step::Compute(code),
            Err(e) => {
                tracing::debug!(input = %input.trim(), "Rejected state code");
                port.notify(&e.to_string());
                Step::SelectState
            }
        }
    }

    fn compute(&self, state_code: &StateCode) -> Step {
        let lines = self.order.lines();
        let summary = self.engine.compute_order(lines, state_code.as_str());
        let invoice = Invoice::build(self.transaction_id, lines, summary, self.engine.catalog());

        tracing::info!(
            transaction_id = %self.transaction_id,
            state = %state_code,
            items = invoice.unit_count(),
            total = %invoice.summary.total,
            "Transaction completed"
        );
        Step::Done(Box::new(invoice))
    }

    fn cancel<P: Prompter>(&self, port: &mut P) -> Step {
        tracing::info!(
            transaction_id = %self.transaction_id,
            lines = self.order.len(),
            "Transaction cancelled"
        );
        port.notify(CANCELLED_MESSAGE);
        Step::Cancelled
    }
}
