//! Integration tests for the Furniture Shop.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p furniture-shop-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `checkout_flow` - Full transactions through the session state machine
//! - `pricing_rules` - Pricing invariants across the catalog and every state
//!
//! This library holds the scripted prompter shared by those tests.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::collections::VecDeque;

use furniture_shop_core::Prompter;

/// Something shown to the shopper, in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Exchange {
    Prompt(String),
    Notice(String),
}

/// A [`Prompter`] that replays canned answers.
///
/// `None` in the script, or running past its end, cancels the prompt.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<Option<String>>,
    transcript: Vec<Exchange>,
}

impl ScriptedPrompter {
    /// Script where every answer is given.
    #[must_use]
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| Some((*a).to_owned())).collect(),
            transcript: Vec::new(),
        }
    }

    /// Append a cancellation after the scripted answers.
    #[must_use]
    pub fn then_cancel(mut self) -> Self {
        self.answers.push_back(None);
        self
    }

    /// Answers not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    /// Everything asked and shown so far.
    #[must_use]
    pub fn transcript(&self) -> &[Exchange] {
        &self.transcript
    }

    /// Only the notices, in order.
    #[must_use]
    pub fn notices(&self) -> Vec<&str> {
        self.transcript
            .iter()
            .filter_map(|exchange| match exchange {
                Exchange::Notice(message) => Some(message.as_str()),
                Exchange::Prompt(_) => None,
            })
            .collect()
    }

    /// Number of prompts asked.
    #[must_use]
    pub fn prompt_count(&self) -> usize {
        self.transcript
            .iter()
            .filter(|exchange| matches!(exchange, Exchange::Prompt(_)))
            .count()
    }
}

impl Prompter for ScriptedPrompter {
    fn prompt(&mut self, message: &str) -> Option<String> {
        self.transcript.push(Exchange::Prompt(message.to_owned()));
        self.answers.pop_front().flatten()
    }

    fn notify(&mut self, message: &str) {
        self.transcript.push(Exchange::Notice(message.to_owned()));
    }
}
