//! Form state holder.
//!
//! One [`FormState`] is owned by the view driving it. Every request is issued
//! through [`FormState::begin`], which hands out a [`RequestTicket`] with a
//! sequence number; only the reply to the most recently issued ticket is
//! applied by [`FormState::resolve`].

use crate::error::RequestFailure;
use crate::input::{Action, BankSelector, QueryInput};
use crate::result::ResultSet;

/// Request lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestPhase {
    #[default]
    Idle,
    /// The most recently issued request has not resolved yet.
    Pending { seq: u64, action: Action },
}

/// Snapshot of one issued request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTicket {
    pub seq: u64,
    pub action: Action,
    pub input: QueryInput,
}

/// What happened to a resolved reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The reply replaced the result set or error.
    Applied,
    /// A newer request was issued; the reply was dropped.
    Superseded { latest: u64 },
}

/// Inputs, last result set, last error and request phase.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    input: QueryInput,
    results: Option<ResultSet>,
    error: Option<String>,
    phase: RequestPhase,
    issued: u64,
}

impl FormState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from pre-filled inputs.
    #[must_use]
    pub fn with_input(input: QueryInput) -> Self {
        Self {
            input,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn input(&self) -> &QueryInput {
        &self.input
    }

    #[must_use]
    pub fn amount(&self) -> &str {
        &self.input.amount
    }

    pub fn set_amount(&mut self, amount: impl Into<String>) {
        self.input.amount = amount.into();
    }

    #[must_use]
    pub fn term_days(&self) -> &str {
        &self.input.term_days
    }

    pub fn set_term_days(&mut self, term_days: impl Into<String>) {
        self.input.term_days = term_days.into();
    }

    #[must_use]
    pub fn bank(&self) -> BankSelector {
        self.input.bank
    }

    pub fn set_bank(&mut self, bank: BankSelector) {
        self.input.bank = bank;
    }

    #[must_use]
    pub fn results(&self) -> Option<&ResultSet> {
        self.results.as_ref()
    }

    pub fn set_results(&mut self, results: Option<ResultSet>) {
        self.results = results;
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }

    #[must_use]
    pub fn phase(&self) -> RequestPhase {
        self.phase
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self.phase, RequestPhase::Pending { .. })
    }

    /// Sequence number of the most recently issued request (0 before any).
    #[must_use]
    pub fn last_issued(&self) -> u64 {
        self.issued
    }

    /// Issue a request for `action` with the current inputs.
    pub fn begin(&mut self, action: Action) -> RequestTicket {
        self.issued += 1;
        let seq = self.issued;
        self.phase = RequestPhase::Pending { seq, action };
        RequestTicket {
            seq,
            action,
            input: self.input.clone(),
        }
    }

    /// Apply the reply to request `seq`, unless a newer request was issued.
    ///
    /// Success replaces the result set and clears the error; failure replaces
    /// the error and clears the result set.
    pub fn resolve(&mut self, seq: u64, outcome: Result<ResultSet, RequestFailure>) -> Resolution {
        if seq != self.issued {
            return Resolution::Superseded {
                latest: self.issued,
            };
        }

        self.phase = RequestPhase::Idle;
        match outcome {
            Ok(results) => {
                self.results = Some(results);
                self.error = None;
            }
            Err(failure) => {
                self.error = Some(failure.message());
                self.results = None;
            }
        }
        Resolution::Applied
    }
}
