//! Error types.
//!
//! [`RequestFailure`] is the tagged form of everything that can go wrong with
//! a request. Its `Display` output is exactly the message shown in place of
//! results.

use crate::constants::FALLBACK_ERROR_MESSAGE;

/// Invalid user-facing input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RatesError {
    /// The bank selector is neither `Todos` nor a bank number in range.
    #[error("invalid bank {0:?}: expected \"Todos\" or a number from 1 to 23")]
    InvalidBank(String),
}

/// Why a request produced no result set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestFailure {
    /// No response was received. The payload is the transport cause, kept for
    /// logs only.
    #[error("{}", FALLBACK_ERROR_MESSAGE)]
    Transport(String),

    /// Structured validation error (`detail.detalle` plus `detail.errores`).
    #[error("{}", validation_message(.summary, .errors))]
    Validation {
        summary: String,
        errors: Vec<String>,
    },

    /// Plain-string `detail`.
    #[error("{0}")]
    Server(String),

    /// Failure body without a usable `detail`, or a success body of the
    /// wrong shape.
    #[error("{}", FALLBACK_ERROR_MESSAGE)]
    Unrecognized { status: u16 },
}

impl RequestFailure {
    /// The message displayed in place of results.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// HTTP status of the failed reply, if one was received.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unrecognized { status } => Some(*status),
            _ => None,
        }
    }
}

fn validation_message(summary: &str, errors: &[String]) -> String {
    let mut message = summary.to_string();
    for error in errors {
        message.push_str("\n- ");
        message.push_str(error);
    }
    message
}
