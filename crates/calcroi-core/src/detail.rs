//! Decoding of failure bodies.
//!
//! The `detail` field is decoded once into the tagged [`ErrorDetail`]; its
//! shape decides which [`RequestFailure`] variant the reply becomes.

use serde::Deserialize;

use crate::error::RequestFailure;

/// The two documented shapes of `detail`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    /// `{ "detalle": "...", "errores": ["...", ...] }`
    Structured {
        detalle: String,
        #[serde(default)]
        errores: Vec<String>,
    },
    /// `"..."`
    Message(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<ErrorDetail>,
}

/// Decode a non-2xx reply body.
///
/// Bodies that are not JSON, lack `detail`, carry an empty string or any
/// other `detail` shape become [`RequestFailure::Unrecognized`].
#[must_use]
pub fn decode_failure(status: u16, body: &str) -> RequestFailure {
    let detail = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.detail);

    match detail {
        Some(ErrorDetail::Structured { detalle, errores }) => RequestFailure::Validation {
            summary: detalle,
            errors: errores,
        },
        Some(ErrorDetail::Message(message)) if !message.is_empty() => {
            RequestFailure::Server(message)
        }
        _ => RequestFailure::Unrecognized { status },
    }
}
