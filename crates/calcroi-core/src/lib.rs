//! # calcroi-core
//!
//! Form state, request dispatch and result rendering for the ROI / interest
//! rate calculator. All computation happens behind the remote API; this crate
//! routes requests, decodes replies and turns state into a view.
//!
//! ## Overview
//!
//! - [`FormState`]: the single state holder (inputs, result set, error, phase)
//! - [`dispatch()`]: one request cycle against a [`RatesApi`]
//! - [`render()`]: pure function from state to [`View`]

pub mod api;
pub mod constants;
pub mod detail;
pub mod dispatch;
pub mod error;
pub mod format;
pub mod input;
pub mod render;
pub mod result;
pub mod state;

pub use api::{CannedRatesApi, Endpoint, QueryParams, RatesApi, RawReply, TransportError};
pub use dispatch::{compute_return, dispatch, lookup_rates, run_cycle};
pub use error::{RatesError, RequestFailure};
pub use input::{Action, BankSelector, QueryInput, ResultKind};
pub use render::{render, TableRow, TableView, View};
pub use result::{AggregateRow, ResultBody, ResultSet, SingleResult};
pub use state::{FormState, RequestPhase, RequestTicket, Resolution};
