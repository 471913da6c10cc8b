//! # calcroi-client
//!
//! Blocking `reqwest` implementation of [`calcroi_core::RatesApi`].

pub mod http;

pub use http::{ClientConfig, ClientError, HttpRatesClient};
