//! # calcroi-cli
//!
//! CLI output, pending spinner, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod spinner;
pub mod ui;

pub use presenter::{CliPresenter, OutputFormat};
pub use spinner::PendingSpinner;
