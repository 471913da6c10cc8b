//! # calcroi-tui
//!
//! Interactive terminal form using ratatui with Elm architecture.

pub mod bridge;
pub mod footer;
pub mod form;
pub mod header;
pub mod keymap;
pub mod logs;
pub mod messages;
pub mod model;
pub mod results;
pub mod styles;

pub use bridge::{RequestBridge, RequestSink};
pub use form::Focus;
pub use logs::{ActivityLog, LogScrollState};
pub use messages::TuiMessage;
pub use model::TuiApp;
