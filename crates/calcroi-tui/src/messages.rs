//! TUI message types (Elm Messages).

use calcroi_core::{Action, RequestFailure, ResultSet};

/// Messages that drive the TUI update cycle.
#[derive(Debug, Clone)]
pub enum TuiMessage {
    /// A request finished, successfully or not.
    Resolved {
        seq: u64,
        action: Action,
        outcome: Result<ResultSet, RequestFailure>,
    },
    /// Key press event forwarded from the event loop.
    KeyPress(crate::keymap::KeyAction),
}
