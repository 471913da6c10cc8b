//! Bridge between issued requests and TUI messages.

use std::sync::Arc;

use crossbeam_channel::Sender;
use tracing::debug;

use calcroi_core::{dispatch, RatesApi, RequestTicket};

use crate::messages::TuiMessage;

/// Where the model hands issued requests.
pub trait RequestSink {
    /// Start `ticket`; its outcome must come back as [`TuiMessage::Resolved`].
    fn submit(&self, ticket: RequestTicket);
}

/// Runs each request on its own thread and posts the outcome to the TUI
/// channel. Requests are never cancelled; stale replies are filtered by the
/// model.
pub struct RequestBridge {
    api: Arc<dyn RatesApi>,
    tx: Sender<TuiMessage>,
}

impl RequestBridge {
    #[must_use]
    pub fn new(api: Arc<dyn RatesApi>, tx: Sender<TuiMessage>) -> Self {
        Self { api, tx }
    }
}

impl RequestSink for RequestBridge {
    fn submit(&self, ticket: RequestTicket) {
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        std::thread::spawn(move || {
            let outcome = dispatch(api.as_ref(), &ticket.input, ticket.action);
            let msg = TuiMessage::Resolved {
                seq: ticket.seq,
                action: ticket.action,
                outcome,
            };
            if tx.send(msg).is_err() {
                debug!(seq = ticket.seq, "TUI closed before reply arrived");
            }
        });
    }
}
