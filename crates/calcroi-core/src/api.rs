//! Remote API contract: endpoints, query parameters and the transport seam.

use std::collections::HashMap;
use std::fmt;

use parking_lot::Mutex;

use crate::constants::params;
use crate::input::{Action, BankSelector, QueryInput};

/// The four GET endpoints of the remote API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// ROI for every bank.
    RoiAll,
    /// ROI for one bank.
    Roi,
    /// Interest rate for every bank.
    RatesAll,
    /// Interest rate for one bank.
    Rates,
}

impl Endpoint {
    pub const ALL: [Self; 4] = [Self::RoiAll, Self::Roi, Self::RatesAll, Self::Rates];

    /// Select the endpoint for an action and bank selector.
    #[must_use]
    pub fn route(action: Action, bank: BankSelector) -> Self {
        match (action, bank.is_all()) {
            (Action::ComputeReturn, true) => Self::RoiAll,
            (Action::ComputeReturn, false) => Self::Roi,
            (Action::LookupRates, true) => Self::RatesAll,
            (Action::LookupRates, false) => Self::Rates,
        }
    }

    /// Absolute path on the API origin.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::RoiAll => "/calcular-roi-all",
            Self::Roi => "/calcular-roi",
            Self::RatesAll => "/buscar-tasas-all",
            Self::Rates => "/buscar-tasas",
        }
    }

    /// Whether the reply is a per-bank `resultados` mapping.
    #[must_use]
    pub fn is_aggregate(self) -> bool {
        matches!(self, Self::RoiAll | Self::RatesAll)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Ordered query parameters of one request.
pub type QueryParams = Vec<(&'static str, String)>;

/// Build the query parameters for an input. `banco` is only sent when a
/// single bank is selected.
#[must_use]
pub fn query_params(input: &QueryInput) -> QueryParams {
    let mut query = vec![
        (params::AMOUNT, input.amount.clone()),
        (params::TERM_DAYS, input.term_days.clone()),
    ];
    if let BankSelector::Bank(n) = input.bank {
        query.push((params::BANK, n.to_string()));
    }
    query
}

/// A reply as received: status code and undecoded body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawReply {
    pub status: u16,
    pub body: String,
}

impl RawReply {
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// No reply was received.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct TransportError(pub String);

/// Transport seam: one HTTP GET against the remote API.
///
/// Implementations return every received reply, whatever its status;
/// decoding happens in [`crate::dispatch`].
pub trait RatesApi: Send + Sync {
    /// Issue a GET for `endpoint` with the given query parameters.
    fn fetch(
        &self,
        endpoint: Endpoint,
        query: &[(&'static str, String)],
    ) -> Result<RawReply, TransportError>;
}

/// In-memory API with fixed replies per endpoint. Records every call.
///
/// An endpoint without a configured reply fails at the transport level.
#[derive(Debug, Default)]
pub struct CannedRatesApi {
    replies: HashMap<Endpoint, Result<RawReply, TransportError>>,
    calls: Mutex<Vec<(Endpoint, QueryParams)>>,
}

impl CannedRatesApi {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reply to `endpoint` with `status` and `body`.
    #[must_use]
    pub fn with_reply(mut self, endpoint: Endpoint, status: u16, body: impl Into<String>) -> Self {
        self.replies
            .insert(endpoint, Ok(RawReply::new(status, body)));
        self
    }

    /// Fail `endpoint` at the transport level.
    #[must_use]
    pub fn with_transport_error(mut self, endpoint: Endpoint, cause: impl Into<String>) -> Self {
        self.replies
            .insert(endpoint, Err(TransportError(cause.into())));
        self
    }

    /// Calls received so far, in order.
    #[must_use]
    pub fn calls(&self) -> Vec<(Endpoint, QueryParams)> {
        self.calls.lock().clone()
    }
}

impl RatesApi for CannedRatesApi {
    fn fetch(
        &self,
        endpoint: Endpoint,
        query: &[(&'static str, String)],
    ) -> Result<RawReply, TransportError> {
        self.calls.lock().push((endpoint, query.to_vec()));
        self.replies
            .get(&endpoint)
            .cloned()
            .unwrap_or_else(|| Err(TransportError(format!("no reply configured for {endpoint}"))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routing_table() {
        let one = BankSelector::Bank(3);
        assert_eq!(Endpoint::route(Action::ComputeReturn, BankSelector::All), Endpoint::RoiAll);
        assert_eq!(Endpoint::route(Action::ComputeReturn, one), Endpoint::Roi);
        assert_eq!(Endpoint::route(Action::LookupRates, BankSelector::All), Endpoint::RatesAll);
        assert_eq!(Endpoint::route(Action::LookupRates, one), Endpoint::Rates);
    }

    #[test]
    fn paths() {
        assert_eq!(Endpoint::RoiAll.path(), "/calcular-roi-all");
        assert_eq!(Endpoint::Roi.path(), "/calcular-roi");
        assert_eq!(Endpoint::RatesAll.path(), "/buscar-tasas-all");
        assert_eq!(Endpoint::Rates.path(), "/buscar-tasas");
        assert_eq!(Endpoint::Rates.to_string(), "/buscar-tasas");
    }

    #[test]
    fn aggregate_endpoints() {
        let aggregate: Vec<_> = Endpoint::ALL.into_iter().filter(|e| e.is_aggregate()).collect();
        assert_eq!(aggregate, vec![Endpoint::RoiAll, Endpoint::RatesAll]);
    }

    #[test]
    fn query_for_all_banks_omits_bank() {
        let input = QueryInput::new("1000", "30", BankSelector::All);
        assert_eq!(
            query_params(&input),
            vec![("monto", "1000".to_string()), ("plazo_en_dias", "30".to_string())]
        );
    }

    #[test]
    fn query_for_single_bank() {
        let input = QueryInput::new("", "90", BankSelector::Bank(12));
        let query = query_params(&input);
        assert_eq!(query.len(), 3);
        assert_eq!(query[0], ("monto", String::new()));
        assert_eq!(query[2], ("banco", "12".to_string()));
    }

    #[test]
    fn reply_success_range() {
        assert!(RawReply::new(200, "").is_success());
        assert!(RawReply::new(204, "").is_success());
        assert!(!RawReply::new(302, "").is_success());
        assert!(!RawReply::new(422, "").is_success());
    }

    #[test]
    fn canned_api_records_and_replies() {
        let api = CannedRatesApi::new().with_reply(Endpoint::Roi, 200, "{}");
        let reply = api.fetch(Endpoint::Roi, &[("monto", "1".into())]).unwrap();
        assert_eq!(reply.status, 200);
        assert!(api.fetch(Endpoint::Rates, &[]).is_err());
        let calls = api.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].0, Endpoint::Roi);
        assert_eq!(calls[1].0, Endpoint::Rates);
    }
}
