//! Request dispatch: route, fetch, decode.

use tracing::debug;

use crate::api::{query_params, Endpoint, RatesApi};
use crate::detail::decode_failure;
use crate::error::RequestFailure;
use crate::input::{Action, QueryInput};
use crate::result::{decode_aggregate, decode_single, ResultSet};
use crate::state::{FormState, Resolution};

/// Issue exactly one GET for `action` and decode the reply.
pub fn dispatch(
    api: &dyn RatesApi,
    input: &QueryInput,
    action: Action,
) -> Result<ResultSet, RequestFailure> {
    let endpoint = Endpoint::route(action, input.bank);
    let query = query_params(input);
    debug!(%endpoint, ?query, "issuing request");

    let reply = api.fetch(endpoint, &query).map_err(|err| {
        debug!(%endpoint, error = %err, "transport failure");
        RequestFailure::Transport(err.0)
    })?;

    if !reply.is_success() {
        let failure = decode_failure(reply.status, &reply.body);
        debug!(%endpoint, status = reply.status, ?failure, "request rejected");
        return Err(failure);
    }

    let kind = action.kind();
    let decoded = if endpoint.is_aggregate() {
        decode_aggregate(kind, reply.status, &reply.body)
    } else {
        decode_single(kind, reply.status, &reply.body)
    };
    if let Err(failure) = &decoded {
        debug!(%endpoint, ?failure, "unexpected success body");
    }
    decoded
}

/// Run one synchronous begin → dispatch → resolve cycle on `state`.
pub fn run_cycle(state: &mut FormState, api: &dyn RatesApi, action: Action) -> Resolution {
    let ticket = state.begin(action);
    let outcome = dispatch(api, &ticket.input, ticket.action);
    state.resolve(ticket.seq, outcome)
}

/// Fetch the projected ROI for the current inputs.
pub fn compute_return(state: &mut FormState, api: &dyn RatesApi) -> Resolution {
    run_cycle(state, api, Action::ComputeReturn)
}

/// Fetch the interest rate for the current inputs.
pub fn lookup_rates(state: &mut FormState, api: &dyn RatesApi) -> Resolution {
    run_cycle(state, api, Action::LookupRates)
}
