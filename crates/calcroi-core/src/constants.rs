//! Constants for the remote rates API and the form.

/// Origin of the remote rates API.
pub const DEFAULT_API_URL: &str = "https://calculadoraapi.onrender.com";

/// Selector label meaning "every bank".
pub const ALL_BANKS: &str = "Todos";

/// Highest selectable bank number. Banks are numbered from 1.
pub const BANK_COUNT: u8 = 23;

/// Message shown when a failure carries no usable `detail`.
pub const FALLBACK_ERROR_MESSAGE: &str = "Error al procesar la solicitud";

/// Rendered in place of a single-result field the API did not return.
pub const MISSING_FIELD: &str = "N/A";

/// Header of the bank column in the comparison table.
pub const BANK_HEADER: &str = "Banco";

/// Title of the form.
pub const FORM_TITLE: &str = "Calcular Retorno sobre la Inversión";

/// Field labels, in form order.
pub const AMOUNT_LABEL: &str = "Monto:";
pub const TERM_LABEL: &str = "Plazo en días:";
pub const BANK_LABEL: &str = "Banco:";

/// Query parameter names understood by the remote API.
pub mod params {
    /// Amount to invest.
    pub const AMOUNT: &str = "monto";
    /// Term in days.
    pub const TERM_DAYS: &str = "plazo_en_dias";
    /// Bank number (single-bank endpoints only).
    pub const BANK: &str = "banco";
}

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// The request failed and an error message was rendered.
    pub const ERROR_REQUEST: i32 = 2;
    /// Invalid configuration (e.g. a malformed API URL).
    pub const ERROR_CONFIG: i32 = 4;
}
