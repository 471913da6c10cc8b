//! Error handling and exit codes.

use std::process::ExitCode;

use calcroi_client::ClientError;
use calcroi_core::constants::exit_codes;
use calcroi_core::FormState;

/// Exit code after a one-shot request: failure if an error is on display.
#[must_use]
pub fn request_exit_code(state: &FormState) -> i32 {
    if state.error().is_some() {
        exit_codes::ERROR_REQUEST
    } else {
        exit_codes::SUCCESS
    }
}

/// Exit code when the HTTP client cannot be built.
#[must_use]
pub fn client_exit_code(err: &ClientError) -> i32 {
    match err {
        ClientError::InvalidUrl { .. } | ClientError::UnsupportedScheme(_) => {
            exit_codes::ERROR_CONFIG
        }
        ClientError::Build(_) => exit_codes::ERROR_GENERIC,
    }
}

/// Convert an exit code for returning from `main`.
#[must_use]
pub fn to_exit_code(code: i32) -> ExitCode {
    u8::try_from(code).map_or(ExitCode::FAILURE, ExitCode::from)
}
