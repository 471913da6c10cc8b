#![no_main]

use calcroi_core::detail::decode_failure;
use calcroi_core::RequestFailure;
use libfuzzer_sys::fuzz_target;

// Any failure body decodes to a non-empty message.
fuzz_target!(|data: &[u8]| {
    let Ok(body) = std::str::from_utf8(data) else {
        return;
    };
    let failure = decode_failure(422, body);
    match &failure {
        RequestFailure::Server(message) => assert!(!message.is_empty()),
        RequestFailure::Validation { errors, .. } => {
            assert!(failure.message().lines().count() >= errors.len());
        }
        _ => assert!(!failure.message().is_empty()),
    }
});
