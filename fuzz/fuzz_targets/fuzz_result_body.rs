#![no_main]

use calcroi_core::render::render_results;
use calcroi_core::result::{decode_aggregate, decode_single};
use calcroi_core::{ResultKind, View};
use libfuzzer_sys::fuzz_target;

// Success bodies either decode and render, or are reported as unrecognized.
fuzz_target!(|data: &[u8]| {
    let Ok(body) = std::str::from_utf8(data) else {
        return;
    };
    for kind in [ResultKind::Roi, ResultKind::Rate] {
        if let Ok(set) = decode_aggregate(kind, 200, body) {
            let View::Table(table) = render_results(&set) else {
                panic!("aggregate result must render as a table");
            };
            assert_eq!(table.rows.len(), set.rows().map_or(0, <[_]>::len));
        }
        if let Ok(set) = decode_single(kind, 200, body) {
            assert!(matches!(render_results(&set), View::Sentence(_)));
        }
    }
});
