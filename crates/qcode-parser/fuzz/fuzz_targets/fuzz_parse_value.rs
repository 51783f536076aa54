#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(arena) = qcode_parser::parse_value(s) {
        for node in arena.iter() {
            assert!(node.children.iter().all(|child| *child > node.id && *child < arena.len()));
        }
    }
});
