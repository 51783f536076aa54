#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(op) = qcode_parser::parse_bytes(data) else {
        let _ = std::str::from_utf8(data).map(qcode_parser::parse_query);
        return;
    };
    for field in op.fields.iter() {
        for child in field.children.iter() {
            assert!(*child > field.id && *child < op.fields.len());
        }
    }
});
