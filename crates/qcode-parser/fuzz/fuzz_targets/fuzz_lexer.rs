#![no_main]

use libfuzzer_sys::fuzz_target;
use qcode_parser::token::QueryTokenKind;
use qcode_parser::token_source::StrQueryTokenSource;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let mut eof_count = 0;
    for token in StrQueryTokenSource::new(s) {
        // Every span must slice the input on char boundaries.
        assert!(s.get(token.span.start as usize..token.span.end as usize).is_some());
        if token.kind == QueryTokenKind::Eof {
            eof_count += 1;
        }
    }
    assert_eq!(eof_count, 1);
});
