#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Invalid UTF-8 never reaches the lexer
    if let Ok(s) = std::str::from_utf8(data) {
        // Lexer and parser must fail with an error, never a panic or a hang
        if let Ok(compilation) = flick::compile(s) {
            assert_eq!(compilation.tokens.last().map(|t| t.kind), Some(flick::lexer::TokenKind::EndOfInput));
        }
    }
});
