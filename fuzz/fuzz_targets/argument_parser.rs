#![no_main]

use libfuzzer_sys::fuzz_target;
use tracefront::parser::parse_tokens;

fuzz_target!(|data: &[u8]| {
    // Treat each NUL-separated chunk as one command-line token
    if let Ok(input) = std::str::from_utf8(data) {
        let tokens: Vec<&str> = input.split('\0').collect();
        // Must not panic regardless of input
        let _ = parse_tokens(tokens.as_slice());
    }
});
