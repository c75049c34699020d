#![no_main]

use std::io::Cursor;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use skipdict::{find_errors, FinderOptions};

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    dictionary: Vec<u8>,
    text: Vec<u8>,
    max_height: u8,
}

// Произвольные байты: битый UTF-8 пропускается построчно, проверка не падает.
fuzz_target!(|input: FuzzInput| {
    let options = FinderOptions {
        seed: Some(0),
        ..FinderOptions::new(usize::from(input.max_height % 16) + 1)
    };
    let mut out = Vec::new();

    let report = find_errors(
        Cursor::new(input.dictionary),
        Cursor::new(input.text),
        &options,
        &mut out,
    )
    .unwrap();

    assert!(out.starts_with(b"Errors found:\n"));
    assert!(report.unmatched <= report.words_checked);
});
