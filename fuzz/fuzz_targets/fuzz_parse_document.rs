#![no_main]
use libfuzzer_sys::fuzz_target;

/// Feed arbitrary UTF-8 to the document reader.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = sbom_summary::parse_document_str(s);
    }
});
