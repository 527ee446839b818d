#![no_main]
use libfuzzer_sys::fuzz_target;
use sbom_summary::{EnvChecklist, SummaryReporter, parse_document_str, summarize};

/// Summarize and render every document the reader accepts.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data)
        && let Ok(doc) = parse_document_str(s)
    {
        let summary = summarize(&doc, &EnvChecklist::standard());
        let _ = SummaryReporter::new().render(&summary);
    }
});
