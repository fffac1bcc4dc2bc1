#![no_main]
use libfuzzer_sys::fuzz_target;
use secscan_report::adapters::adapter_for;
use secscan_report::model::{Report, ToolKind};
use secscan_report::pipeline::load_slice;
use secscan_report::reports::{create_presenter, to_document, OutputFormat};

/// Fuzz the presenters with documents built from arbitrary Pylint-shaped input.
///
/// Scanner messages are untrusted text; rendering must never panic on them.
fuzz_target!(|data: &[u8]| {
    let Ok(json) = load_slice(data) else {
        return;
    };
    let report = Report::new(vec![adapter_for(ToolKind::Pylint).adapt(&json)]);
    let document = to_document(&report);
    for &format in OutputFormat::all() {
        let _ = create_presenter(format).render(&document);
    }
});
