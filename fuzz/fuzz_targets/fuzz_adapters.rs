#![no_main]
use libfuzzer_sys::fuzz_target;
use secscan_report::adapters::adapter_for;
use secscan_report::model::ToolKind;
use secscan_report::pipeline::load_slice;

const MAX_WRAPPED_INPUT_LEN: usize = 10_000;

/// Fuzz every adapter with arbitrary bytes.
///
/// Also wraps the input in each tool's envelope so entry decoding is
/// reached instead of stopping at the top-level shape check.
fuzz_target!(|data: &[u8]| {
    if let Ok(json) = load_slice(data) {
        for &tool in ToolKind::all() {
            let set = adapter_for(tool).adapt(&json);
            assert_eq!(set.headers.len(), set.columns.len());
        }
    }

    if data.len() < MAX_WRAPPED_INPUT_LEN {
        if let Ok(s) = std::str::from_utf8(data) {
            let wrapped = [
                (ToolKind::Bandit, format!(r#"{{"results":[{s}]}}"#)),
                (ToolKind::Semgrep, format!(r#"{{"results":[{s}],"errors":[{s}]}}"#)),
                (ToolKind::Pylint, format!("[{s}]")),
                (ToolKind::Safety, format!(r#"{{"vulnerabilities":[{s}]}}"#)),
            ];
            for (tool, text) in wrapped {
                if let Ok(json) = load_slice(text.as_bytes()) {
                    let set = adapter_for(tool).adapt(&json);
                    for row in set.rows() {
                        assert_eq!(row.len(), set.headers.len());
                    }
                }
            }
        }
    }
});
