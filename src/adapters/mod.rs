//! Per-tool schema adapters.
//!
//! Each scanner emits its own JSON shape; the adapters in this module map
//! those shapes onto the canonical [`FindingSet`](crate::model::FindingSet).
//!
//! ## Usage
//!
//! ```
//! use secscan_report::adapters::adapter_for;
//! use secscan_report::model::ToolKind;
//! use serde_json::json;
//!
//! let json = json!({"results": [{"issue_severity": "HIGH", "issue_text": "eval used",
//!                                "filename": "a.py", "line_number": 12}]});
//! let set = adapter_for(ToolKind::Bandit).adapt(&json);
//! assert_eq!(set.len(), 1);
//! ```

mod bandit;
mod entries;
mod pylint;
mod safety;
mod semgrep;
mod traits;

pub use bandit::BanditAdapter;
pub use pylint::PylintAdapter;
pub use safety::SafetyAdapter;
pub use semgrep::SemgrepAdapter;
pub use traits::ToolAdapter;

use crate::model::ToolKind;

/// Get the adapter for a tool
#[must_use]
pub fn adapter_for(tool: ToolKind) -> &'static dyn ToolAdapter {
    match tool {
        ToolKind::Bandit => &BanditAdapter,
        ToolKind::Semgrep => &SemgrepAdapter,
        ToolKind::Pylint => &PylintAdapter,
        ToolKind::Safety => &SafetyAdapter,
    }
}
