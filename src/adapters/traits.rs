//! Adapter trait definition.
//!
//! This module defines the `ToolAdapter` trait implemented once per scanner.

use crate::model::{Finding, FindingSet, SeverityTag, ToolKind};
use serde_json::Value;

/// Maps one scanner's native JSON schema onto the canonical [`FindingSet`].
///
/// Adapting never fails: a missing top-level key is an empty result, and
/// malformed entries are skipped with an entry in [`FindingSet::errors`].
pub trait ToolAdapter {
    /// The tool this adapter understands
    fn tool(&self) -> ToolKind;

    /// Display labels for the table header
    fn headers(&self) -> &'static [&'static str];

    /// Field keys projected into each row, parallel to `headers`
    fn columns(&self) -> &'static [&'static str];

    /// Normalize parsed tool output
    fn adapt(&self, json: &Value) -> FindingSet;

    /// Display tag for a finding, derived from this tool's own severity scale
    fn severity_tag(&self, finding: &Finding) -> SeverityTag;

    /// An empty set with this tool's table shape
    fn empty_set(&self) -> FindingSet {
        FindingSet::new(self.tool(), self.headers(), self.columns())
    }
}
