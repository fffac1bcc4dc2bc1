//! The aggregated report for one invocation.

use super::{FindingSet, ToolKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Ordered collection of finding sets, one per configured tool.
///
/// Built fresh on every run and never mutated after the aggregator hands it
/// out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    pub finding_sets: Vec<FindingSet>,
}

impl Report {
    /// Create a report stamped with the current time
    #[must_use]
    pub fn new(finding_sets: Vec<FindingSet>) -> Self {
        Self::with_timestamp(finding_sets, Utc::now())
    }

    /// Create a report with a fixed timestamp (reproducible output)
    #[must_use]
    pub const fn with_timestamp(finding_sets: Vec<FindingSet>, generated_at: DateTime<Utc>) -> Self {
        Self {
            generated_at,
            finding_sets,
        }
    }

    /// Tools in report order
    #[must_use]
    pub fn tools(&self) -> Vec<ToolKind> {
        self.finding_sets.iter().map(|s| s.tool).collect()
    }

    /// Get the finding set for a tool, if it is part of the report
    #[must_use]
    pub fn finding_set(&self, tool: ToolKind) -> Option<&FindingSet> {
        self.finding_sets.iter().find(|s| s.tool == tool)
    }

    /// Total findings across all tools
    #[must_use]
    pub fn total_findings(&self) -> usize {
        self.finding_sets.iter().map(FindingSet::len).sum()
    }

    /// Number of tools that recorded at least one error
    #[must_use]
    pub fn tools_with_errors(&self) -> usize {
        self.finding_sets.iter().filter(|s| s.has_errors()).count()
    }
}
