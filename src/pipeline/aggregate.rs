//! Aggregation of per-tool load outcomes into a [`Report`].

use super::load::LoadOutcome;
use crate::adapters::adapter_for;
use crate::config::MissingInputPolicy;
use crate::model::{FindingSet, Report, ToolKind};
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// Builds a [`Report`] in the configured tool order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Aggregator {
    missing_input: MissingInputPolicy,
}

impl Aggregator {
    /// Create an aggregator with the given missing-input policy
    #[must_use]
    pub const fn new(missing_input: MissingInputPolicy) -> Self {
        Self { missing_input }
    }

    /// Build a report stamped with the current time
    #[must_use]
    pub fn build(&self, tools: &[ToolKind], loads: HashMap<ToolKind, LoadOutcome>) -> Report {
        self.build_at(tools, loads, Utc::now())
    }

    /// Build a report with a fixed timestamp.
    ///
    /// Finding sets appear in exactly the order of `tools`, whatever the
    /// iteration order of `loads` and whichever inputs failed. A tool with
    /// no entry in `loads` is treated as a missing input.
    #[must_use]
    pub fn build_at(
        &self,
        tools: &[ToolKind],
        mut loads: HashMap<ToolKind, LoadOutcome>,
        generated_at: DateTime<Utc>,
    ) -> Report {
        let finding_sets = tools
            .iter()
            .filter_map(|&tool| self.finding_set(tool, loads.remove(&tool)))
            .collect();
        Report::with_timestamp(finding_sets, generated_at)
    }

    fn finding_set(&self, tool: ToolKind, outcome: Option<LoadOutcome>) -> Option<FindingSet> {
        let adapter = adapter_for(tool);
        match outcome {
            Some(Ok(json)) => {
                let set = adapter.adapt(&json);
                tracing::info!("Loaded {} findings from {}", set.len(), tool);
                Some(set)
            }
            Some(Err(err)) if err.is_not_found() => self.missing(tool, Some(err.to_string())),
            None => self.missing(tool, None),
            Some(Err(err)) => {
                tracing::warn!("{} input skipped: {}", tool, err);
                let mut set = adapter.empty_set();
                set.push_error(err.to_string());
                Some(set)
            }
        }
    }

    fn missing(&self, tool: ToolKind, error: Option<String>) -> Option<FindingSet> {
        let error = error.unwrap_or_else(|| "input file not provided".to_string());
        match self.missing_input {
            MissingInputPolicy::Placeholder => {
                tracing::warn!("{} input missing: {}", tool, error);
                let mut set = adapter_for(tool).empty_set();
                set.push_error(error);
                Some(set)
            }
            MissingInputPolicy::Omit => {
                tracing::warn!("{} input missing, omitting from report: {}", tool, error);
                None
            }
        }
    }
}
