//! Built-in optimization baselines.
//!
//! Token estimates of each agent's prompt before the modular rewrite and
//! after it. Only a few agents were measured; every other agent reports
//! zero stats. Overrides from configuration are applied once at startup and
//! the table is read-only afterwards.

use crate::TelemetryError;
use crate::model::{OptimizationRecord, OptimizationStats, OptimizationSummary};
use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;

/// Largest accepted baseline count; keeps every reduction exact in `i64`.
pub const MAX_BASELINE_TOKENS: u64 = i64::MAX as u64;

static BUILTIN: LazyLock<OptimizationTable> = LazyLock::new(OptimizationTable::with_defaults);

/// Per-agent baseline table.
#[derive(Debug, Clone, Default)]
pub struct OptimizationTable {
    records: HashMap<String, OptimizationRecord>,
}

impl OptimizationTable {
    /// Create a table with the built-in baselines.
    pub fn with_defaults() -> Self {
        let mut records = HashMap::new();
        records.insert("fevzi".into(), OptimizationRecord::new(8000, 1200));
        records.insert("tacettin".into(), OptimizationRecord::new(6400, 1500));
        records.insert("erdem".into(), OptimizationRecord::new(5600, 1300));
        Self { records }
    }

    /// The process-wide built-in table.
    pub fn builtin() -> &'static OptimizationTable {
        &BUILTIN
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Add or replace the baseline for an agent.
    pub fn with_override(
        mut self,
        agent_id: impl Into<String>,
        record: OptimizationRecord,
    ) -> Result<Self, TelemetryError> {
        let agent_id = agent_id.into();
        if record.original_tokens == 0 {
            return Err(TelemetryError::InvalidBaseline {
                agent_id,
                reason: "original_tokens must be greater than zero".into(),
            });
        }
        if record.original_tokens > MAX_BASELINE_TOKENS
            || record.optimized_tokens > MAX_BASELINE_TOKENS
        {
            return Err(TelemetryError::InvalidBaseline {
                agent_id,
                reason: format!("token counts must not exceed {MAX_BASELINE_TOKENS}"),
            });
        }
        tracing::debug!(agent = %agent_id, ?record, "Baseline override applied");
        self.records.insert(agent_id, record);
        Ok(self)
    }

    /// Apply several overrides, stopping at the first invalid one.
    pub fn with_overrides<I, S>(self, overrides: I) -> Result<Self, TelemetryError>
    where
        I: IntoIterator<Item = (S, OptimizationRecord)>,
        S: Into<String>,
    {
        overrides
            .into_iter()
            .try_fold(self, |table, (agent_id, record)| {
                table.with_override(agent_id, record)
            })
    }

    pub fn get(&self, agent_id: &str) -> Option<OptimizationRecord> {
        self.records.get(agent_id).copied()
    }

    /// Stats for an agent; all zeros when no baseline is recorded.
    pub fn stats(&self, agent_id: &str) -> OptimizationStats {
        self.get(agent_id)
            .map(|r| r.stats())
            .unwrap_or(OptimizationStats::ZERO)
    }

    /// Agents with a baseline, sorted.
    pub fn agents(&self) -> Vec<String> {
        let mut names: Vec<String> = self.records.keys().cloned().collect();
        names.sort();
        names
    }

    /// Stats for every recorded agent, sorted by id.
    pub fn all_stats(&self) -> BTreeMap<String, OptimizationStats> {
        self.records
            .iter()
            .map(|(id, r)| (id.clone(), r.stats()))
            .collect()
    }

    /// Totals across all recorded agents.
    pub fn summary(&self) -> OptimizationSummary {
        let original = self
            .records
            .values()
            .fold(0u64, |acc, r| acc.saturating_add(r.original_tokens));
        let optimized = self
            .records
            .values()
            .fold(0u64, |acc, r| acc.saturating_add(r.optimized_tokens));
        let totals = OptimizationStats::from_tokens(original, optimized);
        OptimizationSummary {
            agents: self.records.len(),
            original_tokens: original,
            optimized_tokens: optimized,
            reduction: totals.reduction,
            reduction_percentage: totals.reduction_percentage,
        }
    }

    /// Check that every recorded agent exists in `known`.
    pub fn verify_against<'a>(
        &self,
        known: impl IntoIterator<Item = &'a str>,
    ) -> Result<(), TelemetryError> {
        let known: Vec<&str> = known.into_iter().collect();
        let unknown: Vec<String> = self
            .agents()
            .into_iter()
            .filter(|id| !known.contains(&id.as_str()))
            .collect();
        if unknown.is_empty() {
            Ok(())
        } else {
            Err(TelemetryError::UnknownBaselineAgents(unknown))
        }
    }

    /// Pretty JSON of every recorded agent's stats, keyed by id.
    pub fn to_json(&self) -> Result<String, TelemetryError> {
        Ok(serde_json::to_string_pretty(&self.all_stats())?)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Optimization stats for an agent from the built-in table.
pub fn optimization_stats(agent_id: &str) -> OptimizationStats {
    OptimizationTable::builtin().stats(agent_id)
}
