//! Token estimation and prompt optimization accounting for Kadro.
//!
//! Provides the character-based token estimator used for prompt budgeting
//! and the static per-agent baseline table that reports how much each
//! modular prompt saved against its unoptimized predecessor. Nothing here
//! feeds back into composition.

pub mod baseline;
pub mod model;
pub mod token;

pub use baseline::{MAX_BASELINE_TOKENS, OptimizationTable, optimization_stats};
pub use model::{OptimizationRecord, OptimizationStats, OptimizationSummary, PromptReport};
pub use token::estimate_tokens;

/// Errors from the telemetry subsystem.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("invalid baseline for agent '{agent_id}': {reason}")]
    InvalidBaseline { agent_id: String, reason: String },

    #[error("baselines recorded for unknown agents: {}", .0.join(", "))]
    UnknownBaselineAgents(Vec<String>),

    #[error("serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}
