//! Data model for optimization records, derived stats and prompt reports.

use kadro_core::{AgentId, TemplateVariant};
use serde::{Deserialize, Serialize};

// ── Records ───────────────────────────────────────────────────────────────

/// Token estimate of an agent's prompt before and after optimization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizationRecord {
    pub original_tokens: u64,
    pub optimized_tokens: u64,
}

impl OptimizationRecord {
    pub fn new(original_tokens: u64, optimized_tokens: u64) -> Self {
        Self {
            original_tokens,
            optimized_tokens,
        }
    }

    pub fn stats(&self) -> OptimizationStats {
        OptimizationStats::from_tokens(self.original_tokens, self.optimized_tokens)
    }
}

// ── Stats ─────────────────────────────────────────────────────────────────

/// Absolute and relative token reduction for one agent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptimizationStats {
    pub original_tokens: u64,
    pub optimized_tokens: u64,
    /// Negative when the optimized prompt grew.
    pub reduction: i64,
    /// Percent of `original_tokens`; 0 when there is no baseline.
    pub reduction_percentage: f64,
}

impl OptimizationStats {
    /// Stats for an agent with no recorded baseline.
    pub const ZERO: Self = Self {
        original_tokens: 0,
        optimized_tokens: 0,
        reduction: 0,
        reduction_percentage: 0.0,
    };

    /// Derive stats from raw token counts.
    ///
    /// Works in `i128` so any pair of `u64` counts subtracts exactly;
    /// `reduction` saturates at the `i64` bounds.
    pub fn from_tokens(original_tokens: u64, optimized_tokens: u64) -> Self {
        let exact = i128::from(original_tokens) - i128::from(optimized_tokens);
        let reduction = exact.clamp(i64::MIN.into(), i64::MAX.into()) as i64;
        let reduction_percentage = if original_tokens == 0 {
            0.0
        } else {
            exact as f64 * 100.0 / original_tokens as f64
        };
        Self {
            original_tokens,
            optimized_tokens,
            reduction,
            reduction_percentage,
        }
    }

    pub fn has_baseline(&self) -> bool {
        self.original_tokens > 0
    }
}

impl Default for OptimizationStats {
    fn default() -> Self {
        Self::ZERO
    }
}

/// Totals across every agent with a recorded baseline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptimizationSummary {
    pub agents: usize,
    pub original_tokens: u64,
    pub optimized_tokens: u64,
    pub reduction: i64,
    pub reduction_percentage: f64,
}

// ── Prompt report ─────────────────────────────────────────────────────────

/// Size and savings overview of one composed prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptReport {
    pub agent_id: AgentId,
    pub template: TemplateVariant,
    pub display_name: String,
    pub role: String,
    pub chars: usize,
    pub estimated_tokens: usize,
    pub optimization: OptimizationStats,
}

impl PromptReport {
    pub fn new(
        agent_id: AgentId,
        template: TemplateVariant,
        display_name: impl Into<String>,
        role: impl Into<String>,
        prompt: &str,
        optimization: OptimizationStats,
    ) -> Self {
        Self {
            agent_id,
            template,
            display_name: display_name.into(),
            role: role.into(),
            chars: prompt.chars().count(),
            estimated_tokens: crate::token::estimate_tokens(prompt),
            optimization,
        }
    }

    /// Human-readable multi-line summary.
    pub fn diagnostic_summary(&self) -> String {
        let mut summary = String::new();
        summary.push_str(&format!("Agent:     {} ({})\n", self.display_name, self.agent_id));
        summary.push_str(&format!("Role:      {}\n", self.role));
        summary.push_str(&format!("Template:  {}\n", self.template));
        summary.push_str(&format!(
            "Prompt:    {} chars (~{} tokens)\n",
            self.chars, self.estimated_tokens
        ));
        if self.optimization.has_baseline() {
            summary.push_str(&format!(
                "Baseline:  {} → {} tokens ({:.1}% reduction)\n",
                self.optimization.original_tokens,
                self.optimization.optimized_tokens,
                self.optimization.reduction_percentage
            ));
        } else {
            summary.push_str("Baseline:  none recorded\n");
        }
        summary
    }
}
