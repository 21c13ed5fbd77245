//! Template selector — maps an agent id to a template variant.
//!
//! Selection is a fixed override table: a handful of agents get the legal or
//! fitness skeleton, everyone else (unknown ids included) gets the standard
//! one. Selection never fails; unresolvable agents are caught later, when
//! their fragments are looked up.

use kadro_core::{AgentId, TemplateVariant};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static BUILTIN: LazyLock<TemplateSelector> = LazyLock::new(TemplateSelector::builtin);

/// Agents composed with the legal template.
pub const LEGAL_AGENTS: &[&str] = &["tacettin"];

/// Agents composed with the fitness template.
pub const FITNESS_AGENTS: &[&str] = &["erdem"];

/// Override table from agent id to non-standard variant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateSelector {
    #[serde(default)]
    pub legal: Vec<AgentId>,
    #[serde(default)]
    pub fitness: Vec<AgentId>,
}

impl TemplateSelector {
    /// An empty table: every agent gets the standard template.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in override table.
    pub fn builtin() -> Self {
        Self {
            legal: LEGAL_AGENTS.iter().map(|id| AgentId::from(*id)).collect(),
            fitness: FITNESS_AGENTS.iter().map(|id| AgentId::from(*id)).collect(),
        }
    }

    pub fn with_legal(mut self, agent_id: impl Into<AgentId>) -> Self {
        self.legal.push(agent_id.into());
        self
    }

    pub fn with_fitness(mut self, agent_id: impl Into<AgentId>) -> Self {
        self.fitness.push(agent_id.into());
        self
    }

    pub fn select(&self, agent_id: &str) -> TemplateVariant {
        if self.legal.iter().any(|id| id.as_str() == agent_id) {
            TemplateVariant::Legal
        } else if self.fitness.iter().any(|id| id.as_str() == agent_id) {
            TemplateVariant::Fitness
        } else {
            TemplateVariant::Standard
        }
    }

    /// Every id named by the table, tagged with its variant.
    pub fn entries(&self) -> impl Iterator<Item = (TemplateVariant, &AgentId)> {
        self.legal
            .iter()
            .map(|id| (TemplateVariant::Legal, id))
            .chain(self.fitness.iter().map(|id| (TemplateVariant::Fitness, id)))
    }
}

/// Select a variant using the built-in override table.
pub fn select_template(agent_id: &str) -> TemplateVariant {
    BUILTIN.select(agent_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn designated_agents_get_their_variant() {
        assert_eq!(select_template("tacettin"), TemplateVariant::Legal);
        assert_eq!(select_template("erdem"), TemplateVariant::Fitness);
    }

    #[test]
    fn everyone_else_gets_standard() {
        for id in ["fevzi", "pinar", "deniz_analist", "nonexistent-agent", "", "TACETTIN"] {
            assert_eq!(select_template(id), TemplateVariant::Standard, "id {id:?}");
        }
    }

    #[test]
    fn builtin_table_agrees_with_free_function() {
        let selector = TemplateSelector::builtin();
        for id in ["tacettin", "erdem", "fevzi", "ghost"] {
            assert_eq!(selector.select(id), select_template(id));
        }
    }

    #[test]
    fn empty_table_is_all_standard() {
        let selector = TemplateSelector::new();
        assert_eq!(selector.select("tacettin"), TemplateVariant::Standard);
        assert_eq!(selector.entries().count(), 0);
    }

    #[test]
    fn entries_are_tagged() {
        let selector = TemplateSelector::new().with_legal("a").with_fitness("b");
        let entries: Vec<_> = selector
            .entries()
            .map(|(v, id)| (v, id.as_str().to_string()))
            .collect();
        assert_eq!(
            entries,
            vec![
                (TemplateVariant::Legal, "a".to_string()),
                (TemplateVariant::Fitness, "b".to_string()),
            ]
        );
    }
}
