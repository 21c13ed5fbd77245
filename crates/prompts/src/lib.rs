//! Prompt composition for Kadro agents.
//!
//! Given an agent id, the engine:
//!
//! 1. **Selects** a template variant (standard, legal or fitness)
//! 2. **Resolves** the agent's fragments from the registry, failing fast if
//!    persona, boundaries or example are missing
//! 3. **Substitutes** the fragments, the shared security rules and the
//!    variant-specific blocks into the template
//!
//! Everything here is pure and synchronous. The built-in registry is
//! validated once on first use and shared read-only afterwards.

pub mod compose;
pub mod registry;
pub mod roster;
pub mod selector;
pub mod templates;

pub use compose::{SlotMap, slot_map, substitute, unresolved_required};
pub use registry::{AgentSummary, Registry, RegistryBuilder};
pub use selector::{FITNESS_AGENTS, LEGAL_AGENTS, TemplateSelector, select_template};
pub use templates::{
    FITNESS_CONVERSATION_STYLE, LEGAL_OUTPUT_FORMAT, SECURITY_RULES, template_for,
};

use kadro_core::{FragmentSet, PromptContext, Result};

/// Compose the system prompt for `agent_id` from the built-in registry.
pub fn build_prompt(agent_id: &str, context: Option<&PromptContext>) -> Result<String> {
    Registry::builtin()?.compose(agent_id, context)
}

/// Resolve an agent's fragments from the built-in registry.
pub fn resolve_fragments(agent_id: &str) -> Result<FragmentSet> {
    Registry::builtin()?.resolve_fragments(agent_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kadro_core::{Error, Placeholder, TemplateVariant};

    #[test]
    fn builtin_registry_is_consistent() {
        let registry = Registry::builtin().unwrap();
        assert_eq!(registry.len(), roster::builtin_profiles().len());
    }

    #[test]
    fn every_builtin_agent_composes_completely() {
        let registry = Registry::builtin().unwrap();
        for id in registry.ids() {
            let prompt = build_prompt(id.as_str(), None).unwrap();
            assert!(
                unresolved_required(&prompt).is_empty(),
                "{id} left placeholders unresolved"
            );
            assert!(prompt.contains(SECURITY_RULES));
        }
    }

    #[test]
    fn composition_is_deterministic() {
        for id in ["fevzi", "tacettin", "erdem", "pinar"] {
            let first = build_prompt(id, None).unwrap();
            for _ in 0..5 {
                assert_eq!(build_prompt(id, None).unwrap(), first);
            }
        }
    }

    #[test]
    fn fevzi_uses_standard_template() {
        let prompt = build_prompt("fevzi", None).unwrap();
        assert!(prompt.starts_with("# Fevzi | Takım Lideri & Proje Yöneticisi\n"));
        assert!(prompt.contains(SECURITY_RULES));
        assert!(!prompt.contains(LEGAL_OUTPUT_FORMAT));
        assert!(!prompt.contains(FITNESS_CONVERSATION_STYLE));
        assert_eq!(select_template("fevzi"), TemplateVariant::Standard);
    }

    #[test]
    fn tacettin_uses_legal_template() {
        let prompt = build_prompt("tacettin", None).unwrap();
        assert!(prompt.contains("## YANIT FORMATI"));
        assert!(prompt.contains(LEGAL_OUTPUT_FORMAT));
        assert!(!prompt.contains(FITNESS_CONVERSATION_STYLE));
        assert!(!prompt.contains(&Placeholder::OutputFormat.token()));
    }

    #[test]
    fn erdem_uses_fitness_template() {
        let prompt = build_prompt("erdem", None).unwrap();
        assert!(prompt.contains(FITNESS_CONVERSATION_STYLE));
        assert!(!prompt.contains(LEGAL_OUTPUT_FORMAT));
    }

    #[test]
    fn deniz_agents_get_their_own_display_names() {
        let analyst = resolve_fragments("deniz_analist").unwrap();
        let counselor = resolve_fragments("deniz_psychologist").unwrap();
        assert!(!analyst.display_fallback);
        assert_eq!(analyst.role, "Veri Analisti");
        assert_eq!(counselor.role, "Psikolojik Danışman");
    }

    #[test]
    fn legacy_hyphenated_ids_are_unknown() {
        for id in ["deniz-analist", "deniz"] {
            assert!(matches!(
                build_prompt(id, None),
                Err(Error::UnknownAgent { .. })
            ));
        }
    }

    #[test]
    fn nonexistent_agent_fails_fast() {
        let err = build_prompt("nonexistent-agent", None).unwrap_err();
        assert!(err.is_unknown_agent());
    }

    #[test]
    fn boundaries_and_example_are_embedded() {
        let fragments = resolve_fragments("pinar").unwrap();
        let prompt = build_prompt("pinar", None).unwrap();
        assert!(prompt.contains(&fragments.boundaries));
        assert!(prompt.contains(&fragments.example));
        assert!(prompt.contains("\"deniz_analist\""));
    }
}
