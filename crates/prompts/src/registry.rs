//! Agent fragment registry.
//!
//! Holds every [`AgentProfile`] plus the template override table, and is the
//! only place fragments are resolved. A registry is validated once when it is
//! built and is immutable afterwards, so it can be shared freely across
//! threads without locking.

use crate::compose::{slot_map, substitute};
use crate::roster;
use crate::selector::TemplateSelector;
use crate::templates::template_for;
use kadro_core::{
    AgentId, AgentProfile, Error, FragmentSet, PromptContext, RegistryError, Result,
    TemplateVariant,
};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::{debug, warn};

static BUILTIN: LazyLock<std::result::Result<Registry, RegistryError>> = LazyLock::new(|| {
    RegistryBuilder::new()
        .profiles(roster::builtin_profiles())
        .selector(TemplateSelector::builtin())
        .build()
});

/// Immutable, validated set of agent profiles.
#[derive(Debug, Clone)]
pub struct Registry {
    /// Definition order is preserved for listings.
    profiles: Vec<AgentProfile>,
    index: HashMap<AgentId, usize>,
    selector: TemplateSelector,
}

/// One-line view of an agent for listings.
#[derive(Debug, Clone, Serialize)]
pub struct AgentSummary {
    pub id: AgentId,
    pub name: String,
    pub role: String,
    pub template: TemplateVariant,
}

impl Registry {
    /// The process-wide built-in registry.
    ///
    /// Validated on first use; an inconsistent roster is reported on every
    /// call rather than silently degrading.
    pub fn builtin() -> std::result::Result<&'static Registry, RegistryError> {
        BUILTIN.as_ref().map_err(Clone::clone)
    }

    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    pub fn get(&self, agent_id: &str) -> Option<&AgentProfile> {
        self.index.get(agent_id).map(|&i| &self.profiles[i])
    }

    pub fn contains(&self, agent_id: &str) -> bool {
        self.index.contains_key(agent_id)
    }

    /// Agent ids in definition order.
    pub fn ids(&self) -> impl Iterator<Item = &AgentId> {
        self.profiles.iter().map(|p| &p.id)
    }

    pub fn profiles(&self) -> &[AgentProfile] {
        &self.profiles
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Pick the template variant for an agent. Never fails.
    pub fn select_template(&self, agent_id: &str) -> TemplateVariant {
        self.selector.select(agent_id)
    }

    /// Resolve the fragments for an agent.
    ///
    /// Fails with `UnknownAgent` when the id is not registered or when any of
    /// persona, boundaries or example is empty. Display metadata never fails;
    /// it falls back to generic values.
    pub fn resolve_fragments(&self, agent_id: &str) -> Result<FragmentSet> {
        let Some(profile) = self.get(agent_id) else {
            warn!(agent = agent_id, "Unknown agent requested");
            return Err(Error::unknown_agent(agent_id));
        };

        let fragments = FragmentSet::from_profile(profile);
        if !fragments.is_complete() {
            warn!(agent = agent_id, "Agent is missing a required fragment");
            return Err(Error::unknown_agent(agent_id));
        }
        Ok(fragments)
    }

    /// Compose the full system prompt for an agent.
    ///
    /// `context` is accepted for callers that already carry request data;
    /// it does not influence the output.
    pub fn compose(&self, agent_id: &str, context: Option<&PromptContext>) -> Result<String> {
        let variant = self.select_template(agent_id);
        let fragments = self.resolve_fragments(agent_id)?;
        let prompt = substitute(template_for(variant), &slot_map(&fragments));

        debug!(
            agent = agent_id,
            template = %variant,
            context_keys = context.map_or(0, PromptContext::len),
            prompt_len = prompt.len(),
            "Prompt composed"
        );
        Ok(prompt)
    }

    /// Listing view of every agent, in definition order.
    pub fn summaries(&self) -> Vec<AgentSummary> {
        self.profiles
            .iter()
            .map(|p| {
                let fragments = FragmentSet::from_profile(p);
                AgentSummary {
                    id: p.id.clone(),
                    name: fragments.display_name,
                    role: fragments.role,
                    template: self.select_template(p.id.as_str()),
                }
            })
            .collect()
    }
}

/// Collects profiles and validates them into a [`Registry`].
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    profiles: Vec<AgentProfile>,
    selector: TemplateSelector,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn profile(mut self, profile: AgentProfile) -> Self {
        self.profiles.push(profile);
        self
    }

    pub fn profiles(mut self, profiles: impl IntoIterator<Item = AgentProfile>) -> Self {
        self.profiles.extend(profiles);
        self
    }

    pub fn selector(mut self, selector: TemplateSelector) -> Self {
        self.selector = selector;
        self
    }

    /// Validate and freeze the registry.
    pub fn build(self) -> std::result::Result<Registry, RegistryError> {
        let mut index = HashMap::with_capacity(self.profiles.len());
        for (i, profile) in self.profiles.iter().enumerate() {
            if index.insert(profile.id.clone(), i).is_some() {
                return Err(RegistryError::DuplicateAgent(profile.id.to_string()));
            }
        }

        let problems = consistency_problems(&self.profiles, &index, &self.selector);
        if !problems.is_empty() {
            return Err(RegistryError::Inconsistent { problems });
        }

        debug!(agents = self.profiles.len(), "Agent registry built");
        Ok(Registry {
            profiles: self.profiles,
            index,
            selector: self.selector,
        })
    }
}

/// Every cross-reference and required-field problem in a profile set.
fn consistency_problems(
    profiles: &[AgentProfile],
    index: &HashMap<AgentId, usize>,
    selector: &TemplateSelector,
) -> Vec<String> {
    let mut problems = Vec::new();

    for profile in profiles {
        let id = &profile.id;
        if !id.is_canonical() {
            problems.push(format!(
                "agent id '{id}' is not canonical (use lowercase letters, digits and '_')"
            ));
        }
        if profile.core_prompt.trim().is_empty() {
            problems.push(format!("agent '{id}' has an empty core prompt"));
        }
        if profile.example.trim().is_empty() {
            problems.push(format!("agent '{id}' has an empty example"));
        }
        if profile.boundary.allowed.is_empty() {
            problems.push(format!("agent '{id}' declares no allowed topics"));
        }
        for redirect in &profile.boundary.redirects {
            if redirect.agent == *id {
                problems.push(format!("agent '{id}' redirects to itself"));
            } else if !index.contains_key(&redirect.agent) {
                problems.push(format!(
                    "agent '{id}' redirects '{}' to unknown agent '{}'",
                    redirect.topic, redirect.agent
                ));
            }
        }
    }

    for (variant, id) in selector.entries() {
        if !index.contains_key(id) {
            problems.push(format!("{variant} override names unknown agent '{id}'"));
        }
    }

    problems
}
