//! Resolved fragment set — the per-agent input to composition.
//!
//! A [`FragmentSet`] is what the registry hands to the substitution engine
//! once a profile has passed the required-fragment check. Display metadata
//! has already been defaulted here, so composition never has to care whether
//! a profile carried it.

use crate::agent::{AgentId, AgentProfile};
use serde::{Deserialize, Serialize};

/// Role used when a profile carries no display metadata.
pub const FALLBACK_ROLE: &str = "Uzman";

/// Expertise summary used when a profile carries no display metadata.
pub const FALLBACK_EXPERTISE: &str = "Genel uzmanlık";

/// The six fragments substituted into a template for one agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FragmentSet {
    pub agent_id: AgentId,
    pub display_name: String,
    pub role: String,
    pub expertise: String,
    pub core_prompt: String,
    pub boundaries: String,
    pub example: String,

    /// True when name/role/expertise came from the generic fallbacks.
    #[serde(default)]
    pub display_fallback: bool,
}

impl FragmentSet {
    /// Build the set from a profile without checking required fragments.
    ///
    /// Callers that need the hard-fail guarantee go through the registry.
    pub fn from_profile(profile: &AgentProfile) -> Self {
        let (display_name, role, expertise, display_fallback) = match &profile.display {
            Some(meta) => (
                meta.name.clone(),
                meta.role.clone(),
                meta.expertise.clone(),
                false,
            ),
            None => {
                tracing::debug!(agent = %profile.id, "No display metadata, using fallbacks");
                (
                    profile.id.to_string(),
                    FALLBACK_ROLE.to_string(),
                    FALLBACK_EXPERTISE.to_string(),
                    true,
                )
            }
        };

        Self {
            agent_id: profile.id.clone(),
            display_name,
            role,
            expertise,
            core_prompt: profile.core_prompt.clone(),
            boundaries: profile.boundary.render(),
            example: profile.example.clone(),
            display_fallback,
        }
    }

    /// Whether all load-bearing fragments are present.
    pub fn is_complete(&self) -> bool {
        !self.core_prompt.trim().is_empty()
            && !self.boundaries.trim().is_empty()
            && !self.example.trim().is_empty()
    }
}
