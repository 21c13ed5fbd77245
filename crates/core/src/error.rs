//! Error types for the Kadro domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Composition itself has exactly one failure mode (`UnknownAgent`);
//! everything else in this file is raised while a registry is being built.

use thiserror::Error;

/// The top-level error type for all Kadro operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    // --- Composition ---
    #[error("Agent not found: {agent_id}")]
    UnknownAgent { agent_id: String },

    // --- Registry construction ---
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),
}

impl Error {
    /// Shorthand for the lookup failure raised by fragment resolution.
    pub fn unknown_agent(agent_id: impl Into<String>) -> Self {
        Self::UnknownAgent {
            agent_id: agent_id.into(),
        }
    }

    /// Whether this error means the requested agent does not exist.
    pub fn is_unknown_agent(&self) -> bool {
        matches!(self, Self::UnknownAgent { .. })
    }
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

// --- Bounded context errors ---

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("duplicate agent id: {0}")]
    DuplicateAgent(String),

    #[error("registry is inconsistent ({} problem(s)): {}", problems.len(), problems.join("; "))]
    Inconsistent { problems: Vec<String> },
}
