//! # Kadro Core
//!
//! Domain types and error definitions for the Kadro prompt composition engine.
//! This crate holds no engine logic; it defines the vocabulary (agent
//! profiles, capability boundaries, template variants, placeholders) that the
//! registry, telemetry and CLI crates are written against.

pub mod agent;
pub mod context;
pub mod error;
pub mod identity;
pub mod template;

// Re-export key types at crate root for ergonomics
pub use agent::{AgentId, AgentProfile, CapabilityBoundary, DisplayMeta, Redirect};
pub use context::PromptContext;
pub use error::{Error, RegistryError, Result};
pub use identity::{FALLBACK_EXPERTISE, FALLBACK_ROLE, FragmentSet};
pub use template::{Placeholder, TemplateVariant};
