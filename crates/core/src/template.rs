//! Template variants and the closed placeholder set.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Prompt skeleton chosen by agent category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateVariant {
    #[default]
    Standard,
    Legal,
    Fitness,
}

impl TemplateVariant {
    pub const ALL: [TemplateVariant; 3] = [Self::Standard, Self::Legal, Self::Fitness];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Legal => "legal",
            Self::Fitness => "fitness",
        }
    }

    /// The variant-specific placeholder, if this variant has one.
    pub fn extra_placeholder(&self) -> Option<Placeholder> {
        match self {
            Self::Standard => None,
            Self::Legal => Some(Placeholder::OutputFormat),
            Self::Fitness => Some(Placeholder::ConversationStyle),
        }
    }
}

impl fmt::Display for TemplateVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named `{SLOT}` inside a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    AgentName,
    Role,
    Identity,
    Expertise,
    Boundaries,
    Examples,
    Security,
    OutputFormat,
    ConversationStyle,
}

impl Placeholder {
    pub const ALL: [Placeholder; 9] = [
        Self::AgentName,
        Self::Role,
        Self::Identity,
        Self::Expertise,
        Self::Boundaries,
        Self::Examples,
        Self::Security,
        Self::OutputFormat,
        Self::ConversationStyle,
    ];

    /// Slots every template must contain.
    pub const REQUIRED: [Placeholder; 7] = [
        Self::AgentName,
        Self::Role,
        Self::Identity,
        Self::Expertise,
        Self::Boundaries,
        Self::Examples,
        Self::Security,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::AgentName => "AGENT_NAME",
            Self::Role => "ROLE",
            Self::Identity => "IDENTITY",
            Self::Expertise => "EXPERTISE",
            Self::Boundaries => "BOUNDARIES",
            Self::Examples => "EXAMPLES",
            Self::Security => "SECURITY",
            Self::OutputFormat => "OUTPUT_FORMAT",
            Self::ConversationStyle => "CONVERSATION_STYLE",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }

    /// The literal token as it appears in a template, e.g. `{ROLE}`.
    pub fn token(&self) -> String {
        format!("{{{}}}", self.name())
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_names_roundtrip() {
        for p in Placeholder::ALL {
            assert_eq!(Placeholder::from_name(p.name()), Some(p));
        }
        assert_eq!(Placeholder::from_name("NOPE"), None);
        assert_eq!(Placeholder::from_name("role"), None);
    }

    #[test]
    fn token_has_braces() {
        assert_eq!(Placeholder::AgentName.token(), "{AGENT_NAME}");
        assert_eq!(Placeholder::Security.to_string(), "{SECURITY}");
    }

    #[test]
    fn only_non_standard_variants_have_extra_slot() {
        assert_eq!(TemplateVariant::Standard.extra_placeholder(), None);
        assert_eq!(
            TemplateVariant::Legal.extra_placeholder(),
            Some(Placeholder::OutputFormat)
        );
        assert_eq!(
            TemplateVariant::Fitness.extra_placeholder(),
            Some(Placeholder::ConversationStyle)
        );
    }

    #[test]
    fn variant_serializes_snake_case() {
        let json = serde_json::to_string(&TemplateVariant::Fitness).unwrap();
        assert_eq!(json, "\"fitness\"");
        assert_eq!(TemplateVariant::default(), TemplateVariant::Standard);
    }
}
