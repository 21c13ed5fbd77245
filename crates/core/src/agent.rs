//! Agent profile types — one co-located record per persona.
//!
//! Everything the composition engine knows about an agent lives on a single
//! [`AgentProfile`]: the persona text, the capability boundary, the worked
//! example and the optional display metadata. Keeping the fields together
//! means a profile can never have a boundary without a persona or a display
//! name filed under a differently spelled key.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Opaque agent identifier (e.g. `fevzi`, `deniz_analist`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgentId(String);

impl AgentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Canonical ids are non-empty and use only `a-z`, `0-9` and `_`.
    pub fn is_canonical(&self) -> bool {
        !self.0.is_empty()
            && self
                .0
                .bytes()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_')
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AgentId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for AgentId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Borrow<str> for AgentId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for AgentId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Cosmetic metadata shown in the prompt header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayMeta {
    pub name: String,
    pub role: String,
    pub expertise: String,
}

impl DisplayMeta {
    pub fn new(
        name: impl Into<String>,
        role: impl Into<String>,
        expertise: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            expertise: expertise.into(),
        }
    }
}

/// Refer the user to another agent for a related topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Redirect {
    pub topic: String,
    pub agent: AgentId,
}

/// Declared allow/deny topic lists for an agent.
///
/// This is instructional text for the downstream model only; nothing in
/// Kadro checks a model response against it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityBoundary {
    #[serde(default)]
    pub allowed: Vec<String>,
    #[serde(default)]
    pub forbidden: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub redirects: Vec<Redirect>,
}

pub const ALLOWED_HEADING: &str = "İZİN VERİLEN KONULAR:";
pub const FORBIDDEN_HEADING: &str = "YASAK KONULAR:";
pub const REDIRECT_HEADING: &str = "YÖNLENDİRME:";

impl CapabilityBoundary {
    pub fn is_empty(&self) -> bool {
        self.allowed.is_empty() && self.forbidden.is_empty() && self.redirects.is_empty()
    }

    /// Render the boundary as the text block substituted into `{BOUNDARIES}`.
    ///
    /// An empty boundary renders to an empty string.
    pub fn render(&self) -> String {
        let mut sections: Vec<String> = Vec::with_capacity(3);

        if !self.allowed.is_empty() {
            sections.push(bullet_section(ALLOWED_HEADING, &self.allowed));
        }
        if !self.forbidden.is_empty() {
            sections.push(bullet_section(FORBIDDEN_HEADING, &self.forbidden));
        }
        if !self.redirects.is_empty() {
            let lines: Vec<String> = self
                .redirects
                .iter()
                .map(|r| {
                    format!(
                        "{} konusundaki sorular için kullanıcıyı \"{}\" ajanına yönlendir",
                        r.topic, r.agent
                    )
                })
                .collect();
            sections.push(bullet_section(REDIRECT_HEADING, &lines));
        }

        sections.join("\n\n")
    }
}

fn bullet_section(heading: &str, items: &[String]) -> String {
    let mut out = String::from(heading);
    for item in items {
        out.push_str("\n- ");
        out.push_str(item);
    }
    out
}

/// Everything needed to compose one agent's system prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentProfile {
    pub id: AgentId,

    /// Missing metadata falls back to generic values at resolution time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<DisplayMeta>,

    /// First-person persona and domain description.
    pub core_prompt: String,

    pub boundary: CapabilityBoundary,

    /// One question/answer pair demonstrating tone and scope.
    pub example: String,
}

impl AgentProfile {
    pub fn new(id: impl Into<AgentId>, core_prompt: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display: None,
            core_prompt: core_prompt.into(),
            boundary: CapabilityBoundary::default(),
            example: String::new(),
        }
    }

    pub fn with_display(
        mut self,
        name: impl Into<String>,
        role: impl Into<String>,
        expertise: impl Into<String>,
    ) -> Self {
        self.display = Some(DisplayMeta::new(name, role, expertise));
        self
    }

    pub fn allow(mut self, topics: &[&str]) -> Self {
        self.boundary
            .allowed
            .extend(topics.iter().map(|t| t.to_string()));
        self
    }

    pub fn forbid(mut self, topics: &[&str]) -> Self {
        self.boundary
            .forbidden
            .extend(topics.iter().map(|t| t.to_string()));
        self
    }

    pub fn redirect(mut self, topic: impl Into<String>, agent: impl Into<AgentId>) -> Self {
        self.boundary.redirects.push(Redirect {
            topic: topic.into(),
            agent: agent.into(),
        });
        self
    }

    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = example.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_ids() {
        assert!(AgentId::from("fevzi").is_canonical());
        assert!(AgentId::from("deniz_analist").is_canonical());
        assert!(AgentId::from("agent2").is_canonical());
        assert!(!AgentId::from("deniz-analist").is_canonical());
        assert!(!AgentId::from("Fevzi").is_canonical());
        assert!(!AgentId::from("").is_canonical());
    }

    #[test]
    fn boundary_renders_sections_in_order() {
        let profile = AgentProfile::new("pinar", "Ben Pınar.")
            .allow(&["Sosyal medya", "Kampanya planlama"])
            .forbid(&["Hukuki tavsiye"])
            .redirect("Sözleşmeler", "tacettin");

        let text = profile.boundary.render();
        let allowed = text.find(ALLOWED_HEADING).unwrap();
        let forbidden = text.find(FORBIDDEN_HEADING).unwrap();
        let redirect = text.find(REDIRECT_HEADING).unwrap();
        assert!(allowed < forbidden && forbidden < redirect);
        assert!(text.contains("- Sosyal medya\n- Kampanya planlama"));
        assert!(text.contains("- Hukuki tavsiye"));
        assert!(text.contains("\"tacettin\""));
    }

    #[test]
    fn boundary_without_redirects_has_two_sections() {
        let boundary = AgentProfile::new("x", "p")
            .allow(&["a"])
            .forbid(&["b"])
            .boundary;
        let text = boundary.render();
        assert_eq!(text, "İZİN VERİLEN KONULAR:\n- a\n\nYASAK KONULAR:\n- b");
    }

    #[test]
    fn empty_boundary_renders_empty() {
        let boundary = CapabilityBoundary::default();
        assert!(boundary.is_empty());
        assert_eq!(boundary.render(), "");
    }

    #[test]
    fn profile_serializes_without_missing_display() {
        let profile = AgentProfile::new("x", "persona").with_example("S: a\nC: b");
        let json = serde_json::to_value(&profile).unwrap();
        assert!(json.get("display").is_none());
        assert_eq!(json["id"], "x");
    }
}
