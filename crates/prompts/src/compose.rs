//! Slot substitution engine.
//!
//! Fills a template's `{PLACEHOLDER}` tokens from a slot map in a single
//! left-to-right pass. Substituted text is copied verbatim and never
//! rescanned, so a fragment that happens to contain `{ROLE}` stays literal.
//! Tokens outside the closed placeholder set, or without a map entry, are
//! left in place.
//!
//! # Determinism
//!
//! Output depends only on the template and the slot values; there is no
//! clock, counter or randomness involved.

use crate::templates::{FITNESS_CONVERSATION_STYLE, LEGAL_OUTPUT_FORMAT, SECURITY_RULES};
use kadro_core::{FragmentSet, Placeholder};
use std::collections::HashMap;

/// Placeholder → replacement text.
pub type SlotMap<'a> = HashMap<Placeholder, &'a str>;

/// Build the full slot map for one agent.
///
/// Both variant-specific slots are always present; a template without the
/// matching token simply never asks for them.
pub fn slot_map(fragments: &FragmentSet) -> SlotMap<'_> {
    HashMap::from([
        (Placeholder::AgentName, fragments.display_name.as_str()),
        (Placeholder::Role, fragments.role.as_str()),
        (Placeholder::Identity, fragments.core_prompt.as_str()),
        (Placeholder::Expertise, fragments.expertise.as_str()),
        (Placeholder::Boundaries, fragments.boundaries.as_str()),
        (Placeholder::Examples, fragments.example.as_str()),
        (Placeholder::Security, SECURITY_RULES),
        (Placeholder::OutputFormat, LEGAL_OUTPUT_FORMAT),
        (Placeholder::ConversationStyle, FITNESS_CONVERSATION_STYLE),
    ])
}

/// Replace every known `{PLACEHOLDER}` in `template` with its slot value.
pub fn substitute(template: &str, slots: &SlotMap<'_>) -> String {
    let mut out = String::with_capacity(template.len() * 4);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        // The token ends at the first '}' unless another '{' starts first.
        let close = match after.find(['{', '}']) {
            Some(i) if after.as_bytes()[i] == b'}' => i,
            _ => {
                out.push('{');
                rest = after;
                continue;
            }
        };

        let name = &after[..close];
        match Placeholder::from_name(name).and_then(|p| slots.get(&p)) {
            Some(value) => out.push_str(value),
            None => {
                out.push('{');
                out.push_str(name);
                out.push('}');
            }
        }
        rest = &after[close + 1..];
    }

    out.push_str(rest);
    out
}

/// Required placeholders still present in a composed prompt.
pub fn unresolved_required(prompt: &str) -> Vec<Placeholder> {
    Placeholder::REQUIRED
        .into_iter()
        .filter(|p| prompt.contains(&p.token()))
        .collect()
}
