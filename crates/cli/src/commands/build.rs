//! `kadro build` — Compose and print an agent's system prompt.

use super::{CmdResult, resolve_agent};
use kadro_config::AppConfig;
use kadro_core::PromptContext;
use kadro_prompts::Registry;
use kadro_telemetry::estimate_tokens;

pub async fn run(agent: String, context: Option<String>) -> CmdResult {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;
    let registry = Registry::builtin()?;

    let context = context
        .as_deref()
        .map(PromptContext::from_json)
        .transpose()
        .map_err(|e| format!("--context must be a JSON object: {e}"))?;

    let agent_id = resolve_agent(registry, &config, &agent)?;
    let prompt = registry.compose(agent_id, context.as_ref())?;

    println!("{prompt}");
    if config.telemetry.enabled {
        eprintln!(
            "\n📏 {agent_id}: {} chars, ~{} tokens ({} template)",
            prompt.chars().count(),
            estimate_tokens(&prompt),
            registry.select_template(agent_id)
        );
    }

    Ok(())
}
