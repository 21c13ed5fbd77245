//! `kadro inspect` — Size, template and baseline report for one agent.

use super::{CmdResult, optimization_table, resolve_agent};
use kadro_config::AppConfig;
use kadro_prompts::Registry;
use kadro_telemetry::PromptReport;

pub async fn run(agent: String, json: bool) -> CmdResult {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;
    let registry = Registry::builtin()?;
    let table = optimization_table(&config)?;

    let agent_id = resolve_agent(registry, &config, &agent)?;
    let fragments = registry.resolve_fragments(agent_id)?;
    let prompt = registry.compose(agent_id, None)?;

    let report = PromptReport::new(
        fragments.agent_id.clone(),
        registry.select_template(agent_id),
        fragments.display_name.clone(),
        fragments.role.clone(),
        &prompt,
        table.stats(agent_id),
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("🔎 {}", report.agent_id);
    println!("==================");
    print!("{}", report.diagnostic_summary());
    println!("Expertise: {}", fragments.expertise);

    if let Some(profile) = registry.get(agent_id) {
        let boundary = &profile.boundary;
        println!(
            "Scope:     {} allowed, {} forbidden topics",
            boundary.allowed.len(),
            boundary.forbidden.len()
        );
        for redirect in &boundary.redirects {
            println!("  ↪ {} → {}", redirect.topic, redirect.agent);
        }
    }
    if fragments.display_fallback {
        println!("\n  ⚠️  No display metadata, showing fallback name and role");
    }

    Ok(())
}
