//! `kadro agents` — List registered agents.

use super::{CmdResult, optimization_table};
use kadro_config::AppConfig;
use kadro_prompts::Registry;

pub async fn run(json: bool) -> CmdResult {
    let registry = Registry::builtin()?;
    let summaries = registry.summaries();

    if json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(());
    }

    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;
    let table = optimization_table(&config)?;

    println!("🧑‍💼 Kadro Agents ({})", summaries.len());
    println!("==================");
    for agent in &summaries {
        let baseline = if table.get(agent.id.as_str()).is_some() {
            " 📉"
        } else {
            ""
        };
        println!(
            "  {:<20} {:<10} {} — {}{baseline}",
            agent.id.as_str(),
            agent.template.as_str(),
            agent.name,
            agent.role
        );
    }

    Ok(())
}
