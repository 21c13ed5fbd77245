//! `kadro stats` — Optimization baselines.

use super::{CmdResult, optimization_table};
use kadro_config::AppConfig;
use kadro_prompts::Registry;

pub async fn run(agent: Option<String>, json: bool) -> CmdResult {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;
    let registry = Registry::builtin()?;
    let table = optimization_table(&config)?;

    if let Err(e) = table.verify_against(registry.ids().map(|id| id.as_str())) {
        tracing::warn!("{e}");
    }

    if let Some(agent) = agent {
        let stats = table.stats(&agent);
        if json {
            println!("{}", serde_json::to_string_pretty(&stats)?);
        } else if stats.has_baseline() {
            println!(
                "📉 {agent}: {} → {} tokens, {} saved ({:.1}%)",
                stats.original_tokens,
                stats.optimized_tokens,
                stats.reduction,
                stats.reduction_percentage
            );
        } else {
            println!("📉 {agent}: no baseline recorded");
        }
        return Ok(());
    }

    if json {
        println!("{}", table.to_json()?);
        return Ok(());
    }

    println!("📉 Prompt Optimization Baselines");
    println!("================================");
    for (agent, stats) in table.all_stats() {
        println!(
            "  {agent:<20} {:>6} → {:>6} tokens  {:>5.1}%",
            stats.original_tokens, stats.optimized_tokens, stats.reduction_percentage
        );
    }

    let summary = table.summary();
    println!();
    println!(
        "  Total ({} agents): {} → {} tokens, {} saved ({:.1}%)",
        summary.agents,
        summary.original_tokens,
        summary.optimized_tokens,
        summary.reduction,
        summary.reduction_percentage
    );

    Ok(())
}
