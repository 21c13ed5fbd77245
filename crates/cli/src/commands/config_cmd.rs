//! `kadro config` — Configuration management commands.

use super::CmdResult;
use kadro_config::AppConfig;
use kadro_prompts::Registry;

pub async fn validate() -> CmdResult {
    println!("🔍 Validating configuration...");

    match AppConfig::load() {
        Ok(config) => {
            println!("   ✅ Config parsed successfully");

            let registry = Registry::builtin()?;
            let mut warnings = Vec::new();

            if let Some(default) = &config.default_agent {
                if !registry.contains(default) {
                    warnings.push(format!("default_agent '{default}' is not a registered agent"));
                }
            }

            for agent in config.telemetry.baselines.keys() {
                if !registry.contains(agent) {
                    warnings.push(format!("Baseline recorded for unknown agent '{agent}'"));
                }
            }

            if warnings.is_empty() {
                println!("   ✅ All checks passed");
            } else {
                println!();
                for w in &warnings {
                    println!("   ⚠️  {w}");
                }
            }

            println!();
            println!(
                "   Default:   {}",
                config.default_agent.as_deref().unwrap_or("(none)")
            );
            println!(
                "   Fallback:  {}",
                if config.registry.fallback_to_default { "enabled" } else { "disabled" }
            );
            println!(
                "   Telemetry: {}",
                if config.telemetry.enabled { "enabled" } else { "disabled" }
            );
            println!("   Baselines: {} override(s)", config.telemetry.baselines.len());
        }
        Err(e) => {
            println!("   ❌ Config error: {e}");
            return Err(e.into());
        }
    }

    Ok(())
}

pub async fn show() -> CmdResult {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}

pub async fn path() -> CmdResult {
    let config_path = AppConfig::config_dir().join("config.toml");
    println!("{}", config_path.display());
    Ok(())
}
