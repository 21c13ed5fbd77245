//! `kadro check` — Verify the registry, baselines and configuration agree.

use super::{CmdResult, optimization_table};
use kadro_config::AppConfig;
use kadro_prompts::{Registry, unresolved_required};

pub async fn run() -> CmdResult {
    println!("🩺 Kadro Check");
    println!("==============\n");

    let mut issues = 0;

    let registry = match Registry::builtin() {
        Ok(registry) => {
            println!("  ✅ Registry consistent ({} agents)", registry.len());
            Some(registry)
        }
        Err(e) => {
            println!("  ❌ {e}");
            issues += 1;
            None
        }
    };

    let config = match AppConfig::load() {
        Ok(config) => {
            println!("  ✅ Config valid");
            Some(config)
        }
        Err(e) => {
            println!("  ❌ Config invalid: {e}");
            issues += 1;
            None
        }
    };

    if let Some(registry) = registry {
        let before = issues;
        let mut redirects = 0;
        for profile in registry.profiles() {
            let id = &profile.id;
            redirects += profile.boundary.redirects.len();
            match registry.compose(id.as_str(), None) {
                Ok(prompt) => {
                    let missing = unresolved_required(&prompt);
                    if !missing.is_empty() {
                        let names: Vec<&str> = missing.iter().map(|p| p.name()).collect();
                        println!("  ❌ {id}: unresolved {}", names.join(", "));
                        issues += 1;
                    }
                }
                Err(e) => {
                    println!("  ❌ {id}: {e}");
                    issues += 1;
                }
            }
        }
        if issues == before {
            println!("  ✅ Composed every agent ({redirects} redirects resolved)");
        }

        let config = config.unwrap_or_default();
        match optimization_table(&config)
            .and_then(|table| table.verify_against(registry.ids().map(|id| id.as_str())))
        {
            Ok(()) => println!("  ✅ Baselines reference registered agents"),
            Err(e) => {
                println!("  ❌ {e}");
                issues += 1;
            }
        }

        if let Some(default) = &config.default_agent {
            if registry.contains(default) {
                println!("  ✅ default_agent '{default}' is registered");
            } else {
                println!("  ❌ default_agent '{default}' is not a registered agent");
                issues += 1;
            }
        }
    }

    println!();
    if issues == 0 {
        println!("  🎉 All checks passed!");
        Ok(())
    } else {
        Err(format!("{issues} issue(s) found. See above for details.").into())
    }
}
