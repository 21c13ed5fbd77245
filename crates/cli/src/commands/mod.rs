//! Subcommand implementations and the helpers they share.

pub mod agents;
pub mod build;
pub mod check;
pub mod config_cmd;
pub mod estimate;
pub mod inspect;
pub mod stats;

use kadro_config::AppConfig;
use kadro_core::Error;
use kadro_prompts::Registry;
use kadro_telemetry::{OptimizationRecord, OptimizationTable, TelemetryError};

pub type CmdResult = Result<(), Box<dyn std::error::Error>>;

/// Pick the agent to compose for `requested`.
///
/// An unknown id resolves to the configured default when
/// `registry.fallback_to_default` is set and that default is registered.
pub fn resolve_agent<'a>(
    registry: &Registry,
    config: &'a AppConfig,
    requested: &'a str,
) -> Result<&'a str, Error> {
    if registry.contains(requested) {
        return Ok(requested);
    }
    match config.fallback_agent() {
        Some(fallback) if registry.contains(fallback) => {
            tracing::warn!(requested, fallback, "Unknown agent, using configured default");
            Ok(fallback)
        }
        _ => Err(Error::unknown_agent(requested)),
    }
}

/// Built-in baselines with the config's overrides applied.
pub fn optimization_table(config: &AppConfig) -> Result<OptimizationTable, TelemetryError> {
    OptimizationTable::with_defaults().with_overrides(config.telemetry.baselines.iter().map(
        |(agent, b)| {
            (
                agent.clone(),
                OptimizationRecord::new(b.original_tokens, b.optimized_tokens),
            )
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use kadro_config::{BaselineOverrideConfig, RegistryConfig};

    fn registry() -> &'static Registry {
        Registry::builtin().unwrap()
    }

    fn with_fallback(agent: &str) -> AppConfig {
        AppConfig {
            default_agent: Some(agent.into()),
            registry: RegistryConfig {
                fallback_to_default: true,
            },
            ..AppConfig::default()
        }
    }

    #[test]
    fn known_agent_resolves_to_itself() {
        let config = with_fallback("fevzi");
        assert_eq!(resolve_agent(registry(), &config, "erdem").unwrap(), "erdem");
    }

    #[test]
    fn unknown_agent_without_fallback_fails() {
        let config = AppConfig::default();
        let err = resolve_agent(registry(), &config, "deniz-analist").unwrap_err();
        assert!(err.is_unknown_agent());
        assert_eq!(err.to_string(), "Agent not found: deniz-analist");
    }

    #[test]
    fn unknown_agent_falls_back_to_default() {
        let config = with_fallback("fevzi");
        assert_eq!(resolve_agent(registry(), &config, "ghost").unwrap(), "fevzi");
    }

    #[test]
    fn unregistered_default_does_not_mask_error() {
        let config = with_fallback("ghost");
        assert!(resolve_agent(registry(), &config, "phantom").is_err());
    }

    #[test]
    fn config_baselines_extend_table() {
        let mut config = AppConfig::default();
        config.telemetry.baselines.insert(
            "pinar".into(),
            BaselineOverrideConfig {
                original_tokens: 4000,
                optimized_tokens: 900,
            },
        );
        let table = optimization_table(&config).unwrap();
        assert_eq!(table.len(), 4);
        assert_eq!(table.stats("pinar").reduction, 3100);
        assert_eq!(table.stats("fevzi").reduction, 6800);
    }
}
