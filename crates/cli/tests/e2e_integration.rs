//! End-to-end integration tests for the Kadro prompt composer.
//!
//! These tests exercise the full pipeline from agent id to composed prompt,
//! including template selection, token estimation, baseline accounting and
//! configuration overrides.

use kadro_config::AppConfig;
use kadro_core::{Error, Placeholder, PromptContext, TemplateVariant};
use kadro_prompts::{
    FITNESS_CONVERSATION_STYLE, LEGAL_OUTPUT_FORMAT, Registry, SECURITY_RULES, build_prompt,
    resolve_fragments, select_template, unresolved_required,
};
use kadro_telemetry::{
    OptimizationRecord, OptimizationStats, OptimizationTable, PromptReport, estimate_tokens,
    optimization_stats,
};

fn report_for(agent_id: &str, table: &OptimizationTable) -> PromptReport {
    let fragments = resolve_fragments(agent_id).unwrap();
    let prompt = build_prompt(agent_id, None).unwrap();
    PromptReport::new(
        fragments.agent_id,
        select_template(agent_id),
        fragments.display_name,
        fragments.role,
        &prompt,
        table.stats(agent_id),
    )
}

// ── Composition ──────────────────────────────────────────────────────────

#[test]
fn e2e_fevzi_standard_prompt() {
    let prompt = build_prompt("fevzi", None).unwrap();

    assert!(prompt.starts_with("# Fevzi | Takım Lideri & Proje Yöneticisi"));
    assert!(prompt.contains(SECURITY_RULES));
    assert!(!prompt.contains(LEGAL_OUTPUT_FORMAT));
    assert!(!prompt.contains(FITNESS_CONVERSATION_STYLE));
    assert!(unresolved_required(&prompt).is_empty());
}

#[test]
fn e2e_tacettin_legal_prompt() {
    assert_eq!(select_template("tacettin"), TemplateVariant::Legal);
    let prompt = build_prompt("tacettin", None).unwrap();

    assert!(prompt.contains(LEGAL_OUTPUT_FORMAT));
    assert!(!prompt.contains(FITNESS_CONVERSATION_STYLE));
    assert!(!prompt.contains(&Placeholder::OutputFormat.token()));
}

#[test]
fn e2e_erdem_fitness_prompt() {
    assert_eq!(select_template("erdem"), TemplateVariant::Fitness);
    let prompt = build_prompt("erdem", None).unwrap();

    assert!(prompt.contains(FITNESS_CONVERSATION_STYLE));
    assert!(!prompt.contains(LEGAL_OUTPUT_FORMAT));
}

#[test]
fn e2e_unknown_agent_fails_without_partial_output() {
    let err = build_prompt("nonexistent-agent", None).unwrap_err();
    assert!(matches!(err, Error::UnknownAgent { ref agent_id } if agent_id == "nonexistent-agent"));
    // Selection still answers for unknown ids.
    assert_eq!(select_template("nonexistent-agent"), TemplateVariant::Standard);
}

#[test]
fn e2e_context_is_accepted_and_ignored() {
    let ctx = PromptContext::from_json(r#"{"page":"/hukuk","locale":"tr"}"#).unwrap();
    assert_eq!(
        build_prompt("tacettin", Some(&ctx)).unwrap(),
        build_prompt("tacettin", None).unwrap()
    );
}

#[tokio::test]
async fn e2e_parallel_composition_is_deterministic() {
    let expected = build_prompt("pinar", None).unwrap();

    let handles: Vec<_> = (0..16)
        .map(|_| tokio::spawn(async { build_prompt("pinar", None) }))
        .collect();

    for handle in handles {
        assert_eq!(handle.await.unwrap().unwrap(), expected);
    }
}

// ── Telemetry over composed prompts ──────────────────────────────────────

#[test]
fn e2e_every_agent_estimate_matches_utf16_length() {
    let registry = Registry::builtin().unwrap();
    for id in registry.ids() {
        let prompt = build_prompt(id.as_str(), None).unwrap();
        let units = prompt.encode_utf16().count();
        assert_eq!(estimate_tokens(&prompt), units.div_ceil(4), "{id}");
        assert!(estimate_tokens(&prompt) > 0);
    }
}

#[test]
fn e2e_report_combines_composition_and_baseline() {
    let report = report_for("fevzi", OptimizationTable::builtin());

    assert_eq!(report.agent_id.as_str(), "fevzi");
    assert_eq!(report.display_name, "Fevzi");
    assert_eq!(report.template, TemplateVariant::Standard);
    assert_eq!(report.optimization.reduction, 6800);
    assert_eq!(report.optimization.reduction_percentage, 85.0);
    assert_eq!(report.estimated_tokens, report.chars.div_ceil(4));
}

#[test]
fn e2e_agents_without_baseline_report_zero() {
    let report = report_for("kerem", OptimizationTable::builtin());
    assert_eq!(report.optimization, OptimizationStats::ZERO);
    assert!(report.diagnostic_summary().contains("none recorded"));
    assert_eq!(optimization_stats("kerem"), OptimizationStats::ZERO);
}

#[test]
fn e2e_builtin_baselines_reference_registered_agents() {
    let registry = Registry::builtin().unwrap();
    OptimizationTable::builtin()
        .verify_against(registry.ids().map(|id| id.as_str()))
        .unwrap();
}

// ── Configuration ────────────────────────────────────────────────────────

#[test]
fn e2e_config_baselines_feed_the_table() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
default_agent = "fevzi"

[registry]
fallback_to_default = true

[telemetry.baselines.pinar]
original_tokens = 4000
optimized_tokens = 1000
"#,
    )
    .unwrap();

    let config = AppConfig::load_from(&path).unwrap();
    let table = OptimizationTable::with_defaults()
        .with_overrides(config.telemetry.baselines.iter().map(|(id, b)| {
            (
                id.clone(),
                OptimizationRecord::new(b.original_tokens, b.optimized_tokens),
            )
        }))
        .unwrap();

    let report = report_for("pinar", &table);
    assert_eq!(report.optimization.reduction_percentage, 75.0);
    assert_eq!(table.summary().agents, 4);

    let registry = Registry::builtin().unwrap();
    assert!(table.verify_against(registry.ids().map(|id| id.as_str())).is_ok());
}

#[test]
fn e2e_config_fallback_agent_composes() {
    let mut config = AppConfig::default();
    config
        .apply_env_overrides(|key| match key {
            "KADRO_DEFAULT_AGENT" => Some("elif".into()),
            "KADRO_FALLBACK_TO_DEFAULT" => Some("1".into()),
            _ => None,
        })
        .unwrap();
    config.validate().unwrap();

    let requested = "deniz-analist";
    let err = build_prompt(requested, None).unwrap_err();
    assert!(err.is_unknown_agent());

    let fallback = config.fallback_agent().unwrap();
    assert!(build_prompt(fallback, None).is_ok());
}

#[test]
fn e2e_config_defaults_and_validation() {
    let config = AppConfig::default();
    assert!(config.validate().is_ok());
    assert!(config.telemetry.enabled);

    let rendered = AppConfig::default_toml();
    let parsed: AppConfig = toml::from_str(&rendered).unwrap();
    assert!(!parsed.registry.fallback_to_default);
}
