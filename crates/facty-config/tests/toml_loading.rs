//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var manipulation.

use facty_config::{ConfigError, FactyConfig};
use facty_core::enums::RecencyWindow;
use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;

fn toml_figment() -> Figment {
    Figment::from(Serialized::defaults(FactyConfig::default())).merge(Toml::file("config.toml"))
}

#[test]
fn loads_perplexity_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[perplexity]
api_key = "pplx-toml"
endpoint = "http://localhost:8080/chat/completions"
extraction_timeout_secs = 30
verification_timeout_secs = 45
aggregate_timeout_secs = 90
"#,
        )?;

        let config: FactyConfig = toml_figment().extract()?;

        assert_eq!(config.perplexity.api_key, "pplx-toml");
        assert_eq!(
            config.perplexity.endpoint,
            "http://localhost:8080/chat/completions"
        );
        assert_eq!(config.perplexity.extraction_timeout_secs, 30);
        assert_eq!(config.perplexity.verification_timeout_secs, 45);
        assert_eq!(config.perplexity.aggregate_timeout_secs, 90);
        assert!(config.perplexity.is_configured());
        Ok(())
    });
}

#[test]
fn loads_verification_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[verification]
model = "sonar-reasoning"
recency_window = "month"
max_claims = 4
multistep_enabled = false
claim_delay_ms = 0
"#,
        )?;

        let config: FactyConfig = toml_figment().extract()?;

        assert_eq!(config.verification.model, "sonar-reasoning");
        assert_eq!(config.verification.recency_window, RecencyWindow::Month);
        assert_eq!(config.verification.max_claims, 4);
        assert!(!config.verification.multistep_enabled);
        assert_eq!(config.verification.claim_delay_ms, 0);
        Ok(())
    });
}

#[test]
fn partial_section_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[verification]
max_claims = 3
"#,
        )?;

        let config: FactyConfig = toml_figment().extract()?;

        assert_eq!(config.verification.max_claims, 3);
        assert_eq!(config.verification.model, "sonar-pro");
        assert_eq!(config.verification.recency_window, RecencyWindow::Week);
        assert_eq!(config.perplexity.aggregate_timeout_secs, 120);
        Ok(())
    });
}

#[test]
fn unknown_recency_window_fails_extraction() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[verification]
recency_window = "decade"
"#,
        )?;

        let result = FactyConfig::from_figment(&toml_figment());
        assert!(matches!(result, Err(ConfigError::Figment(_))));
        Ok(())
    });
}

#[test]
fn zero_max_claims_fails_validation() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[verification]
max_claims = 0
"#,
        )?;

        let result = FactyConfig::from_figment(&toml_figment());
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
        Ok(())
    });
}

#[test]
fn env_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[verification]
model = "sonar"
max_claims = 5
"#,
        )?;
        jail.set_env("FACTY_VERIFICATION__MAX_CLAIMS", "8");

        let config: FactyConfig = toml_figment()
            .merge(Env::prefixed("FACTY_").split("__"))
            .extract()?;

        assert_eq!(config.verification.model, "sonar");
        assert_eq!(config.verification.max_claims, 8);
        Ok(())
    });
}

#[test]
fn project_local_config_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".facty")?;
        jail.create_file(
            ".facty/config.toml",
            r#"
[verification]
recency_window = "day"
"#,
        )?;

        let config = FactyConfig::load().expect("config loads");
        assert_eq!(config.verification.recency_window, RecencyWindow::Day);
        Ok(())
    });
}
