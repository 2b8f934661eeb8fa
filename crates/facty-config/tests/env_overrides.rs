use facty_config::FactyConfig;
use facty_core::enums::RecencyWindow;
use figment::Jail;

#[test]
fn env_fills_credential() {
    Jail::expect_with(|jail| {
        jail.set_env("FACTY_PERPLEXITY__API_KEY", "pplx-from-env");

        let config = FactyConfig::load().expect("config loads");
        assert_eq!(config.perplexity.api_key, "pplx-from-env");
        assert!(config.perplexity.is_configured());
        Ok(())
    });
}

#[test]
fn env_selects_mode_and_window() {
    Jail::expect_with(|jail| {
        jail.set_env("FACTY_VERIFICATION__MULTISTEP_ENABLED", "false");
        jail.set_env("FACTY_VERIFICATION__RECENCY_WINDOW", "year");

        let config = FactyConfig::load().expect("config loads");
        assert!(!config.verification.multistep_enabled);
        assert_eq!(config.verification.recency_window, RecencyWindow::Year);
        Ok(())
    });
}

#[test]
fn env_zero_claims_is_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("FACTY_VERIFICATION__MAX_CLAIMS", "0");

        assert!(FactyConfig::load().is_err());
        Ok(())
    });
}
