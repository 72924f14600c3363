//! Integration tests for layered configuration loading.
//!
//! Uses `figment::Jail` for sandboxed files and env vars.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use attest_config::AttestConfig;
use pretty_assertions::assert_eq;

#[test]
fn project_toml_overrides_defaults() {
    Jail::expect_with(|jail| {
        jail.create_dir(".attest")?;
        jail.create_file(
            ".attest/config.toml",
            r#"
[api]
base_url = "https://evidence.example.com/api"
timeout_secs = 10

[ui]
search_debounce_ms = 250
"#,
        )?;

        let config = AttestConfig::load().expect("config loads");
        assert_eq!(config.api.base_url, "https://evidence.example.com/api");
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.ui.search_debounce_ms, 250);
        assert_eq!(config.ui.notification_poll_secs, 30);
        Ok(())
    });
}

#[test]
fn env_beats_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[ui]
notification_poll_secs = 60
"#,
        )?;
        jail.set_env("ATTEST_UI__NOTIFICATION_POLL_SECS", "5");

        let config: AttestConfig = Figment::from(Serialized::defaults(AttestConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("ATTEST_").split("__"))
            .extract()?;
        assert_eq!(config.ui.notification_poll_secs, 5);
        Ok(())
    });
}

#[test]
fn env_sets_state_dir() {
    Jail::expect_with(|jail| {
        jail.set_env("ATTEST_STATE__DIR", "/var/lib/attest");
        let config = AttestConfig::load().expect("config loads");
        assert_eq!(
            config.state.session_path(),
            std::path::PathBuf::from("/var/lib/attest/session.json")
        );
        Ok(())
    });
}

#[test]
fn invalid_base_url_fails_validation() {
    Jail::expect_with(|jail| {
        jail.set_env("ATTEST_API__BASE_URL", "ftp://nope");
        let err = AttestConfig::load().unwrap_err();
        assert!(err.to_string().contains("api.base_url"));
        Ok(())
    });
}
