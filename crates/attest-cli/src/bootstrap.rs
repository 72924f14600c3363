use attest_config::AttestConfig;

use crate::cli::GlobalFlags;

/// Load layered config (`.env`, files, `ATTEST_*` env) and apply CLI
/// overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<AttestConfig> {
    let mut config = AttestConfig::load_with_dotenv()?;
    if let Some(url) = &flags.api_url {
        config.api.base_url = url.trim_end_matches('/').to_string();
        config.api.validate()?;
    }
    tracing::debug!(base_url = %config.api.base_url, "configuration loaded");
    Ok(config)
}
