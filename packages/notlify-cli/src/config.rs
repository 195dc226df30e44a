use anyhow::{Context, Result};
use notlify_sdk::AppConfig;

pub(crate) const ENV_API_URL: &str = "NOTLIFY_API_URL";
pub(crate) const ENV_TIMEOUT_SECS: &str = "NOTLIFY_TIMEOUT_SECS";
pub(crate) const ENV_LIST_LIMIT: &str = "NOTLIFY_LIST_LIMIT";

pub(crate) fn app_config_from_env() -> Result<AppConfig> {
    app_config_from_vars(|key| std::env::var(key).ok())
}

pub(crate) fn app_config_from_vars(var: impl Fn(&str) -> Option<String>) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(url) = var(ENV_API_URL) {
        config.server_url = url;
    }
    if let Some(text) = var(ENV_TIMEOUT_SECS) {
        let secs = text
            .parse()
            .with_context(|| format!("invalid {ENV_TIMEOUT_SECS}: {text}"))?;
        config.timeout_seconds = Some(secs);
    }
    if let Some(text) = var(ENV_LIST_LIMIT) {
        config.list_limit = text
            .parse()
            .with_context(|| format!("invalid {ENV_LIST_LIMIT}: {text}"))?;
    }

    Ok(config)
}
