use crate::app_config::AppConfig;
use crate::ConfigError;

/// Default upstream endpoint; overridable via `SHOPFEED_UPSTREAM_URL`.
const DEFAULT_UPSTREAM_URL: &str =
    "https://my-json-server.typicode.com/convictional/engineering-interview-api/products";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let bind_addr = parse_addr("SHOPFEED_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("SHOPFEED_LOG_LEVEL", "info");
    let upstream_url = or_default("SHOPFEED_UPSTREAM_URL", DEFAULT_UPSTREAM_URL);
    let upstream_timeout_secs = parse_u64("SHOPFEED_UPSTREAM_TIMEOUT_SECS", "30")?;
    let upstream_user_agent = or_default(
        "SHOPFEED_UPSTREAM_USER_AGENT",
        "shopfeed/0.1 (catalog-adapter)",
    );

    Ok(AppConfig {
        bind_addr,
        log_level,
        upstream_url,
        upstream_timeout_secs,
        upstream_user_agent,
    })
}
