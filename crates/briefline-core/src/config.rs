use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid. No variable is
/// hard-required: missing credentials disable the matching pipeline stage.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process, without touching `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// The core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

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

    let parse_bool = |var: &str, default: &str| -> Result<bool, ConfigError> {
        match or_default(var, default).as_str() {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            other => Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: format!("expected true/false, got '{other}'"),
            }),
        }
    };

    let env = parse_environment(&or_default("BRIEFLINE_ENV", "development"));
    let bind_addr = parse_addr("BRIEFLINE_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("BRIEFLINE_LOG_LEVEL", "info");
    let allowed_origin = or_default("BRIEFLINE_ALLOWED_ORIGIN", "*");

    let openai_api_key = lookup("OPENAI_API_KEY").ok().filter(|s| !s.is_empty());
    let openai_model = or_default("BRIEFLINE_OPENAI_MODEL", "gpt-4o-mini");
    let enrich_timeout_secs = parse_u64("BRIEFLINE_ENRICH_TIMEOUT_SECS", "45")?;

    let resend_api_key = lookup("RESEND_API_KEY").ok().filter(|s| !s.is_empty());
    let mail_from = or_default(
        "BRIEFLINE_MAIL_FROM",
        "Briefline <brief@notifications.briefline.dev>",
    );

    let pdf_enabled = parse_bool("BRIEFLINE_PDF_ENABLED", "true")?;
    let chrome_path = lookup("BRIEFLINE_CHROME_PATH").ok().map(PathBuf::from);
    let render_timeout_secs = parse_u64("BRIEFLINE_RENDER_TIMEOUT_SECS", "30")?;

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        allowed_origin,
        openai_api_key,
        openai_model,
        enrich_timeout_secs,
        resend_api_key,
        mail_from,
        pdf_enabled,
        chrome_path,
        render_timeout_secs,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}
