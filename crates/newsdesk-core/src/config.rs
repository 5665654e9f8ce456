use std::env::VarError;

use crate::app_config::{AppConfig, DEFAULT_NEWS_QUERY, MAX_ARTICLES_LIMIT};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    load_app_config_with_overrides(&[])
}

/// Load application configuration, letting `overrides` replace individual
/// env vars before any of them is validated.
///
/// Each override is a `(VAR_NAME, value)` pair, typically built from
/// command-line flags.
///
/// # Errors
///
/// Returns `ConfigError` if a value (overridden or not) is invalid.
pub fn load_app_config_with_overrides(
    overrides: &[(&str, String)],
) -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    build_app_config(layered(overrides, |key| std::env::var(key)))
}

/// Lookup that answers from `overrides` first and `fallback` otherwise.
fn layered<'a, F>(
    overrides: &'a [(&'a str, String)],
    fallback: F,
) -> impl Fn(&str) -> Result<String, VarError> + 'a
where
    F: Fn(&str) -> Result<String, VarError> + 'a,
{
    move |key| {
        overrides
            .iter()
            .find(|(var, _)| *var == key)
            .map_or_else(|| fallback(key), |(_, value)| Ok(value.clone()))
    }
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable is optional; the lookup is injected so tests can feed a
/// plain `HashMap` instead of mutating the process environment.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let newsapi_key = lookup("NEWSAPI_KEY")
        .ok()
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty());

    let log_level = or_default("NEWSDESK_LOG_LEVEL", "info");

    let max_articles = or_default("NEWSDESK_MAX_ARTICLES", "6")
        .parse::<usize>()
        .map_err(|e| invalid("NEWSDESK_MAX_ARTICLES", e.to_string()))?;
    if !(1..=MAX_ARTICLES_LIMIT).contains(&max_articles) {
        return Err(invalid(
            "NEWSDESK_MAX_ARTICLES",
            format!("must be between 1 and {MAX_ARTICLES_LIMIT}, got {max_articles}"),
        ));
    }

    let use_demo = match lookup("NEWSDESK_USE_DEMO") {
        Ok(raw) => parse_bool(&raw).ok_or_else(|| {
            invalid(
                "NEWSDESK_USE_DEMO",
                format!("expected true/false/1/0, got '{raw}'"),
            )
        })?,
        Err(_) => newsapi_key.is_none(),
    };

    let news_query = or_default("NEWSDESK_QUERY", DEFAULT_NEWS_QUERY);

    let request_timeout_secs = or_default("NEWSDESK_REQUEST_TIMEOUT_SECS", "10")
        .parse::<u64>()
        .map_err(|e| invalid("NEWSDESK_REQUEST_TIMEOUT_SECS", e.to_string()))?;

    Ok(AppConfig {
        log_level,
        newsapi_key,
        max_articles,
        use_demo,
        news_query,
        request_timeout_secs,
    })
}

/// Accepts exactly `true`, `false`, `1` or `0` (case-insensitive, trimmed).
fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
