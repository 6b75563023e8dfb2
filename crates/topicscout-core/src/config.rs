use crate::app_config::{AppConfig, Environment};
use crate::scoring_config::{ScoringMode, SourceWeights};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it from a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>().map_err(|e| invalid(var, e.to_string()))
    };

    let parse_weight = |var: &str, default: &str| -> Result<f64, ConfigError> {
        let raw = or_default(var, default);
        let value = raw.parse::<f64>().map_err(|e| invalid(var, e.to_string()))?;
        if !value.is_finite() || value < 0.0 {
            return Err(invalid(
                var,
                format!("weight must be a finite non-negative number, got {raw}"),
            ));
        }
        Ok(value)
    };

    let env = parse_environment(&or_default("TOPICSCOUT_ENV", "development"))?;
    let log_level = or_default("TOPICSCOUT_LOG_LEVEL", "info");

    let mode = or_default("TOPICSCOUT_MODE", "two_source")
        .parse::<ScoringMode>()
        .map_err(|reason| invalid("TOPICSCOUT_MODE", reason))?;

    let topics_path = PathBuf::from(or_default("TOPICSCOUT_TOPICS_PATH", "./config/topics.yaml"));

    let max_concurrent_topics = parse_usize("TOPICSCOUT_MAX_CONCURRENT_TOPICS", "4")?;
    if max_concurrent_topics == 0 {
        return Err(invalid(
            "TOPICSCOUT_MAX_CONCURRENT_TOPICS",
            "must be at least 1".to_string(),
        ));
    }

    let audience_interest_weight = parse_weight("TOPICSCOUT_AUDIENCE_INTEREST_WEIGHT", "1000")?;
    let audience_engagement_weight = parse_weight("TOPICSCOUT_AUDIENCE_ENGAGEMENT_WEIGHT", "1")?;

    let source_weights = SourceWeights::new(
        parse_weight("TOPICSCOUT_TREND_WEIGHT", "0.5")?,
        parse_weight("TOPICSCOUT_DISCUSSION_WEIGHT", "0.5")?,
        0.0,
    )?;

    Ok(AppConfig {
        env,
        log_level,
        mode,
        topics_path,
        max_concurrent_topics,
        audience_interest_weight,
        audience_engagement_weight,
        source_weights,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "TOPICSCOUT_ENV".to_string(),
            reason: format!("expected development, test, or production; got '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
