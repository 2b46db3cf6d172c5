use crate::config::types::{BatchConfig, Config, FilterConfig, HttpConfig};
use crate::ConfigError;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_http_config(&config.http)?;
    validate_batch_config(&config.batch)?;
    validate_filter_config(&config.filter)?;
    Ok(())
}

/// Validates outbound request settings
fn validate_http_config(config: &HttpConfig) -> Result<(), ConfigError> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    if config.timeout_secs < 1 || config.timeout_secs > 300 {
        return Err(ConfigError::Validation(format!(
            "timeout-secs must be between 1 and 300, got {}",
            config.timeout_secs
        )));
    }

    if config.max_redirects > 50 {
        return Err(ConfigError::Validation(format!(
            "max-redirects must be <= 50, got {}",
            config.max_redirects
        )));
    }

    if config.max_concurrent_links < 1 || config.max_concurrent_links > 1000 {
        return Err(ConfigError::Validation(format!(
            "max-concurrent-links must be between 1 and 1000, got {}",
            config.max_concurrent_links
        )));
    }

    Ok(())
}

/// Validates batch admission limits
fn validate_batch_config(config: &BatchConfig) -> Result<(), ConfigError> {
    if config.max_urls < 1 || config.max_urls > 100 {
        return Err(ConfigError::Validation(format!(
            "max-urls must be between 1 and 100, got {}",
            config.max_urls
        )));
    }

    Ok(())
}

/// Validates the redirect-tracking allowlist
fn validate_filter_config(config: &FilterConfig) -> Result<(), ConfigError> {
    if config.substrings.is_empty() {
        return Err(ConfigError::Validation(
            "filter substrings cannot be empty".to_string(),
        ));
    }

    // An empty substring would match every link
    if config.substrings.iter().any(|s| s.trim().is_empty()) {
        return Err(ConfigError::Validation(
            "filter substrings cannot contain empty entries".to_string(),
        ));
    }

    Ok(())
}
