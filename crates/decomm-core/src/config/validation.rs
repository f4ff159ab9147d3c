//! Configuration validation.

use crate::config::types::DecommConfig;
use crate::errors::ConfigError;

/// Upper bound on the per-item delay, in milliseconds.
///
/// A delay above one minute turns a single listing page into an hour-long
/// run; values that large are almost certainly a units mistake.
pub const MAX_DELAY_MS: u64 = 60_000;

/// Validate a loaded configuration.
///
/// # Errors
///
/// Returns `ConfigError::InvalidConfiguration` describing the first
/// violation found.
pub fn validate_config(config: &DecommConfig) -> Result<(), ConfigError> {
    let bin = config.provider.bin.trim();
    if bin.is_empty() {
        return Err(ConfigError::InvalidConfiguration {
            message: "provider.bin cannot be empty".to_string(),
        });
    }
    if bin.chars().any(char::is_whitespace) {
        return Err(ConfigError::InvalidConfiguration {
            message: format!(
                "provider.bin '{}' must be a bare binary name without whitespace",
                config.provider.bin
            ),
        });
    }

    if config.listing.url_marker.trim().is_empty() {
        return Err(ConfigError::InvalidConfiguration {
            message: "listing.url_marker cannot be empty".to_string(),
        });
    }

    if config.run.delay_ms > MAX_DELAY_MS {
        return Err(ConfigError::InvalidConfiguration {
            message: format!(
                "run.delay_ms {} exceeds maximum of {}",
                config.run.delay_ms, MAX_DELAY_MS
            ),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&DecommConfig::default()).is_ok());
    }

    #[test]
    fn test_empty_bin_rejected() {
        let mut config = DecommConfig::default();
        config.provider.bin = "  ".to_string();
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("provider.bin"));
    }

    #[test]
    fn test_bin_with_whitespace_rejected() {
        let mut config = DecommConfig::default();
        config.provider.bin = "vercel remove".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_empty_url_marker_rejected() {
        let mut config = DecommConfig::default();
        config.listing.url_marker = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_excessive_delay_rejected() {
        let mut config = DecommConfig::default();
        config.run.delay_ms = MAX_DELAY_MS + 1;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_max_delay_accepted() {
        let mut config = DecommConfig::default();
        config.run.delay_ms = MAX_DELAY_MS;
        assert!(validate_config(&config).is_ok());
    }
}
