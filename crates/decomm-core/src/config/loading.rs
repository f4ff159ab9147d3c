//! Configuration loading and merging logic.
//!
//! This module handles loading configuration from files and merging
//! configurations from different sources (user config, project config).
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.decomm/config.toml` (global user preferences)
//! 3. **Project config** - `./.decomm/config.toml` (per-portfolio overrides)
//! 4. **CLI arguments** - Command-line flags (highest priority)

use crate::config::types::{DecommConfig, ListingConfig, ProviderConfig, RunConfig};
use crate::config::validation::validate_config;
use std::fs;
use std::path::PathBuf;

/// Check if an error is a "file not found" error.
fn is_file_not_found(e: &(dyn std::error::Error + 'static)) -> bool {
    if let Some(io_err) = e.downcast_ref::<std::io::Error>() {
        return io_err.kind() == std::io::ErrorKind::NotFound;
    }

    let err_str = e.to_string();
    err_str.contains("No such file or directory") || err_str.contains("cannot find the path")
}

/// Load configuration from the hierarchy of config files.
///
/// Loads and merges configuration from:
/// 1. Default values
/// 2. User config (`~/.decomm/config.toml`)
/// 3. Project config (`./.decomm/config.toml`)
///
/// # Errors
///
/// Returns an error if validation fails. Missing config files are not errors.
pub fn load_hierarchy() -> Result<DecommConfig, Box<dyn std::error::Error>> {
    let mut config = DecommConfig::default();

    // Load user config (file not found is expected, parse errors fail)
    match load_user_config() {
        Ok(user_config) => config = merge_configs(config, user_config),
        Err(e) if !is_file_not_found(e.as_ref()) => return Err(e),
        Err(_) => {} // File not found - continue with defaults
    }

    // Load project config (file not found is expected, parse errors fail)
    match load_project_config() {
        Ok(project_config) => config = merge_configs(config, project_config),
        Err(e) if !is_file_not_found(e.as_ref()) => return Err(e),
        Err(_) => {} // File not found - continue with merged config
    }

    // Validate the final configuration
    validate_config(&config)?;

    Ok(config)
}

/// Load the user configuration from ~/.decomm/config.toml.
fn load_user_config() -> Result<DecommConfig, Box<dyn std::error::Error>> {
    let home_dir = dirs::home_dir().ok_or("Could not find home directory")?;
    let config_path = home_dir.join(".decomm").join("config.toml");
    load_config_file(&config_path)
}

/// Load the project configuration from ./.decomm/config.toml.
fn load_project_config() -> Result<DecommConfig, Box<dyn std::error::Error>> {
    let config_path = std::env::current_dir()?.join(".decomm").join("config.toml");
    load_config_file(&config_path)
}

/// Load a configuration file from the given path.
fn load_config_file(path: &PathBuf) -> Result<DecommConfig, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config file '{}': {}", path.display(), e))?;
    let config: DecommConfig = toml::from_str(&content)
        .map_err(|e| format!("Failed to parse config file '{}': {}", path.display(), e))?;
    Ok(config)
}

/// Merge two configurations, with override_config taking precedence.
///
/// For optional fields, override values replace base values only if present.
/// Fields with serde defaults can't distinguish "explicitly set to the
/// default" from "absent", so the override config always wins for them.
pub fn merge_configs(base: DecommConfig, override_config: DecommConfig) -> DecommConfig {
    DecommConfig {
        provider: ProviderConfig {
            bin: override_config.provider.bin,
            flags: override_config.provider.flags.or(base.provider.flags),
        },
        listing: ListingConfig {
            capture_file: override_config.listing.capture_file,
            url_marker: override_config.listing.url_marker,
        },
        run: RunConfig {
            delay_ms: override_config.run.delay_ms,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_configs_override_wins() {
        let base = DecommConfig::default();
        let mut override_config = DecommConfig::default();
        override_config.provider.bin = "netlify".to_string();
        override_config.run.delay_ms = 250;

        let merged = merge_configs(base, override_config);
        assert_eq!(merged.provider.bin, "netlify");
        assert_eq!(merged.run.delay_ms, 250);
    }

    #[test]
    fn test_merge_configs_optional_falls_back_to_base() {
        let mut base = DecommConfig::default();
        base.provider.flags = Some("--scope team".to_string());
        let override_config = DecommConfig::default();

        let merged = merge_configs(base, override_config);
        assert_eq!(merged.provider.flags, Some("--scope team".to_string()));
    }

    #[test]
    fn test_merge_configs_optional_override_wins() {
        let mut base = DecommConfig::default();
        base.provider.flags = Some("--scope team".to_string());
        let mut override_config = DecommConfig::default();
        override_config.provider.flags = Some("--scope other".to_string());

        let merged = merge_configs(base, override_config);
        assert_eq!(merged.provider.flags, Some("--scope other".to_string()));
    }

    #[test]
    fn test_load_config_file_missing_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let err = load_config_file(&path).unwrap_err();
        assert!(is_file_not_found(err.as_ref()));
    }

    #[test]
    fn test_load_config_file_parse_error_is_not_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "this is not toml [").unwrap();
        let err = load_config_file(&path).unwrap_err();
        assert!(!is_file_not_found(err.as_ref()));
    }

    #[test]
    fn test_load_config_file_valid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[provider]
bin = "netlify"

[run]
delay_ms = 100
"#,
        )
        .unwrap();

        let config = load_config_file(&path).unwrap();
        assert_eq!(config.provider.bin, "netlify");
        assert_eq!(config.run.delay_ms, 100);
        // Unspecified sections keep their defaults
        assert_eq!(config.listing.url_marker, "vercel.app");
    }
}
