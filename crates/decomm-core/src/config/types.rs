//! Configuration type definitions for the decomm CLI.
//!
//! These types are serialized/deserialized from TOML config files.
//!
//! # Example Configuration
//!
//! ```toml
//! [provider]
//! bin = "vercel"
//! flags = "--scope my-team"
//!
//! [listing]
//! capture_file = "projects-page1.txt"
//! url_marker = "vercel.app"
//!
//! [run]
//! delay_ms = 500
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration loaded from TOML config files.
///
/// This is the primary configuration structure that gets loaded from:
/// 1. User config: `~/.decomm/config.toml`
/// 2. Project config: `./.decomm/config.toml`
///
/// Project config values override user config values.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DecommConfig {
    /// Hosting provider CLI configuration
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Listing capture and extraction settings
    #[serde(default)]
    pub listing: ListingConfig,

    /// Batch execution settings
    #[serde(default)]
    pub run: RunConfig,
}

/// Hosting provider CLI configuration.
///
/// The provider tool is invoked once per project with a `remove` verb and a
/// non-interactive flag; `flags` are appended to every invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Provider CLI binary to invoke, resolved on PATH.
    #[serde(default = "super::defaults::default_provider_bin")]
    pub bin: String,

    /// Extra flags appended to every removal invocation.
    #[serde(default)]
    pub flags: Option<String>,
}

/// Listing capture and extraction settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingConfig {
    /// Path to the saved listing capture, relative to the working directory.
    #[serde(default = "super::defaults::default_capture_file")]
    pub capture_file: PathBuf,

    /// Substring marking a line as a hosted-app project row.
    #[serde(default = "super::defaults::default_url_marker")]
    pub url_marker: String,
}

/// Batch execution settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Pause in milliseconds after each removal invocation.
    /// Default: 500ms.
    #[serde(default = "super::defaults::default_delay_ms")]
    pub delay_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decomm_config_serialization() {
        let config = DecommConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: DecommConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config.provider.bin, parsed.provider.bin);
        assert_eq!(config.run.delay_ms, parsed.run.delay_ms);
    }

    #[test]
    fn test_provider_config_deserialize() {
        let toml_str = r#"
bin = "netlify"
flags = "--filter team"
"#;
        let provider: ProviderConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(provider.bin, "netlify");
        assert_eq!(provider.flags, Some("--filter team".to_string()));
    }

    #[test]
    fn test_listing_config_serde_defaults() {
        // Missing fields should use the documented defaults, not zero values
        let toml_str = r#"
[listing]
url_marker = "netlify.app"
"#;
        let config: DecommConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.listing.url_marker, "netlify.app");
        assert_eq!(
            config.listing.capture_file,
            PathBuf::from("projects-page1.txt"),
            "capture_file should default when only url_marker is set"
        );
    }

    #[test]
    fn test_run_config_explicit_zero_preserved() {
        // Explicit 0 should be preserved - serde default only applies to missing fields
        let toml_str = r#"
[run]
delay_ms = 0
"#;
        let config: DecommConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.run.delay_ms, 0);
    }
}
