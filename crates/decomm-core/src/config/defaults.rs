//! Default implementations for configuration types.
//!
//! This module contains all `Default` implementations and helper functions
//! for providing default values in serde deserialization.

use crate::config::types::{ListingConfig, ProviderConfig, RunConfig};
use std::path::PathBuf;

/// Returns the default provider CLI binary name.
///
/// Used by serde `#[serde(default = "...")]` attribute.
pub fn default_provider_bin() -> String {
    "vercel".to_string()
}

/// Returns the default listing capture filename.
///
/// Matches the filename the capture step writes to, so a bare `decomm run`
/// in the capture directory finds it without flags.
///
/// Used by serde `#[serde(default = "...")]` attribute.
pub fn default_capture_file() -> PathBuf {
    PathBuf::from("projects-page1.txt")
}

/// Returns the default hosted-app URL marker.
///
/// Used by serde `#[serde(default = "...")]` attribute.
pub fn default_url_marker() -> String {
    "vercel.app".to_string()
}

/// Returns the default delay between removal invocations (500ms).
///
/// The remote service rate-limits bursts of removal calls; 500ms keeps a
/// full page of removals under a minute while staying below the limit.
///
/// Used by serde `#[serde(default = "...")]` attribute.
pub fn default_delay_ms() -> u64 {
    500
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            bin: default_provider_bin(),
            flags: None,
        }
    }
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            capture_file: default_capture_file(),
            url_marker: default_url_marker(),
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
        }
    }
}
