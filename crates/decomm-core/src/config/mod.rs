//! # Configuration System
//!
//! Hierarchical TOML configuration system for the decomm CLI.
//!
//! ## Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.decomm/config.toml` (global user preferences)
//! 3. **Project config** - `./.decomm/config.toml` (per-portfolio overrides)
//! 4. **CLI arguments** - Command-line flags (highest priority)
//!
//! ## Usage Example
//!
//! ```toml
//! # ~/.decomm/config.toml
//! [provider]
//! bin = "vercel"
//!
//! [listing]
//! capture_file = "projects-page1.txt"
//! url_marker = "vercel.app"
//!
//! [run]
//! delay_ms = 500
//! ```
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use decomm_core::config::DecommConfig;
//!
//! // Handle config errors explicitly - don't silently fall back to defaults
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DecommConfig::load_hierarchy()?;
//!     println!("{}", config.provider.bin);
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

// Public API exports
pub use types::{DecommConfig, ListingConfig, ProviderConfig, RunConfig};
pub use validation::{MAX_DELAY_MS, validate_config};

// Delegation for DecommConfig methods
impl DecommConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, Box<dyn std::error::Error>> {
        loading::load_hierarchy()
    }

    /// Validate the configuration.
    ///
    /// See [`validation::validate_config`] for details.
    pub fn validate(&self) -> Result<(), crate::errors::ConfigError> {
        validation::validate_config(self)
    }
}
