//! decomm-core: Core library for bulk removal of deployed hosting projects
//!
//! This library provides the business logic for decommissioning a portfolio
//! of deployed static apps: extracting project candidates from a saved
//! provider listing, invoking the provider's CLI per candidate, and tallying
//! the outcome. It is used by the `decomm` CLI.
//!
//! # Main Entry Points
//!
//! - [`listing`] - Candidate extraction from listing captures
//! - [`purge`] - Sequential batch removal with a running tally
//! - [`provider`] - The removal seam over the provider CLI
//! - [`config`] - Configuration management

pub mod config;
pub mod errors;
pub mod events;
pub mod listing;
pub mod logging;
pub mod provider;
pub mod purge;

// Re-export commonly used types at crate root for convenience
pub use config::DecommConfig;
pub use listing::{Listing, ListingError};
pub use provider::{CliRemover, ProviderError, Remover};
pub use purge::{PurgeOptions, PurgeProgress, PurgeSummary};

// Re-export logging initialization
pub use logging::init_logging;
