//! The removal seam: one narrow capability, "remove this project and
//! observe the outcome", with the provider CLI behind it.

pub mod cli;
pub mod errors;

// Re-export commonly used types and functions
pub use cli::{CliRemover, validate_project_name};
pub use errors::ProviderError;

/// Capability to remove one deployed project by name.
///
/// The production implementation is [`CliRemover`]; tests substitute fakes
/// to drive the batch runner without touching remote state.
pub trait Remover {
    /// Attempt removal of `project`, mapping a nonzero provider exit status
    /// to [`ProviderError::RemoveFailed`].
    fn remove(&self, project: &str) -> Result<(), ProviderError>;
}
