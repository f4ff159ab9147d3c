//! Removal via the hosting provider's own command-line tool.

use std::path::PathBuf;
use std::process::Command;
use tracing::{debug, info, warn};

use crate::provider::Remover;
use crate::provider::errors::ProviderError;

/// Subcommand the provider CLI uses to delete a project.
pub const REMOVE_VERB: &str = "remove";

/// Flag suppressing the provider CLI's own interactive prompt. Confirmation
/// happens once up front for the whole batch, not per item.
pub const NON_INTERACTIVE_FLAG: &str = "--yes";

/// Validate a project name before passing it to the provider CLI.
///
/// Rejects empty names, names starting with `-` (option injection), and
/// names containing whitespace or control characters.
pub fn validate_project_name(name: &str) -> Result<(), ProviderError> {
    let valid = !name.is_empty()
        && !name.starts_with('-')
        && !name
            .chars()
            .any(|c| c.is_whitespace() || c.is_control());

    if valid {
        Ok(())
    } else {
        Err(ProviderError::InvalidProjectName {
            name: name.to_string(),
        })
    }
}

/// [`Remover`] backed by the provider's CLI binary.
///
/// Each removal spawns `<bin> remove <project> --yes [flags...]` with
/// inherited stdio, so any error text the tool prints reaches the operator
/// unmodified. Only the exit status is interpreted.
pub struct CliRemover {
    bin: PathBuf,
    extra_flags: Vec<String>,
}

impl CliRemover {
    /// Resolve the provider binary on PATH and build a remover.
    ///
    /// Resolution happens before any destructive work so a missing tool is
    /// reported as a precondition failure, not as per-item errors.
    pub fn resolve(bin: &str, flags: Option<&str>) -> Result<Self, ProviderError> {
        let resolved = which::which(bin).map_err(|_| ProviderError::BinaryNotFound {
            bin: bin.to_string(),
        })?;

        debug!(
            event = "core.provider.binary_resolved",
            bin = bin,
            path = %resolved.display()
        );

        Ok(Self::new(resolved, flags))
    }

    /// Build a remover from an already-resolved binary path.
    pub fn new(bin: impl Into<PathBuf>, flags: Option<&str>) -> Self {
        Self {
            bin: bin.into(),
            extra_flags: flags
                .map(|f| f.split_whitespace().map(String::from).collect())
                .unwrap_or_default(),
        }
    }

    /// The resolved binary path this remover invokes.
    pub fn bin(&self) -> &std::path::Path {
        &self.bin
    }
}

impl Remover for CliRemover {
    fn remove(&self, project: &str) -> Result<(), ProviderError> {
        validate_project_name(project)?;

        info!(
            event = "core.provider.remove_started",
            project = project,
            bin = %self.bin.display()
        );

        let status = Command::new(&self.bin)
            .arg(REMOVE_VERB)
            .arg(project)
            .arg(NON_INTERACTIVE_FLAG)
            .args(&self.extra_flags)
            .status()
            .map_err(|e| ProviderError::SpawnFailed {
                bin: self.bin.display().to_string(),
                source: e,
            })?;

        if status.success() {
            info!(event = "core.provider.remove_completed", project = project);
            Ok(())
        } else {
            warn!(
                event = "core.provider.remove_failed",
                project = project,
                exit_code = status.code()
            );
            Err(ProviderError::RemoveFailed {
                project: project.to_string(),
                exit_code: status.code(),
            })
        }
    }
}
