use crate::errors::DecommError;

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("Provider CLI '{bin}' not found on PATH")]
    BinaryNotFound { bin: String },

    #[error("Invalid project name: '{name}'")]
    InvalidProjectName { name: String },

    #[error("Failed to spawn '{bin}': {source}")]
    SpawnFailed {
        bin: String,
        source: std::io::Error,
    },

    #[error(
        "Removal of '{project}' failed with exit code {}",
        .exit_code.map_or_else(|| "unknown (terminated by signal)".to_string(), |c| c.to_string())
    )]
    RemoveFailed {
        project: String,
        exit_code: Option<i32>,
    },
}

impl DecommError for ProviderError {
    fn error_code(&self) -> &'static str {
        match self {
            ProviderError::BinaryNotFound { .. } => "PROVIDER_BINARY_NOT_FOUND",
            ProviderError::InvalidProjectName { .. } => "INVALID_PROJECT_NAME",
            ProviderError::SpawnFailed { .. } => "PROVIDER_SPAWN_FAILED",
            ProviderError::RemoveFailed { .. } => "PROVIDER_REMOVE_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            ProviderError::BinaryNotFound { .. } | ProviderError::InvalidProjectName { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_not_found_display() {
        let error = ProviderError::BinaryNotFound {
            bin: "vercel".to_string(),
        };
        assert_eq!(error.to_string(), "Provider CLI 'vercel' not found on PATH");
        assert_eq!(error.error_code(), "PROVIDER_BINARY_NOT_FOUND");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_remove_failed_display() {
        let error = ProviderError::RemoveFailed {
            project: "app-one".to_string(),
            exit_code: Some(1),
        };
        assert_eq!(
            error.to_string(),
            "Removal of 'app-one' failed with exit code 1"
        );
        assert_eq!(error.error_code(), "PROVIDER_REMOVE_FAILED");
        assert!(!error.is_user_error());
    }
}
