use crate::errors::DecommError;

#[derive(Debug, thiserror::Error)]
pub enum ListingError {
    #[error("Listing capture not found at '{path}'")]
    CaptureNotFound { path: std::path::PathBuf },

    #[error("No project candidates found in '{path}'")]
    NoCandidates { path: std::path::PathBuf },

    #[error("IO operation failed: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl DecommError for ListingError {
    fn error_code(&self) -> &'static str {
        match self {
            ListingError::CaptureNotFound { .. } => "CAPTURE_NOT_FOUND",
            ListingError::NoCandidates { .. } => "NO_CANDIDATES",
            ListingError::IoError { .. } => "IO_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            ListingError::CaptureNotFound { .. } | ListingError::NoCandidates { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_not_found_display() {
        let error = ListingError::CaptureNotFound {
            path: std::path::PathBuf::from("projects-page1.txt"),
        };
        assert_eq!(
            error.to_string(),
            "Listing capture not found at 'projects-page1.txt'"
        );
        assert_eq!(error.error_code(), "CAPTURE_NOT_FOUND");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_no_candidates_display() {
        let error = ListingError::NoCandidates {
            path: std::path::PathBuf::from("projects-page1.txt"),
        };
        assert_eq!(
            error.to_string(),
            "No project candidates found in 'projects-page1.txt'"
        );
        assert_eq!(error.error_code(), "NO_CANDIDATES");
        assert!(error.is_user_error());
    }
}
