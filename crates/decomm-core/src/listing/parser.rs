//! Heuristic extraction of project candidates from raw listing captures.
//!
//! Provider listing output is human-readable text, not a documented format.
//! A line counts as a project row iff it contains both the hosted-app URL
//! marker (configurable, default `vercel.app`) and the URL scheme marker;
//! the candidate name is the row's first whitespace-delimited token. Rows
//! from other hosting domains are silently skipped.

use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::listing::errors::ListingError;
use crate::listing::types::Listing;

/// Every project row carries a full deployment URL.
pub const SCHEME_MARKER: &str = "https://";

/// Token the provider appends to a listing page when more pages exist.
pub const PAGINATION_MARKER: &str = "--next";

/// A project identifier always contains at least one hyphen; tokens without
/// one are column headers, timestamps, or other non-identifier text.
pub(crate) fn is_candidate_name(name: &str) -> bool {
    name.contains('-')
}

/// Extract project candidates from raw listing text.
///
/// Duplicate names are suppressed in first-seen order, so re-deployments
/// that show up as multiple rows yield a single candidate.
pub fn parse_listing(text: &str, url_marker: &str) -> Listing {
    let mut projects: Vec<String> = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if !(line.contains(url_marker) && line.contains(SCHEME_MARKER)) {
            continue;
        }

        let Some(name) = line.split_whitespace().next() else {
            continue;
        };

        if is_candidate_name(name) && !projects.iter().any(|p| p == name) {
            projects.push(name.to_string());
        }
    }

    let has_more_pages = text.contains(PAGINATION_MARKER);

    debug!(
        event = "core.listing.parse_completed",
        candidates = projects.len(),
        has_more_pages = has_more_pages
    );

    Listing::new(projects, has_more_pages)
}

/// Read a saved listing capture and extract its candidates.
///
/// # Errors
///
/// Returns `ListingError::CaptureNotFound` when the capture file does not
/// exist, and `ListingError::IoError` for other read failures. An empty or
/// non-matching capture is not an error here; callers that need at least
/// one candidate enforce that guard themselves.
pub fn read_capture(path: &Path, url_marker: &str) -> Result<Listing, ListingError> {
    if !path.exists() {
        return Err(ListingError::CaptureNotFound {
            path: path.to_path_buf(),
        });
    }

    let text = fs::read_to_string(path)?;
    let listing = parse_listing(&text, url_marker);

    info!(
        event = "core.listing.capture_read",
        path = %path.display(),
        candidates = listing.len(),
        has_more_pages = listing.has_more_pages()
    );

    Ok(listing)
}
