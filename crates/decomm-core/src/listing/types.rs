use serde::Serialize;

/// A deduplicated, first-seen-ordered set of project candidates extracted
/// from one page of a provider listing.
///
/// Construct with [`Listing::parse`] for raw capture text or
/// [`Listing::from_names`] for identifiers that are already parsed. Both
/// apply the same acceptance contract: a candidate must contain at least one
/// hyphen, and a name is kept only the first time it is seen.
#[derive(Debug, Clone, Serialize)]
pub struct Listing {
    projects: Vec<String>,
    has_more_pages: bool,
}

impl Listing {
    pub(crate) fn new(projects: Vec<String>, has_more_pages: bool) -> Self {
        Self {
            projects,
            has_more_pages,
        }
    }

    /// Build a listing from already-parsed identifiers.
    ///
    /// Structured sources carry no pagination marker, so the resulting
    /// listing never reports further pages.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut projects: Vec<String> = Vec::new();
        for name in names {
            let name = name.into();
            if super::parser::is_candidate_name(&name) && !projects.contains(&name) {
                projects.push(name);
            }
        }
        Self::new(projects, false)
    }

    /// Candidate project names in first-seen order.
    pub fn projects(&self) -> &[String] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// True when the capture contained the pagination marker, meaning the
    /// provider has more result pages beyond this text.
    pub fn has_more_pages(&self) -> bool {
        self.has_more_pages
    }
}
