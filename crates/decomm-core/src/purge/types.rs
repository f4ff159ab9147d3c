use std::time::Duration;

use crate::provider::ProviderError;

/// Options controlling batch execution.
#[derive(Debug, Clone)]
pub struct PurgeOptions {
    /// Pause applied after every removal invocation, regardless of outcome.
    pub delay: Duration,
}

impl PurgeOptions {
    pub fn with_delay_ms(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
        }
    }
}

impl Default for PurgeOptions {
    fn default() -> Self {
        Self::with_delay_ms(crate::config::defaults::default_delay_ms())
    }
}

/// Final tally of a batch run.
///
/// Invariant: `removed + failed == total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurgeSummary {
    pub total: usize,
    pub removed: usize,
    pub failed: usize,
}

/// Per-item progress emitted to the observer during a batch run.
///
/// `index` is 1-based to match the displayed candidate numbering.
#[derive(Debug)]
pub enum PurgeProgress<'a> {
    ItemStarted {
        index: usize,
        total: usize,
        project: &'a str,
    },
    ItemRemoved {
        index: usize,
        total: usize,
        project: &'a str,
    },
    ItemFailed {
        index: usize,
        total: usize,
        project: &'a str,
        error: &'a ProviderError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_purge_options_with_delay_ms() {
        let options = PurgeOptions::with_delay_ms(250);
        assert_eq!(options.delay, Duration::from_millis(250));
    }

    #[test]
    fn test_purge_options_default_matches_config_default() {
        let options = PurgeOptions::default();
        assert_eq!(options.delay, Duration::from_millis(500));
    }
}
