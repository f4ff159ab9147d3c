//! Sequential batch execution over a candidate list.
//!
//! One failed removal never aborts the batch: the failure is counted and
//! execution continues with the next candidate. There is no retry and no
//! resume; the remedy for a partial run is re-capturing the listing and
//! running again.

use tracing::{info, warn};

use crate::provider::Remover;
use crate::purge::types::{PurgeOptions, PurgeProgress, PurgeSummary};

/// Remove every candidate in extraction order, tallying outcomes.
///
/// Invokes `remover` once per project, applies the configured delay after
/// each invocation, and reports progress through `observe`. The returned
/// summary satisfies `removed + failed == total`.
pub fn execute<R: Remover>(
    remover: &R,
    projects: &[String],
    options: &PurgeOptions,
    mut observe: impl FnMut(PurgeProgress<'_>),
) -> PurgeSummary {
    let total = projects.len();

    info!(
        event = "core.purge.batch_started",
        total = total,
        delay_ms = options.delay.as_millis() as u64
    );

    let mut removed = 0;
    let mut failed = 0;

    for (i, project) in projects.iter().enumerate() {
        let index = i + 1;

        observe(PurgeProgress::ItemStarted {
            index,
            total,
            project,
        });

        match remover.remove(project) {
            Ok(()) => {
                removed += 1;
                info!(
                    event = "core.purge.item_removed",
                    index = index,
                    project = project.as_str()
                );
                observe(PurgeProgress::ItemRemoved {
                    index,
                    total,
                    project,
                });
            }
            Err(e) => {
                failed += 1;
                warn!(
                    event = "core.purge.item_failed",
                    index = index,
                    project = project.as_str(),
                    error = %e
                );
                observe(PurgeProgress::ItemFailed {
                    index,
                    total,
                    project,
                    error: &e,
                });
            }
        }

        if !options.delay.is_zero() {
            std::thread::sleep(options.delay);
        }
    }

    let summary = PurgeSummary {
        total,
        removed,
        failed,
    };

    info!(
        event = "core.purge.batch_completed",
        total = summary.total,
        removed = summary.removed,
        failed = summary.failed
    );

    summary
}
