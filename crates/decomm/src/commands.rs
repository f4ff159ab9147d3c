use clap::ArgMatches;
use std::path::PathBuf;
use tracing::{error, info, warn};

use decomm_core::config::DecommConfig;
use decomm_core::events;
use decomm_core::listing::{self, ListingError};
use decomm_core::provider::CliRemover;
use decomm_core::purge::{self, PurgeOptions, PurgeProgress};

use crate::table::TableFormatter;

/// Phrase the operator must type, exactly, before any project is removed.
pub const CONFIRM_PHRASE: &str = "DELETE";

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    match matches.subcommand() {
        Some(("list", sub_matches)) => handle_list_command(sub_matches),
        Some(("run", sub_matches)) => handle_run_command(sub_matches),
        Some(("completions", sub_matches)) => handle_completions_command(sub_matches),
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    }
}

/// Load configuration with warning on errors.
///
/// Falls back to defaults if config loading fails, but notifies the user via:
/// - stderr message for immediate visibility
/// - structured log event `cli.config.load_failed` for debugging
fn load_config_with_warning() -> DecommConfig {
    match DecommConfig::load_hierarchy() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Could not load config: {}. Using defaults.\n\
                 Tip: Check ~/.decomm/config.toml and ./.decomm/config.toml for syntax errors.",
                e
            );
            warn!(
                event = "cli.config.load_failed",
                error = %e,
                "Config load failed, using defaults"
            );
            DecommConfig::default()
        }
    }
}

/// Capture path precedence: CLI flag > config.
fn capture_path(matches: &ArgMatches, config: &DecommConfig) -> PathBuf {
    matches
        .get_one::<PathBuf>("capture")
        .cloned()
        .unwrap_or_else(|| config.listing.capture_file.clone())
}

fn print_pagination_warning() {
    println!();
    println!("⚠️  The listing has more pages (pagination marker found).");
    println!("   Only the candidates shown are covered; re-capture the next page and run again.");
}

fn report_capture_error(e: &ListingError, path: &std::path::Path, bin: &str) {
    eprintln!("❌ {}", e);
    eprintln!(
        "   Hint: Save the output of '{} ls' to '{}' first.",
        bin,
        path.display()
    );
}

fn handle_list_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config_with_warning();
    let json_output = matches.get_flag("json");
    let path = capture_path(matches, &config);

    info!(
        event = "cli.list_started",
        capture = %path.display(),
        json_output = json_output
    );

    match listing::read_capture(&path, &config.listing.url_marker) {
        Ok(listing) => {
            if json_output {
                #[derive(serde::Serialize)]
                struct ListResponse<'a> {
                    count: usize,
                    has_more_pages: bool,
                    projects: &'a [String],
                }

                let response = ListResponse {
                    count: listing.len(),
                    has_more_pages: listing.has_more_pages(),
                    projects: listing.projects(),
                };
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else if listing.is_empty() {
                println!("No project candidates found in '{}'.", path.display());
            } else {
                println!("Project candidates:");
                let formatter = TableFormatter::new(listing.projects());
                formatter.print_table(listing.projects());

                if listing.has_more_pages() {
                    print_pagination_warning();
                }
            }

            info!(event = "cli.list_completed", count = listing.len());

            Ok(())
        }
        Err(e) => {
            report_capture_error(&e, &path, &config.provider.bin);

            error!(
                event = "cli.list_failed",
                capture = %path.display(),
                error = %e
            );

            events::log_app_error(&e);
            Err(e.into())
        }
    }
}

fn handle_run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = load_config_with_warning();

    // Apply CLI overrides only if provided
    if let Some(bin) = matches.get_one::<String>("provider-bin") {
        config.provider.bin = bin.clone();
    }
    if let Some(delay_ms) = matches.get_one::<u64>("delay-ms") {
        config.run.delay_ms = *delay_ms;
    }

    let skip_confirm = matches.get_flag("yes");
    let dry_run = matches.get_flag("dry-run");
    let path = capture_path(matches, &config);

    info!(
        event = "cli.run_started",
        capture = %path.display(),
        dry_run = dry_run,
        skip_confirm = skip_confirm,
        delay_ms = config.run.delay_ms
    );

    // Guard 1: the capture must exist and be readable
    let listing = match listing::read_capture(&path, &config.listing.url_marker) {
        Ok(listing) => listing,
        Err(e) => {
            report_capture_error(&e, &path, &config.provider.bin);

            error!(
                event = "cli.run_failed",
                capture = %path.display(),
                error = %e
            );

            events::log_app_error(&e);
            return Err(e.into());
        }
    };

    // Guard 2: at least one candidate, before any prompt or side effect
    if listing.is_empty() {
        let e = ListingError::NoCandidates { path: path.clone() };
        eprintln!("❌ {}", e);
        eprintln!(
            "   Hint: Check that '{}' holds the provider's listing output.",
            path.display()
        );

        error!(event = "cli.run_no_candidates", capture = %path.display());

        events::log_app_error(&e);
        return Err(e.into());
    }

    println!("Found {} project(s) to remove:", listing.len());
    let formatter = TableFormatter::new(listing.projects());
    formatter.print_table(listing.projects());

    if listing.has_more_pages() {
        print_pagination_warning();
    }

    if dry_run {
        println!();
        println!(
            "Dry run: {} project(s) would be removed. Nothing was invoked.",
            listing.len()
        );
        info!(event = "cli.run_dry_run_completed", count = listing.len());
        return Ok(());
    }

    if !skip_confirm && !confirm_removal(listing.len())? {
        println!("Removal cancelled.");
        info!(event = "cli.run_cancelled");
        return Ok(());
    }

    let remover = match CliRemover::resolve(&config.provider.bin, config.provider.flags.as_deref())
    {
        Ok(remover) => remover,
        Err(e) => {
            eprintln!("❌ {}", e);
            eprintln!(
                "   Hint: Make sure '{}' is installed and in your PATH",
                config.provider.bin
            );

            error!(
                event = "cli.run_provider_missing",
                bin = config.provider.bin,
                error = %e
            );

            events::log_app_error(&e);
            return Err(e.into());
        }
    };

    let options = PurgeOptions::with_delay_ms(config.run.delay_ms);
    let summary = purge::execute(&remover, listing.projects(), &options, |progress| {
        match progress {
            PurgeProgress::ItemStarted {
                index,
                total,
                project,
            } => {
                println!();
                println!("[{}/{}] Removing: {}", index, total, project);
            }
            PurgeProgress::ItemRemoved { .. } => println!("   ✓ Removed"),
            PurgeProgress::ItemFailed { error, .. } => println!("   ✗ {}", error),
        }
    });

    println!();
    println!("Removal complete:");
    println!("   Total:   {}", summary.total);
    println!("   Removed: {}", summary.removed);
    println!("   Failed:  {}", summary.failed);

    if listing.has_more_pages() {
        print_pagination_warning();
    }

    info!(
        event = "cli.run_completed",
        total = summary.total,
        removed = summary.removed,
        failed = summary.failed
    );

    // Return error if any failures (for exit code)
    if summary.failed > 0 {
        return Err(format_partial_failure_error(summary.failed, summary.total).into());
    }

    Ok(())
}

fn handle_completions_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let shell = *matches
        .get_one::<clap_complete::Shell>("shell")
        .ok_or("Shell argument is required")?;

    info!(event = "cli.completions_started", shell = %shell);

    let mut cli = crate::app::build_cli();
    clap_complete::generate(shell, &mut cli, "decomm", &mut std::io::stdout());

    Ok(())
}

/// Prompt for confirmation of a destructive batch.
///
/// Returns `Ok(true)` only when the operator types the confirmation phrase
/// exactly; EOF or any other input declines.
fn confirm_removal(count: usize) -> Result<bool, Box<dyn std::error::Error>> {
    use std::io::{self, Write};

    print!(
        "\nRemove ALL {} project(s)? This cannot be undone. Type '{}' to confirm: ",
        count, CONFIRM_PHRASE
    );
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(is_exact_confirmation(&input))
}

/// Check if confirmation input matches the required phrase exactly.
/// Unlike yes/no prompts, casing matters: 'delete' does not confirm.
fn is_exact_confirmation(input: &str) -> bool {
    input.trim() == CONFIRM_PHRASE
}

/// Format partial failure error message for the batch run.
fn format_partial_failure_error(failed: usize, total: usize) -> String {
    format!(
        "Partial failure: {} of {} project(s) failed to remove",
        failed, total
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirmation_requires_exact_phrase() {
        assert!(is_exact_confirmation("DELETE"));
        assert!(is_exact_confirmation("DELETE\n"));
        assert!(is_exact_confirmation("  DELETE  "));
    }

    #[test]
    fn test_confirmation_rejects_other_input() {
        assert!(!is_exact_confirmation("delete"));
        assert!(!is_exact_confirmation("Delete"));
        assert!(!is_exact_confirmation("yes"));
        assert!(!is_exact_confirmation("y"));
        assert!(!is_exact_confirmation(""));
        assert!(!is_exact_confirmation("DELETE ALL"));
    }

    #[test]
    fn test_format_partial_failure_error() {
        assert_eq!(
            format_partial_failure_error(2, 5),
            "Partial failure: 2 of 5 project(s) failed to remove"
        );
    }

    #[test]
    fn test_capture_path_prefers_cli_flag() {
        let app = crate::app::build_cli();
        let matches = app
            .try_get_matches_from(vec!["decomm", "list", "--capture", "page2.txt"])
            .unwrap();
        let sub_matches = matches.subcommand_matches("list").unwrap();

        let config = DecommConfig::default();
        assert_eq!(
            capture_path(sub_matches, &config),
            PathBuf::from("page2.txt")
        );
    }

    #[test]
    fn test_capture_path_falls_back_to_config() {
        let app = crate::app::build_cli();
        let matches = app.try_get_matches_from(vec!["decomm", "list"]).unwrap();
        let sub_matches = matches.subcommand_matches("list").unwrap();

        let config = DecommConfig::default();
        assert_eq!(
            capture_path(sub_matches, &config),
            PathBuf::from("projects-page1.txt")
        );
    }
}
