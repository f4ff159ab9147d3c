use clap::{Arg, ArgAction, ArgMatches, Command};

pub fn build_cli() -> Command {
    Command::new("decomm")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Bulk-remove deployed projects via the hosting provider's CLI")
        .long_about(
            "decomm extracts project names from a saved capture of the hosting \
            provider's project listing, shows the candidates for confirmation, and \
            then invokes the provider CLI once per project to remove it, reporting \
            a final success/failure tally. It never fetches further listing pages \
            itself; re-capture and re-run when the listing is paginated.",
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("list")
                .about("Show project candidates extracted from a listing capture")
                .arg(
                    Arg::new("capture")
                        .long("capture")
                        .short('c')
                        .help("Path to the saved listing capture (overrides config)")
                        .value_parser(clap::value_parser!(std::path::PathBuf)),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("run")
                .about("Remove every extracted project candidate via the provider CLI")
                .arg(
                    Arg::new("capture")
                        .long("capture")
                        .short('c')
                        .help("Path to the saved listing capture (overrides config)")
                        .value_parser(clap::value_parser!(std::path::PathBuf)),
                )
                .arg(
                    Arg::new("yes")
                        .long("yes")
                        .short('y')
                        .help("Skip the confirmation prompt (for scripted use)")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("dry-run")
                        .long("dry-run")
                        .help("Show what would be removed without invoking the provider")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("delay-ms")
                        .long("delay-ms")
                        .help("Pause between removal invocations in milliseconds (overrides config)")
                        .value_parser(clap::value_parser!(u64)),
                )
                .arg(
                    Arg::new("provider-bin")
                        .long("provider-bin")
                        .help("Provider CLI binary to invoke (overrides config)"),
                ),
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completion scripts")
                .arg(
                    Arg::new("shell")
                        .help("Shell to generate completions for")
                        .required(true)
                        .index(1)
                        .value_parser(clap::value_parser!(clap_complete::Shell)),
                ),
        )
}

#[allow(dead_code)]
pub fn get_matches() -> ArgMatches {
    build_cli().get_matches()
}
