//! Clap command definition.

use clap::{Arg, Command};

/// Build the `benchkit` command.
pub fn build_cli() -> Command {
    Command::new("benchkit")
        .about("Compare benchmark results across configurations and write a summary report")
        .arg(
            Arg::new("configurations")
                .help("Configurations to compare, baseline first (default: all)")
                .num_args(0..)
                .value_name("CONFIGURATION"),
        )
        .arg(
            Arg::new("comment")
                .long("comment")
                .help("Report directory suffix (default: configuration names joined by _vs_)"),
        )
        .arg(
            Arg::new("gc")
                .long("gc")
                .help("Include garbage collector charts and tables")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("benchmark")
                .long("benchmark")
                .help("Only benchmarks starting with this prefix (repeatable)")
                .action(clap::ArgAction::Append),
        )
        .arg(
            Arg::new("csv")
                .long("csv")
                .help("Also write percentile tables as CSV")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("results")
                .long("results")
                .help("Results directory (overrides the config file)"),
        )
        .arg(
            Arg::new("reports")
                .long("reports")
                .help("Reports directory (overrides the config file)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Settings file (default: benchkit.toml, if present)"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("More logging (-v info, -vv debug)")
                .action(clap::ArgAction::Count)
                .conflicts_with("quiet"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Only log errors")
                .action(clap::ArgAction::SetTrue),
        )
}
