mod cli;

use clap::Parser;
use cli::Cli;
use skill_checklist::{output, validate};

fn main() {
    let cli = Cli::parse();

    // Resolve without touching the filesystem — the target may not
    // exist, and a missing target still gets a full failing report.
    let skill_dir = std::path::absolute(&cli.path).unwrap_or(cli.path);

    let report = validate::run_validation(&skill_dir);
    print!("{}", output::format_report(&report));

    std::process::exit(if report.passed { 0 } else { 1 });
}
