use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "skill-checklist",
    version,
    about = "Checklist validation for AI agent skill packages"
)]
pub struct Cli {
    /// Path to the skill directory
    #[arg(default_value = ".")]
    pub path: PathBuf,
}
