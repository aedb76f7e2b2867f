use clap::Parser;
use std::path::PathBuf;

/// CSV usage report viewer: per-day cost bar chart with a grand total
#[derive(Parser, Debug, Clone)]
#[command(
    name = "gh-usage",
    about = "Chart the per-day cost of a GitHub usage report CSV",
    version
)]
pub struct Settings {
    /// Path to the usage report CSV file
    pub report: PathBuf,

    /// View mode
    #[arg(long, default_value = "chart", value_parser = ["chart", "plain"])]
    pub view: String,

    /// Display theme
    #[arg(long, default_value = "dark", value_parser = ["light", "dark"])]
    pub theme: String,

    /// Logging level
    #[arg(long, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR"])]
    pub log_level: String,

    /// Log file path (stderr when unset)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
