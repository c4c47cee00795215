pub mod toml_config;

#[cfg(feature = "cli")]
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Line,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "roster")]
#[command(about = "Print student grades from a roster seed file")]
pub struct CliConfig {
    /// Path to the TOML seed file
    #[arg(short, long, default_value = "roster.toml")]
    pub config: String,

    /// Print only the student with this id
    #[arg(long)]
    pub student: Option<i32>,

    /// Also print each student's average
    #[arg(long)]
    pub averages: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Line)]
    pub format: OutputFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}
