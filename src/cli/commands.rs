//! CLI argument definitions

use crate::domain::YearFormat;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "calverlex")]
#[command(about = "Compute the next unbounded CalVer tag (e.g. 25216a)", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Previously issued tag; the next tag is derived from it without listing
    /// tags, so --token and --repository are not needed
    #[arg(long, env = "INPUT_CURRENT_VERSION", value_name = "TAG")]
    pub current_version: Option<String>,

    /// Digits of the year in the prefix (2 or 4)
    #[arg(long, env = "INPUT_YEAR_FORMAT", value_name = "DIGITS")]
    pub year_format: Option<YearFormat>,

    /// Repository to list existing tags from (owner/repo)
    #[arg(long, env = "INPUT_REPOSITORY", value_name = "OWNER/REPO")]
    pub repository: Option<String>,

    /// Token for the GitHub API
    #[arg(long, env = "INPUT_GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Compute the tag for this instant instead of now (RFC 3339)
    #[arg(long, env = "INPUT_DATE", value_name = "TIMESTAMP")]
    pub date: Option<String>,

    /// TOML config file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// How to report the result (default: actions inside GitHub Actions, else plain)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Print the tag alone
    Plain,
    /// Emit workflow commands and write to $GITHUB_OUTPUT
    Actions,
}

impl OutputFormat {
    /// Pick a format when none was requested
    pub fn detect(requested: Option<OutputFormat>) -> OutputFormat {
        requested.unwrap_or_else(|| {
            if std::env::var("GITHUB_ACTIONS").is_ok_and(|v| v == "true") {
                OutputFormat::Actions
            } else {
                OutputFormat::Plain
            }
        })
    }
}
