//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, OutputFormat};
pub use output::{format_failure, format_tag, write_github_output};
