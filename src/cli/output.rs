//! Result reporting

use crate::cli::OutputFormat;
use crate::error::Result;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Format the computed tag for stdout
pub fn format_tag(tag: &str, format: OutputFormat) -> String {
    match format {
        OutputFormat::Plain => tag.to_string(),
        OutputFormat::Actions => format!("::set-output name=tag::{}", tag),
    }
}

/// Format a run failure for stdout in the given style, if that style
/// reports failures there.
pub fn format_failure(message: &str, format: OutputFormat) -> Option<String> {
    match format {
        OutputFormat::Plain => None,
        OutputFormat::Actions => Some(format!(
            "::error::calverlex failed: {}",
            message.replace('\n', "%0A")
        )),
    }
}

/// Append `tag=<tag>` to a `$GITHUB_OUTPUT` file
pub fn write_github_output(path: &Path, tag: &str) -> Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "tag={}", tag)?;
    Ok(())
}
