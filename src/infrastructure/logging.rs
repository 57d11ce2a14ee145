//! Log setup

use env_logger::{Env, Target};
use log::Level;
use std::io::Write as _;

/// Where log records go and how they look
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogStyle {
    /// `[LEVEL target] message` on stderr
    Plain,
    /// CI workflow commands (`::notice::message`) on stdout
    Workflow,
}

/// Render one record as a workflow command
pub fn workflow_command(level: Level, message: &str) -> String {
    let command = match level {
        Level::Error => "error",
        Level::Warn => "warning",
        Level::Info => "notice",
        Level::Debug | Level::Trace => "debug",
    };
    // Workflow commands are line based
    let message = message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A");
    format!("::{}::{}", command, message)
}

pub fn init(style: LogStyle) {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("info"));
    match style {
        LogStyle::Workflow => {
            builder.target(Target::Stdout);
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "{}",
                    workflow_command(record.level(), &record.args().to_string())
                )
            });
        }
        LogStyle::Plain => {
            builder.target(Target::Stderr);
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "[{} {}] {}",
                    record.level(),
                    record.target(),
                    record.args()
                )
            });
        }
    }
    // A second init (e.g. from tests) keeps the first logger.
    let _ = builder.try_init();
}
