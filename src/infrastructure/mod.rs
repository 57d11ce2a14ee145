//! Infrastructure layer - External I/O

pub mod config;
pub mod github;
pub mod logging;

pub use config::Config;
pub use github::{GitHubTagSource, Repository};
pub use logging::LogStyle;
