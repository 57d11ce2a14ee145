//! calverlex - Unbounded CalVer tags
//!
//! Tags are a date prefix (`YYWWD` or `YYYYWWD`: year, ISO week, ISO
//! weekday) followed by a bijective base-26 suffix (`a`..`z`, `aa`, ...),
//! so any number of releases per day stay strictly ordered.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::CalverError;
