//! Tag grammar: a date prefix followed by a suffix

use crate::domain::date_prefix::DatePrefix;
use crate::domain::suffix::Suffix;
use crate::error::{CalverError, Result};
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Regex for a complete tag: 5-7 digits, then one or more lowercase letters
fn version_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^(\d{5,7})([a-z]+)$").unwrap())
}

/// Build the matcher for tags issued under one date prefix
pub fn prefix_pattern(prefix: &DatePrefix) -> Result<Regex> {
    Ok(Regex::new(&format!(
        "^{}([a-z]+)$",
        regex::escape(prefix.as_str())
    ))?)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub prefix: DatePrefix,
    pub suffix: Suffix,
}

impl Tag {
    pub fn new(prefix: DatePrefix, suffix: Suffix) -> Self {
        Self { prefix, suffix }
    }

    /// Parse a previously issued tag such as `25216a`
    pub fn parse(version: &str) -> Result<Self> {
        let caps = version_regex()
            .captures(version)
            .ok_or_else(|| CalverError::InvalidVersionFormat(version.to_string()))?;

        Ok(Tag {
            prefix: DatePrefix::from_digits(&caps[1]),
            suffix: caps[2].parse()?,
        })
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.prefix, self.suffix)
    }
}
