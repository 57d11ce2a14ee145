//! Error types for calverlex

use thiserror::Error;

/// Main error type for calverlex
#[derive(Debug, Error)]
pub enum CalverError {
    #[error("Missing required input: {0}")]
    MissingInput(&'static str),

    #[error("Invalid repository format: {0}. Expected format: owner/repo")]
    InvalidRepository(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid version format: {0}. Expected format: YYWWDx (e.g., 25216a)")]
    InvalidVersionFormat(String),

    #[error("Invalid suffix character: {0}. Only lowercase letters a-z are allowed.")]
    InvalidSuffixCharacter(char),

    #[error("Suffix must contain at least one letter")]
    EmptySuffix,

    #[error("Suffix ordinals start at 1")]
    InvalidOrdinal,

    #[error("Tag source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Invalid tag pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),
}

impl CalverError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CalverError::MissingInput(_)
            | CalverError::InvalidRepository(_)
            | CalverError::InvalidDate(_)
            | CalverError::Config(_)
            | CalverError::TomlDeserialize(_) => 2,
            CalverError::InvalidVersionFormat(_)
            | CalverError::InvalidSuffixCharacter(_)
            | CalverError::EmptySuffix
            | CalverError::InvalidOrdinal => 3,
            _ => 1,
        }
    }

    /// Whether this error belongs to the format family (bad tag or suffix).
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            CalverError::InvalidVersionFormat(_)
                | CalverError::InvalidSuffixCharacter(_)
                | CalverError::EmptySuffix
                | CalverError::InvalidOrdinal
        )
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            CalverError::MissingInput(name) => {
                format!(
                    "Missing required input: '{}'\n\n\
                    Suggestions:\n\
                    • Pass it as a flag (see calverlex --help)\n\
                    • In a workflow, set the matching INPUT_* environment variable\n\
                    • Provide --current-version to skip the tag lookup entirely",
                    name
                )
            }
            CalverError::InvalidRepository(_) => {
                format!(
                    "{}\n\n\
                    Example: calverlex --repository octocat/hello-world",
                    self
                )
            }
            CalverError::InvalidDate(_) => {
                format!(
                    "{}\n\n\
                    Expected an RFC 3339 timestamp\n\
                    Example: calverlex --date 2025-01-13T10:00:00Z",
                    self
                )
            }
            CalverError::InvalidVersionFormat(_) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Versions are 5-7 digits followed by lowercase letters\n\
                    • Drop any leading 'v' or trailing build metadata\n\
                    • Omit --current-version to derive the next tag from existing tags",
                    self
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using CalverError
pub type Result<T> = std::result::Result<T, CalverError>;
