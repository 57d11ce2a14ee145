//! Next tag use case

use crate::domain::{DatePrefix, NextReason, NextTag, TagSequencer, TagSource, YearFormat};
use crate::error::{CalverError, Result};
use crate::infrastructure::{Config, GitHubTagSource, Repository};
use chrono::{DateTime, Utc};

/// Inputs for one run
#[derive(Debug, Clone, Default)]
pub struct NextTagRequest {
    /// Instant to derive the date prefix from; `None` means now
    pub instant: Option<DateTime<Utc>>,
    /// Overrides the configured year format
    pub year_format: Option<YearFormat>,
    /// Previously issued tag; when set, no tag source is consulted
    pub current_version: Option<String>,
    /// `owner/repo`
    pub repository: Option<String>,
    pub token: Option<String>,
}

impl NextTagRequest {
    fn prior(&self) -> Option<&str> {
        self.current_version
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
    }
}

/// Service for computing the next tag.
pub struct NextTagService {
    config: Config,
}

impl NextTagService {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Compute the next tag, listing existing tags from GitHub when no
    /// prior version was supplied.
    pub fn execute(&self, request: &NextTagRequest) -> Result<NextTag> {
        if request.prior().is_some() {
            return self.execute_with_source(request, &NoSource);
        }

        let token = request
            .token
            .clone()
            .filter(|t| !t.is_empty())
            .ok_or(CalverError::MissingInput("github-token"))?;
        let repository = request
            .repository
            .as_deref()
            .filter(|r| !r.is_empty())
            .ok_or(CalverError::MissingInput("repository"))?;
        let repository = Repository::parse(repository)?;

        let source = GitHubTagSource::new(&self.config, &repository, token);
        self.execute_with_source(request, &source)
    }

    /// Compute the next tag against an already built tag source.
    pub fn execute_with_source(
        &self,
        request: &NextTagRequest,
        source: &dyn TagSource,
    ) -> Result<NextTag> {
        let prefix = self.prefix(request);

        let next = match request.prior() {
            Some(prior) => {
                log::info!("Using provided current version: {}", prior);
                TagSequencer::next_from_prior(&prefix, prior)?
            }
            None => {
                log::info!("Fetching existing tags...");
                let next = TagSequencer::next_from_source(&prefix, source)?;
                if next.reason != NextReason::SourceUnavailable {
                    log::info!(
                        "Found {} matching tags for prefix {}: {}",
                        next.matched.len(),
                        prefix,
                        next.matched.join(", ")
                    );
                }
                next
            }
        };

        report(&next);
        Ok(next)
    }

    fn prefix(&self, request: &NextTagRequest) -> DatePrefix {
        let instant = request.instant.unwrap_or_else(Utc::now);
        let year_format = request.year_format.unwrap_or(self.config.year_format);
        let prefix = DatePrefix::compute(instant, year_format);
        log::debug!("Date prefix calculated: {} (from {})", prefix, instant.to_rfc3339());
        prefix
    }
}

fn report(next: &NextTag) {
    let suffix = &next.tag.suffix;
    match &next.reason {
        NextReason::Incremented { from } => {
            log::info!("Incremented suffix from {} to {}", from, suffix)
        }
        NextReason::DateRolledOver { from } => log::info!(
            "Date changed from {} to {}, starting with suffix '{}'",
            from,
            next.tag.prefix,
            suffix
        ),
        NextReason::FirstOfDay => {
            log::info!("No existing tags found for today, starting with {}", suffix)
        }
        NextReason::SourceUnavailable => {
            log::info!("Could not fetch tags, starting with suffix \"{}\"", suffix)
        }
    }
}

/// Stand-in for runs that never look at existing tags
struct NoSource;

impl TagSource for NoSource {
    fn list_tags(&self) -> Result<Vec<String>> {
        Err(CalverError::SourceUnavailable(
            "no tag source configured".to_string(),
        ))
    }
}
