//! GitHub REST API tag source

use crate::domain::TagSource;
use crate::error::{CalverError, Result};
use crate::infrastructure::Config;
use serde::Deserialize;
use std::io::Read;
use std::time::Duration;

/// An `owner/repo` identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    pub owner: String,
    pub name: String,
}

impl Repository {
    pub fn parse(input: &str) -> Result<Self> {
        let mut parts = input.trim().split('/');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(owner), Some(name), None) if !owner.is_empty() && !name.is_empty() => {
                Ok(Repository {
                    owner: owner.to_string(),
                    name: name.to_string(),
                })
            }
            _ => Err(CalverError::InvalidRepository(input.to_string())),
        }
    }
}

/// One element of either `/tags` (`name`) or `/git/refs/tags` (`ref`)
#[derive(Debug, Deserialize)]
struct TagEntry {
    name: Option<String>,
    #[serde(rename = "ref")]
    reference: Option<String>,
}

impl TagEntry {
    fn into_name(self) -> Option<String> {
        let name = self.name.or_else(|| {
            self.reference
                .map(|r| r.strip_prefix("refs/tags/").unwrap_or(r.as_str()).to_string())
        })?;
        (!name.is_empty()).then_some(name)
    }
}

/// Turn a tag listing response body into tag names.
///
/// Only a JSON array counts as a listing; anything else is an error so the
/// caller moves on to the next endpoint.
pub fn parse_tag_listing(body: &str) -> std::result::Result<Vec<String>, String> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| format!("invalid JSON: {e}"))?;
    if !value.is_array() {
        return Err("response is not a tag list".to_string());
    }
    let entries: Vec<TagEntry> =
        serde_json::from_value(value).map_err(|e| format!("unexpected tag entry: {e}"))?;
    Ok(entries.into_iter().filter_map(TagEntry::into_name).collect())
}

/// Upper bound on pages followed for one endpoint
const MAX_PAGES: usize = 100;

/// Extract the `rel="next"` target from a `Link` header
pub fn next_page_link(header: &str) -> Option<String> {
    header.split(',').find_map(|part| {
        let (target, params) = part.split_once(';')?;
        let is_next = params
            .split(';')
            .any(|p| p.trim().replace(' ', "") == "rel=\"next\"");
        let target = target.trim().strip_prefix('<')?.strip_suffix('>')?;
        is_next.then(|| target.to_string())
    })
}

/// Lists tags from GitHub, trying each configured endpoint until one answers
pub struct GitHubTagSource {
    agent: ureq::Agent,
    token: String,
    user_agent: String,
    urls: Vec<String>,
}

impl GitHubTagSource {
    pub fn new(config: &Config, repository: &Repository, token: String) -> Self {
        Self::with_timeout(config, repository, token, config.timeout())
    }

    fn with_timeout(
        config: &Config,
        repository: &Repository,
        token: String,
        timeout: Duration,
    ) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        let base = config.api_url.trim_end_matches('/');
        let urls = config
            .endpoints
            .iter()
            .map(|path| {
                let path = path
                    .replace("{owner}", &repository.owner)
                    .replace("{repo}", &repository.name);
                format!("{}{}", base, path)
            })
            .collect();

        GitHubTagSource {
            agent,
            token,
            user_agent: config.user_agent.clone(),
            urls,
        }
    }

    /// The endpoint URLs in the order they are tried
    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    /// Fetch every page of one endpoint, following `Link: rel="next"`
    fn fetch(&self, url: &str) -> std::result::Result<Vec<String>, String> {
        let mut tags = Vec::new();
        let mut next = Some(url.to_string());
        let mut pages = 0;

        while let Some(page_url) = next {
            if pages == MAX_PAGES {
                log::warn!("Stopped after {} pages of {}", MAX_PAGES, url);
                break;
            }
            let (page, link) = self.fetch_page(&page_url)?;
            tags.extend(page);
            next = link;
            pages += 1;
        }

        Ok(tags)
    }

    fn fetch_page(
        &self,
        url: &str,
    ) -> std::result::Result<(Vec<String>, Option<String>), String> {
        let resp = self
            .agent
            .get(url)
            .set("Accept", "application/vnd.github+json")
            .set("Authorization", &format!("Bearer {}", self.token))
            .set("X-GitHub-Api-Version", "2022-11-28")
            .set("User-Agent", &self.user_agent)
            .call()
            .map_err(|e| match e {
                ureq::Error::Status(code, resp) => {
                    format!("returned {}: {}", code, resp.status_text())
                }
                ureq::Error::Transport(t) => format!("request failed: {t}"),
            })?;

        let next = resp.header("link").and_then(next_page_link);
        let mut body = String::new();
        resp.into_reader()
            .read_to_string(&mut body)
            .map_err(|e| format!("failed to read body: {e}"))?;
        Ok((parse_tag_listing(&body)?, next))
    }
}

impl TagSource for GitHubTagSource {
    fn list_tags(&self) -> Result<Vec<String>> {
        let mut failures = Vec::new();

        for url in &self.urls {
            log::debug!("Trying API endpoint: {}", url);
            match self.fetch(url) {
                Ok(tags) => {
                    log::info!("Successfully fetched {} tags from {}", tags.len(), url);
                    return Ok(tags);
                }
                Err(reason) => {
                    log::debug!("API endpoint {} failed: {}", url, reason);
                    failures.push(format!("{url} {reason}"));
                }
            }
        }

        Err(CalverError::SourceUnavailable(failures.join("; ")))
    }
}
