//! End-to-end tag sequencing through the library API

use calverlex::application::{NextTagRequest, NextTagService};
use calverlex::domain::{DatePrefix, NextReason, TagSequencer, TagSource, YearFormat};
use calverlex::error::Result;
use calverlex::infrastructure::Config;
use calverlex::CalverError;
use chrono::{DateTime, Duration, Utc};
use std::cell::RefCell;

mod common;
use common::MONDAY;

fn monday() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(MONDAY)
        .unwrap()
        .with_timezone(&Utc)
}

/// A tag store that remembers every tag issued through it
#[derive(Default)]
struct MemoryTags(RefCell<Vec<String>>);

impl TagSource for MemoryTags {
    fn list_tags(&self) -> Result<Vec<String>> {
        Ok(self.0.borrow().clone())
    }
}

struct Unreachable;

impl TagSource for Unreachable {
    fn list_tags(&self) -> Result<Vec<String>> {
        Err(CalverError::SourceUnavailable("every endpoint failed".into()))
    }
}

#[test]
fn test_daily_sequence_through_letter_boundaries() {
    let store = MemoryTags::default();
    let service = NextTagService::new(Config::default());
    let request = NextTagRequest {
        instant: Some(monday()),
        ..Default::default()
    };

    let mut issued = Vec::new();
    for _ in 0..703 {
        let next = service.execute_with_source(&request, &store).unwrap();
        let tag = next.tag.to_string();
        store.0.borrow_mut().push(tag.clone());
        issued.push(tag);
    }

    assert_eq!(issued[0], "25031a");
    assert_eq!(issued[25], "25031z");
    assert_eq!(issued[26], "25031aa");
    assert_eq!(issued[701], "25031zz");
    assert_eq!(issued[702], "25031aaa");

    // Every issued tag is distinct
    let mut unique = issued.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), issued.len());
}

#[test]
fn test_next_day_starts_over() {
    let store = MemoryTags::default();
    store
        .0
        .borrow_mut()
        .extend(["25031a".to_string(), "25031b".to_string()]);
    let service = NextTagService::new(Config::default());

    let request = NextTagRequest {
        instant: Some(monday() + Duration::days(1)),
        ..Default::default()
    };
    let next = service.execute_with_source(&request, &store).unwrap();
    assert_eq!(next.tag.to_string(), "25032a");
    assert_eq!(next.reason, NextReason::FirstOfDay);
}

#[test]
fn test_prior_and_scan_agree() {
    let prefix = DatePrefix::compute(monday(), YearFormat::Two);
    let existing = ["25031a", "25031b", "25031c"];

    let from_prior = TagSequencer::next_from_prior(&prefix, "25031c").unwrap();
    let from_scan = TagSequencer::next_from_candidates(&prefix, existing).unwrap();
    assert_eq!(from_prior.tag, from_scan.tag);
}

#[test]
fn test_scan_takes_highest_of_unordered_tags() {
    let prefix = DatePrefix::compute(monday(), YearFormat::Two);
    let tags = ["25031a", "25031c", "25031b", "unrelated"];
    let next = TagSequencer::next_from_candidates(&prefix, tags).unwrap();
    assert_eq!(next.tag.to_string(), "25031d");
}

#[test]
fn test_unreachable_source_does_not_fail_run() {
    let service = NextTagService::new(Config::default());
    let request = NextTagRequest {
        instant: Some(monday()),
        ..Default::default()
    };
    let next = service.execute_with_source(&request, &Unreachable).unwrap();
    assert_eq!(next.tag.to_string(), "25031a");
    assert_eq!(next.reason, NextReason::SourceUnavailable);
}

#[test]
fn test_invalid_prior_is_reported_not_skipped() {
    let service = NextTagService::new(Config::default());
    let request = NextTagRequest {
        instant: Some(monday()),
        current_version: Some("25031a1".to_string()),
        ..Default::default()
    };
    let err = service.execute(&request).unwrap_err();
    assert!(err.is_format_error());
    assert!(err.to_string().contains("25031a1"));
}
