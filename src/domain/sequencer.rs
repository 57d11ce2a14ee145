//! Next-tag policy
//!
//! Nothing is remembered between runs. Each call reads its inputs (a prior
//! tag, or whatever the tag source reports right now) and decides from
//! those alone. Two runs racing on the same date prefix can therefore
//! issue the same tag; callers that need exactly-once issuance must
//! serialize runs themselves.

use crate::domain::date_prefix::DatePrefix;
use crate::domain::suffix::{self, Suffix};
use crate::domain::tag::{prefix_pattern, Tag};
use crate::error::Result;
use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Anything that can list the tag names that already exist
pub trait TagSource {
    /// List raw tag names. Fails with `SourceUnavailable` when nothing answered.
    fn list_tags(&self) -> Result<Vec<String>>;
}

/// Why a particular suffix was chosen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextReason {
    /// Same date as the highest known tag; its suffix was incremented
    Incremented { from: Suffix },
    /// The prior tag belongs to an earlier date prefix
    DateRolledOver { from: DatePrefix },
    /// No tag exists yet for this date prefix
    FirstOfDay,
    /// The tag source could not be read
    SourceUnavailable,
}

/// The outcome of one sequencing decision
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextTag {
    pub tag: Tag,
    pub reason: NextReason,
    /// Tags under the current prefix that were taken into account
    pub matched: Vec<String>,
}

impl NextTag {
    fn first(prefix: &DatePrefix, reason: NextReason) -> Self {
        NextTag {
            tag: Tag::new(prefix.clone(), Suffix::first()),
            reason,
            matched: Vec::new(),
        }
    }
}

pub struct TagSequencer;

impl TagSequencer {
    /// Next tag after an explicitly supplied prior version.
    ///
    /// A malformed prior version is the caller's mistake and is returned as
    /// an error.
    pub fn next_from_prior(current: &DatePrefix, prior: &str) -> Result<NextTag> {
        let prior = Tag::parse(prior)?;

        if prior.prefix != *current {
            return Ok(NextTag::first(
                current,
                NextReason::DateRolledOver { from: prior.prefix },
            ));
        }

        Ok(NextTag {
            tag: Tag::new(current.clone(), prior.suffix.succ()),
            matched: vec![prior.to_string()],
            reason: NextReason::Incremented { from: prior.suffix },
        })
    }

    /// Next tag given every tag name known to exist.
    ///
    /// Names outside the current prefix are ignored. Matches that still
    /// fail to decode are logged and skipped.
    pub fn next_from_candidates<I, S>(current: &DatePrefix, candidates: I) -> Result<NextTag>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let pattern = prefix_pattern(current)?;
        let mut highest = BigUint::zero();
        let mut matched = Vec::new();

        for candidate in candidates {
            let candidate = candidate.as_ref();
            let Some(caps) = pattern.captures(candidate) else {
                continue;
            };
            match suffix::decode(&caps[1]) {
                Ok(n) => {
                    matched.push(candidate.to_string());
                    if n > highest {
                        highest = n;
                    }
                }
                Err(e) => log::debug!("Skipping invalid tag {}: {}", candidate, e),
            }
        }

        if highest.is_zero() {
            return Ok(NextTag {
                matched,
                ..NextTag::first(current, NextReason::FirstOfDay)
            });
        }

        let from = Suffix::from_ordinal(&highest)?;
        let next = Suffix::from_ordinal(&(highest + BigUint::one()))?;
        Ok(NextTag {
            tag: Tag::new(current.clone(), next),
            reason: NextReason::Incremented { from },
            matched,
        })
    }

    /// Next tag from whatever the source currently lists.
    ///
    /// An unreachable source is not fatal: the day's sequence starts at `a`.
    pub fn next_from_source(current: &DatePrefix, source: &dyn TagSource) -> Result<NextTag> {
        match source.list_tags() {
            Ok(tags) => Self::next_from_candidates(current, tags),
            Err(e) => {
                log::warn!("Could not fetch existing tags ({}), starting with suffix \"a\"", e);
                Ok(NextTag::first(current, NextReason::SourceUnavailable))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CalverError;

    fn prefix(digits: &str) -> DatePrefix {
        DatePrefix::from_digits(digits)
    }

    struct FixedSource(Vec<&'static str>);

    impl TagSource for FixedSource {
        fn list_tags(&self) -> Result<Vec<String>> {
            Ok(self.0.iter().map(|s| s.to_string()).collect())
        }
    }

    struct DownSource;

    impl TagSource for DownSource {
        fn list_tags(&self) -> Result<Vec<String>> {
            Err(CalverError::SourceUnavailable("connection refused".into()))
        }
    }

    #[test]
    fn test_prior_same_date_increments() {
        let next = TagSequencer::next_from_prior(&prefix("25216"), "25216a").unwrap();
        assert_eq!(next.tag.to_string(), "25216b");
        assert_eq!(
            next.reason,
            NextReason::Incremented {
                from: "a".parse().unwrap()
            }
        );
    }

    #[test]
    fn test_prior_same_date_rolls_to_two_letters() {
        let next = TagSequencer::next_from_prior(&prefix("25216"), "25216z").unwrap();
        assert_eq!(next.tag.to_string(), "25216aa");
    }

    #[test]
    fn test_prior_different_date_resets() {
        let next = TagSequencer::next_from_prior(&prefix("25216"), "25210z").unwrap();
        assert_eq!(next.tag.to_string(), "25216a");
        assert_eq!(
            next.reason,
            NextReason::DateRolledOver {
                from: prefix("25210")
            }
        );
    }

    #[test]
    fn test_prior_with_other_year_width_resets() {
        let next = TagSequencer::next_from_prior(&prefix("25216"), "2025216c").unwrap();
        assert_eq!(next.tag.to_string(), "25216a");
    }

    #[test]
    fn test_prior_invalid_format_is_fatal() {
        let err = TagSequencer::next_from_prior(&prefix("25216"), "25216A").unwrap_err();
        assert!(matches!(err, CalverError::InvalidVersionFormat(ref v) if v == "25216A"));
    }

    #[test]
    fn test_candidates_take_maximum() {
        let next = TagSequencer::next_from_candidates(
            &prefix("25216"),
            ["25216a", "25216c", "25216b", "unrelated"],
        )
        .unwrap();
        assert_eq!(next.tag.to_string(), "25216d");
        assert_eq!(next.matched.len(), 3);
    }

    #[test]
    fn test_candidates_order_by_value_not_string() {
        // "z" > "ab" as strings, but ab (28) > z (26) as numbers
        let next =
            TagSequencer::next_from_candidates(&prefix("25216"), ["25216z", "25216ab"]).unwrap();
        assert_eq!(next.tag.to_string(), "25216ac");
    }

    #[test]
    fn test_candidates_ignore_other_prefixes() {
        let next = TagSequencer::next_from_candidates(
            &prefix("25216"),
            ["25215q", "2025216b", "25216", "25216a-rc", "v25216c"],
        )
        .unwrap();
        assert_eq!(next.tag.to_string(), "25216a");
        assert_eq!(next.reason, NextReason::FirstOfDay);
        assert!(next.matched.is_empty());
    }

    #[test]
    fn test_candidates_empty() {
        let next =
            TagSequencer::next_from_candidates(&prefix("25031"), Vec::<String>::new()).unwrap();
        assert_eq!(next.tag.to_string(), "25031a");
    }

    #[test]
    fn test_source_success_scans_candidates() {
        let source = FixedSource(vec!["25216a", "25216b"]);
        let next = TagSequencer::next_from_source(&prefix("25216"), &source).unwrap();
        assert_eq!(next.tag.to_string(), "25216c");
    }

    #[test]
    fn test_source_unavailable_falls_back_to_a() {
        let next = TagSequencer::next_from_source(&prefix("25216"), &DownSource).unwrap();
        assert_eq!(next.tag.to_string(), "25216a");
        assert_eq!(next.reason, NextReason::SourceUnavailable);
    }
}
