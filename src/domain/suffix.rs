//! Bijective base-26 suffixes
//!
//! Letters `a`..`z` stand for the digits 1..26 and there is no zero digit,
//! so every positive integer has exactly one spelling: `z` (26) is followed
//! by `aa` (27), and `zz` (702) by `aaa` (703).

use crate::error::{CalverError, Result};
use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

const RADIX: u32 = 26;

/// Encode a positive integer as a suffix.
pub fn encode(n: &BigUint) -> Result<String> {
    if n.is_zero() {
        return Err(CalverError::InvalidOrdinal);
    }

    let radix = BigUint::from(RADIX);
    let mut n = n.clone();
    let mut letters = Vec::new();
    while !n.is_zero() {
        n -= 1u32;
        let digit = (&n % &radix).to_u8().unwrap_or(0);
        letters.push(b'a' + digit);
        n /= &radix;
    }
    letters.reverse();

    // Only bytes in b'a'..=b'z' were pushed.
    Ok(letters.into_iter().map(char::from).collect())
}

/// Decode a suffix back into its positive integer.
pub fn decode(suffix: &str) -> Result<BigUint> {
    if suffix.is_empty() {
        return Err(CalverError::EmptySuffix);
    }

    suffix.chars().try_fold(BigUint::zero(), |acc, c| {
        if !c.is_ascii_lowercase() {
            return Err(CalverError::InvalidSuffixCharacter(c));
        }
        Ok(acc * RADIX + (c as u32 - 'a' as u32 + 1))
    })
}

/// A validated, non-empty suffix over `[a-z]`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Suffix(String);

impl Suffix {
    /// The suffix every date prefix starts with
    pub fn first() -> Self {
        Suffix("a".to_string())
    }

    /// Build the suffix spelling a positive ordinal
    pub fn from_ordinal(n: &BigUint) -> Result<Self> {
        encode(n).map(Suffix)
    }

    /// The positive integer this suffix spells
    pub fn ordinal(&self) -> BigUint {
        self.0
            .bytes()
            .fold(BigUint::zero(), |acc, b| acc * RADIX + u32::from(b - b'a' + 1))
    }

    /// The suffix immediately after this one
    pub fn succ(&self) -> Self {
        let mut letters = self.0.clone().into_bytes();
        // Trailing 'z's carry; a suffix of only 'z's grows by one letter.
        match letters.iter().rposition(|&b| b != b'z') {
            Some(i) => {
                letters[i] += 1;
                letters[i + 1..].fill(b'a');
            }
            None => {
                letters.fill(b'a');
                letters.push(b'a');
            }
        }
        Suffix(letters.into_iter().map(char::from).collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Suffix {
    type Err = CalverError;

    fn from_str(s: &str) -> Result<Self> {
        decode(s)?;
        Ok(Suffix(s.to_string()))
    }
}

impl fmt::Display for Suffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Ord for Suffix {
    // Without a zero digit, a longer spelling is always a larger number.
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for Suffix {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
