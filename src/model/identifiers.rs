//! Member identifier newtype with a smart constructor.
//!
//! A `MemberId` is always a positive integer. The raw constructor is never
//! exported: values come from [`MemberId::new`] or from parsing user input.

use std::fmt;

/// Positive integer key used to query the recommendation service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MemberId(u64);

impl MemberId {
    /// Smart constructor: rejects zero.
    pub fn new(raw: u64) -> Result<Self, InvalidMemberId> {
        if raw == 0 {
            return Err(InvalidMemberId::NotPositive);
        }
        Ok(Self(raw))
    }

    /// Parse a member id from text.
    ///
    /// The text must consist solely of ASCII decimal digits (no sign, no
    /// surrounding whitespace, no decimal point) and denote a value in
    /// `1..=u64::MAX`. Callers that accept free-form input trim first.
    pub fn parse(raw: &str) -> Result<Self, InvalidMemberId> {
        if raw.is_empty() {
            return Err(InvalidMemberId::Empty);
        }
        if !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidMemberId::NotNumeric(raw.to_string()));
        }
        let value = raw
            .parse::<u64>()
            .map_err(|_| InvalidMemberId::OutOfRange(raw.to_string()))?;
        Self::new(value)
    }

    /// Raw integer value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Pure validity predicate for a member identifier.
///
/// Returns `true` only for text denoting a positive integer. Zero, negative
/// numbers, decimals, and anything non-numeric are rejected.
pub fn is_valid_member_id(raw: &str) -> bool {
    MemberId::parse(raw).is_ok()
}

/// Strip every character that is not an ASCII decimal digit.
///
/// Applied to the identifier field on every edit, so the field can never hold
/// a non-numeric value when it is submitted.
pub fn sanitize_digits(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

// ===== Error Types =====

/// Why raw input was rejected as a member id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidMemberId {
    /// Nothing left after trimming.
    #[error("member ID cannot be empty")]
    Empty,
    /// Contains something other than ASCII digits.
    #[error("member ID must be numeric, got {0:?}")]
    NotNumeric(String),
    /// Zero.
    #[error("member ID must be a positive integer")]
    NotPositive,
    /// Digits only, but too large for a `u64`.
    #[error("member ID {0} is out of range")]
    OutOfRange(String),
}

// ===== Tests =====
