//! Strongly-typed value objects used by domain entities.
//!
//! Identifiers and query options are wrapped so that their constraints are
//! enforced at the boundary instead of inside every use case.

use chrono::{NaiveDateTime, SubsecRound, TimeDelta};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;
use uuid::Uuid;

/// Errors produced when attempting to construct constrained domain types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// A string was empty or whitespace-only after trimming.
    #[error("{0} cannot be empty")]
    EmptyString(&'static str),
    /// Catch-all for custom validation failures.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

fn trim_and_require_non_empty<S: Into<String>>(
    value: S,
    field: &'static str,
) -> Result<String, TypeConstraintError> {
    let trimmed = value.into().trim().to_string();
    if trimmed.is_empty() {
        Err(TypeConstraintError::EmptyString(field))
    } else {
        Ok(trimmed)
    }
}

/// Opaque identifier of a category.
///
/// Fresh identifiers are random UUIDs; identifiers received from callers are
/// accepted verbatim (after trimming) so that lookups with foreign ids simply
/// miss instead of failing to parse.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct CategoryId(String);

impl CategoryId {
    /// Generates a new random identifier.
    pub fn unique() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wraps an existing identifier, rejecting blank values.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        trim_and_require_non_empty(value, "category_id").map(Self)
    }

    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for CategoryId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for CategoryId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl TryFrom<String> for CategoryId {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for CategoryId {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl PartialEq<&str> for CategoryId {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

/// Ordering applied to the sort field of a search query.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// String representation used in queries and configuration.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl Display for SortDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for SortDirection {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Asc),
            "desc" | "descending" => Ok(Self::Desc),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "sort direction: {other}"
            ))),
        }
    }
}

/// Rounds a timestamp to microsecond precision, half-up.
///
/// Persisted and transported timestamps keep microseconds only, so every
/// timestamp handed to an output boundary goes through this function.
/// Applying it twice yields the same value.
pub fn round_micros(value: NaiveDateTime) -> NaiveDateTime {
    (value + TimeDelta::nanoseconds(500)).trunc_subsecs(6)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    fn at_nanos(nanos: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_nano_opt(12, 0, 0, nanos)
            .unwrap()
    }

    #[test]
    fn unique_ids_differ() {
        assert_ne!(CategoryId::unique(), CategoryId::unique());
    }

    #[test]
    fn trims_category_ids() {
        let id = CategoryId::new("  123 ").unwrap();
        assert_eq!(id, "123");
    }

    #[test]
    fn rejects_blank_category_ids() {
        assert_eq!(
            CategoryId::new("   ").unwrap_err(),
            TypeConstraintError::EmptyString("category_id")
        );
    }

    #[test]
    fn parses_sort_direction_case_insensitively() {
        assert_eq!(SortDirection::try_from("DESC").unwrap(), SortDirection::Desc);
        assert_eq!(SortDirection::try_from("asc").unwrap(), SortDirection::Asc);
        assert!(SortDirection::try_from("sideways").is_err());
    }

    #[test]
    fn rounds_half_up_to_micros() {
        assert_eq!(round_micros(at_nanos(1_499)).nanosecond(), 1_000);
        assert_eq!(round_micros(at_nanos(1_500)).nanosecond(), 2_000);
        assert_eq!(round_micros(at_nanos(999_999_600)), at_nanos(0) + TimeDelta::seconds(1));
    }

    #[test]
    fn rounding_is_idempotent() {
        let once = round_micros(at_nanos(123_456_789));
        assert_eq!(round_micros(once), once);
    }
}
