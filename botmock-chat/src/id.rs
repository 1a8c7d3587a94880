//! Loosely-compared entity identifiers.

use std::fmt;

use rand::Rng;

/// Identifier carried by chat entities (members, channels, message authors).
///
/// Real platform ids are numeric snowflakes, but test code routinely uses
/// human-readable strings instead; this type accepts both and compares them
/// loosely: an integer id equals a string id whose content parses to the same
/// integer, so a member created with id `42` is found by fetching `"42"`.
#[derive(Debug, Clone)]
pub enum Id {
    /// Numeric identifier.
    Int(i64),
    /// String identifier.
    Str(String),
}

impl PartialEq for Id {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Id::Int(a), Id::Int(b)) => a == b,
            (Id::Str(a), Id::Str(b)) => a == b,
            (Id::Int(a), Id::Str(b)) | (Id::Str(b), Id::Int(a)) => {
                b.trim().parse::<i64>().is_ok_and(|parsed| parsed == *a)
            }
        }
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Id::Int(value) => write!(f, "{value}"),
            Id::Str(value) => write!(f, "{value}"),
        }
    }
}

impl From<i64> for Id {
    fn from(value: i64) -> Self {
        Id::Int(value)
    }
}

impl From<i32> for Id {
    fn from(value: i32) -> Self {
        Id::Int(value as i64)
    }
}

impl From<&str> for Id {
    fn from(value: &str) -> Self {
        Id::Str(value.to_string())
    }
}

impl From<String> for Id {
    fn from(value: String) -> Self {
        Id::Str(value)
    }
}

/// Random member identifier in `100..=100_099`, the documented range.
pub(crate) fn random_member_id() -> Id {
    Id::Int(rand::thread_rng().gen_range(100..=100_099))
}

/// Random channel identifier in `0..=9_999`, the documented range.
pub(crate) fn random_channel_id() -> Id {
    Id::Int(rand::thread_rng().gen_range(0..=9_999))
}

#[cfg(test)]
mod tests {
    use super::Id;

    #[test]
    fn integers_and_strings_compare_loosely() {
        assert_eq!(Id::from(42), Id::from("42"));
        assert_eq!(Id::from("42"), Id::from(42));
        assert_eq!(Id::from(" 42 "), Id::from(42));
        assert_ne!(Id::from("forty-two"), Id::from(42));
        assert_ne!(Id::from("43"), Id::from(42));
    }

    #[test]
    fn same_kind_ids_compare_directly() {
        assert_eq!(Id::from("My Test ID"), Id::from("My Test ID"));
        assert_ne!(Id::from("My Test ID"), Id::from("my test id"));
        assert_eq!(Id::from(1234), Id::from(1234_i64));
    }

    #[test]
    fn display_matches_the_underlying_value() {
        assert_eq!(Id::from(1234).to_string(), "1234");
        assert_eq!(Id::from("abc").to_string(), "abc");
    }
}
