//! Loose-equality matching for record filters and projection flags.
//!
//! Filters are conjunctions of per-field equality checks, but the equality is
//! the coercing kind a dynamic caller expects: `1` matches `"1"`, `true`
//! matches `1`, and a field absent from a record matches a `Null` filter
//! value. This module reproduces that comparison as an explicit rule set
//! instead of relying on any implicit conversion.

use std::collections::HashMap;
use bson::{Bson, Document};

/// Type-erased, coercible representation of BSON values.
///
/// Wraps borrowed BSON values for the loose-equality comparison used by query
/// filters. All numeric variants are normalized to f64.
#[derive(Debug)]
pub(crate) enum LooseValue<'a> {
    /// Null, and the value of a field absent from a record.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Numeric value (all integers and floats normalized to f64).
    Number(f64),
    /// String value.
    String(&'a str),
    /// Array of loose values.
    Array(Vec<LooseValue<'a>>),
    /// Map/Object of loose values.
    Map(HashMap<&'a str, LooseValue<'a>>),
}

impl<'a> From<&'a Bson> for LooseValue<'a> {
    fn from(bson: &'a Bson) -> Self {
        match bson {
            Bson::Null => LooseValue::Null,
            Bson::Boolean(value) => LooseValue::Bool(*value),
            Bson::Int32(value) => LooseValue::Number(*value as f64),
            Bson::Int64(value) => LooseValue::Number(*value as f64),
            Bson::Double(value) => LooseValue::Number(*value),
            Bson::String(value) => LooseValue::String(value),
            Bson::Array(arr) => LooseValue::Array(
                arr
                    .iter()
                    .map(LooseValue::from)
                    .collect::<Vec<_>>()
            ),
            Bson::Document(doc) => LooseValue::Map(
                doc
                    .iter()
                    .map(|(k, v)| (k.as_str(), LooseValue::from(v)))
                    .collect::<HashMap<_, _>>()
            ),
            _ => LooseValue::Null, // Other types are not comparable
        }
    }
}

impl<'a> LooseValue<'a> {
    /// Numeric view of a scalar, following the coercion rules: booleans are
    /// 0/1, strings are parsed after trimming (an empty or whitespace-only
    /// string is 0; an unparsable string has no numeric view).
    fn as_number(&self) -> Option<f64> {
        match self {
            LooseValue::Bool(value) => Some(if *value { 1.0 } else { 0.0 }),
            LooseValue::Number(value) => Some(*value),
            LooseValue::String(value) => parse_number(value),
            _ => None,
        }
    }

    /// Coercing equality.
    ///
    /// Same-kind scalars compare directly; mixed scalars compare through
    /// their numeric views. Arrays and maps compare structurally against the
    /// same kind only and never equal a scalar.
    pub(crate) fn loose_eq(&self, other: &LooseValue<'_>) -> bool {
        match (self, other) {
            (LooseValue::Null, LooseValue::Null) => true,
            (LooseValue::Null, _) | (_, LooseValue::Null) => false,
            (LooseValue::String(a), LooseValue::String(b)) => a == b,
            (LooseValue::Array(a), LooseValue::Array(b)) => {
                a.len() == b.len()
                    && a.iter().zip(b.iter()).all(|(left, right)| left.loose_eq(right))
            }
            (LooseValue::Map(a), LooseValue::Map(b)) => {
                a.len() == b.len()
                    && a.iter().all(|(key, left)| {
                        b.get(key).is_some_and(|right| left.loose_eq(right))
                    })
            }
            (LooseValue::Array(_) | LooseValue::Map(_), _)
            | (_, LooseValue::Array(_) | LooseValue::Map(_)) => false,
            _ => match (self.as_number(), other.as_number()) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            },
        }
    }
}

fn parse_number(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }

    trimmed
        .parse::<f64>()
        .ok()
        .filter(|parsed| !parsed.is_nan())
}

/// Loose equality between two BSON values.
pub(crate) fn loose_eq(left: &Bson, right: &Bson) -> bool {
    LooseValue::from(left).loose_eq(&LooseValue::from(right))
}

/// Whether `record` satisfies every field comparison in `query`.
///
/// The query is a conjunction; an empty query matches any record. A field
/// missing from the record compares as `Null`, so it matches a `Null` filter
/// value and nothing else.
pub(crate) fn matches(record: &Document, query: &Document) -> bool {
    query.iter().all(|(field, expected)| {
        let actual = record
            .get(field.as_str())
            .map(LooseValue::from)
            .unwrap_or(LooseValue::Null);

        actual.loose_eq(&LooseValue::from(expected))
    })
}

/// Falsy test for projection flags.
///
/// Numeric zero, `false`, `Null`, NaN and the empty string all mark a field
/// for exclusion; every other value leaves it in place.
pub(crate) fn is_falsy(value: &Bson) -> bool {
    match value {
        Bson::Null => true,
        Bson::Boolean(flag) => !flag,
        Bson::Int32(n) => *n == 0,
        Bson::Int64(n) => *n == 0,
        Bson::Double(n) => *n == 0.0 || n.is_nan(),
        Bson::String(s) => s.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use bson::{Bson, doc};

    use super::{is_falsy, loose_eq, matches};

    #[test]
    fn numbers_match_across_variants() {
        assert!(loose_eq(&Bson::Int32(5), &Bson::Int64(5)));
        assert!(loose_eq(&Bson::Int64(5), &Bson::Double(5.0)));
        assert!(!loose_eq(&Bson::Int32(5), &Bson::Int32(6)));
    }

    #[test]
    fn strings_match_numbers_through_parsing() {
        assert!(loose_eq(&Bson::String("1".into()), &Bson::Int32(1)));
        assert!(loose_eq(&Bson::Double(1.5), &Bson::String("1.5".into())));
        assert!(loose_eq(&Bson::String(" 12 ".into()), &Bson::Int64(12)));
        assert!(loose_eq(&Bson::String("".into()), &Bson::Int32(0)));
        assert!(!loose_eq(&Bson::String("one".into()), &Bson::Int32(1)));
    }

    #[test]
    fn same_kind_strings_never_coerce() {
        assert!(loose_eq(&Bson::String("1".into()), &Bson::String("1".into())));
        assert!(!loose_eq(&Bson::String("1.0".into()), &Bson::String("1".into())));
    }

    #[test]
    fn booleans_coerce_to_numbers() {
        assert!(loose_eq(&Bson::Boolean(true), &Bson::Int32(1)));
        assert!(loose_eq(&Bson::Boolean(false), &Bson::String("0".into())));
        assert!(!loose_eq(&Bson::Boolean(true), &Bson::Int32(2)));
    }

    #[test]
    fn null_matches_null_and_missing_fields() {
        assert!(loose_eq(&Bson::Null, &Bson::Null));
        assert!(!loose_eq(&Bson::Null, &Bson::Int32(0)));
        assert!(matches(&doc! { "name": "x" }, &doc! { "missing": Bson::Null }));
        assert!(!matches(&doc! { "name": "x" }, &doc! { "missing": 1 }));
    }

    #[test]
    fn composites_compare_structurally() {
        let record = doc! { "tags": ["a", "b"], "meta": { "n": 1 } };

        assert!(matches(&record, &doc! { "tags": ["a", "b"] }));
        assert!(!matches(&record, &doc! { "tags": ["a"] }));
        assert!(matches(&record, &doc! { "meta": { "n": "1" } }));
        assert!(!matches(&record, &doc! { "tags": "a" }));
    }

    #[test]
    fn empty_query_matches_everything() {
        assert!(matches(&doc! { "name": "x" }, &doc! {}));
        assert!(matches(&doc! {}, &doc! {}));
    }

    #[test]
    fn conjunction_requires_every_field() {
        let record = doc! { "name": "blah", "id": "1" };

        assert!(matches(&record, &doc! { "name": "blah", "id": "1" }));
        assert!(!matches(&record, &doc! { "name": "blah", "id": "2" }));
    }

    #[test]
    fn falsy_projection_flags() {
        assert!(is_falsy(&Bson::Int32(0)));
        assert!(is_falsy(&Bson::Boolean(false)));
        assert!(is_falsy(&Bson::Null));
        assert!(is_falsy(&Bson::String("".into())));
        assert!(!is_falsy(&Bson::Int32(1)));
        assert!(!is_falsy(&Bson::Boolean(true)));
        assert!(!is_falsy(&Bson::String("keep".into())));
    }
}
