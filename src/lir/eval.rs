use super::{Comparison, Filter, Predicate};
use regex::Regex;
use std::borrow::{Borrow, Cow};
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

/// A record which can be tested against a [`Predicate`].
pub trait Record {
    /// The value stored under a field path, `None` if the record has no such field.
    fn field(&self, path: &str) -> Option<Cow<'_, str>>;
}

impl<K, V> Record for HashMap<K, V>
where
    K: Borrow<str> + Hash + Eq,
    V: AsRef<str>,
{
    fn field(&self, path: &str) -> Option<Cow<'_, str>> {
        self.get(path).map(|value| Cow::Borrowed(value.as_ref()))
    }
}

impl<K, V> Record for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
    V: AsRef<str>,
{
    fn field(&self, path: &str) -> Option<Cow<'_, str>> {
        self.get(path).map(|value| Cow::Borrowed(value.as_ref()))
    }
}

/// Navigates nested objects with dot-separated paths.
#[cfg(feature = "serde")]
impl Record for serde_json::Value {
    fn field(&self, path: &str) -> Option<Cow<'_, str>> {
        use serde_json::Value;

        let mut current = self;
        for segment in path.split('.') {
            current = current.get(segment)?;
        }

        match current {
            Value::String(value) => Some(Cow::Borrowed(value)),
            Value::Number(value) => Some(Cow::Owned(value.to_string())),
            Value::Bool(value) => Some(Cow::Owned(value.to_string())),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }
}

impl Predicate {
    /// Evaluate the predicate against a single record.
    ///
    /// Use [`Predicate::compile`] when testing many records.
    pub fn matches<R: Record + ?Sized>(&self, record: &R) -> bool {
        self.compile().matches(record)
    }

    /// Prepare the predicate for evaluation, compiling every pattern once.
    pub fn compile(&self) -> Matcher<'_> {
        match self {
            Self::Match(Filter {
                field,
                comparison: Comparison::Regex,
                value,
            }) => Matcher::Regex {
                field: field.as_str(),
                pattern: Regex::new(value).ok(),
            },
            Self::Match(filter) => Matcher::Filter(filter),
            Self::Not(term) => Matcher::Not(Box::new(term.compile())),
            Self::And(terms) => Matcher::And(terms.iter().map(Predicate::compile).collect()),
            Self::Or(terms) => Matcher::Or(terms.iter().map(Predicate::compile).collect()),
        }
    }
}

/// A [`Predicate`] ready to be tested against records.
///
/// A pattern which doesn't compile never matches.
#[derive(Clone, Debug)]
pub enum Matcher<'p> {
    Filter(&'p Filter),
    Regex {
        field: &'p str,
        pattern: Option<Regex>,
    },
    Not(Box<Matcher<'p>>),
    And(Vec<Matcher<'p>>),
    Or(Vec<Matcher<'p>>),
}

impl Matcher<'_> {
    pub fn matches<R: Record + ?Sized>(&self, record: &R) -> bool {
        match self {
            Self::Filter(filter) => filter.matches(record),
            Self::Regex { field, pattern } => match (pattern, record.field(field)) {
                (Some(pattern), Some(actual)) => pattern.is_match(&actual),
                _ => false,
            },
            Self::Not(term) => !term.matches(record),
            Self::And(terms) => terms.iter().all(|term| term.matches(record)),
            Self::Or(terms) => terms.iter().any(|term| term.matches(record)),
        }
    }
}

impl Filter {
    /// A missing field never matches.
    pub fn matches<R: Record + ?Sized>(&self, record: &R) -> bool {
        record
            .field(&self.field)
            .map_or(false, |actual| self.comparison.matches(&actual, &self.value))
    }
}

impl Comparison {
    pub fn matches(&self, actual: &str, expected: &str) -> bool {
        match self {
            Self::Exact => actual == expected,
            Self::IExact => actual.to_lowercase() == expected.to_lowercase(),
            Self::Less => order(actual, expected).is_lt(),
            Self::LessEqual => order(actual, expected).is_le(),
            Self::Greater => order(actual, expected).is_gt(),
            Self::GreaterEqual => order(actual, expected).is_ge(),
            Self::IContains => actual.to_lowercase().contains(&expected.to_lowercase()),
            Self::IStartsWith => actual.to_lowercase().starts_with(&expected.to_lowercase()),
            Self::Search => {
                let actual = actual.to_lowercase();
                expected
                    .split_whitespace()
                    .all(|word| actual.contains(&word.to_lowercase()))
            }
            Self::Regex => Regex::new(expected)
                .map(|pattern| pattern.is_match(actual))
                .unwrap_or(false),
        }
    }
}

fn number(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Order numerically or by point in time where both sides allow it, as text otherwise.
fn order(actual: &str, expected: &str) -> Ordering {
    if let (Some(actual), Some(expected)) = (number(actual), number(expected)) {
        return actual.total_cmp(&expected);
    }

    #[cfg(feature = "time")]
    if let (Some(actual), Some(expected)) =
        (super::time::instant(actual), super::time::instant(expected))
    {
        return actual.cmp(&expected);
    }

    actual.cmp(expected)
}
