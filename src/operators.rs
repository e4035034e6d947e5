//! Implementations of the search operators.
//!
//! Connectives and negation combine predicates which were already built. Filter operators turn a
//! field token and a literal into a leaf comparison, resolving the token through the field map.

use crate::lir::{Comparison, Predicate};
use crate::mir::{Comparator, Connective, UnaryOperator};
use crate::Error;
use std::collections::BTreeMap;

impl Connective {
    pub fn apply(&self, left: Predicate, right: Predicate) -> Predicate {
        match self {
            Self::And => left & right,
            Self::Or => left | right,
            Self::Nand => !(left & right),
            Self::Xor => (!left.clone() & right.clone()) | (left & !right),
        }
    }
}

impl UnaryOperator {
    pub fn apply(&self, argument: Predicate) -> Predicate {
        match self {
            Self::Not => !argument,
        }
    }
}

/// Maps the field names users type to the field paths of the record store.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldMap {
    fields: BTreeMap<String, String>,
}

impl FieldMap {
    pub fn new(fields: BTreeMap<String, String>) -> Self {
        Self { fields }
    }

    pub fn resolve(&self, token: &str) -> Result<&str, Error> {
        self.fields
            .get(token)
            .map(String::as_str)
            .ok_or_else(|| Error::UnknownField(token.to_string()))
    }

    /// Build the predicate of a filter operator.
    pub fn filter(&self, comparator: Comparator, field: &str, value: &str) -> Result<Predicate, Error> {
        let path = self.resolve(field)?;

        let comparison = match comparator {
            Comparator::Equal => Comparison::Exact,
            Comparator::NotEqual => {
                return Ok(!Predicate::filter(path, Comparison::Exact, value));
            }
            Comparator::Less => Comparison::Less,
            Comparator::LessEqual => Comparison::LessEqual,
            Comparator::Greater => Comparison::Greater,
            Comparator::GreaterEqual => Comparison::GreaterEqual,
            Comparator::Contains => Comparison::IContains,
            Comparator::Matches => {
                regex::Regex::new(value).map_err(|err| Error::InvalidPattern {
                    pattern: value.to_string(),
                    reason: err.to_string(),
                })?;
                Comparison::Regex
            }
        };

        Ok(Predicate::filter(path, comparison, value))
    }
}

impl<K, V> FromIterator<(K, V)> for FieldMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self::new(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
