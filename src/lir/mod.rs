mod eval;
#[cfg(feature = "time")]
mod time;

pub use self::eval::*;

use std::fmt::{Display, Formatter};
use std::ops::{BitAnd, BitOr, Not};

/// How a field value gets compared with a literal.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Comparison {
    Exact,
    /// Case-insensitive equality.
    IExact,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    /// Case-insensitive substring.
    IContains,
    /// Case-insensitive prefix.
    IStartsWith,
    /// Full-text search, every word of the literal must occur.
    Search,
    Regex,
}

impl Display for Comparison {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Exact => "exact",
            Self::IExact => "iexact",
            Self::Less => "lt",
            Self::LessEqual => "lte",
            Self::Greater => "gt",
            Self::GreaterEqual => "gte",
            Self::IContains => "icontains",
            Self::IStartsWith => "istartswith",
            Self::Search => "search",
            Self::Regex => "regex",
        })
    }
}

/// Leaf comparison of a record field against a literal.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Filter {
    pub field: String,
    pub comparison: Comparison,
    pub value: String,
}

impl Filter {
    pub fn new(
        field: impl Into<String>,
        comparison: Comparison,
        value: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            comparison,
            value: value.into(),
        }
    }
}

/// Boolean expression over record fields, evaluated by a record store.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Predicate {
    Match(Filter),
    Not(Box<Predicate>),
    And(Vec<Predicate>),
    Or(Vec<Predicate>),
}

impl Predicate {
    pub fn filter(
        field: impl Into<String>,
        comparison: Comparison,
        value: impl Into<String>,
    ) -> Self {
        Self::Match(Filter::new(field, comparison, value))
    }

    pub fn and(self, other: Predicate) -> Self {
        match self {
            Self::And(mut terms) => {
                terms.push(other);
                Self::And(terms)
            }
            term => Self::And(vec![term, other]),
        }
    }

    pub fn or(self, other: Predicate) -> Self {
        match self {
            Self::Or(mut terms) => {
                terms.push(other);
                Self::Or(terms)
            }
            term => Self::Or(vec![term, other]),
        }
    }

    pub fn negate(self) -> Self {
        Self::Not(Box::new(self))
    }
}

impl BitAnd for Predicate {
    type Output = Predicate;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.and(rhs)
    }
}

impl BitOr for Predicate {
    type Output = Predicate;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.or(rhs)
    }
}

impl Not for Predicate {
    type Output = Predicate;

    fn not(self) -> Self::Output {
        self.negate()
    }
}

fn join(f: &mut Formatter<'_>, terms: &[Predicate], separator: &str) -> std::fmt::Result {
    f.write_str("(")?;
    for (i, term) in terms.iter().enumerate() {
        if i > 0 {
            f.write_str(separator)?;
        }
        write!(f, "{term}")?;
    }
    f.write_str(")")
}

impl Display for Predicate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Match(Filter {
                field,
                comparison,
                value,
            }) => write!(f, "{field}__{comparison}={value:?}"),
            Self::Not(term) => write!(f, "NOT {term}"),
            Self::And(terms) => join(f, terms, " AND "),
            Self::Or(terms) => join(f, terms, " OR "),
        }
    }
}
