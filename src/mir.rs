use crate::{hir, Error};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum OperatorKind {
    Unary,
    Binary,
}

impl Display for OperatorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unary => f.write_str("unary"),
            Self::Binary => f.write_str("binary"),
        }
    }
}

fn unknown(kind: OperatorKind, token: &str) -> Error {
    Error::UnknownOperator {
        kind,
        token: token.to_string(),
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum UnaryOperator {
    Not,
}

impl FromStr for UnaryOperator {
    type Err = Error;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token.to_ascii_lowercase().as_str() {
            "not" | "!" | "~" => Ok(Self::Not),
            _ => Err(unknown(OperatorKind::Unary, token)),
        }
    }
}

impl Display for UnaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Not => f.write_str("not"),
        }
    }
}

/// Logical connective between two predicates.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Connective {
    And,
    Or,
    Nand,
    Xor,
}

impl Connective {
    /// Conjunctions bind tighter than every other connective.
    pub fn is_conjunction(&self) -> bool {
        matches!(self, Self::And)
    }
}

impl FromStr for Connective {
    type Err = Error;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        Ok(match token.to_ascii_lowercase().as_str() {
            "and" | "&" | "&&" | "*" => Self::And,
            "or" | "|" | "||" | "+" => Self::Or,
            "nand" | "!&" => Self::Nand,
            "xor" | "^" => Self::Xor,
            _ => return Err(unknown(OperatorKind::Binary, token)),
        })
    }
}

impl Display for Connective {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::And => "and",
            Self::Or => "or",
            Self::Nand => "nand",
            Self::Xor => "xor",
        })
    }
}

/// Filter operator applied to a field token and a literal.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Comparator {
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    Contains,
    Matches,
}

impl FromStr for Comparator {
    type Err = Error;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        Ok(match token.to_ascii_lowercase().as_str() {
            "equals" | "eq" | ":" | "=" | "==" | "===" => Self::Equal,
            "!=" => Self::NotEqual,
            "less than" | "<" => Self::Less,
            "less than or equal" | "<=" | "=<" => Self::LessEqual,
            "greater than" | ">" => Self::Greater,
            "greater than or equal" | ">=" | "=>" => Self::GreaterEqual,
            "contains" | "::" => Self::Contains,
            "matches" | "unicorn" | "@" => Self::Matches,
            _ => return Err(unknown(OperatorKind::Binary, token)),
        })
    }
}

impl Display for Comparator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Equal => "=",
            Self::NotEqual => "!=",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::Contains => "contains",
            Self::Matches => "matches",
        })
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum BinaryOperator {
    Connective(Connective),
    Comparator(Comparator),
}

impl FromStr for BinaryOperator {
    type Err = Error;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token.parse::<Connective>() {
            Ok(connective) => Ok(Self::Connective(connective)),
            Err(_) => token.parse::<Comparator>().map(Self::Comparator),
        }
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Connective(connective) => connective.fmt(f),
            Self::Comparator(comparator) => comparator.fmt(f),
        }
    }
}

/// Syntax tree with every operator resolved.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Expression<'a> {
    Identifier(&'a str),
    StringLiteral(&'a str),
    Unary(UnaryOperator, Box<Expression<'a>>),
    Binary(BinaryOperator, Box<Expression<'a>>, Box<Expression<'a>>),
    Compound(Vec<Expression<'a>>),
}

impl<'a> Expression<'a> {
    pub fn resolve(node: hir::Node<'a>) -> Result<Self, Error> {
        Ok(match node {
            hir::Node::Identifier(name) => Self::Identifier(name),
            hir::Node::StringLiteral(value) => Self::StringLiteral(value),
            hir::Node::Unary { operator, argument } => Self::Unary(
                operator.parse()?,
                Box::new(Self::resolve(*argument)?),
            ),
            hir::Node::Binary {
                operator,
                left,
                right,
            } => Self::Binary(
                operator.parse()?,
                Box::new(Self::resolve(*left)?),
                Box::new(Self::resolve(*right)?),
            ),
            hir::Node::Compound(items) => Self::Compound(
                items
                    .into_iter()
                    .map(Self::resolve)
                    .collect::<Result<_, _>>()?,
            ),
        })
    }

    /// The raw value of a literal leaf.
    pub fn literal(&self) -> Option<&'a str> {
        match self {
            Self::Identifier(value) | Self::StringLiteral(value) => Some(value),
            _ => None,
        }
    }
}

impl Display for Expression<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Identifier(name) => f.write_str(name),
            Self::StringLiteral(value) => write!(f, "\"{value}\""),
            Self::Unary(operator, argument) => write!(f, "{operator} {argument}"),
            Self::Binary(operator, left, right) => write!(f, "({left} {operator} {right})"),
            Self::Compound(items) => {
                f.write_str("(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str(")")
            }
        }
    }
}
