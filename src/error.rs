use crate::mir::OperatorKind;

/// Everything that can be wrong with a user supplied search.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Syntax error: {0}")]
    Syntax(String),
    #[error("Unknown {kind} operator {token}")]
    UnknownOperator { kind: OperatorKind, token: String },
    #[error("Cannot use operator {operator} on {left} and {right}")]
    TypeMismatch {
        operator: String,
        left: String,
        right: String,
    },
    #[error("Unknown field {0}")]
    UnknownField(String),
    #[error("Invalid regular expression {pattern}: {reason}")]
    InvalidPattern { pattern: String, reason: String },
    #[error("Empty search")]
    EmptySearch,
    #[error("Free-text search is not available")]
    NoSearchFields,
    #[error("Search is nested too deeply, at most {0} levels are allowed")]
    TooDeep(usize),
}

/// A search which could not be compiled.
///
/// The message is meant for the end user. Any other failure escaping the compiler is a bug in the
/// compiler itself.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ParsingError {
    pub message: String,
    #[source]
    pub cause: Error,
}

impl ParsingError {
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<Error> for ParsingError {
    fn from(cause: Error) -> Self {
        let message = match &cause {
            Error::Syntax(_) => "Unable to understand search".to_string(),
            other => other.to_string(),
        };
        Self { message, cause }
    }
}
