use crate::lir::Predicate;
use crate::mir::{BinaryOperator, Expression};
use crate::operators::FieldMap;
use crate::text::TextSearch;
use crate::Error;

/// Result of translating a sub-tree.
///
/// Literals stay raw until they are either consumed by a filter operator or finalized into a
/// free-text search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Operand<'a> {
    Literal(&'a str),
    Predicate(Predicate),
}

/// Translates a resolved syntax tree into a [`Predicate`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryBuilder {
    fields: FieldMap,
    text: TextSearch,
}

impl QueryBuilder {
    pub fn new(fields: FieldMap, text: TextSearch) -> Self {
        Self { fields, text }
    }

    pub fn build(&self, expression: &Expression) -> Result<Predicate, Error> {
        match self.translate(expression, true)? {
            Operand::Predicate(predicate) => Ok(predicate),
            Operand::Literal(literal) => self.text.build(literal),
        }
    }

    pub fn translate<'a>(
        &self,
        expression: &Expression<'a>,
        finalize: bool,
    ) -> Result<Operand<'a>, Error> {
        let result = match expression {
            Expression::Identifier(value) | Expression::StringLiteral(value) => {
                Operand::Literal(*value)
            }
            Expression::Unary(operator, argument) => {
                Operand::Predicate(operator.apply(self.build(argument)?))
            }
            Expression::Binary(BinaryOperator::Connective(connective), left, right) => {
                Operand::Predicate(connective.apply(self.build(left)?, self.build(right)?))
            }
            Expression::Binary(BinaryOperator::Comparator(comparator), left, right) => {
                match (
                    self.translate(left, false)?,
                    self.translate(right, false)?,
                ) {
                    (Operand::Literal(field), Operand::Literal(value)) => {
                        Operand::Predicate(self.fields.filter(*comparator, field, value)?)
                    }
                    _ => {
                        return Err(Error::TypeMismatch {
                            operator: comparator.to_string(),
                            left: left.to_string(),
                            right: right.to_string(),
                        })
                    }
                }
            }
            Expression::Compound(items) => {
                let mut clauses = items.iter().map(|item| self.build(item));
                let first = clauses.next().ok_or(Error::EmptySearch)??;
                Operand::Predicate(clauses.try_fold(first, |result, clause| {
                    clause.map(|clause| result & clause)
                })?)
            }
        };

        Ok(match result {
            Operand::Literal(literal) if finalize => Operand::Predicate(self.text.build(literal)?),
            result => result,
        })
    }
}
