use crate::filter::Collection;
use crate::lir::{Comparison, Filter, Predicate};
use ::sea_orm::sea_query::{
    Alias, ColumnRef, Expr, Func, IntoColumnRef, IntoCondition, SimpleExpr,
};
use ::sea_orm::{Condition, EntityTrait, QueryFilter, Select};

/// Translate a predicate into a condition.
pub fn translate_predicate(predicate: &Predicate) -> Condition {
    match predicate {
        Predicate::Not(term) => Condition::all().add(translate_predicate(term)).not(),
        Predicate::Or(terms) => {
            let mut result = Condition::any();
            for term in terms {
                result = result.add(translate_predicate(term));
            }
            result
        }
        Predicate::And(terms) => {
            let mut result = Condition::all();
            for term in terms {
                result = result.add(translate_predicate(term));
            }
            result
        }
        Predicate::Match(filter) => translate_filter(filter).into_condition(),
    }
}

/// Translate a single field comparison.
///
/// Case-insensitive comparisons are done on the lower-cased column, regular expressions and
/// full-text search use PostgreSQL operators.
pub fn translate_filter(filter: &Filter) -> SimpleExpr {
    let Filter {
        field,
        comparison,
        value,
    } = filter;
    let value = value.clone();

    match comparison {
        Comparison::Exact => Expr::col(column(field)).eq(value),
        Comparison::IExact => lower(field).eq(value.to_lowercase()),
        Comparison::Less => Expr::col(column(field)).lt(value),
        Comparison::LessEqual => Expr::col(column(field)).lte(value),
        Comparison::Greater => Expr::col(column(field)).gt(value),
        Comparison::GreaterEqual => Expr::col(column(field)).gte(value),
        Comparison::IContains => lower(field).like(format!("%{}%", escape(&value.to_lowercase()))),
        Comparison::IStartsWith => lower(field).like(format!("{}%", escape(&value.to_lowercase()))),
        Comparison::Search => Expr::cust_with_exprs(
            "to_tsvector($1) @@ plainto_tsquery($2)",
            [SimpleExpr::Column(column(field)), SimpleExpr::from(value)],
        ),
        Comparison::Regex => Expr::cust_with_exprs(
            "$1 ~ $2",
            [SimpleExpr::Column(column(field)), SimpleExpr::from(value)],
        ),
    }
}

/// Field paths of the form `table.column` are qualified column references.
pub fn column(path: &str) -> ColumnRef {
    match path.split_once('.') {
        Some((table, column)) => (Alias::new(table), Alias::new(column)).into_column_ref(),
        None => Alias::new(path).into_column_ref(),
    }
}

fn lower(path: &str) -> Expr {
    Expr::expr(Func::lower(SimpleExpr::Column(column(path))))
}

fn escape(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

impl<E: EntityTrait> Collection for Select<E> {
    type Filtered = Select<E>;

    fn filter(self, predicate: &Predicate) -> Self::Filtered {
        QueryFilter::filter(self, translate_predicate(predicate))
    }
}
