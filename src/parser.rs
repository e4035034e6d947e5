use crate::hir::Node;
use crate::mir::{Comparator, Connective, UnaryOperator};
use crate::Error;
use chumsky::prelude::*;

pub type Extra<'a> = extra::Err<Simple<'a, char>>;

const SYMBOLS: &str = "=<>!:@&|+*^~";

/// Words which are operators and can only be searched when quoted.
const KEYWORDS: &[&str] = &[
    "and", "or", "nand", "xor", "not", "equals", "eq", "contains", "matches", "unicorn",
];

fn is_word_char(c: &char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '.' | '-' | '/' | '#' | '$' | '%')
}

fn is_symbol_char(c: &char) -> bool {
    SYMBOLS.contains(*c)
}

pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.iter().any(|keyword| keyword.eq_ignore_ascii_case(word))
}

pub fn word<'a>() -> impl Parser<'a, &'a str, &'a str, Extra<'a>> + Clone {
    any()
        .filter(is_word_char)
        .repeated()
        .at_least(1)
        .to_slice()
}

/// A maximal run of operator punctuation.
pub fn symbol<'a>() -> impl Parser<'a, &'a str, &'a str, Extra<'a>> + Clone {
    any()
        .filter(is_symbol_char)
        .repeated()
        .at_least(1)
        .to_slice()
}

pub fn keyword<'a>(name: &'static str) -> impl Parser<'a, &'a str, &'a str, Extra<'a>> + Clone {
    word().filter(move |w: &&str| w.eq_ignore_ascii_case(name))
}

pub fn identifier<'a>() -> impl Parser<'a, &'a str, &'a str, Extra<'a>> + Clone {
    word().filter(|w: &&str| !is_keyword(w))
}

fn quoted<'a>(quote: char) -> impl Parser<'a, &'a str, &'a str, Extra<'a>> + Clone {
    just(quote)
        .ignore_then(none_of(quote).repeated().to_slice())
        .then_ignore(just(quote))
}

pub fn quoted_string<'a>() -> impl Parser<'a, &'a str, &'a str, Extra<'a>> + Clone {
    quoted('"').or(quoted('\''))
}

pub fn literal<'a>() -> impl Parser<'a, &'a str, Node<'a>, Extra<'a>> + Clone {
    choice((
        quoted_string().map(Node::StringLiteral),
        identifier().map(Node::Identifier),
    ))
}

pub fn unary_operator<'a>() -> impl Parser<'a, &'a str, &'a str, Extra<'a>> + Clone {
    choice((
        keyword("not"),
        symbol().filter(|s: &&str| s.parse::<UnaryOperator>().is_ok()),
    ))
}

/// Connectives of one precedence level: conjunctions, or everything else.
pub fn connective<'a>(conjunction: bool) -> impl Parser<'a, &'a str, &'a str, Extra<'a>> + Clone {
    word().or(symbol()).filter(move |token: &&str| {
        token
            .parse::<Connective>()
            .map_or(false, |connective| connective.is_conjunction() == conjunction)
    })
}

/// Comparator tokens.
///
/// Unknown punctuation in comparator position is accepted here and rejected once operators get
/// resolved, unless it is a connective or a prefix operator.
pub fn comparator<'a>() -> impl Parser<'a, &'a str, &'a str, Extra<'a>> + Clone {
    let than = || keyword("than").padded();
    let or_equal = || keyword("or").ignore_then(keyword("equal").padded());

    choice((
        keyword("less")
            .then(than())
            .then(or_equal())
            .to("less than or equal"),
        keyword("less").then(than()).to("less than"),
        keyword("greater")
            .then(than())
            .then(or_equal())
            .to("greater than or equal"),
        keyword("greater").then(than()).to("greater than"),
        word().filter(|w: &&str| w.parse::<Comparator>().is_ok()),
        symbol().filter(|s: &&str| {
            s.parse::<Connective>().is_err() && s.parse::<UnaryOperator>().is_err()
        }),
    ))
}

pub fn parser<'a>() -> impl Parser<'a, &'a str, Node<'a>, Extra<'a>> {
    recursive(|document| {
        let group = document.delimited_by(just('('), just(')'));
        let operand = choice((literal(), group)).padded();

        let comparison = operand
            .clone()
            .then(comparator().padded().then(operand).or_not())
            .map(|(left, right)| match right {
                Some((operator, right)) => Node::binary(operator, left, right),
                None => left,
            });

        let unary = unary_operator()
            .padded()
            .repeated()
            .foldr(comparison, Node::unary);

        let and = unary.clone().foldl(
            connective(true).padded().then(unary).repeated(),
            |left, (operator, right)| Node::binary(operator, left, right),
        );

        let or = and.clone().foldl(
            connective(false).padded().then(and).repeated(),
            |left, (operator, right)| Node::binary(operator, left, right),
        );

        or.padded()
            .repeated()
            .collect::<Vec<_>>()
            .map(Node::compound)
            .padded()
    })
}

/// Deepest syntax tree accepted by [`parse`], also the limit for nested groups.
///
/// The parser and all later stages walk the tree recursively.
pub const MAX_DEPTH: usize = 64;

/// Deepest nesting of groups, parentheses inside quotes don't count.
fn group_depth(query: &str) -> usize {
    let mut depth = 0usize;
    let mut max = 0;
    let mut quote = None;

    for c in query.chars() {
        match (quote, c) {
            (Some(open), c) if c == open => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '(') => {
                depth += 1;
                max = max.max(depth);
            }
            (None, ')') => depth = depth.saturating_sub(1),
            _ => {}
        }
    }

    max
}

/// Parse a query into its raw syntax tree.
pub fn parse(query: &str) -> Result<Node<'_>, Error> {
    if group_depth(query) > MAX_DEPTH {
        return Err(Error::TooDeep(MAX_DEPTH));
    }

    let node = parser()
        .then_ignore(end())
        .parse(query)
        .into_result()
        .map_err(|errors| {
            Error::Syntax(
                errors
                    .iter()
                    .map(|err| format!("{err:?}"))
                    .collect::<Vec<_>>()
                    .join("; "),
            )
        })?;

    if node.depth() > MAX_DEPTH {
        node.dismantle();
        return Err(Error::TooDeep(MAX_DEPTH));
    }

    Ok(node)
}
