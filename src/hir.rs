use std::fmt::{Display, Formatter};

/// Raw parse tree, operators are still the tokens as typed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Node<'a> {
    Identifier(&'a str),
    StringLiteral(&'a str),
    Unary {
        operator: &'a str,
        argument: Box<Node<'a>>,
    },
    Binary {
        operator: &'a str,
        left: Box<Node<'a>>,
        right: Box<Node<'a>>,
    },
    Compound(Vec<Node<'a>>),
}

impl<'a> Node<'a> {
    pub fn unary(operator: &'a str, argument: Node<'a>) -> Self {
        Self::Unary {
            operator,
            argument: Box::new(argument),
        }
    }

    pub fn binary(operator: &'a str, left: Node<'a>, right: Node<'a>) -> Self {
        Self::Binary {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Wrap top-level expressions, a single expression stands for itself.
    pub fn compound(mut items: Vec<Node<'a>>) -> Self {
        match items.len() {
            1 => items.remove(0),
            _ => Self::Compound(items),
        }
    }

    /// Levels of nesting, a leaf counts as one.
    pub fn depth(&self) -> usize {
        let mut max = 0;
        let mut pending = vec![(self, 1)];

        while let Some((node, depth)) = pending.pop() {
            max = max.max(depth);
            match node {
                Self::Identifier(_) | Self::StringLiteral(_) => {}
                Self::Unary { argument, .. } => pending.push((argument.as_ref(), depth + 1)),
                Self::Binary { left, right, .. } => {
                    pending.push((left.as_ref(), depth + 1));
                    pending.push((right.as_ref(), depth + 1));
                }
                Self::Compound(items) => pending.extend(items.iter().map(|item| (item, depth + 1))),
            }
        }

        max
    }

    /// Drop the tree without recursing into it.
    pub fn dismantle(self) {
        let mut pending = vec![self];

        while let Some(node) = pending.pop() {
            match node {
                Self::Identifier(_) | Self::StringLiteral(_) => {}
                Self::Unary { argument, .. } => pending.push(*argument),
                Self::Binary { left, right, .. } => {
                    pending.push(*left);
                    pending.push(*right);
                }
                Self::Compound(items) => pending.extend(items),
            }
        }
    }
}

impl Display for Node<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Identifier(name) => f.write_str(name),
            Self::StringLiteral(value) => write!(f, "\"{value}\""),
            Self::Unary { operator, argument } => write!(f, "{operator} {argument}"),
            Self::Binary {
                operator,
                left,
                right,
            } => write!(f, "({left} {operator} {right})"),
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
