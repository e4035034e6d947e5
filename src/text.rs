//! Free-text search across the plain-search fields.

use crate::lir::{Comparison, Predicate};
use crate::Error;

/// A plain-search field, a leading sigil selects how it gets compared:
///
/// * `^field`: starts with
/// * `=field`: exact match, ignoring case
/// * `@field`: full-text search
/// * `field`: contains, ignoring case
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SearchField {
    pub path: String,
    pub comparison: Comparison,
}

impl SearchField {
    pub fn parse(field: &str) -> Self {
        let (comparison, path) = if let Some(path) = field.strip_prefix('^') {
            (Comparison::IStartsWith, path)
        } else if let Some(path) = field.strip_prefix('=') {
            (Comparison::IExact, path)
        } else if let Some(path) = field.strip_prefix('@') {
            (Comparison::Search, path)
        } else {
            (Comparison::IContains, field)
        };

        Self {
            path: path.to_string(),
            comparison,
        }
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TextSearch {
    fields: Vec<SearchField>,
}

impl TextSearch {
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            fields: fields
                .into_iter()
                .map(|field| SearchField::parse(field.as_ref()))
                .collect(),
        }
    }

    pub fn fields(&self) -> &[SearchField] {
        &self.fields
    }

    /// Every word must be found in at least one of the fields.
    pub fn build(&self, text: &str) -> Result<Predicate, Error> {
        let mut words = text.split_whitespace();
        let first = words.next().ok_or(Error::EmptySearch)?;

        if self.fields.is_empty() {
            return Err(Error::NoSearchFields);
        }

        let mut result = self.word(first);
        for word in words {
            result = result & self.word(word);
        }

        Ok(result)
    }

    fn word(&self, word: &str) -> Predicate {
        self.fields
            .iter()
            .map(|field| Predicate::filter(field.path.as_str(), field.comparison, word))
            .reduce(|result, term| result | term)
            .unwrap_or_else(|| Predicate::Or(vec![]))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sigils() {
        let search = TextSearch::new(["^givenName", "=email", "@bio", "familyName"]);
        assert_eq!(
            vec![
                Comparison::IStartsWith,
                Comparison::IExact,
                Comparison::Search,
                Comparison::IContains
            ],
            search
                .fields()
                .iter()
                .map(|field| field.comparison)
                .collect::<Vec<_>>()
        );
        assert_eq!("givenName", search.fields()[0].path);
    }

    #[test]
    fn test_single_word() {
        let search = TextSearch::new(["givenName", "familyName"]);
        assert_eq!(
            Predicate::Or(vec![
                Predicate::filter("givenName", Comparison::IContains, "Elena"),
                Predicate::filter("familyName", Comparison::IContains, "Elena"),
            ]),
            search.build("Elena").unwrap()
        );
    }

    #[test]
    fn test_words() {
        let search = TextSearch::new(["givenName"]);
        assert_eq!(
            Predicate::And(vec![
                Predicate::filter("givenName", Comparison::IContains, "Elena"),
                Predicate::filter("givenName", Comparison::IContains, "Ilie"),
            ]),
            search.build(" Elena\tIlie ").unwrap()
        );
    }

    #[test]
    fn test_empty() {
        let search = TextSearch::new(["givenName"]);
        assert_eq!(Err(Error::EmptySearch), search.build(""));
        assert_eq!(Err(Error::EmptySearch), search.build("  "));
    }

    #[test]
    fn test_no_fields() {
        let search = TextSearch::new(Vec::<String>::new());
        assert_eq!(Err(Error::NoSearchFields), search.build("Elena"));
    }
}
