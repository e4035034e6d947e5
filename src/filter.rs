use crate::builder::QueryBuilder;
use crate::lir::{Predicate, Record};
use crate::mir::Expression;
use crate::operators::FieldMap;
use crate::text::TextSearch;
use crate::{parser, ParsingError, SearchConfig};

/// Something a [`Predicate`] can narrow down, usually owned by a record store.
pub trait Collection {
    type Filtered;

    fn filter(self, predicate: &Predicate) -> Self::Filtered;
}

impl<'r, R: Record> Collection for &'r [R] {
    type Filtered = Vec<&'r R>;

    fn filter(self, predicate: &Predicate) -> Self::Filtered {
        let matcher = predicate.compile();
        self.iter()
            .filter(|record| matcher.matches(*record))
            .collect()
    }
}

impl<'r, R: Record> Collection for &'r Vec<R> {
    type Filtered = Vec<&'r R>;

    fn filter(self, predicate: &Predicate) -> Self::Filtered {
        self.as_slice().filter(predicate)
    }
}

/// Compiles user searches into predicates.
///
/// The configuration is fixed at construction, a filter can be shared between threads.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchFilter {
    builder: QueryBuilder,
}

impl SearchFilter {
    pub fn new<F, K, V, P, S>(field_map: F, plain_search_fields: P) -> Self
    where
        F: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
        P: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            builder: QueryBuilder::new(
                field_map.into_iter().collect(),
                TextSearch::new(plain_search_fields),
            ),
        }
    }

    /// Compile a search.
    ///
    /// The error is safe to show to the user.
    pub fn search(&self, query: &str) -> Result<Predicate, ParsingError> {
        let node = parser::parse(query).map_err(|err| {
            log::debug!("Unable to parse search {query:?}: {err}");
            ParsingError::from(err)
        })?;
        log::trace!("Parsed: {node}");

        let predicate = Expression::resolve(node)
            .and_then(|expression| {
                log::trace!("Resolved: {expression}");
                self.builder.build(&expression)
            })
            .map_err(|err| {
                log::debug!("Rejected search {query:?}: {err}");
                ParsingError::from(err)
            })?;
        log::trace!("Predicate: {predicate}");

        Ok(predicate)
    }

    /// Compile a search and narrow down the collection with it.
    pub fn apply<C: Collection>(
        &self,
        collection: C,
        query: &str,
    ) -> Result<C::Filtered, ParsingError> {
        let predicate = self.search(query)?;
        Ok(collection.filter(&predicate))
    }
}

impl From<SearchConfig> for SearchFilter {
    fn from(config: SearchConfig) -> Self {
        Self {
            builder: QueryBuilder::new(
                FieldMap::new(config.fields),
                TextSearch::new(config.plain_search_fields),
            ),
        }
    }
}
