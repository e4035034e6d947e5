use std::collections::BTreeMap;

/// Fields a search may refer to.
///
/// ```
/// use search_filter::SearchConfig;
///
/// let config = SearchConfig::new()
///     .field("city", "address.city")
///     .plain_search_field("^givenName")
///     .plain_search_field("familyName");
/// assert_eq!(2, config.plain_search_fields.len());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct SearchConfig {
    /// Field names users type, mapped to record field paths.
    #[cfg_attr(feature = "serde", serde(default))]
    pub fields: BTreeMap<String, String>,
    /// Field paths searched by bare words, optionally prefixed with a sigil (`^`, `=`, `@`).
    #[cfg_attr(feature = "serde", serde(default))]
    pub plain_search_fields: Vec<String>,
}

impl SearchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, name: impl Into<String>, path: impl Into<String>) -> Self {
        self.fields.insert(name.into(), path.into());
        self
    }

    pub fn plain_search_field(mut self, path: impl Into<String>) -> Self {
        self.plain_search_fields.push(path.into());
        self
    }
}
