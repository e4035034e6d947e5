//! A boolean search language, compiled into predicates over a record collection.
//!
//! ```
//! use search_filter::prelude::*;
//! use std::collections::BTreeMap;
//!
//! let search = SearchFilter::new([("city", "address.city")], ["givenName", "familyName"]);
//!
//! let records: Vec<BTreeMap<&str, &str>> = vec![
//!     [("givenName", "Elena"), ("address.city", "Berlin")].into(),
//!     [("givenName", "Bob"), ("address.city", "Bremen")].into(),
//! ];
//!
//! let found = search.apply(&records, "elena or city = Bremen").unwrap();
//! assert_eq!(2, found.len());
//!
//! let err = search.search("x = 1").unwrap_err();
//! assert_eq!("Unknown field x", err.message());
//! ```

pub mod builder;
pub mod config;
mod error;
pub mod filter;
pub mod hir;
pub mod lir;
pub mod mir;
pub mod operators;
pub mod parser;
#[cfg(feature = "sea-orm")]
pub mod sea_orm;
pub mod text;

pub use config::SearchConfig;
pub use error::{Error, ParsingError};
pub use filter::{Collection, SearchFilter};

pub mod prelude {
    pub use crate::filter::{Collection, SearchFilter};
    pub use crate::lir::{Comparison, Filter, Matcher, Predicate, Record};
    pub use crate::{Error, ParsingError, SearchConfig};
}

pub use ::chumsky;
