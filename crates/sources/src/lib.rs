#![forbid(unsafe_code)]

pub mod catalog;
pub mod http;
pub mod records;

pub use catalog::{InMemorySource, SetCatalog, SetSource, SourceError};
pub use http::HttpSource;
pub use records::{CardRecord, ScoreRecord};
