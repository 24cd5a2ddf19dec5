//! Core runtime for MirrorDB: record capability traits, the lenient field
//! path resolver, the index-backed store boundary, and the query engine
//! (match, combine, order, page) exported via the `prelude`.

pub mod matcher;
pub mod path;
pub mod query;
pub mod store;
pub mod traits;
pub mod value;

// test
#[cfg(test)]
pub(crate) mod test_fixtures;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// Errors, trace sinks, and store internals are imported from their
/// modules when needed.
///

pub mod prelude {
    pub use crate::{
        matcher::FieldFilter,
        path::FieldPath,
        query::{QueryBuilder, ResultSet},
        store::{IndexName, IndexRegistry, MemoryStore, Store},
        traits::{FieldValues, Record, RecordIdentity},
        value::Value,
    };
}
