//! Module: store
//! Responsibility: the index-backed store boundary and its in-memory form.
//! Does not own: the synchronization process that feeds a store.

mod memory;
mod registry;

pub use memory::*;
pub use registry::*;

use crate::traits::Record;
use serde::{Deserialize, Serialize};
use std::{fmt, sync::Arc};
use thiserror::Error as ThisError;

///
/// IndexName
///
/// The secondary indexes a mirrored collection may support. Which of these
/// a given collection actually carries is decided by its index registry.
///

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexName {
    Address,
    Annotation,
    Image,
    Label,
    Name,
    Node,
}

impl IndexName {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Address => "address",
            Self::Annotation => "annotation",
            Self::Image => "image",
            Self::Label => "label",
            Self::Name => "name",
            Self::Node => "node",
        }
    }
}

impl fmt::Display for IndexName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

///
/// StoreError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum StoreError {
    #[error("index '{0}' is not registered for this collection")]
    UnknownIndex(IndexName),
}

///
/// Store
///
/// Narrow read capability over one mirrored collection. The process that
/// keeps the collection synchronized with its remote source lives outside
/// the engine; a query observes whatever the store currently returns, call
/// by call, with no snapshotting across calls.
///

pub trait Store<R: Record> {
    /// Every record currently mirrored, in stable key order.
    fn list(&self) -> Vec<Arc<R>>;

    /// Keyed lookup by logical record key.
    fn get(&self, key: &str) -> Option<Arc<R>>;

    /// Records posted under `value` in the named secondary index.
    fn index_filter(&self, value: &str, index: IndexName) -> Result<Vec<Arc<R>>, StoreError>;
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::IndexName;

    #[test]
    fn index_name_display_round_trips_serde() {
        for index in [
            IndexName::Address,
            IndexName::Annotation,
            IndexName::Image,
            IndexName::Label,
            IndexName::Name,
            IndexName::Node,
        ] {
            let json = serde_json::to_string(&index).unwrap();
            assert_eq!(json, format!("\"{index}\""));
            let back: IndexName = serde_json::from_str(&json).unwrap();
            assert_eq!(back, index);
        }
    }
}
