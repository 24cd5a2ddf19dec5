//! Module: matcher
//! Responsibility: field-path text matching and order-preserving filtering.
//! Does not own: path resolution internals or candidate-set combination.

use crate::{
    path::{FieldPath, resolve},
    traits::FieldValues,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

///
/// FieldFilter
///
/// A field-path-based text match applied independently of index conditions.
/// Paths OR-combine: the first path whose resolved text matches the word
/// accepts the record. Fuzzy means substring containment; exact means
/// string equality.
///
/// An unset filter (no paths, or an empty word) is a no-op that passes
/// every record through unchanged.
///

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FieldFilter {
    paths: Vec<FieldPath>,
    word: String,
    fuzzy: bool,
}

impl FieldFilter {
    #[must_use]
    pub fn new<I>(paths: I, word: impl Into<String>, fuzzy: bool) -> Self
    where
        I: IntoIterator,
        I::Item: Into<FieldPath>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
            word: word.into(),
            fuzzy,
        }
    }

    /// True when this filter cannot reject anything.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.paths.is_empty() || self.word.is_empty()
    }

    /// Test one record: OR across paths, first match wins.
    #[must_use]
    pub fn matches(&self, record: &dyn FieldValues) -> bool {
        self.paths.iter().any(|path| {
            let text = resolve(path, record);
            if self.fuzzy {
                text.contains(&self.word)
            } else {
                text == self.word
            }
        })
    }

    /// Retain matching records, preserving input order. An unset filter
    /// returns the input unchanged.
    #[must_use]
    pub fn filter<R: FieldValues>(&self, records: Vec<Arc<R>>) -> Vec<Arc<R>> {
        if self.is_noop() {
            return records;
        }

        records
            .into_iter()
            .filter(|record| self.matches(record.as_ref()))
            .collect()
    }
}

///
/// TESTS
///
