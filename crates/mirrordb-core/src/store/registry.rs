use crate::store::IndexName;
use std::sync::Arc;

///
/// IndexFn
///
/// Extractor producing every value a record posts under one index kind.
/// One record may post several values (one per label pair, one per
/// container image), or none.
///

pub type IndexFn<R> = Arc<dyn Fn(&R) -> Vec<String> + Send + Sync>;

///
/// IndexRegistry
///
/// The extractors one collection carries, keyed by index name. Constructed
/// by the caller and handed to the collection; there is no process-global
/// registry. Lookups against an unregistered index fail at the store
/// boundary.
///

pub struct IndexRegistry<R> {
    extractors: Vec<(IndexName, IndexFn<R>)>,
}

impl<R> IndexRegistry<R> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            extractors: Vec::new(),
        }
    }

    /// Register an extractor, replacing any previous one for the same index.
    pub fn register(
        &mut self,
        index: IndexName,
        extract: impl Fn(&R) -> Vec<String> + Send + Sync + 'static,
    ) {
        self.extractors.retain(|(existing, _)| *existing != index);
        self.extractors.push((index, Arc::new(extract)));
    }

    /// Chainable `register`.
    #[must_use]
    pub fn with(
        mut self,
        index: IndexName,
        extract: impl Fn(&R) -> Vec<String> + Send + Sync + 'static,
    ) -> Self {
        self.register(index, extract);
        self
    }

    #[must_use]
    pub fn contains(&self, index: IndexName) -> bool {
        self.extractors.iter().any(|(existing, _)| *existing == index)
    }

    /// Registered index names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = IndexName> + '_ {
        self.extractors.iter().map(|(index, _)| *index)
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (IndexName, &IndexFn<R>)> {
        self.extractors.iter().map(|(index, f)| (*index, f))
    }
}

impl<R> Default for IndexRegistry<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Clone for IndexRegistry<R> {
    fn clone(&self) -> Self {
        Self {
            extractors: self.extractors.clone(),
        }
    }
}

///
/// TESTS
///
