use crate::{
    store::{IndexName, IndexRegistry, Store, StoreError},
    traits::Record,
};
use std::{
    collections::{BTreeMap, BTreeSet, HashMap},
    sync::{Arc, PoisonError, RwLock},
};

///
/// MemoryStore
///
/// In-memory mirror of one collection with maintained secondary-index
/// postings. `apply`/`remove` are the write path an external
/// synchronization process drives; reads snapshot shared `Arc`s under a
/// read lock, so writes may land while a query is mid-flight and each
/// read observes the store as it currently stands.
///

pub struct MemoryStore<R> {
    registry: IndexRegistry<R>,
    inner: RwLock<Inner<R>>,
}

struct Inner<R> {
    // Key order gives `list` a deterministic shape.
    records: BTreeMap<String, Arc<R>>,
    // index → posted value → keys of records posting it.
    postings: HashMap<IndexName, HashMap<String, BTreeSet<String>>>,
}

impl<R: Record> MemoryStore<R> {
    #[must_use]
    pub fn new(registry: IndexRegistry<R>) -> Self {
        Self {
            registry,
            inner: RwLock::new(Inner {
                records: BTreeMap::new(),
                postings: HashMap::new(),
            }),
        }
    }

    #[must_use]
    pub const fn registry(&self) -> &IndexRegistry<R> {
        &self.registry
    }

    /// Insert or replace a record, keeping index postings current.
    /// Replacement removes the previous record's stale postings first.
    pub fn apply(&self, record: R) {
        let key = record.record_key();
        let record = Arc::new(record);

        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(old) = inner.records.remove(&key) {
            self.unpost(&mut inner, &key, &old);
        }
        self.post(&mut inner, &key, &record);
        inner.records.insert(key, record);
    }

    /// Drop a record and all of its postings. Returns the record if it was
    /// mirrored.
    pub fn remove(&self, key: &str) -> Option<Arc<R>> {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let old = inner.records.remove(key)?;
        self.unpost(&mut inner, key, &old);

        Some(old)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .records
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn post(&self, inner: &mut Inner<R>, key: &str, record: &R) {
        for (index, extract) in self.registry.iter() {
            for value in extract(record) {
                inner
                    .postings
                    .entry(index)
                    .or_default()
                    .entry(value)
                    .or_default()
                    .insert(key.to_string());
            }
        }
    }

    fn unpost(&self, inner: &mut Inner<R>, key: &str, record: &R) {
        for (index, extract) in self.registry.iter() {
            let Some(by_value) = inner.postings.get_mut(&index) else {
                continue;
            };
            for value in extract(record) {
                if let Some(keys) = by_value.get_mut(&value) {
                    keys.remove(key);
                    if keys.is_empty() {
                        by_value.remove(&value);
                    }
                }
            }
        }
    }
}

impl<R: Record> Store<R> for MemoryStore<R> {
    fn list(&self) -> Vec<Arc<R>> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .records
            .values()
            .cloned()
            .collect()
    }

    fn get(&self, key: &str) -> Option<Arc<R>> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .records
            .get(key)
            .cloned()
    }

    fn index_filter(&self, value: &str, index: IndexName) -> Result<Vec<Arc<R>>, StoreError> {
        if !self.registry.contains(index) {
            return Err(StoreError::UnknownIndex(index));
        }

        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        let keys = inner
            .postings
            .get(&index)
            .and_then(|by_value| by_value.get(value));

        let Some(keys) = keys else {
            return Ok(Vec::new());
        };

        Ok(keys
            .iter()
            .filter_map(|key| inner.records.get(key).cloned())
            .collect())
    }
}

///
/// TESTS
///
