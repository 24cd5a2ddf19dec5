//! Module: cluster
//! Responsibility: one remote source's mirrored collections, keyed by name.
//! Does not own: the watch/resync process that feeds the collections.

use mirrordb_core::{
    query::QueryBuilder,
    store::{IndexName, IndexRegistry, MemoryStore},
    traits::Record,
};
use std::{
    any::Any,
    collections::HashMap,
    sync::Arc,
};
use thiserror::Error as ThisError;

///
/// ClusterError
///

#[derive(Debug, Eq, PartialEq, ThisError)]
pub enum ClusterError {
    #[error("collection '{0}' is not registered for this record type")]
    NotRegistered(String),
}

///
/// Collection
///
/// Typed handle over one mirrored collection. `apply`/`remove` are the
/// write path a synchronization process drives; `query` opens a fresh
/// single-use builder over the current contents.
///

pub struct Collection<R: Record> {
    store: Arc<MemoryStore<R>>,
}

impl<R: Record> Collection<R> {
    fn new(registry: IndexRegistry<R>) -> Self {
        Self {
            store: Arc::new(MemoryStore::new(registry)),
        }
    }

    pub fn apply(&self, record: R) {
        self.store.apply(record);
    }

    pub fn remove(&self, key: &str) -> Option<Arc<R>> {
        self.store.remove(key)
    }

    #[must_use]
    pub fn store(&self) -> &MemoryStore<R> {
        &self.store
    }

    #[must_use]
    pub fn query(&self) -> QueryBuilder<'_, R, MemoryStore<R>> {
        QueryBuilder::new(&self.store)
    }
}

impl<R: Record> Clone for Collection<R> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

///
/// Cluster
///
/// One remote source's mirrored collections. Collections are registered up
/// front with their index extractors, then shared out as typed handles;
/// the cluster itself is immutable afterwards and safe to share.
///

pub struct Cluster {
    id: String,
    collections: HashMap<String, Box<dyn Any + Send + Sync>>,
}

impl Cluster {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            collections: HashMap::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Register a collection under a name, replacing any previous one.
    /// Returns the typed handle for the synchronization side.
    pub fn register<R>(&mut self, name: impl Into<String>, registry: IndexRegistry<R>) -> Collection<R>
    where
        R: Record + 'static,
    {
        let collection = Collection::new(registry);
        self.collections
            .insert(name.into(), Box::new(collection.clone()));

        collection
    }

    /// Typed lookup; `None` when the name is unknown or holds a different
    /// record type.
    #[must_use]
    pub fn collection<R>(&self, name: &str) -> Option<Collection<R>>
    where
        R: Record + 'static,
    {
        self.collections
            .get(name)?
            .downcast_ref::<Collection<R>>()
            .cloned()
    }

    /// `collection`, with the miss reported as an error.
    pub fn try_collection<R>(&self, name: &str) -> Result<Collection<R>, ClusterError>
    where
        R: Record + 'static,
    {
        self.collection(name)
            .ok_or_else(|| ClusterError::NotRegistered(name.to_string()))
    }

    /// Open a single-use query over a registered collection.
    #[must_use]
    pub fn query<R>(&self, name: &str) -> Option<QueryBuilder<'_, R, MemoryStore<R>>>
    where
        R: Record + 'static,
    {
        let collection = self.collections.get(name)?.downcast_ref::<Collection<R>>()?;

        Some(QueryBuilder::new(collection.store.as_ref()))
    }

    /// Registered collection names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.collections.keys().map(String::as_str)
    }
}

/// Conventional index coverage per collection name. Callers can check a
/// registry against this before wiring a standard cluster mirror.
#[must_use]
pub fn default_index_setting() -> HashMap<&'static str, Vec<IndexName>> {
    HashMap::from([
        (
            "pods",
            vec![
                IndexName::Node,
                IndexName::Address,
                IndexName::Label,
                IndexName::Image,
                IndexName::Annotation,
                IndexName::Name,
            ],
        ),
        (
            "services",
            vec![IndexName::Label, IndexName::Annotation, IndexName::Name],
        ),
        (
            "nodes",
            vec![IndexName::Label, IndexName::Annotation, IndexName::Name],
        ),
    ])
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use mirrordb_core::{
        traits::{FieldValues, RecordIdentity},
        value::Value,
    };
    use std::collections::BTreeMap;

    struct Service {
        name: String,
        labels: BTreeMap<String, String>,
    }

    impl FieldValues for Service {
        fn get_value(&self, field: &str) -> Option<Value<'_>> {
            match field {
                "name" => Some(Value::Text(&self.name)),
                "labels" => Some(Value::Map(&self.labels)),
                _ => None,
            }
        }
    }

    impl RecordIdentity for Service {
        fn record_key(&self) -> String {
            self.name.clone()
        }
    }

    struct Node {
        name: String,
    }

    impl FieldValues for Node {
        fn get_value(&self, field: &str) -> Option<Value<'_>> {
            match field {
                "name" => Some(Value::Text(&self.name)),
                _ => None,
            }
        }
    }

    impl RecordIdentity for Node {
        fn record_key(&self) -> String {
            self.name.clone()
        }
    }

    fn service(name: &str, labels: &[(&str, &str)]) -> Service {
        Service {
            name: name.to_string(),
            labels: labels
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        }
    }

    fn service_registry() -> IndexRegistry<Service> {
        IndexRegistry::new()
            .with(IndexName::Name, |s: &Service| vec![s.name.clone()])
            .with(IndexName::Label, |s: &Service| {
                s.labels.iter().map(|(k, v)| format!("{k}={v}")).collect()
            })
    }

    #[test]
    fn register_and_query_round_trip() {
        let mut cluster = Cluster::new("primary");
        let services = cluster.register("services", service_registry());

        services.apply(service("web", &[("app", "nginx")]));
        services.apply(service("db", &[("app", "redis")]));

        let result = cluster
            .query::<Service>("services")
            .unwrap()
            .where_index(IndexName::Label, "app=nginx")
            .find()
            .unwrap();

        assert_eq!(result.total, 1);
        assert_eq!(result.records[0].name, "web");

        let handle = cluster.collection::<Service>("services").unwrap();
        let by_name = handle
            .query()
            .where_index(IndexName::Name, "db")
            .find()
            .unwrap();
        assert_eq!(by_name.total, 1);
    }

    #[test]
    fn lookup_misses_on_unknown_name_or_wrong_type() {
        let mut cluster = Cluster::new("primary");
        cluster.register("services", service_registry());

        assert!(cluster.collection::<Service>("pods").is_none());
        assert!(cluster.collection::<Node>("services").is_none());
        assert_eq!(
            cluster.try_collection::<Node>("services").err(),
            Some(ClusterError::NotRegistered("services".to_string()))
        );
    }

    #[test]
    fn remove_through_the_handle() {
        let mut cluster = Cluster::new("primary");
        let services = cluster.register("services", service_registry());
        services.apply(service("web", &[]));

        assert!(services.remove("web").is_some());
        assert!(cluster
            .collection::<Service>("services")
            .unwrap()
            .store()
            .is_empty());
    }

    #[test]
    fn default_setting_covers_conventional_collections() {
        let setting = default_index_setting();
        assert!(setting["pods"].contains(&IndexName::Image));
        assert_eq!(setting["services"].len(), 3);
        assert_eq!(setting["nodes"].len(), 3);
    }
}
