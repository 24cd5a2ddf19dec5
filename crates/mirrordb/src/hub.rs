use crate::cluster::Cluster;
use std::{
    collections::HashMap,
    sync::{Arc, Mutex, PoisonError},
};

///
/// Hub
///
/// Multi-cluster bookkeeping. Clusters register under their id once fully
/// wired and are shared out as `Arc`s; the hub never inspects their
/// contents.
///

#[derive(Default)]
pub struct Hub {
    clusters: Mutex<HashMap<String, Arc<Cluster>>>,
}

impl Hub {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a cluster under its id, replacing any previous one.
    pub fn add(&self, cluster: Arc<Cluster>) {
        self.clusters
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(cluster.id().to_string(), cluster);
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<Arc<Cluster>> {
        self.clusters
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
    }

    /// Drop a cluster, returning it if it was registered.
    pub fn remove(&self, id: &str) -> Option<Arc<Cluster>> {
        self.clusters
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.clusters
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

///
/// TESTS
///
