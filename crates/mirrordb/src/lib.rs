//! MirrorDB facade: cluster and hub bookkeeping over the core engine, plus
//! the public prelude. The synchronization process that feeds a cluster's
//! collections is a collaborator, not part of this crate.

pub mod cluster;
pub mod hub;

// re-export the engine modules under the facade
pub use mirrordb_core::{matcher, path, query, store, traits, value};

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        cluster::{Cluster, Collection},
        hub::Hub,
    };
    pub use mirrordb_core::prelude::*;
}
