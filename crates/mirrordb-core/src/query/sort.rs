use crate::{
    path::{FieldPath, resolve},
    traits::FieldValues,
};
use std::{cmp::Reverse, sync::Arc};

/// Conventional ordering field used when sorting is enabled without an
/// explicit path.
pub const DEFAULT_SORT_FIELD: &str = "name";

/// Order records by resolved sort key.
///
/// With no explicit path, records order by their `name` field in descending
/// lexicographic order. An explicit path orders ascending by the resolved
/// text. The sort is stable (ties keep input order) and each key is
/// resolved once.
pub fn sort_records<R: FieldValues>(records: &mut [Arc<R>], path: Option<&FieldPath>) {
    match path {
        Some(path) if !path.is_empty() => {
            records.sort_by_cached_key(|record| resolve(path, record.as_ref()));
        }
        _ => {
            let default = FieldPath::parse(DEFAULT_SORT_FIELD);
            records.sort_by_cached_key(|record| Reverse(resolve(&default, record.as_ref())));
        }
    }
}

///
/// TESTS
///
