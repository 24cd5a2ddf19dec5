use crate::{
    matcher::FieldFilter,
    query::Conditions,
    store::{Store, StoreError},
    traits::Record,
};
use std::{collections::HashSet, sync::Arc};

///
/// Gather the pre-sort candidate set.
///
/// Index lookups narrow the search space first and the field filter runs on
/// each narrowed subset before any set combination. Values under one index
/// name intersect pairwise; each surviving group then intersects the
/// running cross-group accumulator. Intersection is keyed on the logical
/// record key. Any empty stage short-circuits the whole call to an empty
/// set with no further lookups.
///
/// Returns the candidates plus the number of rows fetched from the store.
///
pub(crate) fn gather<R, S>(
    store: &S,
    conditions: &Conditions,
    filter: &FieldFilter,
) -> Result<(Vec<Arc<R>>, u64), StoreError>
where
    R: Record,
    S: Store<R>,
{
    let mut fetched: u64 = 0;

    if conditions.is_empty() {
        let listed = store.list();
        fetched += listed.len() as u64;

        return Ok((filter.filter(listed), fetched));
    }

    let mut result: Vec<Arc<R>> = Vec::new();
    for (index, values) in conditions.iter() {
        let mut group: Vec<Arc<R>> = Vec::new();

        for value in values {
            let looked = store.index_filter(value, *index)?;
            fetched += looked.len() as u64;

            let rows = filter.filter(looked);
            if rows.is_empty() {
                return Ok((Vec::new(), fetched));
            }

            if group.is_empty() {
                group = rows;
                continue;
            }
            group = intersect(rows, &group);
            if group.is_empty() {
                return Ok((Vec::new(), fetched));
            }
        }

        if result.is_empty() {
            result = group;
            continue;
        }
        result = intersect(group, &result);
        if result.is_empty() {
            return Ok((Vec::new(), fetched));
        }
    }

    Ok((result, fetched))
}

// Keep rows whose key appears in the accumulator, preserving `rows` order.
fn intersect<R: Record>(rows: Vec<Arc<R>>, acc: &[Arc<R>]) -> Vec<Arc<R>> {
    let keys: HashSet<String> = acc.iter().map(|record| record.record_key()).collect();

    rows.into_iter()
        .filter(|record| keys.contains(&record.record_key()))
        .collect()
}
