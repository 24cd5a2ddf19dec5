//! Module: query
//! Responsibility: fluent query construction and the find pipeline
//! (combine → order → page → decode).
//! Does not own: path resolution, match semantics, or store internals.

mod combine;
pub mod page;
pub mod sort;
pub mod trace;


pub use page::{PageWindow, page_window};
pub use sort::{DEFAULT_SORT_FIELD, sort_records};
pub use trace::{QueryTraceEvent, QueryTraceSink, TracePhase};

use crate::{
    matcher::FieldFilter,
    path::FieldPath,
    query::trace::TraceContext,
    store::{IndexName, Store, StoreError},
    traits::Record,
};
use derive_more::Deref;
use serde::{Deserialize, Serialize};
use std::{any::Any, marker::PhantomData, sync::Arc};
use thiserror::Error as ThisError;

///
/// QueryError
///

#[derive(Debug, Eq, PartialEq, ThisError)]
pub enum QueryError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("output container must be a mutable vector of shared records")]
    Container,
}

///
/// Conditions
///
/// Accumulated index conditions: index name → ordered values, groups kept
/// in first-insertion order of each name.
///

#[derive(Clone, Debug, Default, Deref, Serialize, Deserialize)]
pub struct Conditions(Vec<(IndexName, Vec<String>)>);

impl Conditions {
    pub(crate) fn push(&mut self, index: IndexName, value: String) {
        if let Some((_, values)) = self.0.iter_mut().find(|(existing, _)| *existing == index) {
            values.push(value);
        } else {
            self.0.push((index, vec![value]));
        }
    }
}

///
/// ResultSet
///
/// Ordered page window plus the candidate count before pagination.
///

#[derive(Debug)]
pub struct ResultSet<R> {
    pub records: Vec<Arc<R>>,
    pub total: u32,
}

impl<R> ResultSet<R> {
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<R>> {
        self.records.iter()
    }
}

impl<R> Clone for ResultSet<R> {
    fn clone(&self) -> Self {
        Self {
            records: self.records.clone(),
            total: self.total,
        }
    }
}

///
/// Sort
///

#[derive(Clone, Debug, Default)]
enum Sort {
    #[default]
    Unsorted,
    NameDescending,
    Field(FieldPath),
}

///
/// QueryBuilder
///
/// Fluent, single-use query over one store. Configuration accumulates by
/// value; `find` consumes the builder, recomputes from current store
/// contents, and returns the windowed result with its pre-pagination
/// total. Nothing is cached between builds.
///

pub struct QueryBuilder<'a, R, S>
where
    R: Record,
    S: Store<R>,
{
    store: &'a S,
    conditions: Conditions,
    filter: FieldFilter,
    sort: Sort,
    page: u32,
    limit: u32,
    sink: Option<&'a dyn QueryTraceSink>,
    _marker: PhantomData<R>,
}

impl<'a, R, S> QueryBuilder<'a, R, S>
where
    R: Record,
    S: Store<R>,
{
    #[must_use]
    pub fn new(store: &'a S) -> Self {
        Self {
            store,
            conditions: Conditions::default(),
            filter: FieldFilter::default(),
            sort: Sort::default(),
            page: 0,
            limit: 0,
            sink: None,
            _marker: PhantomData,
        }
    }

    // ------------------------------------------------------------------
    // Configuration
    // ------------------------------------------------------------------

    /// 1-based result page; `0` means the first page.
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Page size; `0` disables windowing and returns the whole set.
    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Enable ordering by the conventional name field, descending.
    #[must_use]
    pub fn sort(mut self) -> Self {
        self.sort = Sort::NameDescending;
        self
    }

    /// Enable ascending ordering by a field path. An empty path falls back
    /// to the conventional name ordering.
    #[must_use]
    pub fn sort_by(mut self, path: impl Into<FieldPath>) -> Self {
        let path = path.into();
        self.sort = if path.is_empty() {
            Sort::NameDescending
        } else {
            Sort::Field(path)
        };
        self
    }

    /// Add one index condition. Repeatable; an empty value is ignored.
    #[must_use]
    pub fn where_index(mut self, index: IndexName, value: impl Into<String>) -> Self {
        let value = value.into();
        if !value.is_empty() {
            self.conditions.push(index, value);
        }
        self
    }

    /// Set the field filter applied alongside index conditions.
    #[must_use]
    pub fn where_field<I>(mut self, paths: I, word: impl Into<String>, fuzzy: bool) -> Self
    where
        I: IntoIterator,
        I::Item: Into<FieldPath>,
    {
        self.filter = FieldFilter::new(paths, word, fuzzy);
        self
    }

    /// Inject a trace sink observing this query's phases.
    #[must_use]
    pub const fn trace(mut self, sink: &'a dyn QueryTraceSink) -> Self {
        self.sink = Some(sink);
        self
    }

    // ------------------------------------------------------------------
    // Execution
    // ------------------------------------------------------------------

    /// Run the query: combine candidates, order, and window them.
    ///
    /// Index lookup failures abort the call and discard partial work.
    pub fn find(self) -> Result<ResultSet<R>, QueryError> {
        let trace = TraceContext::new(self.sink);
        trace.emit(QueryTraceEvent::Start {
            conditioned: !self.conditions.is_empty(),
        });

        let (mut rows, fetched) = combine::gather(self.store, &self.conditions, &self.filter)?;
        trace.emit(QueryTraceEvent::Phase {
            phase: TracePhase::Access,
            rows: fetched,
        });
        trace.phase(TracePhase::Filter, rows.len());

        let total = rows.len();
        match &self.sort {
            Sort::Unsorted => {}
            Sort::NameDescending => sort_records(&mut rows, None),
            Sort::Field(path) => sort_records(&mut rows, Some(path)),
        }
        trace.phase(TracePhase::Order, rows.len());

        let window = page_window(rows.len(), self.page, self.limit);
        rows.truncate(window.stop);
        rows.drain(..window.start);
        trace.phase(TracePhase::Page, rows.len());

        trace.emit(QueryTraceEvent::Finish {
            total: total as u64,
            returned: rows.len() as u64,
        });

        Ok(ResultSet {
            records: rows,
            total: u32::try_from(total).unwrap_or(u32::MAX),
        })
    }

    /// Run the query and decode the window into a caller-supplied output
    /// container, which must be a `Vec<Arc<R>>` for this record type.
    ///
    /// On a shape mismatch nothing is written and `QueryError::Container`
    /// is returned; on success the window is appended and the
    /// pre-pagination total returned.
    pub fn find_into(self, out: &mut dyn Any) -> Result<u32, QueryError>
    where
        R: 'static,
    {
        let Some(container) = out.downcast_mut::<Vec<Arc<R>>>() else {
            return Err(QueryError::Container);
        };

        let result = self.find()?;
        container.extend(result.records);

        Ok(result.total)
    }
}
