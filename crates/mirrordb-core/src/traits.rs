use crate::value::Value;

///
/// FieldValues
///
/// Per-record-type field capability: expose named fields as runtime values.
/// Field names are matched exactly and case-sensitively. Returning `None`
/// for an unknown name is the normal path, not an error.
///
/// Implemented once per concrete record type; the engine never assumes any
/// schema beyond this trait.
///

pub trait FieldValues {
    fn get_value(&self, field: &str) -> Option<Value<'_>>;
}

///
/// RecordIdentity
///
/// Stable logical identity of a record within its collection. Keyed store
/// lookup and candidate-set intersection both operate on this key, so two
/// copies of the same logical entity always compare equal.
///

pub trait RecordIdentity {
    fn record_key(&self) -> String;
}

///
/// Record
///
/// The full record contract the engine requires: field access plus logical
/// identity, shareable across threads.
///

pub trait Record: FieldValues + RecordIdentity + Send + Sync {}

impl<T> Record for T where T: FieldValues + RecordIdentity + Send + Sync {}
