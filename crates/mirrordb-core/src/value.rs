use crate::traits::FieldValues;
use std::{collections::BTreeMap, fmt};

///
/// Value
///
/// Runtime view of one named field on a record, borrowed from the record
/// that produced it. This is the whole vocabulary the engine understands:
/// anything a record type cannot express here is invisible to field-path
/// probing and resolves to nothing.
///

#[derive(Clone)]
pub enum Value<'a> {
    Int(i64),
    Uint(u64),
    Bool(bool),
    Text(&'a str),
    Map(&'a BTreeMap<String, String>),
    List(Vec<Value<'a>>),
    Record(&'a dyn FieldValues),
}

impl<'a> Value<'a> {
    /// Wrap a slice of sub-records as a list value.
    #[must_use]
    pub fn records<R: FieldValues>(items: &'a [R]) -> Self {
        Self::List(items.iter().map(|item| Self::Record(item)).collect())
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => f.debug_tuple("Int").field(n).finish(),
            Self::Uint(n) => f.debug_tuple("Uint").field(n).finish(),
            Self::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Map(map) => f.debug_tuple("Map").field(map).finish(),
            Self::List(items) => f.debug_tuple("List").field(items).finish(),
            Self::Record(_) => f.write_str("Record(..)"),
        }
    }
}
