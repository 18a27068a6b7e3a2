//! Transient builders for in-progress arrays and objects.
//!
//! One builder sits on the parser's stack per open container. The object
//! half carries the key waiting for its value, so nested containers can
//! open without clobbering the parent's in-flight key.

use alloc::borrow::Cow;
use alloc::vec::Vec;

use crate::value::{Map, Value};

pub(crate) enum Builder<'a> {
    Array(Vec<Value<'a>>),
    Object {
        entries: Map<'a>,
        pending_key: Option<Cow<'a, str>>,
    },
}

impl<'a> Builder<'a> {
    pub(crate) fn array() -> Self {
        Builder::Array(Vec::new())
    }

    pub(crate) fn object() -> Self {
        Builder::Object {
            entries: Map::new(),
            pending_key: None,
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        match self {
            Builder::Array(items) => items.is_empty(),
            Builder::Object { entries, .. } => entries.is_empty(),
        }
    }

    /// Install the key the next [`add_value`](Self::add_value) stores under.
    pub(crate) fn set_key(&mut self, key: Cow<'a, str>) {
        if let Builder::Object { pending_key, .. } = self {
            *pending_key = Some(key);
        }
    }

    /// Append to an array, or insert under the pending key. A repeated key
    /// overwrites the earlier entry.
    pub(crate) fn add_value(&mut self, value: Value<'a>) {
        match self {
            Builder::Array(items) => items.push(value),
            Builder::Object {
                entries,
                pending_key,
            } => {
                debug_assert!(pending_key.is_some(), "object value completed without a key");
                if let Some(key) = pending_key.take() {
                    entries.insert(key, value);
                }
            }
        }
    }

    pub(crate) fn finish(self) -> Value<'a> {
        match self {
            Builder::Array(items) => Value::Array(Some(items)),
            Builder::Object { entries, .. } => Value::Object(Some(entries)),
        }
    }
}
