//! Keyed record storage for one namespace.
//!
//! A [`RecordStore`] is a plain ordered mapping from numeric ID to record
//! value. Reads of missing keys signal [`StateError::NotFound`]; writes and
//! deletes are unconditional -- existence preconditions belong to the
//! contract facades, not here. Insertion order is irrelevant to
//! correctness; `BTreeMap` is used for deterministic iteration.

use std::collections::BTreeMap;

use galaxy_types::RecordKind;

use crate::error::StateError;

/// Keyed mapping from record ID to record value for a single kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordStore<V> {
    /// The namespace this store belongs to (used in error values).
    kind: RecordKind,

    /// The records, keyed by issued ID.
    records: BTreeMap<u64, V>,
}

impl<V> RecordStore<V> {
    /// Create an empty store for the given kind.
    pub const fn new(kind: RecordKind) -> Self {
        Self {
            kind,
            records: BTreeMap::new(),
        }
    }

    /// Insert or overwrite the record under `id`.
    pub fn put(&mut self, id: u64, value: V) {
        self.records.insert(id, value);
    }

    /// Read the record under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::NotFound`] if no record exists under `id`.
    pub fn get(&self, id: u64) -> Result<&V, StateError> {
        self.records.get(&id).ok_or(StateError::NotFound {
            kind: self.kind,
            id,
        })
    }

    /// Remove and return the record under `id`, if any.
    pub fn delete(&mut self, id: u64) -> Option<V> {
        self.records.remove(&id)
    }

    /// Return whether a record exists under `id`.
    pub fn exists(&self, id: u64) -> bool {
        self.records.contains_key(&id)
    }

    /// Return the number of live records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Return whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Return the namespace this store belongs to.
    pub const fn kind(&self) -> RecordKind {
        self.kind
    }
}
