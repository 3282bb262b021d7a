//! One generic engine instance per record kind.
//!
//! A [`Namespace`] pairs an [`IdentifierIssuer`] with a [`RecordStore`] and
//! exposes them through the kind's typed ID. The four contract facades are
//! all instantiations of this one engine -- issuance, keyed reads and
//! writes, and terminal deletion behave identically across kinds; only the
//! record type, access rules, and lifecycle functions differ, and those
//! live in the facade layer.

use galaxy_types::RecordKind;

use crate::error::StateError;
use crate::issuer::IdentifierIssuer;
use crate::store::RecordStore;

/// The keyed-state engine for one record kind.
///
/// `I` is the kind's typed identifier (a `u64` newtype), `V` the record
/// struct. A namespace owns its own counter and storage: constructing a
/// fresh set of namespaces yields a fully independent engine instance with
/// no ambient global state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace<I, V> {
    issuer: IdentifierIssuer,
    store: RecordStore<V>,
    _id: core::marker::PhantomData<I>,
}

impl<I, V> Namespace<I, V>
where
    I: From<u64> + Into<u64> + Copy,
{
    /// Create an empty namespace for the given kind.
    pub const fn new(kind: RecordKind) -> Self {
        Self {
            issuer: IdentifierIssuer::new(kind),
            store: RecordStore::new(kind),
            _id: core::marker::PhantomData,
        }
    }

    /// Allocate the next ID and store `value` under it.
    ///
    /// The returned ID is the previous maximum for this kind plus 1, and
    /// the record is immediately retrievable with exactly the supplied
    /// fields.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::IdExhausted`] if the ID counter overflows.
    pub fn issue(&mut self, value: V) -> Result<I, StateError> {
        let id = self.issuer.next()?;
        self.store.put(id, value);
        Ok(I::from(id))
    }

    /// Read the record under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::NotFound`] if no record exists under `id`.
    pub fn get(&self, id: I) -> Result<&V, StateError> {
        self.store.get(id.into())
    }

    /// Replace the record under `id` wholesale.
    ///
    /// The write is unconditional; facades read first when existence is a
    /// precondition.
    pub fn put(&mut self, id: I, value: V) {
        self.store.put(id.into(), value);
    }

    /// Remove and return the record under `id`, if any. Terminal: the ID
    /// is never reissued.
    pub fn delete(&mut self, id: I) -> Option<V> {
        self.store.delete(id.into())
    }

    /// Return whether a record exists under `id`.
    pub fn exists(&self, id: I) -> bool {
        self.store.exists(id.into())
    }

    /// Return the number of live records.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Return whether the namespace holds no records.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Return the highest ID ever issued (0 if none).
    pub const fn last_issued(&self) -> u64 {
        self.issuer.last()
    }

    /// Return the record kind this namespace serves.
    pub const fn kind(&self) -> RecordKind {
        self.store.kind()
    }
}
