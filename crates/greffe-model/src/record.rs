//! # Record — Shared Lifecycle Envelope
//!
//! Every registry entity carries the same envelope: an immutable identifier
//! assigned at creation, creation/modification timestamps maintained by the
//! store, and a soft-delete flag that defaults to true. Rather than repeat
//! accessors on twenty structs, the envelope is factored once as a trait.
//!
//! The `active` flag is a stored convention: no query path filters on it
//! and deletes are hard deletes with protect/cascade/null semantics.

use greffe_core::Timestamp;

/// The lifecycle envelope common to every registry entity.
pub trait Record {
    /// The typed identifier for this entity kind.
    type Id: Copy + Eq + std::hash::Hash + std::fmt::Display;

    /// Stable entity-kind name used in error context and log fields.
    const KIND: &'static str;

    /// The record's identifier.
    fn id(&self) -> Self::Id;

    /// When the record was created.
    fn created_at(&self) -> Timestamp;

    /// When the record was last written.
    fn modified_at(&self) -> Timestamp;

    /// Soft-delete convention flag.
    fn is_active(&self) -> bool;

    /// Refresh `modified_at` after a write.
    fn touch(&mut self, at: Timestamp);
}

/// Implement [`Record`] for an entity struct with the conventional
/// `id`/`created_at`/`modified_at`/`active` fields.
macro_rules! impl_record {
    ($ty:ty, $id:ty, $kind:literal) => {
        impl $crate::record::Record for $ty {
            type Id = $id;
            const KIND: &'static str = $kind;

            fn id(&self) -> $id {
                self.id
            }

            fn created_at(&self) -> greffe_core::Timestamp {
                self.created_at
            }

            fn modified_at(&self) -> greffe_core::Timestamp {
                self.modified_at
            }

            fn is_active(&self) -> bool {
                self.active
            }

            fn touch(&mut self, at: greffe_core::Timestamp) {
                self.modified_at = at;
            }
        }
    };
}

pub(crate) use impl_record;
