//! # greffe-registry — Schema & Constraint Layer
//!
//! An atomic in-process relational store over the case-registry entities.
//! Every mutating operation runs inside a single write-lock scope, so a
//! create observes a consistent view of its foreign keys and unique
//! indexes, and a delete applies its protect/cascade/nullify side effects
//! without interleaving.
//!
//! ## Operation contract
//!
//! One typed set of operations per entity:
//!
//! - `create_*` validates the payload, resolves every foreign key, checks
//!   unique indexes, assigns id and timestamps, and returns the stored
//!   record.
//! - `update_*` is a full-payload replace: same checks (uniqueness
//!   excludes the row itself), `created_at` and `active` preserved,
//!   `modified_at` refreshed.
//! - `delete_*` rejects with `Conflict` while protected dependents exist,
//!   then removes cascading dependents and nulls nullifying foreign keys.
//! - Point reads return clones; lists come back in insertion order
//!   (notes newest first), optionally scoped to a parent.
//!
//! The store is purely in-memory; persistence is a hosting concern.

use parking_lot::RwLock;

use greffe_core::RegistryError;
use greffe_model::{
    Alternative, AppealPath, Assignment, Attachment, Calendar, CaseNature, CaseParty, Court,
    Decision, Dismissal, Dossier, Evidence, Fee, Hearing, Investigation, Lawyer, Magistrate, Note,
    Party, ProsecutionOffice, Requisition, UserAccount,
};

mod courts;
mod dossiers;
mod judgments;
mod people;
mod proceedings;
mod prosecution;
mod records;
mod store;

use store::Table;

/// Convenience alias for registry operation results.
pub type Result<T> = std::result::Result<T, RegistryError>;

/// The full table set, guarded as one unit.
#[derive(Default)]
pub(crate) struct Tables {
    next_seq: u64,
    pub(crate) courts: Table<Court>,
    pub(crate) offices: Table<ProsecutionOffice>,
    pub(crate) users: Table<UserAccount>,
    pub(crate) magistrates: Table<Magistrate>,
    pub(crate) lawyers: Table<Lawyer>,
    pub(crate) parties: Table<Party>,
    pub(crate) natures: Table<CaseNature>,
    pub(crate) dossiers: Table<Dossier>,
    pub(crate) case_parties: Table<CaseParty>,
    pub(crate) hearings: Table<Hearing>,
    pub(crate) attachments: Table<Attachment>,
    pub(crate) notes: Table<Note>,
    pub(crate) fees: Table<Fee>,
    pub(crate) requisitions: Table<Requisition>,
    pub(crate) investigations: Table<Investigation>,
    pub(crate) dismissals: Table<Dismissal>,
    pub(crate) alternatives: Table<Alternative>,
    pub(crate) calendars: Table<Calendar>,
    pub(crate) assignments: Table<Assignment>,
    pub(crate) appeals: Table<AppealPath>,
    pub(crate) decisions: Table<Decision>,
    pub(crate) evidence: Table<Evidence>,
}

impl Tables {
    /// Next store-wide insertion sequence number.
    pub(crate) fn next_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }
}

/// The case registry. Cheap to share behind an `Arc`; all operations take
/// `&self`.
#[derive(Default)]
pub struct Registry {
    pub(crate) tables: RwLock<Tables>,
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Reject empty or whitespace-only values for a required text field.
pub(crate) fn require(
    entity: &'static str,
    field: &'static str,
    value: &str,
) -> std::result::Result<(), RegistryError> {
    if value.trim().is_empty() {
        return Err(RegistryError::validation(entity, field, "must not be empty"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_rejects_blank() {
        assert!(require("court", "name", "").is_err());
        assert!(require("court", "name", "   ").is_err());
        assert!(require("court", "name", "TGI de Thiès").is_ok());
    }

    #[test]
    fn test_sequence_is_monotonic() {
        let mut tables = Tables::default();
        let a = tables.next_seq();
        let b = tables.next_seq();
        assert!(b > a);
    }
}
