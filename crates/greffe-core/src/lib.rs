//! # greffe-core — Foundational Types for the Greffe Stack
//!
//! This crate is the bedrock of the Greffe Stack. It defines the primitives
//! every other crate in the workspace builds on; it depends on nothing
//! internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for record identifiers.** `CourtId`, `DossierId`,
//!    `MagistrateId`, … — one newtype per entity kind. You cannot pass a
//!    `PartyId` where a `LawyerId` is expected, so foreign keys are checked
//!    against the right table by construction.
//!
//! 2. **UTC-only timestamps.** The [`Timestamp`] type enforces UTC with Z
//!    suffix and seconds precision, so the wire rendering of every
//!    `created_at`/`modified_at` is deterministic.
//!
//! 3. **One structured error taxonomy.** [`RegistryError`] carries enough
//!    context (entity, field, constraint) to identify the offending write
//!    without string-parsing the message.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `greffe-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod error;
pub mod id;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use error::RegistryError;
pub use id::{
    AlternativeId, AppealId, AssignmentId, AttachmentId, CalendarId, CaseNatureId, CasePartyId,
    CourtId, DecisionId, DismissalId, DossierId, EvidenceId, FeeId, HearingId, InvestigationId,
    LawyerId, MagistrateId, NoteId, OfficeId, PartyId, RequisitionId, UserId,
};
pub use temporal::Timestamp;
