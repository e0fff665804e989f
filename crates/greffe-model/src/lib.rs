//! # greffe-model — Entity Definitions for the Greffe Stack
//!
//! The relational data model of the case registry: ~20 entity types
//! connected by foreign-key and one-to-one relationships, each carrying the
//! common lifecycle envelope (identifier, creation/modification timestamps,
//! active flag) factored as the [`Record`] trait.
//!
//! ## Conventions
//!
//! - Every entity struct is the *stored* shape (envelope + domain fields);
//!   its `New*` companion is the client write payload (domain fields only).
//!   Creation and full-replace updates share the same payload type.
//! - Enumerated status/type/grade fields are typed code sets. The wire
//!   contract is the fixed string code (e.g. `"ENREGISTRE"`, `"URGENTE"`),
//!   carried by serde renames and `as_code()`; display labels are a
//!   presentation concern and do not exist here.
//! - Foreign keys are the typed identifier newtypes from `greffe-core`;
//!   optional relationships are `Option<…Id>`.
//! - No entity carries transition logic. Status fields are set by direct
//!   write, matching the registry's loose lifecycle contract.

pub mod court;
pub mod dossier;
pub mod evidence;
pub mod fee;
pub mod hearing;
pub mod judgment;
pub mod note;
pub mod person;
pub mod prosecution;
pub mod record;

pub use court::{Court, CourtKind, NewCourt, NewProsecutionOffice, OfficeKind, ProsecutionOffice};
pub use dossier::{
    CaseNature, CaseParty, Dossier, DossierStatus, LegalMatter, NewCaseNature, NewCaseParty,
    NewDossier, PartyRole, UrgencyLevel,
};
pub use evidence::{Evidence, EvidenceKind, NewEvidence};
pub use fee::{Fee, FeeKind, NewFee, PaymentStatus};
pub use hearing::{
    Assignment, Calendar, Hearing, HearingKind, HearingStatus, NewAssignment, NewCalendar,
    NewHearing, StaffRole,
};
pub use judgment::{
    AppealKind, AppealPath, AppealStatus, Decision, DecisionKind, NewAppealPath, NewDecision,
    RulingSense,
};
pub use note::{Attachment, AttachmentKind, NewAttachment, NewNote, Note};
pub use person::{
    BenchGrade, Lawyer, Magistrate, MagistrateKind, NewLawyer, NewMagistrate, NewParty,
    NewUserAccount, Party, ProsecutionGrade, UserAccount,
};
pub use prosecution::{
    Alternative, AlternativeKind, AlternativeStatus, Dismissal, DismissalGround, Investigation,
    InvestigationKind, InvestigationStatus, NewAlternative, NewDismissal, NewInvestigation,
    NewRequisition, Requisition, RequisitionKind,
};
pub use record::Record;
