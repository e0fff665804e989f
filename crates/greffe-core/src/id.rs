//! # Record Identifier Newtypes
//!
//! Newtype wrappers for every entity identifier in the registry. These
//! prevent accidental identifier confusion — you cannot pass a `DossierId`
//! where a `HearingId` is expected, so a foreign key can only be resolved
//! against the table it actually points at.
//!
//! Identifiers are random UUIDv4, assigned once at creation and immutable
//! thereafter. The `Display` form prefixes the entity kind
//! (e.g. `dossier:550e8400-…`) for unambiguous log lines.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! declare_id {
    ($(#[$doc:meta])* $name:ident, $prefix:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Generate a new random identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Access the inner UUID.
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!($prefix, ":{}"), self.0)
            }
        }
    };
}

declare_id!(
    /// Identifier for a court (judicial venue).
    CourtId, "court"
);
declare_id!(
    /// Identifier for a prosecution office (parquet).
    OfficeId, "office"
);
declare_id!(
    /// Identifier for a person account.
    UserId, "user"
);
declare_id!(
    /// Identifier for a magistrate.
    MagistrateId, "magistrate"
);
declare_id!(
    /// Identifier for a lawyer.
    LawyerId, "lawyer"
);
declare_id!(
    /// Identifier for a party to proceedings.
    PartyId, "party"
);
declare_id!(
    /// Identifier for a case-nature taxonomy entry.
    CaseNatureId, "nature"
);
declare_id!(
    /// Identifier for a dossier (case file).
    DossierId, "dossier"
);
declare_id!(
    /// Identifier for a party-in-case join record.
    CasePartyId, "case-party"
);
declare_id!(
    /// Identifier for a hearing.
    HearingId, "hearing"
);
declare_id!(
    /// Identifier for a document attachment.
    AttachmentId, "attachment"
);
declare_id!(
    /// Identifier for a dossier note.
    NoteId, "note"
);
declare_id!(
    /// Identifier for a court fee.
    FeeId, "fee"
);
declare_id!(
    /// Identifier for a prosecution requisition.
    RequisitionId, "requisition"
);
declare_id!(
    /// Identifier for an investigation procedure.
    InvestigationId, "investigation"
);
declare_id!(
    /// Identifier for a case dismissal record.
    DismissalId, "dismissal"
);
declare_id!(
    /// Identifier for an alternative-to-prosecution record.
    AlternativeId, "alternative"
);
declare_id!(
    /// Identifier for a magistrate availability slot.
    CalendarId, "calendar"
);
declare_id!(
    /// Identifier for a staff assignment.
    AssignmentId, "assignment"
);
declare_id!(
    /// Identifier for an appeal path.
    AppealId, "appeal"
);
declare_id!(
    /// Identifier for a decision.
    DecisionId, "decision"
);
declare_id!(
    /// Identifier for an evidence item (scellé).
    EvidenceId, "evidence"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        assert_ne!(DossierId::new(), DossierId::new());
    }

    #[test]
    fn test_display_carries_kind_prefix() {
        let id = CourtId::new();
        let rendered = id.to_string();
        assert!(rendered.starts_with("court:"), "got: {rendered}");
        assert!(rendered.contains(&id.as_uuid().to_string()));
    }

    #[test]
    fn test_serde_roundtrip() {
        let id = EvidenceId::new();
        let json = serde_json::to_string(&id).unwrap();
        let parsed: EvidenceId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_serializes_as_bare_uuid() {
        let id = NoteId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id.as_uuid()));
    }
}
