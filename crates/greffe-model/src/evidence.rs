//! # Seized Evidence
//!
//! [`Evidence`] registers a seized item or exhibit under a dossier, with
//! its chain of custody. The (dossier, number) pair is unique, so exhibit
//! numbering stays coherent inside one case file.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use greffe_core::{DossierId, EvidenceId, Timestamp};

use crate::record::impl_record;

/// The kind of seized item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EvidenceKind {
    /// Exhibit (pièce à conviction).
    #[serde(rename = "PIECE_CONVICTION")]
    Exhibit,
    #[serde(rename = "DOCUMENT_SAISI")]
    SeizedDocument,
    /// Item placed under judicial sequestration.
    #[serde(rename = "OBJET_SEQUESTRE")]
    SequesteredObject,
    #[serde(rename = "PREUVE_MATERIELLE")]
    PhysicalProof,
    #[serde(rename = "AUTRE")]
    Other,
}

impl EvidenceKind {
    /// The fixed wire code.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Exhibit => "PIECE_CONVICTION",
            Self::SeizedDocument => "DOCUMENT_SAISI",
            Self::SequesteredObject => "OBJET_SEQUESTRE",
            Self::PhysicalProof => "PREUVE_MATERIELLE",
            Self::Other => "AUTRE",
        }
    }
}

impl std::fmt::Display for EvidenceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_code())
    }
}

/// A seized item registered under a dossier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Evidence {
    /// Unique identifier, assigned at creation.
    pub id: EvidenceId,
    /// When the record was created.
    pub created_at: Timestamp,
    /// When the record was last written.
    pub modified_at: Timestamp,
    /// Soft-delete convention flag.
    pub active: bool,
    pub dossier: DossierId,
    /// Exhibit number, unique within the dossier.
    pub number: String,
    pub kind: EvidenceKind,
    pub description: String,
    pub seized_on: NaiveDate,
    /// Officer or unit that performed the seizure.
    pub seized_by: String,
    #[serde(default)]
    pub storage_location: Option<String>,
    /// Chain-of-custody log, free text.
    #[serde(default)]
    pub custody_chain: String,
    /// Whether the item has been produced at a hearing.
    #[serde(default)]
    pub produced_in_court: bool,
}

impl_record!(Evidence, EvidenceId, "evidence");

/// Write payload for creating or replacing an [`Evidence`] record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewEvidence {
    pub dossier: DossierId,
    pub number: String,
    pub kind: EvidenceKind,
    pub description: String,
    pub seized_on: NaiveDate,
    pub seized_by: String,
    #[serde(default)]
    pub storage_location: Option<String>,
    #[serde(default)]
    pub custody_chain: String,
    #[serde(default)]
    pub produced_in_court: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evidence_kind_codes() {
        assert_eq!(EvidenceKind::Exhibit.as_code(), "PIECE_CONVICTION");
        let parsed: EvidenceKind = serde_json::from_str("\"OBJET_SEQUESTRE\"").unwrap();
        assert_eq!(parsed, EvidenceKind::SequesteredObject);
    }

    #[test]
    fn test_minimal_payload() {
        let raw = format!(
            r#"{{
                "dossier": "{}",
                "number": "SC-001",
                "kind": "DOCUMENT_SAISI",
                "description": "Registre comptable 2024",
                "seized_on": "2025-02-11",
                "seized_by": "OPJ Kouadio, brigade financière"
            }}"#,
            DossierId::new().as_uuid()
        );
        let parsed: NewEvidence = serde_json::from_str(&raw).unwrap();
        assert!(!parsed.produced_in_court);
        assert!(parsed.storage_location.is_none());
    }
}
