//! # Case Documents and Internal Notes
//!
//! [`Attachment`] records a filed or produced document inside a dossier;
//! the file itself lives outside the registry, referenced by path.
//! [`Note`] is a free-text annotation by a clerk or magistrate account.
//! Both keep a nullable account reference (uploader, author) that survives
//! the account's deletion.

use serde::{Deserialize, Serialize};

use greffe_core::{AttachmentId, DossierId, NoteId, Timestamp, UserId};

use crate::record::impl_record;

/// The kind of procedural document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttachmentKind {
    /// Writ of summons (assignation).
    #[serde(rename = "ASSIGNATION")]
    Writ,
    /// Direct summons (citation).
    #[serde(rename = "CITATION")]
    Summons,
    /// Petition (requête).
    #[serde(rename = "REQUETE")]
    Petition,
    /// Written pleadings (conclusions).
    #[serde(rename = "CONCLUSIONS")]
    Pleadings,
    /// Brief (mémoire).
    #[serde(rename = "MEMOIRE")]
    Brief,
    /// Judicial order (ordonnance).
    #[serde(rename = "ORDONNANCE")]
    Order,
    #[serde(rename = "JUGEMENT")]
    Judgment,
    /// Appellate ruling (arrêt).
    #[serde(rename = "ARRET")]
    AppellateRuling,
    /// Disclosed exhibit (pièce communiquée).
    #[serde(rename = "PIECE_COMMUNICATION")]
    Disclosure,
    #[serde(rename = "EXPERTISE")]
    ExpertReport,
    #[serde(rename = "ENQUETE")]
    InquiryReport,
    /// Conciliation minutes (procès-verbal).
    #[serde(rename = "PV_CONCILIATION")]
    ConciliationMinutes,
    #[serde(rename = "TRANSACTION")]
    Settlement,
    #[serde(rename = "APPEL")]
    NoticeOfAppeal,
    #[serde(rename = "POURVOI")]
    FinalAppeal,
    #[serde(rename = "AUTRE")]
    Other,
}

impl AttachmentKind {
    /// The fixed wire code.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Writ => "ASSIGNATION",
            Self::Summons => "CITATION",
            Self::Petition => "REQUETE",
            Self::Pleadings => "CONCLUSIONS",
            Self::Brief => "MEMOIRE",
            Self::Order => "ORDONNANCE",
            Self::Judgment => "JUGEMENT",
            Self::AppellateRuling => "ARRET",
            Self::Disclosure => "PIECE_COMMUNICATION",
            Self::ExpertReport => "EXPERTISE",
            Self::InquiryReport => "ENQUETE",
            Self::ConciliationMinutes => "PV_CONCILIATION",
            Self::Settlement => "TRANSACTION",
            Self::NoticeOfAppeal => "APPEL",
            Self::FinalAppeal => "POURVOI",
            Self::Other => "AUTRE",
        }
    }
}

impl std::fmt::Display for AttachmentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_code())
    }
}

/// A filed or produced document in a dossier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attachment {
    /// Unique identifier, assigned at creation.
    pub id: AttachmentId,
    /// When the record was created.
    pub created_at: Timestamp,
    /// When the record was last written.
    pub modified_at: Timestamp,
    /// Soft-delete convention flag.
    pub active: bool,
    pub dossier: DossierId,
    pub title: String,
    pub kind: AttachmentKind,
    /// Path of the stored file; the registry does not hold the bytes.
    pub file_path: String,
    /// Account that filed the document; nulled when the account is
    /// deleted.
    #[serde(default)]
    pub uploaded_by: Option<UserId>,
    #[serde(default)]
    pub description: Option<String>,
    /// Restricted-access marker.
    #[serde(default)]
    pub confidential: bool,
    /// Position in the dossier's exhibit bundle, free text (e.g. "12",
    /// "12 bis") when assigned.
    #[serde(default)]
    pub sequence_number: Option<String>,
}

impl_record!(Attachment, AttachmentId, "attachment");

/// Write payload for creating or replacing an [`Attachment`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAttachment {
    pub dossier: DossierId,
    pub title: String,
    pub kind: AttachmentKind,
    pub file_path: String,
    #[serde(default)]
    pub uploaded_by: Option<UserId>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub confidential: bool,
    #[serde(default)]
    pub sequence_number: Option<String>,
}

/// A free-text annotation on a dossier. Listed newest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    /// Unique identifier, assigned at creation.
    pub id: NoteId,
    /// When the record was created.
    pub created_at: Timestamp,
    /// When the record was last written.
    pub modified_at: Timestamp,
    /// Soft-delete convention flag.
    pub active: bool,
    pub dossier: DossierId,
    /// Authoring account; nulled when the account is deleted.
    #[serde(default)]
    pub author: Option<UserId>,
    pub body: String,
    /// Visible outside the clerk's office; defaults to internal.
    #[serde(default)]
    pub public: bool,
}

impl_record!(Note, NoteId, "note");

/// Write payload for creating or replacing a [`Note`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewNote {
    pub dossier: DossierId,
    #[serde(default)]
    pub author: Option<UserId>,
    pub body: String,
    #[serde(default)]
    pub public: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attachment_kind_codes() {
        assert_eq!(AttachmentKind::Writ.as_code(), "ASSIGNATION");
        assert_eq!(
            AttachmentKind::ConciliationMinutes.as_code(),
            "PV_CONCILIATION"
        );
        let parsed: AttachmentKind = serde_json::from_str("\"ARRET\"").unwrap();
        assert_eq!(parsed, AttachmentKind::AppellateRuling);
    }

    #[test]
    fn test_attachment_sequence_number_optional() {
        let raw = format!(
            r#"{{"dossier": "{}", "title": "Assignation", "kind": "ASSIGNATION",
                "file_path": "dossiers/rg-2025-0001/assignation.pdf"}}"#,
            DossierId::new().as_uuid()
        );
        let parsed: NewAttachment = serde_json::from_str(&raw).unwrap();
        assert!(parsed.sequence_number.is_none());
        assert!(!parsed.confidential);
    }

    #[test]
    fn test_note_defaults_internal() {
        let raw = format!(
            r#"{{"dossier": "{}", "body": "Vérifier la signification."}}"#,
            DossierId::new().as_uuid()
        );
        let parsed: NewNote = serde_json::from_str(&raw).unwrap();
        assert!(!parsed.public);
        assert!(parsed.author.is_none());
    }
}
