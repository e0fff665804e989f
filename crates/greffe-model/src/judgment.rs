//! # Decisions and Appeal Paths
//!
//! [`Decision`] is the ruling that closes a dossier's instance: one per
//! dossier, with a registry-wide unique decision number. [`AppealPath`]
//! links the decided dossier to the new dossier opened for its review, so
//! a case's full procedural history is walkable in both directions.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use greffe_core::{AppealId, CourtId, DecisionId, DossierId, Timestamp};

use crate::record::impl_record;

/// The form a ruling takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DecisionKind {
    /// First-instance judgment.
    #[serde(rename = "JUGEMENT")]
    Judgment,
    /// Appellate ruling (arrêt).
    #[serde(rename = "ARRET")]
    AppellateRuling,
    /// Judicial order (ordonnance).
    #[serde(rename = "ORDONNANCE")]
    Order,
    /// Arbitral award.
    #[serde(rename = "SENTENCE")]
    ArbitralAward,
}

impl DecisionKind {
    /// The fixed wire code.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Judgment => "JUGEMENT",
            Self::AppellateRuling => "ARRET",
            Self::Order => "ORDONNANCE",
            Self::ArbitralAward => "SENTENCE",
        }
    }
}

impl std::fmt::Display for DecisionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_code())
    }
}

/// Which way the ruling went.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RulingSense {
    /// Claim granted.
    #[serde(rename = "ACCUEIL")]
    Granted,
    /// Claim denied.
    #[serde(rename = "REJET")]
    Denied,
    #[serde(rename = "PARTIEL")]
    Partial,
    /// Claimant withdrew before ruling.
    #[serde(rename = "DESISTEMENT")]
    Withdrawn,
    #[serde(rename = "IRRECEVABLE")]
    Inadmissible,
}

impl RulingSense {
    /// The fixed wire code.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Granted => "ACCUEIL",
            Self::Denied => "REJET",
            Self::Partial => "PARTIEL",
            Self::Withdrawn => "DESISTEMENT",
            Self::Inadmissible => "IRRECEVABLE",
        }
    }
}

impl std::fmt::Display for RulingSense {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_code())
    }
}

/// The ruling closing a dossier's instance.
///
/// One per dossier; the decision number is unique registry-wide.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Decision {
    /// Unique identifier, assigned at creation.
    pub id: DecisionId,
    /// When the record was created.
    pub created_at: Timestamp,
    /// When the record was last written.
    pub modified_at: Timestamp,
    /// Soft-delete convention flag.
    pub active: bool,
    /// The decided dossier, one-to-one unique.
    pub dossier: DossierId,
    pub kind: DecisionKind,
    /// Decision number, unique across the registry.
    pub number: String,
    /// Date of deliberation.
    pub ruled_on: NaiveDate,
    /// Date of public reading, when read.
    #[serde(default)]
    pub read_on: Option<NaiveDate>,
    pub sense: RulingSense,
    /// Operative part (dispositif).
    pub holding: String,
    /// Statement of reasons (motifs).
    pub reasons: String,
    /// Rendered after hearing both sides (contradictoire), as opposed to
    /// by default.
    pub adversarial: bool,
    /// Carries immediate enforceability (exécution provisoire).
    pub enforceable: bool,
}

impl_record!(Decision, DecisionId, "decision");

/// Write payload for creating or replacing a [`Decision`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewDecision {
    pub dossier: DossierId,
    pub kind: DecisionKind,
    pub number: String,
    pub ruled_on: NaiveDate,
    #[serde(default)]
    pub read_on: Option<NaiveDate>,
    pub sense: RulingSense,
    pub holding: String,
    pub reasons: String,
    #[serde(default = "default_true")]
    pub adversarial: bool,
    #[serde(default)]
    pub enforceable: bool,
}

fn default_true() -> bool {
    true
}

/// The kind of recourse against a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AppealKind {
    /// Ordinary appeal.
    #[serde(rename = "APPEL")]
    Appeal,
    /// Final appeal before the supreme court (pourvoi en cassation).
    #[serde(rename = "POURVOI_CASSATION")]
    Cassation,
    /// Opposition to a default judgment.
    #[serde(rename = "OPPOSITION")]
    Opposition,
    /// Third-party opposition (tierce opposition).
    #[serde(rename = "TIERCE_OPPOSITION")]
    ThirdPartyOpposition,
    /// Application for revision.
    #[serde(rename = "RECOURS_REVISION")]
    Revision,
}

impl AppealKind {
    /// The fixed wire code.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Appeal => "APPEL",
            Self::Cassation => "POURVOI_CASSATION",
            Self::Opposition => "OPPOSITION",
            Self::ThirdPartyOpposition => "TIERCE_OPPOSITION",
            Self::Revision => "RECOURS_REVISION",
        }
    }
}

impl std::fmt::Display for AppealKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_code())
    }
}

/// Lifecycle state of a recourse. Set by direct write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AppealStatus {
    /// Lodged (formé).
    #[serde(rename = "FORME")]
    Lodged,
    #[serde(rename = "INSTRUIT")]
    UnderReview,
    #[serde(rename = "ADMIS")]
    Admitted,
    #[serde(rename = "REJETE")]
    Rejected,
    #[serde(rename = "IRRECEVABLE")]
    Inadmissible,
    /// Appellant withdrew.
    #[serde(rename = "DESISTEMENT")]
    Withdrawn,
}

impl AppealStatus {
    /// The fixed wire code.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Lodged => "FORME",
            Self::UnderReview => "INSTRUIT",
            Self::Admitted => "ADMIS",
            Self::Rejected => "REJETE",
            Self::Inadmissible => "IRRECEVABLE",
            Self::Withdrawn => "DESISTEMENT",
        }
    }
}

impl Default for AppealStatus {
    fn default() -> Self {
        Self::Lodged
    }
}

impl std::fmt::Display for AppealStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_code())
    }
}

/// A recourse linking a decided dossier to its review dossier.
///
/// The appeal dossier carries at most one path (a dossier can be the
/// review of only one original); the original may be appealed several
/// times, e.g. an opposition then a cassation. The appellate court is
/// protected from deletion while referenced. Deleting either dossier
/// removes the path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppealPath {
    /// Unique identifier, assigned at creation.
    pub id: AppealId,
    /// When the record was created.
    pub created_at: Timestamp,
    /// When the record was last written.
    pub modified_at: Timestamp,
    /// Soft-delete convention flag.
    pub active: bool,
    /// The dossier whose decision is challenged.
    pub original_dossier: DossierId,
    /// The dossier opened for the review, one-to-one unique.
    pub appeal_dossier: DossierId,
    pub kind: AppealKind,
    /// The court seized of the recourse.
    pub appellate_court: CourtId,
    pub lodged_on: NaiveDate,
    pub status: AppealStatus,
    /// Grounds of appeal (moyens).
    pub grounds: String,
}

impl_record!(AppealPath, AppealId, "appeal_path");

/// Write payload for creating or replacing an [`AppealPath`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAppealPath {
    pub original_dossier: DossierId,
    pub appeal_dossier: DossierId,
    pub kind: AppealKind,
    pub appellate_court: CourtId,
    pub lodged_on: NaiveDate,
    #[serde(default)]
    pub status: AppealStatus,
    pub grounds: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decision_kind_codes() {
        assert_eq!(DecisionKind::AppellateRuling.as_code(), "ARRET");
        let parsed: DecisionKind = serde_json::from_str("\"SENTENCE\"").unwrap();
        assert_eq!(parsed, DecisionKind::ArbitralAward);
    }

    #[test]
    fn test_ruling_sense_codes() {
        assert_eq!(RulingSense::Granted.as_code(), "ACCUEIL");
        assert_eq!(RulingSense::Inadmissible.to_string(), "IRRECEVABLE");
    }

    #[test]
    fn test_appeal_defaults_lodged() {
        let raw = format!(
            r#"{{
                "original_dossier": "{}",
                "appeal_dossier": "{}",
                "kind": "APPEL",
                "appellate_court": "{}",
                "lodged_on": "2025-07-01",
                "grounds": "Violation de la loi"
            }}"#,
            DossierId::new().as_uuid(),
            DossierId::new().as_uuid(),
            CourtId::new().as_uuid()
        );
        let parsed: NewAppealPath = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed.status, AppealStatus::Lodged);
    }

    #[test]
    fn test_decision_defaults_adversarial() {
        let raw = format!(
            r#"{{
                "dossier": "{}",
                "kind": "JUGEMENT",
                "number": "J-2025-118",
                "ruled_on": "2025-06-20",
                "sense": "REJET",
                "holding": "Déboute le demandeur.",
                "reasons": "Attendu que la créance n'est pas établie."
            }}"#,
            DossierId::new().as_uuid()
        );
        let parsed: NewDecision = serde_json::from_str(&raw).unwrap();
        assert!(parsed.adversarial);
        assert!(!parsed.enforceable);
    }
}
