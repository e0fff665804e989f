//! # Prosecution Acts
//!
//! The four record types a prosecution office produces on a dossier:
//! [`Requisition`] (formal demand by the parquet), [`Investigation`]
//! (police or judicial inquiry), [`Dismissal`] (classement sans suite,
//! one per dossier), and [`Alternative`] (alternative-to-prosecution
//! measure). All four reference the office and the acting magistrate and
//! are removed when the office, the magistrate, or the dossier goes away.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use greffe_core::{
    AlternativeId, DismissalId, DossierId, InvestigationId, MagistrateId, OfficeId, RequisitionId,
    Timestamp,
};

use crate::record::impl_record;

/// The kind of formal demand a requisition carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequisitionKind {
    /// Demand to prosecute.
    #[serde(rename = "POURSUITE")]
    Prosecution,
    /// Demand for a no-case finding (non-lieu).
    #[serde(rename = "NON_LIEU")]
    NoCase,
    /// Demand to dismiss.
    #[serde(rename = "CLASSEMENT")]
    Dismissal,
    /// Sentencing submission.
    #[serde(rename = "PEINE")]
    Sentencing,
    /// Demand for a safety measure.
    #[serde(rename = "MESURE_SURETE")]
    SafetyMeasure,
    /// Demand to place under formal investigation (mise en examen).
    #[serde(rename = "MISE_EXAMEN")]
    Indictment,
    /// Warrant application.
    #[serde(rename = "MANDAT")]
    Warrant,
    /// Search authorization (perquisition).
    #[serde(rename = "PERQUISITION")]
    Search,
    /// Expert-appraisal request.
    #[serde(rename = "EXPERTISE")]
    Expertise,
}

impl RequisitionKind {
    /// The fixed wire code.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Prosecution => "POURSUITE",
            Self::NoCase => "NON_LIEU",
            Self::Dismissal => "CLASSEMENT",
            Self::Sentencing => "PEINE",
            Self::SafetyMeasure => "MESURE_SURETE",
            Self::Indictment => "MISE_EXAMEN",
            Self::Warrant => "MANDAT",
            Self::Search => "PERQUISITION",
            Self::Expertise => "EXPERTISE",
        }
    }
}

impl std::fmt::Display for RequisitionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_code())
    }
}

/// A formal demand issued by the prosecution on a dossier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Requisition {
    /// Unique identifier, assigned at creation.
    pub id: RequisitionId,
    /// When the record was created.
    pub created_at: Timestamp,
    /// When the record was last written.
    pub modified_at: Timestamp,
    /// Soft-delete convention flag.
    pub active: bool,
    pub dossier: DossierId,
    /// Issuing office.
    pub office: OfficeId,
    /// Acting magistrate.
    pub magistrate: MagistrateId,
    pub kind: RequisitionKind,
    /// Text of the demand.
    pub body: String,
    pub issued_on: NaiveDate,
    /// Whether the court followed the demand.
    #[serde(default)]
    pub followed: bool,
    #[serde(default)]
    pub remarks: Option<String>,
}

impl_record!(Requisition, RequisitionId, "requisition");

/// Write payload for creating or replacing a [`Requisition`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewRequisition {
    pub dossier: DossierId,
    pub office: OfficeId,
    pub magistrate: MagistrateId,
    pub kind: RequisitionKind,
    pub body: String,
    pub issued_on: NaiveDate,
    #[serde(default)]
    pub followed: bool,
    #[serde(default)]
    pub remarks: Option<String>,
}

/// The legal frame of an inquiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvestigationKind {
    /// Preliminary inquiry.
    #[serde(rename = "PRELIMINAIRE")]
    Preliminary,
    /// Flagrant-offence inquiry.
    #[serde(rename = "FLAGRANCE")]
    Flagrancy,
    /// Letter rogatory (commission rogatoire).
    #[serde(rename = "COMMISSION_ROGATOIRE")]
    LetterRogatory,
    /// Judicial inquiry led by an investigating judge.
    #[serde(rename = "INFORMATION_JUDICIAIRE")]
    JudicialInquiry,
}

impl InvestigationKind {
    /// The fixed wire code.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Preliminary => "PRELIMINAIRE",
            Self::Flagrancy => "FLAGRANCE",
            Self::LetterRogatory => "COMMISSION_ROGATOIRE",
            Self::JudicialInquiry => "INFORMATION_JUDICIAIRE",
        }
    }
}

impl std::fmt::Display for InvestigationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_code())
    }
}

/// Lifecycle state of an inquiry. Set by direct write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvestigationStatus {
    #[serde(rename = "EN_COURS")]
    Open,
    #[serde(rename = "TERMINEE")]
    Finished,
    #[serde(rename = "SUSPENDUE")]
    Suspended,
    /// Shelved without outcome.
    #[serde(rename = "CLASSEE")]
    Shelved,
}

impl InvestigationStatus {
    /// The fixed wire code.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Open => "EN_COURS",
            Self::Finished => "TERMINEE",
            Self::Suspended => "SUSPENDUE",
            Self::Shelved => "CLASSEE",
        }
    }
}

impl Default for InvestigationStatus {
    fn default() -> Self {
        Self::Open
    }
}

impl std::fmt::Display for InvestigationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_code())
    }
}

/// An inquiry opened on a dossier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Investigation {
    /// Unique identifier, assigned at creation.
    pub id: InvestigationId,
    /// When the record was created.
    pub created_at: Timestamp,
    /// When the record was last written.
    pub modified_at: Timestamp,
    /// Soft-delete convention flag.
    pub active: bool,
    pub dossier: DossierId,
    /// Supervising office.
    pub office: OfficeId,
    /// Supervising magistrate.
    pub magistrate: MagistrateId,
    pub kind: InvestigationKind,
    /// Lead investigating officer.
    pub lead_officer: String,
    /// Investigating unit.
    pub unit: String,
    pub opened_on: NaiveDate,
    #[serde(default)]
    pub closed_on: Option<NaiveDate>,
    pub status: InvestigationStatus,
    #[serde(default)]
    pub summary: Option<String>,
}

impl_record!(Investigation, InvestigationId, "investigation");

/// Write payload for creating or replacing an [`Investigation`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewInvestigation {
    pub dossier: DossierId,
    pub office: OfficeId,
    pub magistrate: MagistrateId,
    pub kind: InvestigationKind,
    pub lead_officer: String,
    pub unit: String,
    pub opened_on: NaiveDate,
    #[serde(default)]
    pub closed_on: Option<NaiveDate>,
    #[serde(default)]
    pub status: InvestigationStatus,
    #[serde(default)]
    pub summary: Option<String>,
}

/// The legal ground for dismissing without prosecution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DismissalGround {
    #[serde(rename = "SANS_SUITE_CHARGES_INSUFFISANTES")]
    InsufficientEvidence,
    #[serde(rename = "SANS_SUITE_AUTEUR_INCONNU")]
    UnknownOffender,
    #[serde(rename = "SANS_SUITE_INFRACTION_INEXISTANTE")]
    NoOffence,
    #[serde(rename = "SANS_SUITE_AMNISTIE")]
    Amnesty,
    #[serde(rename = "SANS_SUITE_PRESCRIPTION")]
    TimeBarred,
    #[serde(rename = "SANS_SUITE_DECES")]
    OffenderDeceased,
    /// Prosecution inexpedient (opportunité des poursuites).
    #[serde(rename = "SANS_SUITE_OPPORTUNITE")]
    Inexpedient,
    #[serde(rename = "SANS_SUITE_TRANSACTION")]
    Settlement,
    #[serde(rename = "SANS_SUITE_MEDIATION")]
    Mediation,
    /// Formal warning given instead (rappel à la loi).
    #[serde(rename = "SANS_SUITE_RAPPEL_LOI")]
    FormalWarning,
}

impl DismissalGround {
    /// The fixed wire code.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::InsufficientEvidence => "SANS_SUITE_CHARGES_INSUFFISANTES",
            Self::UnknownOffender => "SANS_SUITE_AUTEUR_INCONNU",
            Self::NoOffence => "SANS_SUITE_INFRACTION_INEXISTANTE",
            Self::Amnesty => "SANS_SUITE_AMNISTIE",
            Self::TimeBarred => "SANS_SUITE_PRESCRIPTION",
            Self::OffenderDeceased => "SANS_SUITE_DECES",
            Self::Inexpedient => "SANS_SUITE_OPPORTUNITE",
            Self::Settlement => "SANS_SUITE_TRANSACTION",
            Self::Mediation => "SANS_SUITE_MEDIATION",
            Self::FormalWarning => "SANS_SUITE_RAPPEL_LOI",
        }
    }
}

impl std::fmt::Display for DismissalGround {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_code())
    }
}

/// A decision not to prosecute. At most one per dossier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dismissal {
    /// Unique identifier, assigned at creation.
    pub id: DismissalId,
    /// When the record was created.
    pub created_at: Timestamp,
    /// When the record was last written.
    pub modified_at: Timestamp,
    /// Soft-delete convention flag.
    pub active: bool,
    /// The dismissed dossier, one-to-one unique.
    pub dossier: DossierId,
    /// Deciding office.
    pub office: OfficeId,
    /// Deciding magistrate.
    pub magistrate: MagistrateId,
    pub ground: DismissalGround,
    pub decided_on: NaiveDate,
    /// Statement of reasons.
    pub reasons: String,
    /// Whether the parties were informed of the dismissal.
    #[serde(default)]
    pub parties_notified: bool,
    #[serde(default)]
    pub notified_on: Option<NaiveDate>,
}

impl_record!(Dismissal, DismissalId, "dismissal");

/// Write payload for creating or replacing a [`Dismissal`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewDismissal {
    pub dossier: DossierId,
    pub office: OfficeId,
    pub magistrate: MagistrateId,
    pub ground: DismissalGround,
    pub decided_on: NaiveDate,
    pub reasons: String,
    #[serde(default)]
    pub parties_notified: bool,
    #[serde(default)]
    pub notified_on: Option<NaiveDate>,
}

/// The kind of alternative-to-prosecution measure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlternativeKind {
    #[serde(rename = "MEDIATION_PENALE")]
    PenalMediation,
    #[serde(rename = "COMPOSITION_PENALE")]
    PenalComposition,
    /// Formal warning (rappel à la loi).
    #[serde(rename = "RAPPEL_LOI")]
    FormalWarning,
    #[serde(rename = "AVERTISSEMENT")]
    Caution,
    /// Citizenship-education course.
    #[serde(rename = "STAGE_CITOYENNETE")]
    CitizenshipCourse,
    /// Community service (travail d'intérêt général).
    #[serde(rename = "TRAVAIL_INTERET_GENERAL")]
    CommunityService,
    /// Reparation of the harm caused.
    #[serde(rename = "REPARATION")]
    Reparation,
    /// Court-ordered treatment.
    #[serde(rename = "INJONCTION_THERAPEUTIQUE")]
    TreatmentOrder,
}

impl AlternativeKind {
    /// The fixed wire code.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::PenalMediation => "MEDIATION_PENALE",
            Self::PenalComposition => "COMPOSITION_PENALE",
            Self::FormalWarning => "RAPPEL_LOI",
            Self::Caution => "AVERTISSEMENT",
            Self::CitizenshipCourse => "STAGE_CITOYENNETE",
            Self::CommunityService => "TRAVAIL_INTERET_GENERAL",
            Self::Reparation => "REPARATION",
            Self::TreatmentOrder => "INJONCTION_THERAPEUTIQUE",
        }
    }
}

impl std::fmt::Display for AlternativeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_code())
    }
}

/// Lifecycle state of an alternative measure. Set by direct write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlternativeStatus {
    #[serde(rename = "PROPOSEE")]
    Proposed,
    #[serde(rename = "ACCEPTEE")]
    Accepted,
    #[serde(rename = "REFUSEE")]
    Refused,
    #[serde(rename = "EN_COURS")]
    InProgress,
    #[serde(rename = "EXECUTEE")]
    Executed,
    #[serde(rename = "NON_EXECUTEE")]
    NotExecuted,
}

impl AlternativeStatus {
    /// The fixed wire code.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Proposed => "PROPOSEE",
            Self::Accepted => "ACCEPTEE",
            Self::Refused => "REFUSEE",
            Self::InProgress => "EN_COURS",
            Self::Executed => "EXECUTEE",
            Self::NotExecuted => "NON_EXECUTEE",
        }
    }
}

impl Default for AlternativeStatus {
    fn default() -> Self {
        Self::Proposed
    }
}

impl std::fmt::Display for AlternativeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_code())
    }
}

/// An alternative-to-prosecution measure proposed on a dossier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alternative {
    /// Unique identifier, assigned at creation.
    pub id: AlternativeId,
    /// When the record was created.
    pub created_at: Timestamp,
    /// When the record was last written.
    pub modified_at: Timestamp,
    /// Soft-delete convention flag.
    pub active: bool,
    pub dossier: DossierId,
    /// Proposing office.
    pub office: OfficeId,
    /// Proposing magistrate.
    pub magistrate: MagistrateId,
    pub kind: AlternativeKind,
    pub proposed_on: NaiveDate,
    #[serde(default)]
    pub accepted_on: Option<NaiveDate>,
    #[serde(default)]
    pub executed_on: Option<NaiveDate>,
    pub status: AlternativeStatus,
    /// Terms of the measure.
    pub terms: String,
    /// Monetary component, when any.
    #[serde(default)]
    pub amount: Option<Decimal>,
}

impl_record!(Alternative, AlternativeId, "alternative");

/// Write payload for creating or replacing an [`Alternative`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAlternative {
    pub dossier: DossierId,
    pub office: OfficeId,
    pub magistrate: MagistrateId,
    pub kind: AlternativeKind,
    pub proposed_on: NaiveDate,
    #[serde(default)]
    pub accepted_on: Option<NaiveDate>,
    #[serde(default)]
    pub executed_on: Option<NaiveDate>,
    #[serde(default)]
    pub status: AlternativeStatus,
    pub terms: String,
    #[serde(default)]
    pub amount: Option<Decimal>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requisition_kind_codes() {
        assert_eq!(RequisitionKind::NoCase.as_code(), "NON_LIEU");
        assert_eq!(RequisitionKind::Indictment.as_code(), "MISE_EXAMEN");
        let parsed: RequisitionKind = serde_json::from_str("\"PERQUISITION\"").unwrap();
        assert_eq!(parsed, RequisitionKind::Search);
    }

    #[test]
    fn test_dismissal_ground_codes() {
        assert_eq!(
            DismissalGround::InsufficientEvidence.as_code(),
            "SANS_SUITE_CHARGES_INSUFFISANTES"
        );
        assert_eq!(
            serde_json::to_string(&DismissalGround::TimeBarred).unwrap(),
            "\"SANS_SUITE_PRESCRIPTION\""
        );
    }

    #[test]
    fn test_status_defaults() {
        assert_eq!(InvestigationStatus::default(), InvestigationStatus::Open);
        assert_eq!(AlternativeStatus::default(), AlternativeStatus::Proposed);
    }

    #[test]
    fn test_alternative_kind_round_trip() {
        let parsed: AlternativeKind =
            serde_json::from_str("\"TRAVAIL_INTERET_GENERAL\"").unwrap();
        assert_eq!(parsed, AlternativeKind::CommunityService);
        assert_eq!(parsed.to_string(), "TRAVAIL_INTERET_GENERAL");
    }
}
