//! # Dossiers — Case Files, Natures, Case Parties
//!
//! [`Dossier`] is the hub of the registry: every proceeding record
//! (hearings, documents, notes, fees, prosecution acts, decisions, appeal
//! paths, evidence, assignments) hangs off one, and deleting a dossier
//! removes all of them with it.
//!
//! [`CaseNature`] is the typology table dossiers reference; it is
//! protected against deletion while referenced. [`CaseParty`] is the
//! through-record joining a dossier to a [`crate::Party`] with a
//! procedural role and an optional counsel.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use greffe_core::{
    CaseNatureId, CasePartyId, CourtId, DossierId, LawyerId, MagistrateId, OfficeId, PartyId,
    Timestamp,
};

use crate::record::impl_record;

/// The branch of law a case nature belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LegalMatter {
    #[serde(rename = "CIVILE")]
    Civil,
    #[serde(rename = "PENALE")]
    Criminal,
    #[serde(rename = "COMMERCIALE")]
    Commercial,
    #[serde(rename = "ADMINISTRATIVE")]
    Administrative,
    /// Labor and social-security matters.
    #[serde(rename = "SOCIALE")]
    Social,
}

impl LegalMatter {
    /// The fixed wire code.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Civil => "CIVILE",
            Self::Criminal => "PENALE",
            Self::Commercial => "COMMERCIALE",
            Self::Administrative => "ADMINISTRATIVE",
            Self::Social => "SOCIALE",
        }
    }
}

impl std::fmt::Display for LegalMatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_code())
    }
}

/// A case typology entry. Name and short code are each unique; the table
/// is protected against deletion while any dossier references it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseNature {
    /// Unique identifier, assigned at creation.
    pub id: CaseNatureId,
    /// When the record was created.
    pub created_at: Timestamp,
    /// When the record was last written.
    pub modified_at: Timestamp,
    /// Soft-delete convention flag.
    pub active: bool,
    /// Nature name, unique across the registry.
    pub name: String,
    /// Short code, unique across the registry.
    pub code: String,
    /// Branch of law.
    pub matter: LegalMatter,
    #[serde(default)]
    pub description: Option<String>,
}

impl_record!(CaseNature, CaseNatureId, "case_nature");

/// Write payload for creating or replacing a [`CaseNature`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCaseNature {
    pub name: String,
    pub code: String,
    pub matter: LegalMatter,
    #[serde(default)]
    pub description: Option<String>,
}

/// The procedural stage of a dossier. No transition graph is enforced;
/// status is set by direct write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DossierStatus {
    #[serde(rename = "ENREGISTRE")]
    Registered,
    #[serde(rename = "INSTRUCTION")]
    UnderInvestigation,
    /// Pre-trial case management (mise en état).
    #[serde(rename = "MISE_EN_ETAT")]
    PreTrial,
    #[serde(rename = "PRET_PLAIDOIRIE")]
    ReadyForPleading,
    #[serde(rename = "EN_DELIBERE")]
    Deliberation,
    #[serde(rename = "JUGE")]
    Judged,
    #[serde(rename = "CLOS")]
    Closed,
    /// Struck off the cause list.
    #[serde(rename = "RADIE")]
    StruckOff,
    /// Claimant withdrew.
    #[serde(rename = "DESISTEMENT")]
    Withdrawn,
    #[serde(rename = "APPEL")]
    OnAppeal,
    /// Final appeal before the supreme court.
    #[serde(rename = "POURVOI")]
    OnFinalAppeal,
    /// Dismissed without prosecution (classé sans suite).
    #[serde(rename = "CLASSE_SANS_SUITE")]
    Dismissed,
    /// Referred to the criminal trial court.
    #[serde(rename = "RENVOI_CORRECTIONNEL")]
    ReferredCriminal,
    /// Referred to the assize court.
    #[serde(rename = "RENVOI_ASSISES")]
    ReferredAssizes,
}

impl DossierStatus {
    /// The fixed wire code.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Registered => "ENREGISTRE",
            Self::UnderInvestigation => "INSTRUCTION",
            Self::PreTrial => "MISE_EN_ETAT",
            Self::ReadyForPleading => "PRET_PLAIDOIRIE",
            Self::Deliberation => "EN_DELIBERE",
            Self::Judged => "JUGE",
            Self::Closed => "CLOS",
            Self::StruckOff => "RADIE",
            Self::Withdrawn => "DESISTEMENT",
            Self::OnAppeal => "APPEL",
            Self::OnFinalAppeal => "POURVOI",
            Self::Dismissed => "CLASSE_SANS_SUITE",
            Self::ReferredCriminal => "RENVOI_CORRECTIONNEL",
            Self::ReferredAssizes => "RENVOI_ASSISES",
        }
    }
}

impl Default for DossierStatus {
    fn default() -> Self {
        Self::Registered
    }
}

impl std::fmt::Display for DossierStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_code())
    }
}

/// Scheduling priority of a dossier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UrgencyLevel {
    #[serde(rename = "NORMALE")]
    Normal,
    #[serde(rename = "URGENTE")]
    Urgent,
    #[serde(rename = "TRES_URGENTE")]
    VeryUrgent,
    /// Summary proceedings (référé).
    #[serde(rename = "REFERE")]
    Summary,
    /// Flagrant-offence fast track.
    #[serde(rename = "FLAGRANT_DELIT")]
    Flagrant,
}

impl UrgencyLevel {
    /// The fixed wire code.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Normal => "NORMALE",
            Self::Urgent => "URGENTE",
            Self::VeryUrgent => "TRES_URGENTE",
            Self::Summary => "REFERE",
            Self::Flagrant => "FLAGRANT_DELIT",
        }
    }
}

impl Default for UrgencyLevel {
    fn default() -> Self {
        Self::Normal
    }
}

impl std::fmt::Display for UrgencyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_code())
    }
}

/// A case file.
///
/// References a nature (protected) and a court (protected); optionally a
/// prosecution office and bench/prosecution magistrates (all nulled when
/// their referent is deleted). The registry number is unique.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dossier {
    /// Unique identifier, assigned at creation.
    pub id: DossierId,
    /// When the record was created.
    pub created_at: Timestamp,
    /// When the record was last written.
    pub modified_at: Timestamp,
    /// Soft-delete convention flag.
    pub active: bool,
    /// Registry number (numéro de rôle), unique across the registry.
    pub registry_number: String,
    /// Prosecution-office reference number, when any.
    #[serde(default)]
    pub office_number: Option<String>,
    /// Investigating-judge reference number, when any.
    #[serde(default)]
    pub investigation_number: Option<String>,
    pub title: String,
    pub subject: String,
    /// Case typology.
    pub nature: CaseNatureId,
    /// Court seized of the case.
    pub court: CourtId,
    /// Prosecution office handling the case, when any.
    #[serde(default)]
    pub office: Option<OfficeId>,
    /// Bench magistrate in charge, when assigned.
    #[serde(default)]
    pub bench_magistrate: Option<MagistrateId>,
    /// Prosecution magistrate in charge, when assigned.
    #[serde(default)]
    pub prosecution_magistrate: Option<MagistrateId>,
    /// Procedural stage.
    pub status: DossierStatus,
    /// Scheduling priority.
    pub urgency: UrgencyLevel,
    /// Date of registration at the clerk's office.
    pub registered_on: NaiveDate,
    /// Date of closure, when closed.
    #[serde(default)]
    pub closed_on: Option<NaiveDate>,
    /// Estimated processing duration in days, when any.
    #[serde(default)]
    pub estimated_days: Option<u32>,
    /// Chamber handling the case, when any.
    #[serde(default)]
    pub chamber: Option<String>,
    /// Restricted-access marker.
    #[serde(default)]
    pub confidential: bool,
}

impl_record!(Dossier, DossierId, "dossier");

/// Write payload for creating or replacing a [`Dossier`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewDossier {
    pub registry_number: String,
    #[serde(default)]
    pub office_number: Option<String>,
    #[serde(default)]
    pub investigation_number: Option<String>,
    pub title: String,
    pub subject: String,
    pub nature: CaseNatureId,
    pub court: CourtId,
    #[serde(default)]
    pub office: Option<OfficeId>,
    #[serde(default)]
    pub bench_magistrate: Option<MagistrateId>,
    #[serde(default)]
    pub prosecution_magistrate: Option<MagistrateId>,
    #[serde(default)]
    pub status: DossierStatus,
    #[serde(default)]
    pub urgency: UrgencyLevel,
    pub registered_on: NaiveDate,
    #[serde(default)]
    pub closed_on: Option<NaiveDate>,
    #[serde(default)]
    pub estimated_days: Option<u32>,
    #[serde(default)]
    pub chamber: Option<String>,
    #[serde(default)]
    pub confidential: bool,
}

/// The procedural role a party plays in a dossier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartyRole {
    #[serde(rename = "DEMANDEUR")]
    Claimant,
    #[serde(rename = "DEFENDEUR")]
    Defendant,
    #[serde(rename = "REQUERANT")]
    Petitioner,
    #[serde(rename = "INTIME")]
    Respondent,
    #[serde(rename = "APPELANT")]
    Appellant,
    #[serde(rename = "APPELE")]
    Appellee,
    #[serde(rename = "TEMOIN")]
    Witness,
    /// Civil claimant in criminal proceedings (partie civile).
    #[serde(rename = "PARTIE_CIVILE")]
    CivilParty,
    /// Person charged before the criminal trial court (prévenu).
    #[serde(rename = "PREVENU")]
    Charged,
    /// Person charged before the assize court (accusé).
    #[serde(rename = "ACCUSE")]
    Accused,
    #[serde(rename = "TIERS")]
    ThirdParty,
    #[serde(rename = "MINISTERE_PUBLIC")]
    PublicMinistry,
    #[serde(rename = "PROCUREUR")]
    Prosecutor,
    #[serde(rename = "PARTIE_POURSUIVANTE")]
    ProsecutingParty,
}

impl PartyRole {
    /// The fixed wire code.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Claimant => "DEMANDEUR",
            Self::Defendant => "DEFENDEUR",
            Self::Petitioner => "REQUERANT",
            Self::Respondent => "INTIME",
            Self::Appellant => "APPELANT",
            Self::Appellee => "APPELE",
            Self::Witness => "TEMOIN",
            Self::CivilParty => "PARTIE_CIVILE",
            Self::Charged => "PREVENU",
            Self::Accused => "ACCUSE",
            Self::ThirdParty => "TIERS",
            Self::PublicMinistry => "MINISTERE_PUBLIC",
            Self::Prosecutor => "PROCUREUR",
            Self::ProsecutingParty => "PARTIE_POURSUIVANTE",
        }
    }
}

impl std::fmt::Display for PartyRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_code())
    }
}

/// A party's involvement in a dossier.
///
/// The (dossier, party, role) triple is unique: the same person may appear
/// in several dossiers, or under several roles in one dossier, but never
/// twice under the same role. The counsel reference is nulled when the
/// lawyer is deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseParty {
    /// Unique identifier, assigned at creation.
    pub id: CasePartyId,
    /// When the record was created.
    pub created_at: Timestamp,
    /// When the record was last written.
    pub modified_at: Timestamp,
    /// Soft-delete convention flag.
    pub active: bool,
    pub dossier: DossierId,
    pub party: PartyId,
    pub role: PartyRole,
    /// Retained counsel, when any.
    #[serde(default)]
    pub lawyer: Option<LawyerId>,
    /// Date the party joined the proceedings.
    pub retained_on: NaiveDate,
    #[serde(default)]
    pub remarks: Option<String>,
}

impl_record!(CaseParty, CasePartyId, "case_party");

/// Write payload for creating or replacing a [`CaseParty`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCaseParty {
    pub dossier: DossierId,
    pub party: PartyId,
    pub role: PartyRole,
    #[serde(default)]
    pub lawyer: Option<LawyerId>,
    pub retained_on: NaiveDate,
    #[serde(default)]
    pub remarks: Option<String>,
}
