//! # People — Accounts, Magistrates, Lawyers, Parties
//!
//! [`UserAccount`] is the person-account table the rest of the registry
//! hangs off: magistrates and lawyers link to exactly one account,
//! attachments and notes record an account as uploader/author, and staff
//! assignments target one.
//!
//! [`Magistrate`] carries a bench/prosecution/seconded discriminator and at
//! most one grade, drawn from the bench set or the prosecution set. The
//! grade sets are mutually exclusive: the registry rejects a bench
//! magistrate with a prosecution grade, a prosecution magistrate with a
//! bench grade, and anyone carrying both at once.
//!
//! [`Party`] is a natural or legal person appearing in proceedings; the
//! `is_legal_entity` flag switches which name fields are meaningful.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use greffe_core::{CourtId, LawyerId, MagistrateId, OfficeId, PartyId, Timestamp, UserId};

use crate::record::impl_record;

/// A person account referenced by magistrates, lawyers, uploaders,
/// note authors and staff assignments. Username is unique.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAccount {
    /// Unique identifier, assigned at creation.
    pub id: UserId,
    /// When the record was created.
    pub created_at: Timestamp,
    /// When the record was last written.
    pub modified_at: Timestamp,
    /// Soft-delete convention flag.
    pub active: bool,
    /// Login name, unique across the registry.
    pub username: String,
    /// Display name.
    pub full_name: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl_record!(UserAccount, UserId, "user_account");

/// Write payload for creating or replacing a [`UserAccount`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUserAccount {
    pub username: String,
    pub full_name: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// The side of the judiciary a magistrate sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MagistrateKind {
    /// Bench magistrate (siège) — adjudicates.
    #[serde(rename = "SIEGE")]
    Bench,
    /// Prosecution magistrate (parquet).
    #[serde(rename = "PARQUET")]
    Prosecution,
    /// Seconded magistrate.
    #[serde(rename = "DETACHE")]
    Seconded,
}

impl MagistrateKind {
    /// The fixed wire code.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Bench => "SIEGE",
            Self::Prosecution => "PARQUET",
            Self::Seconded => "DETACHE",
        }
    }
}

impl std::fmt::Display for MagistrateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_code())
    }
}

/// Grades available to bench magistrates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BenchGrade {
    #[serde(rename = "PRESIDENT_TJ")]
    CourtPresident,
    #[serde(rename = "VICE_PRESIDENT")]
    VicePresident,
    #[serde(rename = "PRESIDENT_CHAMBRE")]
    ChamberPresident,
    #[serde(rename = "JUGE")]
    Judge,
    /// Investigating judge (juge d'instruction).
    #[serde(rename = "JUGE_INSTRUCTION")]
    InvestigatingJudge,
    /// Juvenile judge.
    #[serde(rename = "JUGE_ENFANTS")]
    JuvenileJudge,
    /// Sentence-enforcement judge.
    #[serde(rename = "JUGE_APPLICATION_PEINES")]
    SentencingJudge,
}

impl BenchGrade {
    /// The fixed wire code.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::CourtPresident => "PRESIDENT_TJ",
            Self::VicePresident => "VICE_PRESIDENT",
            Self::ChamberPresident => "PRESIDENT_CHAMBRE",
            Self::Judge => "JUGE",
            Self::InvestigatingJudge => "JUGE_INSTRUCTION",
            Self::JuvenileJudge => "JUGE_ENFANTS",
            Self::SentencingJudge => "JUGE_APPLICATION_PEINES",
        }
    }
}

impl std::fmt::Display for BenchGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_code())
    }
}

/// Grades available to prosecution magistrates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProsecutionGrade {
    #[serde(rename = "PROCUREUR_GENERAL")]
    ProsecutorGeneral,
    #[serde(rename = "AVOCAT_GENERAL")]
    AdvocateGeneral,
    #[serde(rename = "PROCUREUR_REPUBLIQUE")]
    PublicProsecutor,
    #[serde(rename = "VICE_PROCUREUR")]
    ViceProsecutor,
    /// Deputy prosecutor (substitut).
    #[serde(rename = "SUBSTITUT")]
    Deputy,
}

impl ProsecutionGrade {
    /// The fixed wire code.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::ProsecutorGeneral => "PROCUREUR_GENERAL",
            Self::AdvocateGeneral => "AVOCAT_GENERAL",
            Self::PublicProsecutor => "PROCUREUR_REPUBLIQUE",
            Self::ViceProsecutor => "VICE_PROCUREUR",
            Self::Deputy => "SUBSTITUT",
        }
    }
}

impl std::fmt::Display for ProsecutionGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_code())
    }
}

/// A judicial officer, bench or prosecution side.
///
/// Linked one-to-one to a person account; optionally attached to a court
/// and/or a prosecution office (both nulled when their referent is
/// deleted). A magistrate presiding over hearings is protected from
/// deletion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Magistrate {
    /// Unique identifier, assigned at creation.
    pub id: MagistrateId,
    /// When the record was created.
    pub created_at: Timestamp,
    /// When the record was last written.
    pub modified_at: Timestamp,
    /// Soft-delete convention flag.
    pub active: bool,
    /// The person account, one-to-one unique.
    pub user: UserId,
    /// Employee number, unique across the registry.
    pub employee_number: String,
    /// Bench / prosecution / seconded discriminator.
    pub kind: MagistrateKind,
    /// Court of attachment, when any.
    #[serde(default)]
    pub court: Option<CourtId>,
    /// Prosecution office of attachment, when any.
    #[serde(default)]
    pub office: Option<OfficeId>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub speciality: Option<String>,
    /// Date of appointment.
    pub appointed_on: NaiveDate,
    /// Bench grade; exclusive with `prosecution_grade`.
    #[serde(default)]
    pub bench_grade: Option<BenchGrade>,
    /// Prosecution grade; exclusive with `bench_grade`.
    #[serde(default)]
    pub prosecution_grade: Option<ProsecutionGrade>,
}

impl_record!(Magistrate, MagistrateId, "magistrate");

/// Write payload for creating or replacing a [`Magistrate`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMagistrate {
    pub user: UserId,
    pub employee_number: String,
    pub kind: MagistrateKind,
    #[serde(default)]
    pub court: Option<CourtId>,
    #[serde(default)]
    pub office: Option<OfficeId>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub speciality: Option<String>,
    pub appointed_on: NaiveDate,
    #[serde(default)]
    pub bench_grade: Option<BenchGrade>,
    #[serde(default)]
    pub prosecution_grade: Option<ProsecutionGrade>,
}

/// A lawyer, linked one-to-one to a person account. Bar-registration
/// number is unique.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lawyer {
    /// Unique identifier, assigned at creation.
    pub id: LawyerId,
    /// When the record was created.
    pub created_at: Timestamp,
    /// When the record was last written.
    pub modified_at: Timestamp,
    /// Soft-delete convention flag.
    pub active: bool,
    /// The person account, one-to-one unique.
    pub user: UserId,
    /// Bar-registration number, unique across the registry.
    pub bar_number: String,
    /// Law firm, when any.
    #[serde(default)]
    pub firm: Option<String>,
    pub phone: String,
    pub address: String,
    #[serde(default)]
    pub speciality: Option<String>,
    /// Date of oath.
    pub sworn_on: NaiveDate,
    /// Bar of registration.
    pub bar: String,
}

impl_record!(Lawyer, LawyerId, "lawyer");

/// Write payload for creating or replacing a [`Lawyer`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewLawyer {
    pub user: UserId,
    pub bar_number: String,
    #[serde(default)]
    pub firm: Option<String>,
    pub phone: String,
    pub address: String,
    #[serde(default)]
    pub speciality: Option<String>,
    pub sworn_on: NaiveDate,
    pub bar: String,
}

/// A natural or legal person appearing in proceedings.
///
/// When `is_legal_entity` is set the corporate fields (`corporate_name`,
/// `legal_form`) carry the identity and the person-name fields are
/// incidental; otherwise the reverse.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Party {
    /// Unique identifier, assigned at creation.
    pub id: PartyId,
    /// When the record was created.
    pub created_at: Timestamp,
    /// When the record was last written.
    pub modified_at: Timestamp,
    /// Soft-delete convention flag.
    pub active: bool,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub used_name: Option<String>,
    #[serde(default)]
    pub born_on: Option<NaiveDate>,
    #[serde(default)]
    pub birthplace: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    pub address: String,
    /// National or corporate identification number, when any.
    #[serde(default)]
    pub identification_number: Option<String>,
    /// Switches interpretation of the name fields.
    #[serde(default)]
    pub is_legal_entity: bool,
    /// Corporate name (raison sociale) for legal entities.
    #[serde(default)]
    pub corporate_name: Option<String>,
    /// Legal form (SARL, SAS, association, …) for legal entities.
    #[serde(default)]
    pub legal_form: Option<String>,
}

impl Party {
    /// The name under which this party appears in proceedings: the
    /// corporate name for legal entities, "first last" otherwise.
    pub fn display_name(&self) -> String {
        if self.is_legal_entity {
            self.corporate_name.clone().unwrap_or_default()
        } else {
            format!("{} {}", self.first_name, self.last_name)
        }
    }
}

impl_record!(Party, PartyId, "party");

/// Write payload for creating or replacing a [`Party`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewParty {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub used_name: Option<String>,
    #[serde(default)]
    pub born_on: Option<NaiveDate>,
    #[serde(default)]
    pub birthplace: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    pub address: String,
    #[serde(default)]
    pub identification_number: Option<String>,
    #[serde(default)]
    pub is_legal_entity: bool,
    #[serde(default)]
    pub corporate_name: Option<String>,
    #[serde(default)]
    pub legal_form: Option<String>,
}
