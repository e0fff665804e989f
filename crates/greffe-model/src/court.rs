//! # Courts and Prosecution Offices
//!
//! [`Court`] is the root entity of the registry — dossiers, appeal paths,
//! calendars, and prosecution offices all reference it, while it references
//! nothing. [`ProsecutionOffice`] (parquet) belongs to exactly one court.

use serde::{Deserialize, Serialize};

use greffe_core::{CourtId, OfficeId, Timestamp};

use crate::record::impl_record;

/// The kind of judicial venue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CourtKind {
    /// Supreme court (Cour de Cassation).
    #[serde(rename = "COUR_CASSATION")]
    Cassation,
    /// Court of appeal.
    #[serde(rename = "COUR_APPEL")]
    Appeal,
    /// First-instance high court (Tribunal de Grande Instance).
    #[serde(rename = "TGI")]
    HighCourt,
    /// Labor court.
    #[serde(rename = "TRIBUNAL_DU_TRAVAIL")]
    Labor,
    /// Commercial court.
    #[serde(rename = "TRIBUNAL_COMMERCE")]
    Commercial,
    /// Justice-of-the-peace court.
    #[serde(rename = "TRIPAIX")]
    Peace,
    /// Juvenile court.
    #[serde(rename = "TPE")]
    Juvenile,
}

impl CourtKind {
    /// The fixed wire code.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Cassation => "COUR_CASSATION",
            Self::Appeal => "COUR_APPEL",
            Self::HighCourt => "TGI",
            Self::Labor => "TRIBUNAL_DU_TRAVAIL",
            Self::Commercial => "TRIBUNAL_COMMERCE",
            Self::Peace => "TRIPAIX",
            Self::Juvenile => "TPE",
        }
    }
}

impl std::fmt::Display for CourtKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_code())
    }
}

/// A judicial venue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Court {
    /// Unique identifier, assigned at creation.
    pub id: CourtId,
    /// When the record was created.
    pub created_at: Timestamp,
    /// When the record was last written.
    pub modified_at: Timestamp,
    /// Soft-delete convention flag.
    pub active: bool,
    /// Court name.
    pub name: String,
    /// Venue kind.
    pub kind: CourtKind,
    /// Territorial jurisdiction.
    pub jurisdiction: String,
    /// Postal address.
    pub address: String,
    /// Contact phone.
    #[serde(default)]
    pub phone: Option<String>,
    /// Contact email.
    #[serde(default)]
    pub email: Option<String>,
}

impl_record!(Court, CourtId, "court");

/// Write payload for creating or replacing a [`Court`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCourt {
    pub name: String,
    pub kind: CourtKind,
    pub jurisdiction: String,
    pub address: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// The kind of prosecution office.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OfficeKind {
    /// General prosecution office (Parquet Général).
    #[serde(rename = "PARQUET_GENERAL")]
    General,
    /// Office attached to a first-instance high court.
    #[serde(rename = "PGI")]
    HighCourt,
    /// Office attached to a justice-of-the-peace court.
    #[serde(rename = "PPTP")]
    Peace,
}

impl OfficeKind {
    /// The fixed wire code.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::General => "PARQUET_GENERAL",
            Self::HighCourt => "PGI",
            Self::Peace => "PPTP",
        }
    }
}

impl std::fmt::Display for OfficeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_code())
    }
}

/// A prosecution office (parquet), attached to exactly one court.
///
/// Deleting the owning court removes its offices with it; deleting an
/// office nulls the optional references dossiers and magistrates hold to
/// it and removes its prosecution sub-records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProsecutionOffice {
    /// Unique identifier, assigned at creation.
    pub id: OfficeId,
    /// When the record was created.
    pub created_at: Timestamp,
    /// When the record was last written.
    pub modified_at: Timestamp,
    /// Soft-delete convention flag.
    pub active: bool,
    /// Office name.
    pub name: String,
    /// Office kind.
    pub kind: OfficeKind,
    /// The court this office is attached to.
    pub court: CourtId,
    /// Postal address.
    pub address: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// Territorial scope (ressort).
    pub territorial_scope: String,
    /// Specialized subject-matter scope, when any.
    #[serde(default)]
    pub subject_matter_scope: Option<String>,
}

impl_record!(ProsecutionOffice, OfficeId, "prosecution_office");

/// Write payload for creating or replacing a [`ProsecutionOffice`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProsecutionOffice {
    pub name: String,
    pub kind: OfficeKind,
    pub court: CourtId,
    pub address: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    pub territorial_scope: String,
    #[serde(default)]
    pub subject_matter_scope: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_court_kind_wire_codes() {
        assert_eq!(CourtKind::Cassation.as_code(), "COUR_CASSATION");
        assert_eq!(CourtKind::Peace.as_code(), "TRIPAIX");
        assert_eq!(
            serde_json::to_string(&CourtKind::HighCourt).unwrap(),
            "\"TGI\""
        );
        let parsed: CourtKind = serde_json::from_str("\"TPE\"").unwrap();
        assert_eq!(parsed, CourtKind::Juvenile);
    }

    #[test]
    fn test_unknown_code_rejected() {
        assert!(serde_json::from_str::<CourtKind>("\"TRIBUNAL_INCONNU\"").is_err());
    }

    #[test]
    fn test_office_kind_display_matches_code() {
        for kind in [OfficeKind::General, OfficeKind::HighCourt, OfficeKind::Peace] {
            assert_eq!(kind.to_string(), kind.as_code());
        }
    }
}
