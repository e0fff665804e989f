//! # Hearings, Sitting Calendars, Staff Assignments
//!
//! [`Hearing`] is a scheduled court sitting for one dossier, presided by a
//! magistrate (who is protected from deletion while hearings reference
//! them). [`Calendar`] marks a magistrate's availability at a court on a
//! given date, unique per (date, court, magistrate). [`Assignment`] puts a
//! clerk-office staff member on a dossier.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use greffe_core::{AssignmentId, CalendarId, CourtId, DossierId, HearingId, MagistrateId, Timestamp, UserId};

use crate::record::impl_record;

/// The kind of sitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HearingKind {
    /// Oral-argument hearing.
    #[serde(rename = "PLAIDOIRIE")]
    Pleading,
    /// Pre-trial case-management hearing (mise en état).
    #[serde(rename = "MISE_EN_ETAT")]
    PreTrial,
    /// Summary-proceedings hearing (référé).
    #[serde(rename = "REFERE")]
    Summary,
    /// First-appearance hearing.
    #[serde(rename = "COMPARUTION")]
    Appearance,
    #[serde(rename = "JUGEMENT")]
    Judgment,
    /// Cause-list call (appel des causes).
    #[serde(rename = "APPEL_CAUSE")]
    CauseList,
    #[serde(rename = "DELIBERE")]
    Deliberation,
    /// Pronouncement of the decision.
    #[serde(rename = "PRONONCE")]
    Pronouncement,
    /// Adjournment hearing (renvoi).
    #[serde(rename = "RENVOI")]
    Adjournment,
}

impl HearingKind {
    /// The fixed wire code.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Pleading => "PLAIDOIRIE",
            Self::PreTrial => "MISE_EN_ETAT",
            Self::Summary => "REFERE",
            Self::Appearance => "COMPARUTION",
            Self::Judgment => "JUGEMENT",
            Self::CauseList => "APPEL_CAUSE",
            Self::Deliberation => "DELIBERE",
            Self::Pronouncement => "PRONONCE",
            Self::Adjournment => "RENVOI",
        }
    }
}

impl std::fmt::Display for HearingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_code())
    }
}

/// The lifecycle state of a hearing. Set by direct write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HearingStatus {
    #[serde(rename = "PROGRAMMEE")]
    Scheduled,
    #[serde(rename = "EN_COURS")]
    InProgress,
    #[serde(rename = "TERMINEE")]
    Finished,
    #[serde(rename = "REPORTEE")]
    Postponed,
    #[serde(rename = "ANNULEE")]
    Cancelled,
}

impl HearingStatus {
    /// The fixed wire code.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Scheduled => "PROGRAMMEE",
            Self::InProgress => "EN_COURS",
            Self::Finished => "TERMINEE",
            Self::Postponed => "REPORTEE",
            Self::Cancelled => "ANNULEE",
        }
    }
}

impl Default for HearingStatus {
    fn default() -> Self {
        Self::Scheduled
    }
}

impl std::fmt::Display for HearingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_code())
    }
}

/// A scheduled court sitting for one dossier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hearing {
    /// Unique identifier, assigned at creation.
    pub id: HearingId,
    /// When the record was created.
    pub created_at: Timestamp,
    /// When the record was last written.
    pub modified_at: Timestamp,
    /// Soft-delete convention flag.
    pub active: bool,
    pub dossier: DossierId,
    pub kind: HearingKind,
    /// Scheduled start.
    pub scheduled_at: Timestamp,
    /// Actual start, once the sitting opens.
    #[serde(default)]
    pub started_at: Option<Timestamp>,
    /// Actual end, once the sitting closes.
    #[serde(default)]
    pub ended_at: Option<Timestamp>,
    /// Courtroom.
    pub room: String,
    /// Presiding magistrate. Protects the magistrate from deletion.
    pub magistrate: MagistrateId,
    pub status: HearingStatus,
    #[serde(default)]
    pub remarks: Option<String>,
    /// Open to the public; false for in-camera sittings.
    pub public: bool,
}

impl_record!(Hearing, HearingId, "hearing");

/// Write payload for creating or replacing a [`Hearing`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewHearing {
    pub dossier: DossierId,
    pub kind: HearingKind,
    pub scheduled_at: Timestamp,
    #[serde(default)]
    pub started_at: Option<Timestamp>,
    #[serde(default)]
    pub ended_at: Option<Timestamp>,
    pub room: String,
    pub magistrate: MagistrateId,
    #[serde(default)]
    pub status: HearingStatus,
    #[serde(default)]
    pub remarks: Option<String>,
    #[serde(default = "default_true")]
    pub public: bool,
}

fn default_true() -> bool {
    true
}

/// A magistrate's availability slot at a court on a given date.
///
/// Unique per (date, court, magistrate); removed when either the court or
/// the magistrate is deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Calendar {
    /// Unique identifier, assigned at creation.
    pub id: CalendarId,
    /// When the record was created.
    pub created_at: Timestamp,
    /// When the record was last written.
    pub modified_at: Timestamp,
    /// Soft-delete convention flag.
    pub active: bool,
    pub date: NaiveDate,
    pub court: CourtId,
    pub magistrate: MagistrateId,
    /// Whether the magistrate sits that day.
    pub available: bool,
    #[serde(default)]
    pub remarks: Option<String>,
}

impl_record!(Calendar, CalendarId, "calendar");

/// Write payload for creating or replacing a [`Calendar`] slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCalendar {
    pub date: NaiveDate,
    pub court: CourtId,
    pub magistrate: MagistrateId,
    #[serde(default = "default_true")]
    pub available: bool,
    #[serde(default)]
    pub remarks: Option<String>,
}

/// Clerk-office staff function on a dossier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StaffRole {
    /// Clerk (greffier).
    #[serde(rename = "GREFFIER")]
    Clerk,
    /// Chief clerk.
    #[serde(rename = "GREFFIER_CHEF")]
    ChiefClerk,
    #[serde(rename = "SECRETAIRE")]
    Secretary,
    /// Bailiff (huissier).
    #[serde(rename = "HUISSIER")]
    Bailiff,
    #[serde(rename = "AUTRE")]
    Other,
}

impl StaffRole {
    /// The fixed wire code.
    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Clerk => "GREFFIER",
            Self::ChiefClerk => "GREFFIER_CHEF",
            Self::Secretary => "SECRETAIRE",
            Self::Bailiff => "HUISSIER",
            Self::Other => "AUTRE",
        }
    }
}

impl std::fmt::Display for StaffRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_code())
    }
}

/// A staff member's assignment to a dossier. Removed when either the
/// dossier or the assignee's account is deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    /// Unique identifier, assigned at creation.
    pub id: AssignmentId,
    /// When the record was created.
    pub created_at: Timestamp,
    /// When the record was last written.
    pub modified_at: Timestamp,
    /// Soft-delete convention flag.
    pub active: bool,
    pub dossier: DossierId,
    /// The assigned staff member's account.
    pub assignee: UserId,
    pub role: StaffRole,
    pub assigned_on: NaiveDate,
    #[serde(default)]
    pub remarks: Option<String>,
}

impl_record!(Assignment, AssignmentId, "assignment");

/// Write payload for creating or replacing an [`Assignment`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAssignment {
    pub dossier: DossierId,
    pub assignee: UserId,
    pub role: StaffRole,
    pub assigned_on: NaiveDate,
    #[serde(default)]
    pub remarks: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hearing_kind_codes() {
        assert_eq!(HearingKind::CauseList.as_code(), "APPEL_CAUSE");
        assert_eq!(HearingKind::Summary.as_code(), "REFERE");
        let parsed: HearingKind = serde_json::from_str("\"PRONONCE\"").unwrap();
        assert_eq!(parsed, HearingKind::Pronouncement);
    }

    #[test]
    fn test_hearing_defaults_public_and_scheduled() {
        let raw = format!(
            r#"{{
                "dossier": "{}",
                "kind": "PLAIDOIRIE",
                "scheduled_at": "2025-06-02T09:00:00Z",
                "room": "Salle 3",
                "magistrate": "{}"
            }}"#,
            DossierId::new().as_uuid(),
            MagistrateId::new().as_uuid()
        );
        let parsed: NewHearing = serde_json::from_str(&raw).unwrap();
        assert!(parsed.public);
        assert_eq!(parsed.status, HearingStatus::Scheduled);
    }

    #[test]
    fn test_calendar_defaults_available() {
        let raw = format!(
            r#"{{"date": "2025-06-02", "court": "{}", "magistrate": "{}"}}"#,
            CourtId::new().as_uuid(),
            MagistrateId::new().as_uuid()
        );
        let parsed: NewCalendar = serde_json::from_str(&raw).unwrap();
        assert!(parsed.available);
    }

    #[test]
    fn test_staff_role_codes() {
        assert_eq!(StaffRole::ChiefClerk.to_string(), "GREFFIER_CHEF");
        assert_eq!(StaffRole::Bailiff.as_code(), "HUISSIER");
    }
}
