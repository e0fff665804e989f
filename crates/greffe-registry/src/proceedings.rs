//! Hearing, calendar, and staff-assignment operations.
//!
//! A hearing pins its magistrate in place: the protection is enforced on
//! the magistrate (and user-account) delete paths in `people`, not here.
//! Calendar slots are unique per (date, court, magistrate) so a
//! magistrate cannot be double-booked for the same venue and day.

use tracing::debug;

use greffe_core::{AssignmentId, CalendarId, DossierId, HearingId, MagistrateId, RegistryError, Timestamp};
use greffe_model::{
    Assignment, Calendar, Hearing, NewAssignment, NewCalendar, NewHearing, Record,
};

use crate::{require, Registry, Result, Tables};

impl Registry {
    // ─── Hearings ────────────────────────────────────────────────────────

    pub fn create_hearing(&self, new: NewHearing) -> Result<Hearing> {
        require(Hearing::KIND, "room", &new.room)?;
        let mut t = self.tables.write();
        check_hearing_refs(&t, &new)?;
        let now = Timestamp::now();
        let hearing = Hearing {
            id: HearingId::new(),
            created_at: now,
            modified_at: now,
            active: true,
            dossier: new.dossier,
            kind: new.kind,
            scheduled_at: new.scheduled_at,
            started_at: new.started_at,
            ended_at: new.ended_at,
            room: new.room,
            magistrate: new.magistrate,
            status: new.status,
            remarks: new.remarks,
            public: new.public,
        };
        let seq = t.next_seq();
        t.hearings.insert(seq, hearing.clone());
        debug!(id = %hearing.id, dossier = %hearing.dossier, "hearing created");
        Ok(hearing)
    }

    pub fn hearing(&self, id: HearingId) -> Result<Hearing> {
        self.tables
            .read()
            .hearings
            .get(&id)
            .cloned()
            .ok_or_else(|| RegistryError::not_found(Hearing::KIND, id))
    }

    /// Hearings in insertion order, optionally scoped to one dossier.
    pub fn hearings(&self, dossier: Option<DossierId>) -> Vec<Hearing> {
        self.tables
            .read()
            .hearings
            .in_order()
            .into_iter()
            .filter(|h| dossier.map_or(true, |d| h.dossier == d))
            .cloned()
            .collect()
    }

    pub fn update_hearing(&self, id: HearingId, new: NewHearing) -> Result<Hearing> {
        require(Hearing::KIND, "room", &new.room)?;
        let mut t = self.tables.write();
        let existing = t
            .hearings
            .get(&id)
            .cloned()
            .ok_or_else(|| RegistryError::not_found(Hearing::KIND, id))?;
        check_hearing_refs(&t, &new)?;
        let hearing = Hearing {
            id,
            created_at: existing.created_at,
            modified_at: Timestamp::now(),
            active: existing.active,
            dossier: new.dossier,
            kind: new.kind,
            scheduled_at: new.scheduled_at,
            started_at: new.started_at,
            ended_at: new.ended_at,
            room: new.room,
            magistrate: new.magistrate,
            status: new.status,
            remarks: new.remarks,
            public: new.public,
        };
        t.hearings.replace(hearing.clone());
        debug!(id = %id, status = %hearing.status, "hearing updated");
        Ok(hearing)
    }

    pub fn delete_hearing(&self, id: HearingId) -> Result<()> {
        let mut t = self.tables.write();
        if t.hearings.remove(&id).is_none() {
            return Err(RegistryError::not_found(Hearing::KIND, id));
        }
        debug!(id = %id, "hearing deleted");
        Ok(())
    }

    // ─── Calendars ───────────────────────────────────────────────────────

    pub fn create_calendar(&self, new: NewCalendar) -> Result<Calendar> {
        let mut t = self.tables.write();
        check_calendar_refs(&t, &new)?;
        check_calendar_slot(&t, &new, None)?;
        let now = Timestamp::now();
        let calendar = Calendar {
            id: CalendarId::new(),
            created_at: now,
            modified_at: now,
            active: true,
            date: new.date,
            court: new.court,
            magistrate: new.magistrate,
            available: new.available,
            remarks: new.remarks,
        };
        let seq = t.next_seq();
        t.calendars.insert(seq, calendar.clone());
        debug!(id = %calendar.id, date = %calendar.date, "calendar slot created");
        Ok(calendar)
    }

    pub fn calendar(&self, id: CalendarId) -> Result<Calendar> {
        self.tables
            .read()
            .calendars
            .get(&id)
            .cloned()
            .ok_or_else(|| RegistryError::not_found(Calendar::KIND, id))
    }

    /// Calendar slots in insertion order, optionally scoped to one
    /// magistrate.
    pub fn calendars(&self, magistrate: Option<MagistrateId>) -> Vec<Calendar> {
        self.tables
            .read()
            .calendars
            .in_order()
            .into_iter()
            .filter(|c| magistrate.map_or(true, |m| c.magistrate == m))
            .cloned()
            .collect()
    }

    pub fn update_calendar(&self, id: CalendarId, new: NewCalendar) -> Result<Calendar> {
        let mut t = self.tables.write();
        let existing = t
            .calendars
            .get(&id)
            .cloned()
            .ok_or_else(|| RegistryError::not_found(Calendar::KIND, id))?;
        check_calendar_refs(&t, &new)?;
        check_calendar_slot(&t, &new, Some(id))?;
        let calendar = Calendar {
            id,
            created_at: existing.created_at,
            modified_at: Timestamp::now(),
            active: existing.active,
            date: new.date,
            court: new.court,
            magistrate: new.magistrate,
            available: new.available,
            remarks: new.remarks,
        };
        t.calendars.replace(calendar.clone());
        debug!(id = %id, "calendar slot updated");
        Ok(calendar)
    }

    pub fn delete_calendar(&self, id: CalendarId) -> Result<()> {
        let mut t = self.tables.write();
        if t.calendars.remove(&id).is_none() {
            return Err(RegistryError::not_found(Calendar::KIND, id));
        }
        debug!(id = %id, "calendar slot deleted");
        Ok(())
    }

    // ─── Assignments ─────────────────────────────────────────────────────

    pub fn create_assignment(&self, new: NewAssignment) -> Result<Assignment> {
        let mut t = self.tables.write();
        check_assignment_refs(&t, &new)?;
        let now = Timestamp::now();
        let assignment = Assignment {
            id: AssignmentId::new(),
            created_at: now,
            modified_at: now,
            active: true,
            dossier: new.dossier,
            assignee: new.assignee,
            role: new.role,
            assigned_on: new.assigned_on,
            remarks: new.remarks,
        };
        let seq = t.next_seq();
        t.assignments.insert(seq, assignment.clone());
        debug!(id = %assignment.id, role = %assignment.role, "assignment created");
        Ok(assignment)
    }

    pub fn assignment(&self, id: AssignmentId) -> Result<Assignment> {
        self.tables
            .read()
            .assignments
            .get(&id)
            .cloned()
            .ok_or_else(|| RegistryError::not_found(Assignment::KIND, id))
    }

    /// Assignments in insertion order, optionally scoped to one dossier.
    pub fn assignments(&self, dossier: Option<DossierId>) -> Vec<Assignment> {
        self.tables
            .read()
            .assignments
            .in_order()
            .into_iter()
            .filter(|a| dossier.map_or(true, |d| a.dossier == d))
            .cloned()
            .collect()
    }

    pub fn update_assignment(&self, id: AssignmentId, new: NewAssignment) -> Result<Assignment> {
        let mut t = self.tables.write();
        let existing = t
            .assignments
            .get(&id)
            .cloned()
            .ok_or_else(|| RegistryError::not_found(Assignment::KIND, id))?;
        check_assignment_refs(&t, &new)?;
        let assignment = Assignment {
            id,
            created_at: existing.created_at,
            modified_at: Timestamp::now(),
            active: existing.active,
            dossier: new.dossier,
            assignee: new.assignee,
            role: new.role,
            assigned_on: new.assigned_on,
            remarks: new.remarks,
        };
        t.assignments.replace(assignment.clone());
        debug!(id = %id, "assignment updated");
        Ok(assignment)
    }

    pub fn delete_assignment(&self, id: AssignmentId) -> Result<()> {
        let mut t = self.tables.write();
        if t.assignments.remove(&id).is_none() {
            return Err(RegistryError::not_found(Assignment::KIND, id));
        }
        debug!(id = %id, "assignment deleted");
        Ok(())
    }
}

fn check_hearing_refs(t: &Tables, new: &NewHearing) -> Result<()> {
    if !t.dossiers.contains(&new.dossier) {
        return Err(RegistryError::dangling(Hearing::KIND, "dossier", new.dossier));
    }
    if !t.magistrates.contains(&new.magistrate) {
        return Err(RegistryError::dangling(
            Hearing::KIND,
            "magistrate",
            new.magistrate,
        ));
    }
    Ok(())
}

fn check_calendar_refs(t: &Tables, new: &NewCalendar) -> Result<()> {
    if !t.courts.contains(&new.court) {
        return Err(RegistryError::dangling(Calendar::KIND, "court", new.court));
    }
    if !t.magistrates.contains(&new.magistrate) {
        return Err(RegistryError::dangling(
            Calendar::KIND,
            "magistrate",
            new.magistrate,
        ));
    }
    Ok(())
}

fn check_calendar_slot(t: &Tables, new: &NewCalendar, excluding: Option<CalendarId>) -> Result<()> {
    if t.calendars.values().any(|c| {
        Some(c.id) != excluding
            && c.date == new.date
            && c.court == new.court
            && c.magistrate == new.magistrate
    }) {
        return Err(RegistryError::conflict(
            Calendar::KIND,
            "(date, court, magistrate)",
            format!("{} already has a slot at {} on {}", new.magistrate, new.court, new.date),
        ));
    }
    Ok(())
}

fn check_assignment_refs(t: &Tables, new: &NewAssignment) -> Result<()> {
    if !t.dossiers.contains(&new.dossier) {
        return Err(RegistryError::dangling(
            Assignment::KIND,
            "dossier",
            new.dossier,
        ));
    }
    if !t.users.contains(&new.assignee) {
        return Err(RegistryError::dangling(
            Assignment::KIND,
            "assignee",
            new.assignee,
        ));
    }
    Ok(())
}
