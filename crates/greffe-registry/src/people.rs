//! Person operations: accounts, magistrates, lawyers, parties.
//!
//! The thorniest delete in the schema lives here. Removing a person
//! account takes its magistrate and lawyer profiles and its staff
//! assignments with it, and detaches the documents and notes it authored.
//! Because the magistrate profile is itself protected by hearings, an
//! account whose magistrate still presides over hearings cannot be
//! deleted either.

use tracing::{debug, warn};

use greffe_core::{LawyerId, MagistrateId, PartyId, RegistryError, Timestamp, UserId};
use greffe_model::{
    Lawyer, Magistrate, MagistrateKind, NewLawyer, NewMagistrate, NewParty, NewUserAccount, Party,
    Record, UserAccount,
};

use crate::{require, Registry, Result, Tables};

fn validate_user(new: &NewUserAccount) -> Result<()> {
    require(UserAccount::KIND, "username", &new.username)?;
    require(UserAccount::KIND, "full_name", &new.full_name)?;
    Ok(())
}

/// A magistrate carries at most one grade, drawn from the set matching
/// their side of the judiciary. Seconded magistrates may carry either.
fn validate_magistrate(new: &NewMagistrate) -> Result<()> {
    require(Magistrate::KIND, "employee_number", &new.employee_number)?;
    if new.bench_grade.is_some() && new.prosecution_grade.is_some() {
        return Err(RegistryError::validation(
            Magistrate::KIND,
            "bench_grade",
            "a magistrate cannot hold a bench grade and a prosecution grade at once",
        ));
    }
    match new.kind {
        MagistrateKind::Bench if new.prosecution_grade.is_some() => {
            Err(RegistryError::validation(
                Magistrate::KIND,
                "prosecution_grade",
                "a bench magistrate cannot hold a prosecution grade",
            ))
        }
        MagistrateKind::Prosecution if new.bench_grade.is_some() => {
            Err(RegistryError::validation(
                Magistrate::KIND,
                "bench_grade",
                "a prosecution magistrate cannot hold a bench grade",
            ))
        }
        _ => Ok(()),
    }
}

fn validate_lawyer(new: &NewLawyer) -> Result<()> {
    require(Lawyer::KIND, "bar_number", &new.bar_number)?;
    require(Lawyer::KIND, "phone", &new.phone)?;
    require(Lawyer::KIND, "address", &new.address)?;
    require(Lawyer::KIND, "bar", &new.bar)?;
    Ok(())
}

fn validate_party(new: &NewParty) -> Result<()> {
    if new.is_legal_entity {
        match &new.corporate_name {
            Some(name) if !name.trim().is_empty() => {}
            _ => {
                return Err(RegistryError::validation(
                    Party::KIND,
                    "corporate_name",
                    "required for a legal entity",
                ))
            }
        }
    } else {
        require(Party::KIND, "first_name", &new.first_name)?;
        require(Party::KIND, "last_name", &new.last_name)?;
    }
    require(Party::KIND, "address", &new.address)?;
    Ok(())
}

impl Registry {
    // ─── User accounts ───────────────────────────────────────────────────

    pub fn create_user_account(&self, new: NewUserAccount) -> Result<UserAccount> {
        validate_user(&new)?;
        let mut t = self.tables.write();
        if t.users.values().any(|u| u.username == new.username) {
            return Err(RegistryError::conflict(
                UserAccount::KIND,
                "username",
                format!("username {:?} is already taken", new.username),
            ));
        }
        let now = Timestamp::now();
        let user = UserAccount {
            id: UserId::new(),
            created_at: now,
            modified_at: now,
            active: true,
            username: new.username,
            full_name: new.full_name,
            email: new.email,
        };
        let seq = t.next_seq();
        t.users.insert(seq, user.clone());
        debug!(id = %user.id, username = %user.username, "user account created");
        Ok(user)
    }

    pub fn user_account(&self, id: UserId) -> Result<UserAccount> {
        self.tables
            .read()
            .users
            .get(&id)
            .cloned()
            .ok_or_else(|| RegistryError::not_found(UserAccount::KIND, id))
    }

    pub fn user_accounts(&self) -> Vec<UserAccount> {
        self.tables
            .read()
            .users
            .in_order()
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn update_user_account(&self, id: UserId, new: NewUserAccount) -> Result<UserAccount> {
        validate_user(&new)?;
        let mut t = self.tables.write();
        let existing = t
            .users
            .get(&id)
            .cloned()
            .ok_or_else(|| RegistryError::not_found(UserAccount::KIND, id))?;
        if t.users
            .values()
            .any(|u| u.id != id && u.username == new.username)
        {
            return Err(RegistryError::conflict(
                UserAccount::KIND,
                "username",
                format!("username {:?} is already taken", new.username),
            ));
        }
        let user = UserAccount {
            id,
            created_at: existing.created_at,
            modified_at: Timestamp::now(),
            active: existing.active,
            username: new.username,
            full_name: new.full_name,
            email: new.email,
        };
        t.users.replace(user.clone());
        debug!(id = %id, "user account updated");
        Ok(user)
    }

    pub fn delete_user_account(&self, id: UserId) -> Result<()> {
        let mut t = self.tables.write();
        if !t.users.contains(&id) {
            return Err(RegistryError::not_found(UserAccount::KIND, id));
        }
        // The account cascades to its magistrate profile, which hearings
        // protect. Check before mutating anything.
        let magistrate_ids: Vec<MagistrateId> = t
            .magistrates
            .values()
            .filter(|m| m.user == id)
            .map(|m| m.id)
            .collect();
        for mag in &magistrate_ids {
            if t.hearings.values().any(|h| h.magistrate == *mag) {
                warn!(id = %id, magistrate = %mag, "user delete blocked by hearings");
                return Err(RegistryError::conflict(
                    UserAccount::KIND,
                    "hearing.magistrate",
                    format!("{mag} still presides over hearings"),
                ));
            }
        }
        for mag in magistrate_ids {
            t.drop_magistrate(mag);
        }
        let lawyer_ids: Vec<LawyerId> = t
            .lawyers
            .values()
            .filter(|l| l.user == id)
            .map(|l| l.id)
            .collect();
        for lawyer in lawyer_ids {
            t.drop_lawyer(lawyer);
        }
        t.assignments.remove_where(|a| a.assignee == id);
        t.attachments.for_each_mut(|a| {
            if a.uploaded_by == Some(id) {
                a.uploaded_by = None;
            }
        });
        t.notes.for_each_mut(|n| {
            if n.author == Some(id) {
                n.author = None;
            }
        });
        t.users.remove(&id);
        debug!(id = %id, "user account deleted");
        Ok(())
    }

    // ─── Magistrates ─────────────────────────────────────────────────────

    pub fn create_magistrate(&self, new: NewMagistrate) -> Result<Magistrate> {
        validate_magistrate(&new)?;
        let mut t = self.tables.write();
        if !t.users.contains(&new.user) {
            return Err(RegistryError::dangling(Magistrate::KIND, "user", new.user));
        }
        if let Some(court) = new.court {
            if !t.courts.contains(&court) {
                return Err(RegistryError::dangling(Magistrate::KIND, "court", court));
            }
        }
        if let Some(office) = new.office {
            if !t.offices.contains(&office) {
                return Err(RegistryError::dangling(Magistrate::KIND, "office", office));
            }
        }
        check_magistrate_uniques(&t, &new, None)?;
        let now = Timestamp::now();
        let magistrate = Magistrate {
            id: MagistrateId::new(),
            created_at: now,
            modified_at: now,
            active: true,
            user: new.user,
            employee_number: new.employee_number,
            kind: new.kind,
            court: new.court,
            office: new.office,
            phone: new.phone,
            speciality: new.speciality,
            appointed_on: new.appointed_on,
            bench_grade: new.bench_grade,
            prosecution_grade: new.prosecution_grade,
        };
        let seq = t.next_seq();
        t.magistrates.insert(seq, magistrate.clone());
        debug!(id = %magistrate.id, kind = %magistrate.kind, "magistrate created");
        Ok(magistrate)
    }

    pub fn magistrate(&self, id: MagistrateId) -> Result<Magistrate> {
        self.tables
            .read()
            .magistrates
            .get(&id)
            .cloned()
            .ok_or_else(|| RegistryError::not_found(Magistrate::KIND, id))
    }

    pub fn magistrates(&self) -> Vec<Magistrate> {
        self.tables
            .read()
            .magistrates
            .in_order()
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn update_magistrate(&self, id: MagistrateId, new: NewMagistrate) -> Result<Magistrate> {
        validate_magistrate(&new)?;
        let mut t = self.tables.write();
        let existing = t
            .magistrates
            .get(&id)
            .cloned()
            .ok_or_else(|| RegistryError::not_found(Magistrate::KIND, id))?;
        if !t.users.contains(&new.user) {
            return Err(RegistryError::dangling(Magistrate::KIND, "user", new.user));
        }
        if let Some(court) = new.court {
            if !t.courts.contains(&court) {
                return Err(RegistryError::dangling(Magistrate::KIND, "court", court));
            }
        }
        if let Some(office) = new.office {
            if !t.offices.contains(&office) {
                return Err(RegistryError::dangling(Magistrate::KIND, "office", office));
            }
        }
        check_magistrate_uniques(&t, &new, Some(id))?;
        let magistrate = Magistrate {
            id,
            created_at: existing.created_at,
            modified_at: Timestamp::now(),
            active: existing.active,
            user: new.user,
            employee_number: new.employee_number,
            kind: new.kind,
            court: new.court,
            office: new.office,
            phone: new.phone,
            speciality: new.speciality,
            appointed_on: new.appointed_on,
            bench_grade: new.bench_grade,
            prosecution_grade: new.prosecution_grade,
        };
        t.magistrates.replace(magistrate.clone());
        debug!(id = %id, "magistrate updated");
        Ok(magistrate)
    }

    pub fn delete_magistrate(&self, id: MagistrateId) -> Result<()> {
        let mut t = self.tables.write();
        if !t.magistrates.contains(&id) {
            return Err(RegistryError::not_found(Magistrate::KIND, id));
        }
        if t.hearings.values().any(|h| h.magistrate == id) {
            warn!(id = %id, "magistrate delete blocked by hearings");
            return Err(RegistryError::conflict(
                Magistrate::KIND,
                "hearing.magistrate",
                format!("{id} still presides over hearings"),
            ));
        }
        t.drop_magistrate(id);
        debug!(id = %id, "magistrate deleted");
        Ok(())
    }

    // ─── Lawyers ─────────────────────────────────────────────────────────

    pub fn create_lawyer(&self, new: NewLawyer) -> Result<Lawyer> {
        validate_lawyer(&new)?;
        let mut t = self.tables.write();
        if !t.users.contains(&new.user) {
            return Err(RegistryError::dangling(Lawyer::KIND, "user", new.user));
        }
        check_lawyer_uniques(&t, &new, None)?;
        let now = Timestamp::now();
        let lawyer = Lawyer {
            id: LawyerId::new(),
            created_at: now,
            modified_at: now,
            active: true,
            user: new.user,
            bar_number: new.bar_number,
            firm: new.firm,
            phone: new.phone,
            address: new.address,
            speciality: new.speciality,
            sworn_on: new.sworn_on,
            bar: new.bar,
        };
        let seq = t.next_seq();
        t.lawyers.insert(seq, lawyer.clone());
        debug!(id = %lawyer.id, bar_number = %lawyer.bar_number, "lawyer created");
        Ok(lawyer)
    }

    pub fn lawyer(&self, id: LawyerId) -> Result<Lawyer> {
        self.tables
            .read()
            .lawyers
            .get(&id)
            .cloned()
            .ok_or_else(|| RegistryError::not_found(Lawyer::KIND, id))
    }

    pub fn lawyers(&self) -> Vec<Lawyer> {
        self.tables
            .read()
            .lawyers
            .in_order()
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn update_lawyer(&self, id: LawyerId, new: NewLawyer) -> Result<Lawyer> {
        validate_lawyer(&new)?;
        let mut t = self.tables.write();
        let existing = t
            .lawyers
            .get(&id)
            .cloned()
            .ok_or_else(|| RegistryError::not_found(Lawyer::KIND, id))?;
        if !t.users.contains(&new.user) {
            return Err(RegistryError::dangling(Lawyer::KIND, "user", new.user));
        }
        check_lawyer_uniques(&t, &new, Some(id))?;
        let lawyer = Lawyer {
            id,
            created_at: existing.created_at,
            modified_at: Timestamp::now(),
            active: existing.active,
            user: new.user,
            bar_number: new.bar_number,
            firm: new.firm,
            phone: new.phone,
            address: new.address,
            speciality: new.speciality,
            sworn_on: new.sworn_on,
            bar: new.bar,
        };
        t.lawyers.replace(lawyer.clone());
        debug!(id = %id, "lawyer updated");
        Ok(lawyer)
    }

    pub fn delete_lawyer(&self, id: LawyerId) -> Result<()> {
        let mut t = self.tables.write();
        if !t.lawyers.contains(&id) {
            return Err(RegistryError::not_found(Lawyer::KIND, id));
        }
        t.drop_lawyer(id);
        debug!(id = %id, "lawyer deleted");
        Ok(())
    }

    // ─── Parties ─────────────────────────────────────────────────────────

    pub fn create_party(&self, new: NewParty) -> Result<Party> {
        validate_party(&new)?;
        let mut t = self.tables.write();
        let now = Timestamp::now();
        let party = Party {
            id: PartyId::new(),
            created_at: now,
            modified_at: now,
            active: true,
            first_name: new.first_name,
            last_name: new.last_name,
            used_name: new.used_name,
            born_on: new.born_on,
            birthplace: new.birthplace,
            phone: new.phone,
            email: new.email,
            address: new.address,
            identification_number: new.identification_number,
            is_legal_entity: new.is_legal_entity,
            corporate_name: new.corporate_name,
            legal_form: new.legal_form,
        };
        let seq = t.next_seq();
        t.parties.insert(seq, party.clone());
        debug!(id = %party.id, "party created");
        Ok(party)
    }

    pub fn party(&self, id: PartyId) -> Result<Party> {
        self.tables
            .read()
            .parties
            .get(&id)
            .cloned()
            .ok_or_else(|| RegistryError::not_found(Party::KIND, id))
    }

    pub fn parties(&self) -> Vec<Party> {
        self.tables
            .read()
            .parties
            .in_order()
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn update_party(&self, id: PartyId, new: NewParty) -> Result<Party> {
        validate_party(&new)?;
        let mut t = self.tables.write();
        let existing = t
            .parties
            .get(&id)
            .cloned()
            .ok_or_else(|| RegistryError::not_found(Party::KIND, id))?;
        let party = Party {
            id,
            created_at: existing.created_at,
            modified_at: Timestamp::now(),
            active: existing.active,
            first_name: new.first_name,
            last_name: new.last_name,
            used_name: new.used_name,
            born_on: new.born_on,
            birthplace: new.birthplace,
            phone: new.phone,
            email: new.email,
            address: new.address,
            identification_number: new.identification_number,
            is_legal_entity: new.is_legal_entity,
            corporate_name: new.corporate_name,
            legal_form: new.legal_form,
        };
        t.parties.replace(party.clone());
        debug!(id = %id, "party updated");
        Ok(party)
    }

    /// Deleting a party removes its case involvements with it.
    pub fn delete_party(&self, id: PartyId) -> Result<()> {
        let mut t = self.tables.write();
        if t.parties.remove(&id).is_none() {
            return Err(RegistryError::not_found(Party::KIND, id));
        }
        t.case_parties.remove_where(|cp| cp.party == id);
        debug!(id = %id, "party deleted");
        Ok(())
    }
}

fn check_magistrate_uniques(
    t: &Tables,
    new: &NewMagistrate,
    excluding: Option<MagistrateId>,
) -> Result<()> {
    for other in t.magistrates.values() {
        if Some(other.id) == excluding {
            continue;
        }
        if other.user == new.user {
            return Err(RegistryError::conflict(
                Magistrate::KIND,
                "user",
                format!("{} already has a magistrate profile", new.user),
            ));
        }
        if other.employee_number == new.employee_number {
            return Err(RegistryError::conflict(
                Magistrate::KIND,
                "employee_number",
                format!("employee number {:?} is already taken", new.employee_number),
            ));
        }
    }
    Ok(())
}

fn check_lawyer_uniques(t: &Tables, new: &NewLawyer, excluding: Option<LawyerId>) -> Result<()> {
    for other in t.lawyers.values() {
        if Some(other.id) == excluding {
            continue;
        }
        if other.user == new.user {
            return Err(RegistryError::conflict(
                Lawyer::KIND,
                "user",
                format!("{} already has a lawyer profile", new.user),
            ));
        }
        if other.bar_number == new.bar_number {
            return Err(RegistryError::conflict(
                Lawyer::KIND,
                "bar_number",
                format!("bar number {:?} is already taken", new.bar_number),
            ));
        }
    }
    Ok(())
}

impl Tables {
    /// Remove a magistrate with its side effects. Callers must have
    /// verified no hearing references the magistrate.
    pub(crate) fn drop_magistrate(&mut self, id: MagistrateId) {
        self.requisitions.remove_where(|r| r.magistrate == id);
        self.investigations.remove_where(|i| i.magistrate == id);
        self.dismissals.remove_where(|d| d.magistrate == id);
        self.alternatives.remove_where(|a| a.magistrate == id);
        self.calendars.remove_where(|c| c.magistrate == id);
        self.dossiers.for_each_mut(|d| {
            if d.bench_magistrate == Some(id) {
                d.bench_magistrate = None;
            }
            if d.prosecution_magistrate == Some(id) {
                d.prosecution_magistrate = None;
            }
        });
        self.magistrates.remove(&id);
    }

    /// Remove a lawyer, detaching the case parties they represented.
    pub(crate) fn drop_lawyer(&mut self, id: LawyerId) {
        self.case_parties.for_each_mut(|cp| {
            if cp.lawyer == Some(id) {
                cp.lawyer = None;
            }
        });
        self.lawyers.remove(&id);
    }
}
