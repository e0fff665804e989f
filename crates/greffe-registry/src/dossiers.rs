//! Case-nature, dossier, and case-party operations.
//!
//! The dossier delete is the widest cascade in the store: every
//! proceeding record filed under the case goes with it, including appeal
//! paths on either side of the link.

use tracing::{debug, warn};

use greffe_core::{CaseNatureId, CasePartyId, DossierId, RegistryError, Timestamp};
use greffe_model::{
    CaseNature, CaseParty, Dossier, NewCaseNature, NewCaseParty, NewDossier, Record,
};

use crate::{require, Registry, Result, Tables};

fn validate_nature(new: &NewCaseNature) -> Result<()> {
    require(CaseNature::KIND, "name", &new.name)?;
    require(CaseNature::KIND, "code", &new.code)?;
    Ok(())
}

fn validate_dossier(new: &NewDossier) -> Result<()> {
    require(Dossier::KIND, "registry_number", &new.registry_number)?;
    require(Dossier::KIND, "title", &new.title)?;
    require(Dossier::KIND, "subject", &new.subject)?;
    Ok(())
}

impl Registry {
    // ─── Case natures ────────────────────────────────────────────────────

    pub fn create_case_nature(&self, new: NewCaseNature) -> Result<CaseNature> {
        validate_nature(&new)?;
        let mut t = self.tables.write();
        check_nature_uniques(&t, &new, None)?;
        let now = Timestamp::now();
        let nature = CaseNature {
            id: CaseNatureId::new(),
            created_at: now,
            modified_at: now,
            active: true,
            name: new.name,
            code: new.code,
            matter: new.matter,
            description: new.description,
        };
        let seq = t.next_seq();
        t.natures.insert(seq, nature.clone());
        debug!(id = %nature.id, code = %nature.code, "case nature created");
        Ok(nature)
    }

    pub fn case_nature(&self, id: CaseNatureId) -> Result<CaseNature> {
        self.tables
            .read()
            .natures
            .get(&id)
            .cloned()
            .ok_or_else(|| RegistryError::not_found(CaseNature::KIND, id))
    }

    pub fn case_natures(&self) -> Vec<CaseNature> {
        self.tables
            .read()
            .natures
            .in_order()
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn update_case_nature(&self, id: CaseNatureId, new: NewCaseNature) -> Result<CaseNature> {
        validate_nature(&new)?;
        let mut t = self.tables.write();
        let existing = t
            .natures
            .get(&id)
            .cloned()
            .ok_or_else(|| RegistryError::not_found(CaseNature::KIND, id))?;
        check_nature_uniques(&t, &new, Some(id))?;
        let nature = CaseNature {
            id,
            created_at: existing.created_at,
            modified_at: Timestamp::now(),
            active: existing.active,
            name: new.name,
            code: new.code,
            matter: new.matter,
            description: new.description,
        };
        t.natures.replace(nature.clone());
        debug!(id = %id, "case nature updated");
        Ok(nature)
    }

    pub fn delete_case_nature(&self, id: CaseNatureId) -> Result<()> {
        let mut t = self.tables.write();
        if !t.natures.contains(&id) {
            return Err(RegistryError::not_found(CaseNature::KIND, id));
        }
        if t.dossiers.values().any(|d| d.nature == id) {
            warn!(id = %id, "case nature delete blocked by dossiers");
            return Err(RegistryError::conflict(
                CaseNature::KIND,
                "dossier.nature",
                format!("{id} is referenced by live dossiers"),
            ));
        }
        t.natures.remove(&id);
        debug!(id = %id, "case nature deleted");
        Ok(())
    }

    // ─── Dossiers ────────────────────────────────────────────────────────

    pub fn create_dossier(&self, new: NewDossier) -> Result<Dossier> {
        validate_dossier(&new)?;
        let mut t = self.tables.write();
        check_dossier_refs(&t, &new)?;
        if t.dossiers
            .values()
            .any(|d| d.registry_number == new.registry_number)
        {
            return Err(RegistryError::conflict(
                Dossier::KIND,
                "registry_number",
                format!("registry number {:?} is already taken", new.registry_number),
            ));
        }
        let now = Timestamp::now();
        let dossier = Dossier {
            id: DossierId::new(),
            created_at: now,
            modified_at: now,
            active: true,
            registry_number: new.registry_number,
            office_number: new.office_number,
            investigation_number: new.investigation_number,
            title: new.title,
            subject: new.subject,
            nature: new.nature,
            court: new.court,
            office: new.office,
            bench_magistrate: new.bench_magistrate,
            prosecution_magistrate: new.prosecution_magistrate,
            status: new.status,
            urgency: new.urgency,
            registered_on: new.registered_on,
            closed_on: new.closed_on,
            estimated_days: new.estimated_days,
            chamber: new.chamber,
            confidential: new.confidential,
        };
        let seq = t.next_seq();
        t.dossiers.insert(seq, dossier.clone());
        debug!(
            id = %dossier.id,
            registry_number = %dossier.registry_number,
            status = %dossier.status,
            "dossier created"
        );
        Ok(dossier)
    }

    pub fn dossier(&self, id: DossierId) -> Result<Dossier> {
        self.tables
            .read()
            .dossiers
            .get(&id)
            .cloned()
            .ok_or_else(|| RegistryError::not_found(Dossier::KIND, id))
    }

    pub fn dossiers(&self) -> Vec<Dossier> {
        self.tables
            .read()
            .dossiers
            .in_order()
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn update_dossier(&self, id: DossierId, new: NewDossier) -> Result<Dossier> {
        validate_dossier(&new)?;
        let mut t = self.tables.write();
        let existing = t
            .dossiers
            .get(&id)
            .cloned()
            .ok_or_else(|| RegistryError::not_found(Dossier::KIND, id))?;
        check_dossier_refs(&t, &new)?;
        if t.dossiers
            .values()
            .any(|d| d.id != id && d.registry_number == new.registry_number)
        {
            return Err(RegistryError::conflict(
                Dossier::KIND,
                "registry_number",
                format!("registry number {:?} is already taken", new.registry_number),
            ));
        }
        let dossier = Dossier {
            id,
            created_at: existing.created_at,
            modified_at: Timestamp::now(),
            active: existing.active,
            registry_number: new.registry_number,
            office_number: new.office_number,
            investigation_number: new.investigation_number,
            title: new.title,
            subject: new.subject,
            nature: new.nature,
            court: new.court,
            office: new.office,
            bench_magistrate: new.bench_magistrate,
            prosecution_magistrate: new.prosecution_magistrate,
            status: new.status,
            urgency: new.urgency,
            registered_on: new.registered_on,
            closed_on: new.closed_on,
            estimated_days: new.estimated_days,
            chamber: new.chamber,
            confidential: new.confidential,
        };
        t.dossiers.replace(dossier.clone());
        debug!(id = %id, status = %dossier.status, "dossier updated");
        Ok(dossier)
    }

    pub fn delete_dossier(&self, id: DossierId) -> Result<()> {
        let mut t = self.tables.write();
        if !t.dossiers.contains(&id) {
            return Err(RegistryError::not_found(Dossier::KIND, id));
        }
        t.drop_dossier(id);
        debug!(id = %id, "dossier deleted");
        Ok(())
    }

    // ─── Case parties ────────────────────────────────────────────────────

    pub fn create_case_party(&self, new: NewCaseParty) -> Result<CaseParty> {
        let mut t = self.tables.write();
        check_case_party_refs(&t, &new)?;
        if t.case_parties
            .values()
            .any(|cp| cp.dossier == new.dossier && cp.party == new.party && cp.role == new.role)
        {
            return Err(RegistryError::conflict(
                CaseParty::KIND,
                "(dossier, party, role)",
                format!("{} already appears in {} as {}", new.party, new.dossier, new.role),
            ));
        }
        let now = Timestamp::now();
        let case_party = CaseParty {
            id: CasePartyId::new(),
            created_at: now,
            modified_at: now,
            active: true,
            dossier: new.dossier,
            party: new.party,
            role: new.role,
            lawyer: new.lawyer,
            retained_on: new.retained_on,
            remarks: new.remarks,
        };
        let seq = t.next_seq();
        t.case_parties.insert(seq, case_party.clone());
        debug!(id = %case_party.id, role = %case_party.role, "case party created");
        Ok(case_party)
    }

    pub fn case_party(&self, id: CasePartyId) -> Result<CaseParty> {
        self.tables
            .read()
            .case_parties
            .get(&id)
            .cloned()
            .ok_or_else(|| RegistryError::not_found(CaseParty::KIND, id))
    }

    /// Case parties in insertion order, optionally scoped to one dossier.
    pub fn case_parties(&self, dossier: Option<DossierId>) -> Vec<CaseParty> {
        self.tables
            .read()
            .case_parties
            .in_order()
            .into_iter()
            .filter(|cp| dossier.map_or(true, |d| cp.dossier == d))
            .cloned()
            .collect()
    }

    pub fn update_case_party(&self, id: CasePartyId, new: NewCaseParty) -> Result<CaseParty> {
        let mut t = self.tables.write();
        let existing = t
            .case_parties
            .get(&id)
            .cloned()
            .ok_or_else(|| RegistryError::not_found(CaseParty::KIND, id))?;
        check_case_party_refs(&t, &new)?;
        if t.case_parties.values().any(|cp| {
            cp.id != id && cp.dossier == new.dossier && cp.party == new.party && cp.role == new.role
        }) {
            return Err(RegistryError::conflict(
                CaseParty::KIND,
                "(dossier, party, role)",
                format!("{} already appears in {} as {}", new.party, new.dossier, new.role),
            ));
        }
        let case_party = CaseParty {
            id,
            created_at: existing.created_at,
            modified_at: Timestamp::now(),
            active: existing.active,
            dossier: new.dossier,
            party: new.party,
            role: new.role,
            lawyer: new.lawyer,
            retained_on: new.retained_on,
            remarks: new.remarks,
        };
        t.case_parties.replace(case_party.clone());
        debug!(id = %id, "case party updated");
        Ok(case_party)
    }

    pub fn delete_case_party(&self, id: CasePartyId) -> Result<()> {
        let mut t = self.tables.write();
        if t.case_parties.remove(&id).is_none() {
            return Err(RegistryError::not_found(CaseParty::KIND, id));
        }
        debug!(id = %id, "case party deleted");
        Ok(())
    }
}

fn check_nature_uniques(
    t: &Tables,
    new: &NewCaseNature,
    excluding: Option<CaseNatureId>,
) -> Result<()> {
    for other in t.natures.values() {
        if Some(other.id) == excluding {
            continue;
        }
        if other.name == new.name {
            return Err(RegistryError::conflict(
                CaseNature::KIND,
                "name",
                format!("name {:?} is already taken", new.name),
            ));
        }
        if other.code == new.code {
            return Err(RegistryError::conflict(
                CaseNature::KIND,
                "code",
                format!("code {:?} is already taken", new.code),
            ));
        }
    }
    Ok(())
}

fn check_dossier_refs(t: &Tables, new: &NewDossier) -> Result<()> {
    if !t.natures.contains(&new.nature) {
        return Err(RegistryError::dangling(Dossier::KIND, "nature", new.nature));
    }
    if !t.courts.contains(&new.court) {
        return Err(RegistryError::dangling(Dossier::KIND, "court", new.court));
    }
    if let Some(office) = new.office {
        if !t.offices.contains(&office) {
            return Err(RegistryError::dangling(Dossier::KIND, "office", office));
        }
    }
    if let Some(mag) = new.bench_magistrate {
        if !t.magistrates.contains(&mag) {
            return Err(RegistryError::dangling(Dossier::KIND, "bench_magistrate", mag));
        }
    }
    if let Some(mag) = new.prosecution_magistrate {
        if !t.magistrates.contains(&mag) {
            return Err(RegistryError::dangling(
                Dossier::KIND,
                "prosecution_magistrate",
                mag,
            ));
        }
    }
    Ok(())
}

fn check_case_party_refs(t: &Tables, new: &NewCaseParty) -> Result<()> {
    if !t.dossiers.contains(&new.dossier) {
        return Err(RegistryError::dangling(CaseParty::KIND, "dossier", new.dossier));
    }
    if !t.parties.contains(&new.party) {
        return Err(RegistryError::dangling(CaseParty::KIND, "party", new.party));
    }
    if let Some(lawyer) = new.lawyer {
        if !t.lawyers.contains(&lawyer) {
            return Err(RegistryError::dangling(CaseParty::KIND, "lawyer", lawyer));
        }
    }
    Ok(())
}

impl Tables {
    /// Remove a dossier and every record filed under it.
    pub(crate) fn drop_dossier(&mut self, id: DossierId) {
        self.case_parties.remove_where(|cp| cp.dossier == id);
        self.hearings.remove_where(|h| h.dossier == id);
        self.attachments.remove_where(|a| a.dossier == id);
        self.notes.remove_where(|n| n.dossier == id);
        self.fees.remove_where(|f| f.dossier == id);
        self.requisitions.remove_where(|r| r.dossier == id);
        self.investigations.remove_where(|i| i.dossier == id);
        self.dismissals.remove_where(|d| d.dossier == id);
        self.alternatives.remove_where(|a| a.dossier == id);
        self.assignments.remove_where(|a| a.dossier == id);
        self.evidence.remove_where(|e| e.dossier == id);
        self.decisions.remove_where(|d| d.dossier == id);
        self.appeals
            .remove_where(|a| a.original_dossier == id || a.appeal_dossier == id);
        self.dossiers.remove(&id);
    }
}
