//! Court and prosecution-office operations.
//!
//! Courts are the protected root of the schema: a court referenced by a
//! dossier or an appeal path cannot be deleted. Removing a court takes
//! its offices and calendar slots with it and detaches its magistrates.

use tracing::{debug, warn};

use greffe_core::{CourtId, OfficeId, RegistryError, Timestamp};
use greffe_model::{
    Court, NewCourt, NewProsecutionOffice, ProsecutionOffice, Record,
};

use crate::{require, Registry, Result, Tables};

fn validate_court(new: &NewCourt) -> Result<()> {
    require(Court::KIND, "name", &new.name)?;
    require(Court::KIND, "jurisdiction", &new.jurisdiction)?;
    require(Court::KIND, "address", &new.address)?;
    Ok(())
}

fn validate_office(new: &NewProsecutionOffice) -> Result<()> {
    require(ProsecutionOffice::KIND, "name", &new.name)?;
    require(ProsecutionOffice::KIND, "address", &new.address)?;
    require(
        ProsecutionOffice::KIND,
        "territorial_scope",
        &new.territorial_scope,
    )?;
    Ok(())
}

impl Registry {
    // ─── Courts ──────────────────────────────────────────────────────────

    pub fn create_court(&self, new: NewCourt) -> Result<Court> {
        validate_court(&new)?;
        let mut t = self.tables.write();
        let now = Timestamp::now();
        let court = Court {
            id: CourtId::new(),
            created_at: now,
            modified_at: now,
            active: true,
            name: new.name,
            kind: new.kind,
            jurisdiction: new.jurisdiction,
            address: new.address,
            phone: new.phone,
            email: new.email,
        };
        let seq = t.next_seq();
        t.courts.insert(seq, court.clone());
        debug!(id = %court.id, name = %court.name, "court created");
        Ok(court)
    }

    pub fn court(&self, id: CourtId) -> Result<Court> {
        self.tables
            .read()
            .courts
            .get(&id)
            .cloned()
            .ok_or_else(|| RegistryError::not_found(Court::KIND, id))
    }

    pub fn courts(&self) -> Vec<Court> {
        self.tables
            .read()
            .courts
            .in_order()
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn update_court(&self, id: CourtId, new: NewCourt) -> Result<Court> {
        validate_court(&new)?;
        let mut t = self.tables.write();
        let existing = t
            .courts
            .get(&id)
            .cloned()
            .ok_or_else(|| RegistryError::not_found(Court::KIND, id))?;
        let court = Court {
            id,
            created_at: existing.created_at,
            modified_at: Timestamp::now(),
            active: existing.active,
            name: new.name,
            kind: new.kind,
            jurisdiction: new.jurisdiction,
            address: new.address,
            phone: new.phone,
            email: new.email,
        };
        t.courts.replace(court.clone());
        debug!(id = %id, "court updated");
        Ok(court)
    }

    pub fn delete_court(&self, id: CourtId) -> Result<()> {
        let mut t = self.tables.write();
        if !t.courts.contains(&id) {
            return Err(RegistryError::not_found(Court::KIND, id));
        }
        if t.dossiers.values().any(|d| d.court == id) {
            warn!(id = %id, "court delete blocked by dossiers");
            return Err(RegistryError::conflict(
                Court::KIND,
                "dossier.court",
                format!("{id} is referenced by live dossiers"),
            ));
        }
        if t.appeals.values().any(|a| a.appellate_court == id) {
            warn!(id = %id, "court delete blocked by appeal paths");
            return Err(RegistryError::conflict(
                Court::KIND,
                "appeal_path.appellate_court",
                format!("{id} is referenced by live appeal paths"),
            ));
        }
        let office_ids: Vec<OfficeId> = t
            .offices
            .values()
            .filter(|o| o.court == id)
            .map(|o| o.id)
            .collect();
        for office in office_ids {
            t.drop_office(office);
        }
        t.calendars.remove_where(|c| c.court == id);
        t.magistrates.for_each_mut(|m| {
            if m.court == Some(id) {
                m.court = None;
            }
        });
        t.courts.remove(&id);
        debug!(id = %id, "court deleted");
        Ok(())
    }

    // ─── Prosecution offices ─────────────────────────────────────────────

    pub fn create_prosecution_office(&self, new: NewProsecutionOffice) -> Result<ProsecutionOffice> {
        validate_office(&new)?;
        let mut t = self.tables.write();
        if !t.courts.contains(&new.court) {
            return Err(RegistryError::dangling(
                ProsecutionOffice::KIND,
                "court",
                new.court,
            ));
        }
        let now = Timestamp::now();
        let office = ProsecutionOffice {
            id: OfficeId::new(),
            created_at: now,
            modified_at: now,
            active: true,
            name: new.name,
            kind: new.kind,
            court: new.court,
            address: new.address,
            phone: new.phone,
            email: new.email,
            territorial_scope: new.territorial_scope,
            subject_matter_scope: new.subject_matter_scope,
        };
        let seq = t.next_seq();
        t.offices.insert(seq, office.clone());
        debug!(id = %office.id, court = %office.court, "prosecution office created");
        Ok(office)
    }

    pub fn prosecution_office(&self, id: OfficeId) -> Result<ProsecutionOffice> {
        self.tables
            .read()
            .offices
            .get(&id)
            .cloned()
            .ok_or_else(|| RegistryError::not_found(ProsecutionOffice::KIND, id))
    }

    /// Offices in insertion order, optionally scoped to one court.
    pub fn prosecution_offices(&self, court: Option<CourtId>) -> Vec<ProsecutionOffice> {
        self.tables
            .read()
            .offices
            .in_order()
            .into_iter()
            .filter(|o| court.map_or(true, |c| o.court == c))
            .cloned()
            .collect()
    }

    pub fn update_prosecution_office(
        &self,
        id: OfficeId,
        new: NewProsecutionOffice,
    ) -> Result<ProsecutionOffice> {
        validate_office(&new)?;
        let mut t = self.tables.write();
        let existing = t
            .offices
            .get(&id)
            .cloned()
            .ok_or_else(|| RegistryError::not_found(ProsecutionOffice::KIND, id))?;
        if !t.courts.contains(&new.court) {
            return Err(RegistryError::dangling(
                ProsecutionOffice::KIND,
                "court",
                new.court,
            ));
        }
        let office = ProsecutionOffice {
            id,
            created_at: existing.created_at,
            modified_at: Timestamp::now(),
            active: existing.active,
            name: new.name,
            kind: new.kind,
            court: new.court,
            address: new.address,
            phone: new.phone,
            email: new.email,
            territorial_scope: new.territorial_scope,
            subject_matter_scope: new.subject_matter_scope,
        };
        t.offices.replace(office.clone());
        debug!(id = %id, "prosecution office updated");
        Ok(office)
    }

    pub fn delete_prosecution_office(&self, id: OfficeId) -> Result<()> {
        let mut t = self.tables.write();
        if !t.offices.contains(&id) {
            return Err(RegistryError::not_found(ProsecutionOffice::KIND, id));
        }
        t.drop_office(id);
        debug!(id = %id, "prosecution office deleted");
        Ok(())
    }
}

impl Tables {
    /// Remove an office with its side effects: its prosecution records go
    /// with it, dossiers and magistrates pointing at it are detached.
    pub(crate) fn drop_office(&mut self, id: OfficeId) {
        self.requisitions.remove_where(|r| r.office == id);
        self.investigations.remove_where(|i| i.office == id);
        self.dismissals.remove_where(|d| d.office == id);
        self.alternatives.remove_where(|a| a.office == id);
        self.dossiers.for_each_mut(|d| {
            if d.office == Some(id) {
                d.office = None;
            }
        });
        self.magistrates.for_each_mut(|m| {
            if m.office == Some(id) {
                m.office = None;
            }
        });
        self.offices.remove(&id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use greffe_model::CourtKind;

    fn new_court(name: &str) -> NewCourt {
        NewCourt {
            name: name.to_string(),
            kind: CourtKind::HighCourt,
            jurisdiction: "Ressort de Thiès".to_string(),
            address: "Place de Justice".to_string(),
            phone: None,
            email: None,
        }
    }

    #[test]
    fn test_create_then_get_round_trips() {
        let registry = Registry::new();
        let created = registry.create_court(new_court("TGI de Thiès")).unwrap();
        let fetched = registry.court(created.id).unwrap();
        assert_eq!(fetched.name, "TGI de Thiès");
        assert_eq!(fetched.created_at, fetched.modified_at);
        assert!(fetched.active);
    }

    #[test]
    fn test_blank_name_rejected() {
        let registry = Registry::new();
        let err = registry.create_court(new_court("  ")).unwrap_err();
        assert!(matches!(err, RegistryError::Validation { field: "name", .. }));
    }

    #[test]
    fn test_office_requires_existing_court() {
        let registry = Registry::new();
        let err = registry
            .create_prosecution_office(NewProsecutionOffice {
                name: "Parquet de Thiès".to_string(),
                kind: greffe_model::OfficeKind::HighCourt,
                court: CourtId::new(),
                address: "Place de Justice".to_string(),
                phone: None,
                email: None,
                territorial_scope: "Thiès".to_string(),
                subject_matter_scope: None,
            })
            .unwrap_err();
        assert!(matches!(err, RegistryError::DanglingReference { .. }));
    }

    #[test]
    fn test_list_keeps_insertion_order() {
        let registry = Registry::new();
        registry.create_court(new_court("Premier")).unwrap();
        registry.create_court(new_court("Deuxième")).unwrap();
        registry.create_court(new_court("Troisième")).unwrap();
        let names: Vec<String> = registry.courts().into_iter().map(|c| c.name).collect();
        assert_eq!(names, ["Premier", "Deuxième", "Troisième"]);
    }
}
