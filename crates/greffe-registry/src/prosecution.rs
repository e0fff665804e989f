//! Prosecution-act operations: requisitions, investigations, dismissals,
//! alternatives to prosecution.
//!
//! All four share the same reference triple (dossier, office, magistrate)
//! and go away with any of the three. A dossier is dismissed at most
//! once.

use rust_decimal::Decimal;
use tracing::debug;

use greffe_core::{
    AlternativeId, DismissalId, DossierId, InvestigationId, RegistryError, RequisitionId, Timestamp,
};
use greffe_model::{
    Alternative, Dismissal, Investigation, NewAlternative, NewDismissal, NewInvestigation,
    NewRequisition, Record, Requisition,
};

use crate::{require, Registry, Result, Tables};

/// Resolve the (dossier, office, magistrate) triple shared by every
/// prosecution act.
fn check_act_refs(
    t: &Tables,
    entity: &'static str,
    dossier: DossierId,
    office: greffe_core::OfficeId,
    magistrate: greffe_core::MagistrateId,
) -> Result<()> {
    if !t.dossiers.contains(&dossier) {
        return Err(RegistryError::dangling(entity, "dossier", dossier));
    }
    if !t.offices.contains(&office) {
        return Err(RegistryError::dangling(entity, "office", office));
    }
    if !t.magistrates.contains(&magistrate) {
        return Err(RegistryError::dangling(entity, "magistrate", magistrate));
    }
    Ok(())
}

impl Registry {
    // ─── Requisitions ────────────────────────────────────────────────────

    pub fn create_requisition(&self, new: NewRequisition) -> Result<Requisition> {
        require(Requisition::KIND, "body", &new.body)?;
        let mut t = self.tables.write();
        check_act_refs(&t, Requisition::KIND, new.dossier, new.office, new.magistrate)?;
        let now = Timestamp::now();
        let requisition = Requisition {
            id: RequisitionId::new(),
            created_at: now,
            modified_at: now,
            active: true,
            dossier: new.dossier,
            office: new.office,
            magistrate: new.magistrate,
            kind: new.kind,
            body: new.body,
            issued_on: new.issued_on,
            followed: new.followed,
            remarks: new.remarks,
        };
        let seq = t.next_seq();
        t.requisitions.insert(seq, requisition.clone());
        debug!(id = %requisition.id, kind = %requisition.kind, "requisition created");
        Ok(requisition)
    }

    pub fn requisition(&self, id: RequisitionId) -> Result<Requisition> {
        self.tables
            .read()
            .requisitions
            .get(&id)
            .cloned()
            .ok_or_else(|| RegistryError::not_found(Requisition::KIND, id))
    }

    /// Requisitions in insertion order, optionally scoped to one dossier.
    pub fn requisitions(&self, dossier: Option<DossierId>) -> Vec<Requisition> {
        self.tables
            .read()
            .requisitions
            .in_order()
            .into_iter()
            .filter(|r| dossier.map_or(true, |d| r.dossier == d))
            .cloned()
            .collect()
    }

    pub fn update_requisition(&self, id: RequisitionId, new: NewRequisition) -> Result<Requisition> {
        require(Requisition::KIND, "body", &new.body)?;
        let mut t = self.tables.write();
        let existing = t
            .requisitions
            .get(&id)
            .cloned()
            .ok_or_else(|| RegistryError::not_found(Requisition::KIND, id))?;
        check_act_refs(&t, Requisition::KIND, new.dossier, new.office, new.magistrate)?;
        let requisition = Requisition {
            id,
            created_at: existing.created_at,
            modified_at: Timestamp::now(),
            active: existing.active,
            dossier: new.dossier,
            office: new.office,
            magistrate: new.magistrate,
            kind: new.kind,
            body: new.body,
            issued_on: new.issued_on,
            followed: new.followed,
            remarks: new.remarks,
        };
        t.requisitions.replace(requisition.clone());
        debug!(id = %id, "requisition updated");
        Ok(requisition)
    }

    pub fn delete_requisition(&self, id: RequisitionId) -> Result<()> {
        let mut t = self.tables.write();
        if t.requisitions.remove(&id).is_none() {
            return Err(RegistryError::not_found(Requisition::KIND, id));
        }
        debug!(id = %id, "requisition deleted");
        Ok(())
    }

    // ─── Investigations ──────────────────────────────────────────────────

    pub fn create_investigation(&self, new: NewInvestigation) -> Result<Investigation> {
        require(Investigation::KIND, "lead_officer", &new.lead_officer)?;
        require(Investigation::KIND, "unit", &new.unit)?;
        let mut t = self.tables.write();
        check_act_refs(&t, Investigation::KIND, new.dossier, new.office, new.magistrate)?;
        let now = Timestamp::now();
        let investigation = Investigation {
            id: InvestigationId::new(),
            created_at: now,
            modified_at: now,
            active: true,
            dossier: new.dossier,
            office: new.office,
            magistrate: new.magistrate,
            kind: new.kind,
            lead_officer: new.lead_officer,
            unit: new.unit,
            opened_on: new.opened_on,
            closed_on: new.closed_on,
            status: new.status,
            summary: new.summary,
        };
        let seq = t.next_seq();
        t.investigations.insert(seq, investigation.clone());
        debug!(id = %investigation.id, kind = %investigation.kind, "investigation created");
        Ok(investigation)
    }

    pub fn investigation(&self, id: InvestigationId) -> Result<Investigation> {
        self.tables
            .read()
            .investigations
            .get(&id)
            .cloned()
            .ok_or_else(|| RegistryError::not_found(Investigation::KIND, id))
    }

    /// Investigations in insertion order, optionally scoped to one
    /// dossier.
    pub fn investigations(&self, dossier: Option<DossierId>) -> Vec<Investigation> {
        self.tables
            .read()
            .investigations
            .in_order()
            .into_iter()
            .filter(|i| dossier.map_or(true, |d| i.dossier == d))
            .cloned()
            .collect()
    }

    pub fn update_investigation(
        &self,
        id: InvestigationId,
        new: NewInvestigation,
    ) -> Result<Investigation> {
        require(Investigation::KIND, "lead_officer", &new.lead_officer)?;
        require(Investigation::KIND, "unit", &new.unit)?;
        let mut t = self.tables.write();
        let existing = t
            .investigations
            .get(&id)
            .cloned()
            .ok_or_else(|| RegistryError::not_found(Investigation::KIND, id))?;
        check_act_refs(&t, Investigation::KIND, new.dossier, new.office, new.magistrate)?;
        let investigation = Investigation {
            id,
            created_at: existing.created_at,
            modified_at: Timestamp::now(),
            active: existing.active,
            dossier: new.dossier,
            office: new.office,
            magistrate: new.magistrate,
            kind: new.kind,
            lead_officer: new.lead_officer,
            unit: new.unit,
            opened_on: new.opened_on,
            closed_on: new.closed_on,
            status: new.status,
            summary: new.summary,
        };
        t.investigations.replace(investigation.clone());
        debug!(id = %id, status = %investigation.status, "investigation updated");
        Ok(investigation)
    }

    pub fn delete_investigation(&self, id: InvestigationId) -> Result<()> {
        let mut t = self.tables.write();
        if t.investigations.remove(&id).is_none() {
            return Err(RegistryError::not_found(Investigation::KIND, id));
        }
        debug!(id = %id, "investigation deleted");
        Ok(())
    }

    // ─── Dismissals ──────────────────────────────────────────────────────

    pub fn create_dismissal(&self, new: NewDismissal) -> Result<Dismissal> {
        require(Dismissal::KIND, "reasons", &new.reasons)?;
        let mut t = self.tables.write();
        check_act_refs(&t, Dismissal::KIND, new.dossier, new.office, new.magistrate)?;
        if t.dismissals.values().any(|d| d.dossier == new.dossier) {
            return Err(RegistryError::conflict(
                Dismissal::KIND,
                "dossier",
                format!("{} is already dismissed", new.dossier),
            ));
        }
        let now = Timestamp::now();
        let dismissal = Dismissal {
            id: DismissalId::new(),
            created_at: now,
            modified_at: now,
            active: true,
            dossier: new.dossier,
            office: new.office,
            magistrate: new.magistrate,
            ground: new.ground,
            decided_on: new.decided_on,
            reasons: new.reasons,
            parties_notified: new.parties_notified,
            notified_on: new.notified_on,
        };
        let seq = t.next_seq();
        t.dismissals.insert(seq, dismissal.clone());
        debug!(id = %dismissal.id, ground = %dismissal.ground, "dismissal created");
        Ok(dismissal)
    }

    pub fn dismissal(&self, id: DismissalId) -> Result<Dismissal> {
        self.tables
            .read()
            .dismissals
            .get(&id)
            .cloned()
            .ok_or_else(|| RegistryError::not_found(Dismissal::KIND, id))
    }

    /// Dismissals in insertion order, optionally scoped to one dossier.
    pub fn dismissals(&self, dossier: Option<DossierId>) -> Vec<Dismissal> {
        self.tables
            .read()
            .dismissals
            .in_order()
            .into_iter()
            .filter(|d| dossier.map_or(true, |target| d.dossier == target))
            .cloned()
            .collect()
    }

    pub fn update_dismissal(&self, id: DismissalId, new: NewDismissal) -> Result<Dismissal> {
        require(Dismissal::KIND, "reasons", &new.reasons)?;
        let mut t = self.tables.write();
        let existing = t
            .dismissals
            .get(&id)
            .cloned()
            .ok_or_else(|| RegistryError::not_found(Dismissal::KIND, id))?;
        check_act_refs(&t, Dismissal::KIND, new.dossier, new.office, new.magistrate)?;
        if t.dismissals
            .values()
            .any(|d| d.id != id && d.dossier == new.dossier)
        {
            return Err(RegistryError::conflict(
                Dismissal::KIND,
                "dossier",
                format!("{} is already dismissed", new.dossier),
            ));
        }
        let dismissal = Dismissal {
            id,
            created_at: existing.created_at,
            modified_at: Timestamp::now(),
            active: existing.active,
            dossier: new.dossier,
            office: new.office,
            magistrate: new.magistrate,
            ground: new.ground,
            decided_on: new.decided_on,
            reasons: new.reasons,
            parties_notified: new.parties_notified,
            notified_on: new.notified_on,
        };
        t.dismissals.replace(dismissal.clone());
        debug!(id = %id, "dismissal updated");
        Ok(dismissal)
    }

    pub fn delete_dismissal(&self, id: DismissalId) -> Result<()> {
        let mut t = self.tables.write();
        if t.dismissals.remove(&id).is_none() {
            return Err(RegistryError::not_found(Dismissal::KIND, id));
        }
        debug!(id = %id, "dismissal deleted");
        Ok(())
    }

    // ─── Alternatives ────────────────────────────────────────────────────

    pub fn create_alternative(&self, new: NewAlternative) -> Result<Alternative> {
        validate_alternative(&new)?;
        let mut t = self.tables.write();
        check_act_refs(&t, Alternative::KIND, new.dossier, new.office, new.magistrate)?;
        let now = Timestamp::now();
        let alternative = Alternative {
            id: AlternativeId::new(),
            created_at: now,
            modified_at: now,
            active: true,
            dossier: new.dossier,
            office: new.office,
            magistrate: new.magistrate,
            kind: new.kind,
            proposed_on: new.proposed_on,
            accepted_on: new.accepted_on,
            executed_on: new.executed_on,
            status: new.status,
            terms: new.terms,
            amount: new.amount,
        };
        let seq = t.next_seq();
        t.alternatives.insert(seq, alternative.clone());
        debug!(id = %alternative.id, kind = %alternative.kind, "alternative created");
        Ok(alternative)
    }

    pub fn alternative(&self, id: AlternativeId) -> Result<Alternative> {
        self.tables
            .read()
            .alternatives
            .get(&id)
            .cloned()
            .ok_or_else(|| RegistryError::not_found(Alternative::KIND, id))
    }

    /// Alternatives in insertion order, optionally scoped to one dossier.
    pub fn alternatives(&self, dossier: Option<DossierId>) -> Vec<Alternative> {
        self.tables
            .read()
            .alternatives
            .in_order()
            .into_iter()
            .filter(|a| dossier.map_or(true, |d| a.dossier == d))
            .cloned()
            .collect()
    }

    pub fn update_alternative(&self, id: AlternativeId, new: NewAlternative) -> Result<Alternative> {
        validate_alternative(&new)?;
        let mut t = self.tables.write();
        let existing = t
            .alternatives
            .get(&id)
            .cloned()
            .ok_or_else(|| RegistryError::not_found(Alternative::KIND, id))?;
        check_act_refs(&t, Alternative::KIND, new.dossier, new.office, new.magistrate)?;
        let alternative = Alternative {
            id,
            created_at: existing.created_at,
            modified_at: Timestamp::now(),
            active: existing.active,
            dossier: new.dossier,
            office: new.office,
            magistrate: new.magistrate,
            kind: new.kind,
            proposed_on: new.proposed_on,
            accepted_on: new.accepted_on,
            executed_on: new.executed_on,
            status: new.status,
            terms: new.terms,
            amount: new.amount,
        };
        t.alternatives.replace(alternative.clone());
        debug!(id = %id, status = %alternative.status, "alternative updated");
        Ok(alternative)
    }

    pub fn delete_alternative(&self, id: AlternativeId) -> Result<()> {
        let mut t = self.tables.write();
        if t.alternatives.remove(&id).is_none() {
            return Err(RegistryError::not_found(Alternative::KIND, id));
        }
        debug!(id = %id, "alternative deleted");
        Ok(())
    }
}

fn validate_alternative(new: &NewAlternative) -> Result<()> {
    require(Alternative::KIND, "terms", &new.terms)?;
    if let Some(amount) = new.amount {
        if amount < Decimal::ZERO {
            return Err(RegistryError::validation(
                Alternative::KIND,
                "amount",
                "must not be negative",
            ));
        }
    }
    Ok(())
}
