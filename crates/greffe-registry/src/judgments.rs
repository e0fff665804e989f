//! Decision and appeal-path operations.
//!
//! A dossier carries at most one decision, and its decision number is
//! unique registry-wide. An appeal path ties the decided dossier to the
//! dossier opened for the recourse; the review dossier belongs to at most
//! one path, while the original may be challenged several times.

use tracing::debug;

use greffe_core::{AppealId, DecisionId, DossierId, RegistryError, Timestamp};
use greffe_model::{AppealPath, Decision, NewAppealPath, NewDecision, Record};

use crate::{require, Registry, Result, Tables};

fn validate_decision(new: &NewDecision) -> Result<()> {
    require(Decision::KIND, "number", &new.number)?;
    require(Decision::KIND, "holding", &new.holding)?;
    require(Decision::KIND, "reasons", &new.reasons)?;
    Ok(())
}

impl Registry {
    // ─── Decisions ───────────────────────────────────────────────────────

    pub fn create_decision(&self, new: NewDecision) -> Result<Decision> {
        validate_decision(&new)?;
        let mut t = self.tables.write();
        if !t.dossiers.contains(&new.dossier) {
            return Err(RegistryError::dangling(Decision::KIND, "dossier", new.dossier));
        }
        check_decision_uniques(&t, &new, None)?;
        let now = Timestamp::now();
        let decision = Decision {
            id: DecisionId::new(),
            created_at: now,
            modified_at: now,
            active: true,
            dossier: new.dossier,
            kind: new.kind,
            number: new.number,
            ruled_on: new.ruled_on,
            read_on: new.read_on,
            sense: new.sense,
            holding: new.holding,
            reasons: new.reasons,
            adversarial: new.adversarial,
            enforceable: new.enforceable,
        };
        let seq = t.next_seq();
        t.decisions.insert(seq, decision.clone());
        debug!(id = %decision.id, number = %decision.number, "decision created");
        Ok(decision)
    }

    pub fn decision(&self, id: DecisionId) -> Result<Decision> {
        self.tables
            .read()
            .decisions
            .get(&id)
            .cloned()
            .ok_or_else(|| RegistryError::not_found(Decision::KIND, id))
    }

    /// Decisions in insertion order, optionally scoped to one dossier.
    pub fn decisions(&self, dossier: Option<DossierId>) -> Vec<Decision> {
        self.tables
            .read()
            .decisions
            .in_order()
            .into_iter()
            .filter(|d| dossier.map_or(true, |target| d.dossier == target))
            .cloned()
            .collect()
    }

    pub fn update_decision(&self, id: DecisionId, new: NewDecision) -> Result<Decision> {
        validate_decision(&new)?;
        let mut t = self.tables.write();
        let existing = t
            .decisions
            .get(&id)
            .cloned()
            .ok_or_else(|| RegistryError::not_found(Decision::KIND, id))?;
        if !t.dossiers.contains(&new.dossier) {
            return Err(RegistryError::dangling(Decision::KIND, "dossier", new.dossier));
        }
        check_decision_uniques(&t, &new, Some(id))?;
        let decision = Decision {
            id,
            created_at: existing.created_at,
            modified_at: Timestamp::now(),
            active: existing.active,
            dossier: new.dossier,
            kind: new.kind,
            number: new.number,
            ruled_on: new.ruled_on,
            read_on: new.read_on,
            sense: new.sense,
            holding: new.holding,
            reasons: new.reasons,
            adversarial: new.adversarial,
            enforceable: new.enforceable,
        };
        t.decisions.replace(decision.clone());
        debug!(id = %id, "decision updated");
        Ok(decision)
    }

    pub fn delete_decision(&self, id: DecisionId) -> Result<()> {
        let mut t = self.tables.write();
        if t.decisions.remove(&id).is_none() {
            return Err(RegistryError::not_found(Decision::KIND, id));
        }
        debug!(id = %id, "decision deleted");
        Ok(())
    }

    // ─── Appeal paths ────────────────────────────────────────────────────

    pub fn create_appeal_path(&self, new: NewAppealPath) -> Result<AppealPath> {
        require(AppealPath::KIND, "grounds", &new.grounds)?;
        let mut t = self.tables.write();
        check_appeal_refs(&t, &new)?;
        check_appeal_uniques(&t, &new, None)?;
        let now = Timestamp::now();
        let appeal = AppealPath {
            id: AppealId::new(),
            created_at: now,
            modified_at: now,
            active: true,
            original_dossier: new.original_dossier,
            appeal_dossier: new.appeal_dossier,
            kind: new.kind,
            appellate_court: new.appellate_court,
            lodged_on: new.lodged_on,
            status: new.status,
            grounds: new.grounds,
        };
        let seq = t.next_seq();
        t.appeals.insert(seq, appeal.clone());
        debug!(id = %appeal.id, kind = %appeal.kind, "appeal path created");
        Ok(appeal)
    }

    pub fn appeal_path(&self, id: AppealId) -> Result<AppealPath> {
        self.tables
            .read()
            .appeals
            .get(&id)
            .cloned()
            .ok_or_else(|| RegistryError::not_found(AppealPath::KIND, id))
    }

    /// Appeal paths in insertion order, optionally scoped to one dossier
    /// (matching on either side of the link).
    pub fn appeal_paths(&self, dossier: Option<DossierId>) -> Vec<AppealPath> {
        self.tables
            .read()
            .appeals
            .in_order()
            .into_iter()
            .filter(|a| {
                dossier.map_or(true, |d| a.original_dossier == d || a.appeal_dossier == d)
            })
            .cloned()
            .collect()
    }

    pub fn update_appeal_path(&self, id: AppealId, new: NewAppealPath) -> Result<AppealPath> {
        require(AppealPath::KIND, "grounds", &new.grounds)?;
        let mut t = self.tables.write();
        let existing = t
            .appeals
            .get(&id)
            .cloned()
            .ok_or_else(|| RegistryError::not_found(AppealPath::KIND, id))?;
        check_appeal_refs(&t, &new)?;
        check_appeal_uniques(&t, &new, Some(id))?;
        let appeal = AppealPath {
            id,
            created_at: existing.created_at,
            modified_at: Timestamp::now(),
            active: existing.active,
            original_dossier: new.original_dossier,
            appeal_dossier: new.appeal_dossier,
            kind: new.kind,
            appellate_court: new.appellate_court,
            lodged_on: new.lodged_on,
            status: new.status,
            grounds: new.grounds,
        };
        t.appeals.replace(appeal.clone());
        debug!(id = %id, status = %appeal.status, "appeal path updated");
        Ok(appeal)
    }

    pub fn delete_appeal_path(&self, id: AppealId) -> Result<()> {
        let mut t = self.tables.write();
        if t.appeals.remove(&id).is_none() {
            return Err(RegistryError::not_found(AppealPath::KIND, id));
        }
        debug!(id = %id, "appeal path deleted");
        Ok(())
    }
}

fn check_decision_uniques(t: &Tables, new: &NewDecision, excluding: Option<DecisionId>) -> Result<()> {
    for other in t.decisions.values() {
        if Some(other.id) == excluding {
            continue;
        }
        if other.dossier == new.dossier {
            return Err(RegistryError::conflict(
                Decision::KIND,
                "dossier",
                format!("{} already has a decision", new.dossier),
            ));
        }
        if other.number == new.number {
            return Err(RegistryError::conflict(
                Decision::KIND,
                "number",
                format!("decision number {:?} is already taken", new.number),
            ));
        }
    }
    Ok(())
}

fn check_appeal_refs(t: &Tables, new: &NewAppealPath) -> Result<()> {
    if !t.dossiers.contains(&new.original_dossier) {
        return Err(RegistryError::dangling(
            AppealPath::KIND,
            "original_dossier",
            new.original_dossier,
        ));
    }
    if !t.dossiers.contains(&new.appeal_dossier) {
        return Err(RegistryError::dangling(
            AppealPath::KIND,
            "appeal_dossier",
            new.appeal_dossier,
        ));
    }
    if new.original_dossier == new.appeal_dossier {
        return Err(RegistryError::validation(
            AppealPath::KIND,
            "appeal_dossier",
            "a dossier cannot be its own review",
        ));
    }
    if !t.courts.contains(&new.appellate_court) {
        return Err(RegistryError::dangling(
            AppealPath::KIND,
            "appellate_court",
            new.appellate_court,
        ));
    }
    Ok(())
}

fn check_appeal_uniques(t: &Tables, new: &NewAppealPath, excluding: Option<AppealId>) -> Result<()> {
    if t.appeals
        .values()
        .any(|a| Some(a.id) != excluding && a.appeal_dossier == new.appeal_dossier)
    {
        return Err(RegistryError::conflict(
            AppealPath::KIND,
            "appeal_dossier",
            format!("{} is already the review of another dossier", new.appeal_dossier),
        ));
    }
    Ok(())
}
