//! Filed-record operations: attachments, notes, fees, evidence.
//!
//! All four hang directly off a dossier and disappear with it. Notes are
//! the one list in the store served newest first.

use rust_decimal::Decimal;
use tracing::debug;

use greffe_core::{AttachmentId, DossierId, EvidenceId, FeeId, NoteId, RegistryError, Timestamp};
use greffe_model::{
    Attachment, Evidence, Fee, NewAttachment, NewEvidence, NewFee, NewNote, Note, Record,
};

use crate::{require, Registry, Result, Tables};

fn validate_attachment(new: &NewAttachment) -> Result<()> {
    require(Attachment::KIND, "title", &new.title)?;
    require(Attachment::KIND, "file_path", &new.file_path)?;
    Ok(())
}

fn validate_fee(new: &NewFee) -> Result<()> {
    if new.amount_due < Decimal::ZERO {
        return Err(RegistryError::validation(
            Fee::KIND,
            "amount_due",
            "must not be negative",
        ));
    }
    if new.amount_paid < Decimal::ZERO {
        return Err(RegistryError::validation(
            Fee::KIND,
            "amount_paid",
            "must not be negative",
        ));
    }
    Ok(())
}

fn validate_evidence(new: &NewEvidence) -> Result<()> {
    require(Evidence::KIND, "number", &new.number)?;
    require(Evidence::KIND, "description", &new.description)?;
    require(Evidence::KIND, "seized_by", &new.seized_by)?;
    Ok(())
}

impl Registry {
    // ─── Attachments ─────────────────────────────────────────────────────

    pub fn create_attachment(&self, new: NewAttachment) -> Result<Attachment> {
        validate_attachment(&new)?;
        let mut t = self.tables.write();
        check_attachment_refs(&t, &new)?;
        let now = Timestamp::now();
        let attachment = Attachment {
            id: AttachmentId::new(),
            created_at: now,
            modified_at: now,
            active: true,
            dossier: new.dossier,
            title: new.title,
            kind: new.kind,
            file_path: new.file_path,
            uploaded_by: new.uploaded_by,
            description: new.description,
            confidential: new.confidential,
            sequence_number: new.sequence_number,
        };
        let seq = t.next_seq();
        t.attachments.insert(seq, attachment.clone());
        debug!(id = %attachment.id, dossier = %attachment.dossier, "attachment created");
        Ok(attachment)
    }

    pub fn attachment(&self, id: AttachmentId) -> Result<Attachment> {
        self.tables
            .read()
            .attachments
            .get(&id)
            .cloned()
            .ok_or_else(|| RegistryError::not_found(Attachment::KIND, id))
    }

    /// Attachments in insertion order, optionally scoped to one dossier.
    pub fn attachments(&self, dossier: Option<DossierId>) -> Vec<Attachment> {
        self.tables
            .read()
            .attachments
            .in_order()
            .into_iter()
            .filter(|a| dossier.map_or(true, |d| a.dossier == d))
            .cloned()
            .collect()
    }

    pub fn update_attachment(&self, id: AttachmentId, new: NewAttachment) -> Result<Attachment> {
        validate_attachment(&new)?;
        let mut t = self.tables.write();
        let existing = t
            .attachments
            .get(&id)
            .cloned()
            .ok_or_else(|| RegistryError::not_found(Attachment::KIND, id))?;
        check_attachment_refs(&t, &new)?;
        let attachment = Attachment {
            id,
            created_at: existing.created_at,
            modified_at: Timestamp::now(),
            active: existing.active,
            dossier: new.dossier,
            title: new.title,
            kind: new.kind,
            file_path: new.file_path,
            uploaded_by: new.uploaded_by,
            description: new.description,
            confidential: new.confidential,
            sequence_number: new.sequence_number,
        };
        t.attachments.replace(attachment.clone());
        debug!(id = %id, "attachment updated");
        Ok(attachment)
    }

    pub fn delete_attachment(&self, id: AttachmentId) -> Result<()> {
        let mut t = self.tables.write();
        if t.attachments.remove(&id).is_none() {
            return Err(RegistryError::not_found(Attachment::KIND, id));
        }
        debug!(id = %id, "attachment deleted");
        Ok(())
    }

    // ─── Notes ───────────────────────────────────────────────────────────

    pub fn create_note(&self, new: NewNote) -> Result<Note> {
        require(Note::KIND, "body", &new.body)?;
        let mut t = self.tables.write();
        check_note_refs(&t, &new)?;
        let now = Timestamp::now();
        let note = Note {
            id: NoteId::new(),
            created_at: now,
            modified_at: now,
            active: true,
            dossier: new.dossier,
            author: new.author,
            body: new.body,
            public: new.public,
        };
        let seq = t.next_seq();
        t.notes.insert(seq, note.clone());
        debug!(id = %note.id, dossier = %note.dossier, "note created");
        Ok(note)
    }

    pub fn note(&self, id: NoteId) -> Result<Note> {
        self.tables
            .read()
            .notes
            .get(&id)
            .cloned()
            .ok_or_else(|| RegistryError::not_found(Note::KIND, id))
    }

    /// Notes newest first, optionally scoped to one dossier.
    pub fn notes(&self, dossier: Option<DossierId>) -> Vec<Note> {
        self.tables
            .read()
            .notes
            .newest_first()
            .into_iter()
            .filter(|n| dossier.map_or(true, |d| n.dossier == d))
            .cloned()
            .collect()
    }

    pub fn update_note(&self, id: NoteId, new: NewNote) -> Result<Note> {
        require(Note::KIND, "body", &new.body)?;
        let mut t = self.tables.write();
        let existing = t
            .notes
            .get(&id)
            .cloned()
            .ok_or_else(|| RegistryError::not_found(Note::KIND, id))?;
        check_note_refs(&t, &new)?;
        let note = Note {
            id,
            created_at: existing.created_at,
            modified_at: Timestamp::now(),
            active: existing.active,
            dossier: new.dossier,
            author: new.author,
            body: new.body,
            public: new.public,
        };
        t.notes.replace(note.clone());
        debug!(id = %id, "note updated");
        Ok(note)
    }

    pub fn delete_note(&self, id: NoteId) -> Result<()> {
        let mut t = self.tables.write();
        if t.notes.remove(&id).is_none() {
            return Err(RegistryError::not_found(Note::KIND, id));
        }
        debug!(id = %id, "note deleted");
        Ok(())
    }

    // ─── Fees ────────────────────────────────────────────────────────────

    pub fn create_fee(&self, new: NewFee) -> Result<Fee> {
        validate_fee(&new)?;
        let mut t = self.tables.write();
        if !t.dossiers.contains(&new.dossier) {
            return Err(RegistryError::dangling(Fee::KIND, "dossier", new.dossier));
        }
        let now = Timestamp::now();
        let fee = Fee {
            id: FeeId::new(),
            created_at: now,
            modified_at: now,
            active: true,
            dossier: new.dossier,
            kind: new.kind,
            amount_due: new.amount_due,
            amount_paid: new.amount_paid,
            due_on: new.due_on,
            paid_on: new.paid_on,
            status: new.status,
            payment_method: new.payment_method,
            receipt_number: new.receipt_number,
        };
        let seq = t.next_seq();
        t.fees.insert(seq, fee.clone());
        debug!(id = %fee.id, dossier = %fee.dossier, "fee created");
        Ok(fee)
    }

    pub fn fee(&self, id: FeeId) -> Result<Fee> {
        self.tables
            .read()
            .fees
            .get(&id)
            .cloned()
            .ok_or_else(|| RegistryError::not_found(Fee::KIND, id))
    }

    /// Fees in insertion order, optionally scoped to one dossier.
    pub fn fees(&self, dossier: Option<DossierId>) -> Vec<Fee> {
        self.tables
            .read()
            .fees
            .in_order()
            .into_iter()
            .filter(|f| dossier.map_or(true, |d| f.dossier == d))
            .cloned()
            .collect()
    }

    pub fn update_fee(&self, id: FeeId, new: NewFee) -> Result<Fee> {
        validate_fee(&new)?;
        let mut t = self.tables.write();
        let existing = t
            .fees
            .get(&id)
            .cloned()
            .ok_or_else(|| RegistryError::not_found(Fee::KIND, id))?;
        if !t.dossiers.contains(&new.dossier) {
            return Err(RegistryError::dangling(Fee::KIND, "dossier", new.dossier));
        }
        let fee = Fee {
            id,
            created_at: existing.created_at,
            modified_at: Timestamp::now(),
            active: existing.active,
            dossier: new.dossier,
            kind: new.kind,
            amount_due: new.amount_due,
            amount_paid: new.amount_paid,
            due_on: new.due_on,
            paid_on: new.paid_on,
            status: new.status,
            payment_method: new.payment_method,
            receipt_number: new.receipt_number,
        };
        t.fees.replace(fee.clone());
        debug!(id = %id, status = %fee.status, "fee updated");
        Ok(fee)
    }

    pub fn delete_fee(&self, id: FeeId) -> Result<()> {
        let mut t = self.tables.write();
        if t.fees.remove(&id).is_none() {
            return Err(RegistryError::not_found(Fee::KIND, id));
        }
        debug!(id = %id, "fee deleted");
        Ok(())
    }

    // ─── Evidence ────────────────────────────────────────────────────────

    pub fn create_evidence(&self, new: NewEvidence) -> Result<Evidence> {
        validate_evidence(&new)?;
        let mut t = self.tables.write();
        if !t.dossiers.contains(&new.dossier) {
            return Err(RegistryError::dangling(Evidence::KIND, "dossier", new.dossier));
        }
        check_evidence_number(&t, &new, None)?;
        let now = Timestamp::now();
        let evidence = Evidence {
            id: EvidenceId::new(),
            created_at: now,
            modified_at: now,
            active: true,
            dossier: new.dossier,
            number: new.number,
            kind: new.kind,
            description: new.description,
            seized_on: new.seized_on,
            seized_by: new.seized_by,
            storage_location: new.storage_location,
            custody_chain: new.custody_chain,
            produced_in_court: new.produced_in_court,
        };
        let seq = t.next_seq();
        t.evidence.insert(seq, evidence.clone());
        debug!(id = %evidence.id, number = %evidence.number, "evidence created");
        Ok(evidence)
    }

    pub fn evidence(&self, id: EvidenceId) -> Result<Evidence> {
        self.tables
            .read()
            .evidence
            .get(&id)
            .cloned()
            .ok_or_else(|| RegistryError::not_found(Evidence::KIND, id))
    }

    /// Evidence items in insertion order, optionally scoped to one
    /// dossier.
    pub fn evidence_items(&self, dossier: Option<DossierId>) -> Vec<Evidence> {
        self.tables
            .read()
            .evidence
            .in_order()
            .into_iter()
            .filter(|e| dossier.map_or(true, |d| e.dossier == d))
            .cloned()
            .collect()
    }

    pub fn update_evidence(&self, id: EvidenceId, new: NewEvidence) -> Result<Evidence> {
        validate_evidence(&new)?;
        let mut t = self.tables.write();
        let existing = t
            .evidence
            .get(&id)
            .cloned()
            .ok_or_else(|| RegistryError::not_found(Evidence::KIND, id))?;
        if !t.dossiers.contains(&new.dossier) {
            return Err(RegistryError::dangling(Evidence::KIND, "dossier", new.dossier));
        }
        check_evidence_number(&t, &new, Some(id))?;
        let evidence = Evidence {
            id,
            created_at: existing.created_at,
            modified_at: Timestamp::now(),
            active: existing.active,
            dossier: new.dossier,
            number: new.number,
            kind: new.kind,
            description: new.description,
            seized_on: new.seized_on,
            seized_by: new.seized_by,
            storage_location: new.storage_location,
            custody_chain: new.custody_chain,
            produced_in_court: new.produced_in_court,
        };
        t.evidence.replace(evidence.clone());
        debug!(id = %id, "evidence updated");
        Ok(evidence)
    }

    pub fn delete_evidence(&self, id: EvidenceId) -> Result<()> {
        let mut t = self.tables.write();
        if t.evidence.remove(&id).is_none() {
            return Err(RegistryError::not_found(Evidence::KIND, id));
        }
        debug!(id = %id, "evidence deleted");
        Ok(())
    }
}

fn check_attachment_refs(t: &Tables, new: &NewAttachment) -> Result<()> {
    if !t.dossiers.contains(&new.dossier) {
        return Err(RegistryError::dangling(
            Attachment::KIND,
            "dossier",
            new.dossier,
        ));
    }
    if let Some(user) = new.uploaded_by {
        if !t.users.contains(&user) {
            return Err(RegistryError::dangling(
                Attachment::KIND,
                "uploaded_by",
                user,
            ));
        }
    }
    Ok(())
}

fn check_note_refs(t: &Tables, new: &NewNote) -> Result<()> {
    if !t.dossiers.contains(&new.dossier) {
        return Err(RegistryError::dangling(Note::KIND, "dossier", new.dossier));
    }
    if let Some(user) = new.author {
        if !t.users.contains(&user) {
            return Err(RegistryError::dangling(Note::KIND, "author", user));
        }
    }
    Ok(())
}

fn check_evidence_number(t: &Tables, new: &NewEvidence, excluding: Option<EvidenceId>) -> Result<()> {
    if t.evidence
        .values()
        .any(|e| Some(e.id) != excluding && e.dossier == new.dossier && e.number == new.number)
    {
        return Err(RegistryError::conflict(
            Evidence::KIND,
            "(dossier, number)",
            format!("exhibit number {:?} already exists in {}", new.number, new.dossier),
        ));
    }
    Ok(())
}
