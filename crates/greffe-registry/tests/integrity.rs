//! End-to-end constraint coverage: uniqueness indexes, protected and
//! cascading deletes, nullified references, and list ordering, exercised
//! through the public registry surface.

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use greffe_core::{CourtId, DossierId, MagistrateId, OfficeId, UserId};
use greffe_model::{
    AttachmentKind, CourtKind, DismissalGround, EvidenceKind, FeeKind, HearingKind, LegalMatter,
    MagistrateKind, NewAppealPath, NewAttachment, NewCalendar, NewCaseNature, NewCaseParty,
    NewCourt, NewDecision, NewDismissal, NewDossier, NewEvidence, NewFee, NewHearing,
    NewMagistrate, NewNote, NewParty, NewProsecutionOffice, NewUserAccount, OfficeKind, PartyRole,
    RulingSense, DecisionKind, AppealKind,
};
use greffe_registry::Registry;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

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

fn new_office(court: CourtId) -> NewProsecutionOffice {
    NewProsecutionOffice {
        name: "Parquet de Thiès".to_string(),
        kind: OfficeKind::HighCourt,
        court,
        address: "Place de Justice".to_string(),
        phone: None,
        email: None,
        territorial_scope: "Thiès".to_string(),
        subject_matter_scope: None,
    }
}

fn new_user(username: &str) -> NewUserAccount {
    NewUserAccount {
        username: username.to_string(),
        full_name: "Mame Sarr".to_string(),
        email: None,
    }
}

fn new_magistrate(user: UserId, number: &str) -> NewMagistrate {
    NewMagistrate {
        user,
        employee_number: number.to_string(),
        kind: MagistrateKind::Bench,
        court: None,
        office: None,
        phone: None,
        speciality: None,
        appointed_on: date(2015, 9, 1),
        bench_grade: None,
        prosecution_grade: None,
    }
}

fn new_party(last_name: &str) -> NewParty {
    NewParty {
        first_name: "Awa".to_string(),
        last_name: last_name.to_string(),
        used_name: None,
        born_on: None,
        birthplace: None,
        phone: None,
        email: None,
        address: "12 rue du Port".to_string(),
        identification_number: None,
        is_legal_entity: false,
        corporate_name: None,
        legal_form: None,
    }
}

fn new_dossier(number: &str, nature: greffe_core::CaseNatureId, court: CourtId) -> NewDossier {
    NewDossier {
        registry_number: number.to_string(),
        office_number: None,
        investigation_number: None,
        title: "Diallo c. Kane".to_string(),
        subject: "Recouvrement de créance".to_string(),
        nature,
        court,
        office: None,
        bench_magistrate: None,
        prosecution_magistrate: None,
        status: Default::default(),
        urgency: Default::default(),
        registered_on: date(2025, 3, 14),
        closed_on: None,
        estimated_days: None,
        chamber: None,
        confidential: false,
    }
}

/// Court + nature + one dossier, the minimum live case file.
struct CaseFixture {
    registry: Registry,
    court: CourtId,
    dossier: DossierId,
}

fn case_fixture() -> CaseFixture {
    let registry = Registry::new();
    let court = registry.create_court(new_court("TGI de Thiès")).unwrap();
    let nature = registry
        .create_case_nature(NewCaseNature {
            name: "Recouvrement".to_string(),
            code: "REC".to_string(),
            matter: LegalMatter::Civil,
            description: None,
        })
        .unwrap();
    let dossier = registry
        .create_dossier(new_dossier("RG-2025-0001", nature.id, court.id))
        .unwrap();
    CaseFixture {
        registry,
        court: court.id,
        dossier: dossier.id,
    }
}

fn add_magistrate(registry: &Registry, username: &str, number: &str) -> MagistrateId {
    let user = registry.create_user_account(new_user(username)).unwrap();
    registry
        .create_magistrate(new_magistrate(user.id, number))
        .unwrap()
        .id
}

fn add_office(registry: &Registry, court: CourtId) -> OfficeId {
    registry.create_prosecution_office(new_office(court)).unwrap().id
}

// ── uniqueness ──

#[test]
fn test_duplicate_case_party_triple_conflicts() {
    let fx = case_fixture();
    let party = fx.registry.create_party(new_party("Diallo")).unwrap();
    let involvement = NewCaseParty {
        dossier: fx.dossier,
        party: party.id,
        role: PartyRole::Claimant,
        lawyer: None,
        retained_on: date(2025, 3, 15),
        remarks: None,
    };
    fx.registry.create_case_party(involvement.clone()).unwrap();
    let err = fx.registry.create_case_party(involvement.clone()).unwrap_err();
    assert!(err.is_conflict());

    // Same pair under a different role is a distinct involvement.
    let mut as_witness = involvement;
    as_witness.role = PartyRole::Witness;
    assert!(fx.registry.create_case_party(as_witness).is_ok());
}

#[test]
fn test_duplicate_calendar_slot_conflicts() {
    let fx = case_fixture();
    let mag_a = add_magistrate(&fx.registry, "juge-a", "M-001");
    let mag_b = add_magistrate(&fx.registry, "juge-b", "M-002");
    let slot = NewCalendar {
        date: date(2025, 6, 2),
        court: fx.court,
        magistrate: mag_a,
        available: true,
        remarks: None,
    };
    fx.registry.create_calendar(slot.clone()).unwrap();
    assert!(fx.registry.create_calendar(slot.clone()).unwrap_err().is_conflict());

    // Same date and court with another magistrate is fine.
    let mut other = slot;
    other.magistrate = mag_b;
    assert!(fx.registry.create_calendar(other).is_ok());
}

#[test]
fn test_duplicate_evidence_number_conflicts() {
    let fx = case_fixture();
    let item = NewEvidence {
        dossier: fx.dossier,
        number: "SC-001".to_string(),
        kind: EvidenceKind::SeizedDocument,
        description: "Registre comptable".to_string(),
        seized_on: date(2025, 2, 11),
        seized_by: "OPJ Kouadio".to_string(),
        storage_location: None,
        custody_chain: String::new(),
        produced_in_court: false,
    };
    fx.registry.create_evidence(item.clone()).unwrap();
    assert!(fx.registry.create_evidence(item).unwrap_err().is_conflict());
}

#[test]
fn test_registry_number_unique_on_update_but_self_ok() {
    let fx = case_fixture();
    let first = fx.registry.dossiers().remove(0);
    let second = fx
        .registry
        .create_dossier(new_dossier("RG-2025-0002", first.nature, fx.court))
        .unwrap();

    // Renaming to a taken number conflicts.
    let mut renamed = new_dossier("RG-2025-0001", first.nature, fx.court);
    renamed.title = second.title.clone();
    assert!(fx
        .registry
        .update_dossier(second.id, renamed)
        .unwrap_err()
        .is_conflict());

    // Re-writing a dossier under its own number succeeds.
    let keep = new_dossier("RG-2025-0002", first.nature, fx.court);
    assert!(fx.registry.update_dossier(second.id, keep).is_ok());
}

#[test]
fn test_decision_one_per_dossier_and_unique_number() {
    let fx = case_fixture();
    let nature = fx.registry.dossiers().remove(0).nature;
    let other = fx
        .registry
        .create_dossier(new_dossier("RG-2025-0003", nature, fx.court))
        .unwrap();
    let decision = NewDecision {
        dossier: fx.dossier,
        kind: DecisionKind::Judgment,
        number: "J-2025-118".to_string(),
        ruled_on: date(2025, 6, 20),
        read_on: None,
        sense: RulingSense::Denied,
        holding: "Déboute le demandeur.".to_string(),
        reasons: "Créance non établie.".to_string(),
        adversarial: true,
        enforceable: false,
    };
    fx.registry.create_decision(decision.clone()).unwrap();

    // Second decision on the same dossier.
    let mut again = decision.clone();
    again.number = "J-2025-119".to_string();
    assert!(fx.registry.create_decision(again).unwrap_err().is_conflict());

    // Same number on another dossier.
    let mut reused = decision;
    reused.dossier = other.id;
    assert!(fx.registry.create_decision(reused).unwrap_err().is_conflict());
}

// ── delete semantics ──

#[test]
fn test_court_protected_by_dossier_but_not_by_magistrate() {
    let fx = case_fixture();
    let err = fx.registry.delete_court(fx.court).unwrap_err();
    assert!(err.is_conflict());

    // A court referenced only through a magistrate's optional attachment
    // deletes, nulling the reference.
    let spare = fx.registry.create_court(new_court("TGI de Kaolack")).unwrap();
    let user = fx.registry.create_user_account(new_user("juge-k")).unwrap();
    let mut new_mag = new_magistrate(user.id, "M-010");
    new_mag.court = Some(spare.id);
    let magistrate = fx.registry.create_magistrate(new_mag).unwrap();
    fx.registry.delete_court(spare.id).unwrap();
    assert_eq!(fx.registry.magistrate(magistrate.id).unwrap().court, None);
}

#[test]
fn test_dossier_delete_cascades_children() {
    let fx = case_fixture();
    let magistrate = add_magistrate(&fx.registry, "juge-c", "M-020");
    let hearing = fx
        .registry
        .create_hearing(NewHearing {
            dossier: fx.dossier,
            kind: HearingKind::Pleading,
            scheduled_at: greffe_core::Timestamp::now(),
            started_at: None,
            ended_at: None,
            room: "Salle 3".to_string(),
            magistrate,
            status: Default::default(),
            remarks: None,
            public: true,
        })
        .unwrap();
    let note = fx
        .registry
        .create_note(NewNote {
            dossier: fx.dossier,
            author: None,
            body: "Vérifier la signification.".to_string(),
            public: false,
        })
        .unwrap();
    let fee = fx
        .registry
        .create_fee(NewFee {
            dossier: fx.dossier,
            kind: FeeKind::CourtFee,
            amount_due: dec!(15000),
            amount_paid: dec!(0),
            due_on: date(2025, 4, 1),
            paid_on: None,
            status: Default::default(),
            payment_method: None,
            receipt_number: None,
        })
        .unwrap();
    let attachment = fx
        .registry
        .create_attachment(NewAttachment {
            dossier: fx.dossier,
            title: "Assignation".to_string(),
            kind: AttachmentKind::Writ,
            file_path: "dossiers/rg-2025-0001/assignation.pdf".to_string(),
            uploaded_by: None,
            description: None,
            confidential: false,
            sequence_number: Some("1".to_string()),
        })
        .unwrap();

    fx.registry.delete_dossier(fx.dossier).unwrap();
    assert!(fx.registry.hearing(hearing.id).unwrap_err().is_not_found());
    assert!(fx.registry.note(note.id).unwrap_err().is_not_found());
    assert!(fx.registry.fee(fee.id).unwrap_err().is_not_found());
    assert!(fx.registry.attachment(attachment.id).unwrap_err().is_not_found());
}

#[test]
fn test_attachment_without_exhibit_number_accepted() {
    let fx = case_fixture();
    let attachment = fx
        .registry
        .create_attachment(NewAttachment {
            dossier: fx.dossier,
            title: "Conclusions".to_string(),
            kind: AttachmentKind::Pleadings,
            file_path: "dossiers/rg-2025-0001/conclusions.pdf".to_string(),
            uploaded_by: None,
            description: None,
            confidential: false,
            sequence_number: None,
        })
        .unwrap();
    assert!(attachment.sequence_number.is_none());
}

#[test]
fn test_magistrate_protected_by_hearings_then_deletable() {
    let fx = case_fixture();
    let magistrate = add_magistrate(&fx.registry, "juge-d", "M-030");
    let hearing = fx
        .registry
        .create_hearing(NewHearing {
            dossier: fx.dossier,
            kind: HearingKind::PreTrial,
            scheduled_at: greffe_core::Timestamp::now(),
            started_at: None,
            ended_at: None,
            room: "Salle 1".to_string(),
            magistrate,
            status: Default::default(),
            remarks: None,
            public: true,
        })
        .unwrap();
    assert!(fx.registry.delete_magistrate(magistrate).unwrap_err().is_conflict());

    fx.registry.delete_hearing(hearing.id).unwrap();
    fx.registry.delete_magistrate(magistrate).unwrap();
    assert!(fx.registry.magistrate(magistrate).unwrap_err().is_not_found());
}

#[test]
fn test_office_delete_cascades_acts_and_nulls_dossier() {
    let fx = case_fixture();
    let office = add_office(&fx.registry, fx.court);
    let magistrate = add_magistrate(&fx.registry, "proc-1", "M-040");
    let dismissal = fx
        .registry
        .create_dismissal(NewDismissal {
            dossier: fx.dossier,
            office,
            magistrate,
            ground: DismissalGround::InsufficientEvidence,
            decided_on: date(2025, 5, 2),
            reasons: "Charges insuffisantes.".to_string(),
            parties_notified: false,
            notified_on: None,
        })
        .unwrap();

    // Point the dossier at the office, then delete the office.
    let first = fx.registry.dossier(fx.dossier).unwrap();
    let mut rewrite = new_dossier(&first.registry_number, first.nature, first.court);
    rewrite.office = Some(office);
    fx.registry.update_dossier(fx.dossier, rewrite).unwrap();

    fx.registry.delete_prosecution_office(office).unwrap();
    assert!(fx.registry.dismissal(dismissal.id).unwrap_err().is_not_found());
    assert_eq!(fx.registry.dossier(fx.dossier).unwrap().office, None);
}

#[test]
fn test_user_delete_blocked_by_presiding_magistrate() {
    let fx = case_fixture();
    let user = fx.registry.create_user_account(new_user("juge-e")).unwrap();
    let magistrate = fx
        .registry
        .create_magistrate(new_magistrate(user.id, "M-050"))
        .unwrap();
    fx.registry
        .create_hearing(NewHearing {
            dossier: fx.dossier,
            kind: HearingKind::Judgment,
            scheduled_at: greffe_core::Timestamp::now(),
            started_at: None,
            ended_at: None,
            room: "Salle 2".to_string(),
            magistrate: magistrate.id,
            status: Default::default(),
            remarks: None,
            public: true,
        })
        .unwrap();
    assert!(fx.registry.delete_user_account(user.id).unwrap_err().is_conflict());
}

#[test]
fn test_user_delete_nulls_note_author_and_cascades_assignments() {
    let fx = case_fixture();
    let user = fx.registry.create_user_account(new_user("greffier-1")).unwrap();
    let note = fx
        .registry
        .create_note(NewNote {
            dossier: fx.dossier,
            author: Some(user.id),
            body: "Mise au rôle effectuée.".to_string(),
            public: false,
        })
        .unwrap();
    let assignment = fx
        .registry
        .create_assignment(greffe_model::NewAssignment {
            dossier: fx.dossier,
            assignee: user.id,
            role: greffe_model::StaffRole::Clerk,
            assigned_on: date(2025, 3, 20),
            remarks: None,
        })
        .unwrap();

    fx.registry.delete_user_account(user.id).unwrap();
    assert_eq!(fx.registry.note(note.id).unwrap().author, None);
    assert!(fx.registry.assignment(assignment.id).unwrap_err().is_not_found());
}

#[test]
fn test_appeal_path_protects_appellate_court_and_follows_dossiers() {
    let fx = case_fixture();
    let appellate = fx.registry.create_court(new_court("Cour d'appel")).unwrap();
    let nature = fx.registry.dossier(fx.dossier).unwrap().nature;
    let review = fx
        .registry
        .create_dossier(new_dossier("RG-2025-0009", nature, fx.court))
        .unwrap();
    let path = fx
        .registry
        .create_appeal_path(NewAppealPath {
            original_dossier: fx.dossier,
            appeal_dossier: review.id,
            kind: AppealKind::Appeal,
            appellate_court: appellate.id,
            lodged_on: date(2025, 7, 1),
            status: Default::default(),
            grounds: "Violation de la loi.".to_string(),
        })
        .unwrap();

    assert!(fx.registry.delete_court(appellate.id).unwrap_err().is_conflict());

    // Deleting the review dossier removes the path, freeing the court.
    fx.registry.delete_dossier(review.id).unwrap();
    assert!(fx.registry.appeal_path(path.id).unwrap_err().is_not_found());
    fx.registry.delete_court(appellate.id).unwrap();
}

// ── ordering and envelope ──

#[test]
fn test_notes_list_newest_first() {
    let fx = case_fixture();
    for body in ["première", "deuxième", "troisième"] {
        fx.registry
            .create_note(NewNote {
                dossier: fx.dossier,
                author: None,
                body: body.to_string(),
                public: false,
            })
            .unwrap();
    }
    let bodies: Vec<String> = fx
        .registry
        .notes(Some(fx.dossier))
        .into_iter()
        .map(|n| n.body)
        .collect();
    assert_eq!(bodies, ["troisième", "deuxième", "première"]);
}

#[test]
fn test_update_refreshes_modified_preserves_created() {
    let fx = case_fixture();
    let before = fx.registry.dossier(fx.dossier).unwrap();
    let rewrite = new_dossier(&before.registry_number, before.nature, before.court);
    let after = fx.registry.update_dossier(fx.dossier, rewrite).unwrap();
    assert_eq!(after.created_at, before.created_at);
    assert_eq!(after.active, before.active);
    assert!(after.modified_at >= before.modified_at);
}

#[test]
fn test_dangling_dossier_reference_rejected() {
    let fx = case_fixture();
    let err = fx
        .registry
        .create_note(NewNote {
            dossier: DossierId::new(),
            author: None,
            body: "orphan".to_string(),
            public: false,
        })
        .unwrap_err();
    assert!(matches!(err, greffe_core::RegistryError::DanglingReference { .. }));
}
