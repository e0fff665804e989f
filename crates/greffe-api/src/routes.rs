//! # Route Table — CRUD + List Endpoints per Entity
//!
//! Every registry entity gets the same five endpoints:
//!
//! - `POST   /v1/<plural>`      create, 201 with the stored record
//! - `GET    /v1/<plural>`      list in insertion order, paginated
//! - `GET    /v1/<plural>/:id`  point read
//! - `PUT    /v1/<plural>/:id`  full-payload replace
//! - `DELETE /v1/<plural>/:id`  delete, 204 on success
//!
//! The handler bodies are identical across entities, so they are stamped
//! out by the [`crud_routes!`] macro; the per-entity differences are the
//! payload/record types, the registry methods, and an optional list
//! filter (`?dossier=` on dossier-scoped children, `?court=` on offices,
//! `?magistrate=` on calendars). All semantics live in `greffe-registry`;
//! this layer only translates HTTP.

use axum::Router;

use crate::state::AppState;

/// Rows returned by a list endpoint when the client sends no `limit`.
pub const DEFAULT_LIMIT: usize = 100;
/// Hard ceiling on `limit`; larger requests are clamped, not rejected.
pub const MAX_LIMIT: usize = 1000;

pub(crate) fn effective_limit(requested: Option<usize>) -> usize {
    requested.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT)
}

pub(crate) fn effective_offset(requested: Option<usize>) -> usize {
    requested.unwrap_or(0)
}

/// Stamp out one entity's route module: query-parameter struct, the five
/// handlers, and a `router()` assembling them.
macro_rules! crud_routes {
    (
        $(#[$doc:meta])*
        mod $name:ident ($path:literal) {
            entity: $entity:ty,
            payload: $payload:ty,
            id: $id:ty,
            create: $create:ident,
            get: $get:ident,
            update: $update:ident,
            delete: $delete:ident,
            list: $list:ident $(( $filter:ident: $fid:ty ))?,
        }
    ) => {
        $(#[$doc])*
        pub mod $name {
            use axum::extract::rejection::JsonRejection;
            use axum::extract::{Path, Query, State};
            use axum::http::StatusCode;
            use axum::routing::get;
            use axum::{Json, Router};
            use uuid::Uuid;

            use crate::error::AppError;
            use crate::extractors::extract_json;
            use crate::state::AppState;

            #[derive(Debug, serde::Deserialize)]
            pub struct ListParams {
                pub limit: Option<usize>,
                pub offset: Option<usize>,
                $( pub $filter: Option<Uuid>, )?
            }

            pub fn router() -> Router<AppState> {
                Router::new()
                    .route($path, get(list).post(create))
                    .route(
                        concat!($path, "/:id"),
                        get(fetch).put(update).delete(remove),
                    )
            }

            async fn create(
                State(state): State<AppState>,
                body: Result<Json<$payload>, JsonRejection>,
            ) -> Result<(StatusCode, Json<$entity>), AppError> {
                let payload = extract_json(body)?;
                let record = state.registry.$create(payload)?;
                Ok((StatusCode::CREATED, Json(record)))
            }

            async fn list(
                State(state): State<AppState>,
                Query(params): Query<ListParams>,
            ) -> Json<Vec<$entity>> {
                let rows = state
                    .registry
                    .$list($( params.$filter.map(<$fid>::from) )?);
                Json(
                    rows.into_iter()
                        .skip(super::effective_offset(params.offset))
                        .take(super::effective_limit(params.limit))
                        .collect(),
                )
            }

            async fn fetch(
                State(state): State<AppState>,
                Path(id): Path<Uuid>,
            ) -> Result<Json<$entity>, AppError> {
                Ok(Json(state.registry.$get(<$id>::from(id))?))
            }

            async fn update(
                State(state): State<AppState>,
                Path(id): Path<Uuid>,
                body: Result<Json<$payload>, JsonRejection>,
            ) -> Result<Json<$entity>, AppError> {
                let payload = extract_json(body)?;
                Ok(Json(state.registry.$update(<$id>::from(id), payload)?))
            }

            async fn remove(
                State(state): State<AppState>,
                Path(id): Path<Uuid>,
            ) -> Result<StatusCode, AppError> {
                state.registry.$delete(<$id>::from(id))?;
                Ok(StatusCode::NO_CONTENT)
            }
        }
    };
}

// ─── Venues ──────────────────────────────────────────────────────────────

crud_routes! {
    /// Courts (judicial venues).
    mod courts ("/v1/courts") {
        entity: greffe_model::Court,
        payload: greffe_model::NewCourt,
        id: greffe_core::CourtId,
        create: create_court,
        get: court,
        update: update_court,
        delete: delete_court,
        list: courts,
    }
}

crud_routes! {
    /// Prosecution offices, filterable by parent court.
    mod offices ("/v1/offices") {
        entity: greffe_model::ProsecutionOffice,
        payload: greffe_model::NewProsecutionOffice,
        id: greffe_core::OfficeId,
        create: create_prosecution_office,
        get: prosecution_office,
        update: update_prosecution_office,
        delete: delete_prosecution_office,
        list: prosecution_offices(court: greffe_core::CourtId),
    }
}

// ─── People ──────────────────────────────────────────────────────────────

crud_routes! {
    /// Person accounts.
    mod users ("/v1/users") {
        entity: greffe_model::UserAccount,
        payload: greffe_model::NewUserAccount,
        id: greffe_core::UserId,
        create: create_user_account,
        get: user_account,
        update: update_user_account,
        delete: delete_user_account,
        list: user_accounts,
    }
}

crud_routes! {
    /// Magistrate profiles.
    mod magistrates ("/v1/magistrates") {
        entity: greffe_model::Magistrate,
        payload: greffe_model::NewMagistrate,
        id: greffe_core::MagistrateId,
        create: create_magistrate,
        get: magistrate,
        update: update_magistrate,
        delete: delete_magistrate,
        list: magistrates,
    }
}

crud_routes! {
    /// Lawyer profiles.
    mod lawyers ("/v1/lawyers") {
        entity: greffe_model::Lawyer,
        payload: greffe_model::NewLawyer,
        id: greffe_core::LawyerId,
        create: create_lawyer,
        get: lawyer,
        update: update_lawyer,
        delete: delete_lawyer,
        list: lawyers,
    }
}

crud_routes! {
    /// Parties to proceedings (natural or legal persons).
    mod parties ("/v1/parties") {
        entity: greffe_model::Party,
        payload: greffe_model::NewParty,
        id: greffe_core::PartyId,
        create: create_party,
        get: party,
        update: update_party,
        delete: delete_party,
        list: parties,
    }
}

// ─── Dossiers ────────────────────────────────────────────────────────────

crud_routes! {
    /// Case-nature taxonomy.
    mod natures ("/v1/natures") {
        entity: greffe_model::CaseNature,
        payload: greffe_model::NewCaseNature,
        id: greffe_core::CaseNatureId,
        create: create_case_nature,
        get: case_nature,
        update: update_case_nature,
        delete: delete_case_nature,
        list: case_natures,
    }
}

crud_routes! {
    /// Dossiers (case files).
    mod dossiers ("/v1/dossiers") {
        entity: greffe_model::Dossier,
        payload: greffe_model::NewDossier,
        id: greffe_core::DossierId,
        create: create_dossier,
        get: dossier,
        update: update_dossier,
        delete: delete_dossier,
        list: dossiers,
    }
}

crud_routes! {
    /// Party-in-case join records.
    mod case_parties ("/v1/case-parties") {
        entity: greffe_model::CaseParty,
        payload: greffe_model::NewCaseParty,
        id: greffe_core::CasePartyId,
        create: create_case_party,
        get: case_party,
        update: update_case_party,
        delete: delete_case_party,
        list: case_parties(dossier: greffe_core::DossierId),
    }
}

// ─── Proceedings ─────────────────────────────────────────────────────────

crud_routes! {
    /// Hearings.
    mod hearings ("/v1/hearings") {
        entity: greffe_model::Hearing,
        payload: greffe_model::NewHearing,
        id: greffe_core::HearingId,
        create: create_hearing,
        get: hearing,
        update: update_hearing,
        delete: delete_hearing,
        list: hearings(dossier: greffe_core::DossierId),
    }
}

crud_routes! {
    /// Magistrate availability slots, filterable by magistrate.
    mod calendars ("/v1/calendars") {
        entity: greffe_model::Calendar,
        payload: greffe_model::NewCalendar,
        id: greffe_core::CalendarId,
        create: create_calendar,
        get: calendar,
        update: update_calendar,
        delete: delete_calendar,
        list: calendars(magistrate: greffe_core::MagistrateId),
    }
}

crud_routes! {
    /// Staff assignments.
    mod assignments ("/v1/assignments") {
        entity: greffe_model::Assignment,
        payload: greffe_model::NewAssignment,
        id: greffe_core::AssignmentId,
        create: create_assignment,
        get: assignment,
        update: update_assignment,
        delete: delete_assignment,
        list: assignments(dossier: greffe_core::DossierId),
    }
}

// ─── Records ─────────────────────────────────────────────────────────────

crud_routes! {
    /// Document attachments.
    mod attachments ("/v1/attachments") {
        entity: greffe_model::Attachment,
        payload: greffe_model::NewAttachment,
        id: greffe_core::AttachmentId,
        create: create_attachment,
        get: attachment,
        update: update_attachment,
        delete: delete_attachment,
        list: attachments(dossier: greffe_core::DossierId),
    }
}

crud_routes! {
    /// Dossier notes. Listed newest first, unlike every other entity.
    mod notes ("/v1/notes") {
        entity: greffe_model::Note,
        payload: greffe_model::NewNote,
        id: greffe_core::NoteId,
        create: create_note,
        get: note,
        update: update_note,
        delete: delete_note,
        list: notes(dossier: greffe_core::DossierId),
    }
}

crud_routes! {
    /// Court fees.
    mod fees ("/v1/fees") {
        entity: greffe_model::Fee,
        payload: greffe_model::NewFee,
        id: greffe_core::FeeId,
        create: create_fee,
        get: fee,
        update: update_fee,
        delete: delete_fee,
        list: fees(dossier: greffe_core::DossierId),
    }
}

crud_routes! {
    /// Evidence items (scellés).
    mod evidence ("/v1/evidence") {
        entity: greffe_model::Evidence,
        payload: greffe_model::NewEvidence,
        id: greffe_core::EvidenceId,
        create: create_evidence,
        get: evidence,
        update: update_evidence,
        delete: delete_evidence,
        list: evidence_items(dossier: greffe_core::DossierId),
    }
}

// ─── Prosecution acts ────────────────────────────────────────────────────

crud_routes! {
    /// Prosecution requisitions.
    mod requisitions ("/v1/requisitions") {
        entity: greffe_model::Requisition,
        payload: greffe_model::NewRequisition,
        id: greffe_core::RequisitionId,
        create: create_requisition,
        get: requisition,
        update: update_requisition,
        delete: delete_requisition,
        list: requisitions(dossier: greffe_core::DossierId),
    }
}

crud_routes! {
    /// Investigation procedures.
    mod investigations ("/v1/investigations") {
        entity: greffe_model::Investigation,
        payload: greffe_model::NewInvestigation,
        id: greffe_core::InvestigationId,
        create: create_investigation,
        get: investigation,
        update: update_investigation,
        delete: delete_investigation,
        list: investigations(dossier: greffe_core::DossierId),
    }
}

crud_routes! {
    /// Case dismissal records.
    mod dismissals ("/v1/dismissals") {
        entity: greffe_model::Dismissal,
        payload: greffe_model::NewDismissal,
        id: greffe_core::DismissalId,
        create: create_dismissal,
        get: dismissal,
        update: update_dismissal,
        delete: delete_dismissal,
        list: dismissals(dossier: greffe_core::DossierId),
    }
}

crud_routes! {
    /// Alternatives to prosecution.
    mod alternatives ("/v1/alternatives") {
        entity: greffe_model::Alternative,
        payload: greffe_model::NewAlternative,
        id: greffe_core::AlternativeId,
        create: create_alternative,
        get: alternative,
        update: update_alternative,
        delete: delete_alternative,
        list: alternatives(dossier: greffe_core::DossierId),
    }
}

// ─── Judgments ───────────────────────────────────────────────────────────

crud_routes! {
    /// Decisions.
    mod decisions ("/v1/decisions") {
        entity: greffe_model::Decision,
        payload: greffe_model::NewDecision,
        id: greffe_core::DecisionId,
        create: create_decision,
        get: decision,
        update: update_decision,
        delete: delete_decision,
        list: decisions(dossier: greffe_core::DossierId),
    }
}

crud_routes! {
    /// Appeal paths. The `?dossier=` filter matches either side of the
    /// original/review link.
    mod appeals ("/v1/appeals") {
        entity: greffe_model::AppealPath,
        payload: greffe_model::NewAppealPath,
        id: greffe_core::AppealId,
        create: create_appeal_path,
        get: appeal_path,
        update: update_appeal_path,
        delete: delete_appeal_path,
        list: appeal_paths(dossier: greffe_core::DossierId),
    }
}

/// Merge every entity router into one table.
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(courts::router())
        .merge(offices::router())
        .merge(users::router())
        .merge(magistrates::router())
        .merge(lawyers::router())
        .merge(parties::router())
        .merge(natures::router())
        .merge(dossiers::router())
        .merge(case_parties::router())
        .merge(hearings::router())
        .merge(calendars::router())
        .merge(assignments::router())
        .merge(attachments::router())
        .merge(notes::router())
        .merge(fees::router())
        .merge(evidence::router())
        .merge(requisitions::router())
        .merge(investigations::router())
        .merge(dismissals::router())
        .merge(alternatives::router())
        .merge(decisions::router())
        .merge(appeals::router())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_defaults_and_clamps() {
        assert_eq!(effective_limit(None), DEFAULT_LIMIT);
        assert_eq!(effective_limit(Some(25)), 25);
        assert_eq!(effective_limit(Some(5_000)), MAX_LIMIT);
    }

    #[test]
    fn offset_defaults_to_zero() {
        assert_eq!(effective_offset(None), 0);
        assert_eq!(effective_offset(Some(40)), 40);
    }
}
