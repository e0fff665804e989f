//! # greffe-api — Axum REST Layer for the Greffe Stack
//!
//! A thin HTTP translation over `greffe-registry`: every entity gets the
//! same CRUD+list surface under `/v1`, registry errors map to HTTP status
//! codes, and the registry itself remains the single source of validation
//! and referential-integrity rules.
//!
//! ## API Surface
//!
//! | Prefix               | Domain                                   |
//! |----------------------|------------------------------------------|
//! | `/v1/courts`         | Courts                                   |
//! | `/v1/offices`        | Prosecution offices (`?court=`)          |
//! | `/v1/users`          | Person accounts                          |
//! | `/v1/magistrates`    | Magistrate profiles                      |
//! | `/v1/lawyers`        | Lawyer profiles                          |
//! | `/v1/parties`        | Parties to proceedings                   |
//! | `/v1/natures`        | Case-nature taxonomy                     |
//! | `/v1/dossiers`       | Case files                               |
//! | `/v1/case-parties`   | Party-in-case joins (`?dossier=`)        |
//! | `/v1/hearings`       | Hearings (`?dossier=`)                   |
//! | `/v1/calendars`      | Availability slots (`?magistrate=`)      |
//! | `/v1/assignments`    | Staff assignments (`?dossier=`)          |
//! | `/v1/attachments`    | Document attachments (`?dossier=`)       |
//! | `/v1/notes`          | Dossier notes (`?dossier=`)              |
//! | `/v1/fees`           | Court fees (`?dossier=`)                 |
//! | `/v1/evidence`       | Evidence items (`?dossier=`)             |
//! | `/v1/requisitions`   | Requisitions (`?dossier=`)               |
//! | `/v1/investigations` | Investigations (`?dossier=`)             |
//! | `/v1/dismissals`     | Dismissals (`?dossier=`)                 |
//! | `/v1/alternatives`   | Alternatives to prosecution (`?dossier=`)|
//! | `/v1/decisions`      | Decisions (`?dossier=`)                  |
//! | `/v1/appeals`        | Appeal paths (`?dossier=`)               |
//!
//! `/health` is mounted outside the API router and carries no state.

pub mod error;
pub mod extractors;
pub mod routes;
pub mod state;

use axum::extract::DefaultBodyLimit;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Assemble the full application router.
///
/// Body size limit: 2 MiB. Attachments travel as file-path references,
/// not inline content, so no legitimate payload approaches this.
pub fn app(state: AppState) -> Router {
    let api = routes::router()
        .layer(DefaultBodyLimit::max(2 * 1024 * 1024))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Router::new()
        .route("/health", axum::routing::get(health))
        .merge(api)
}

/// Liveness probe. The registry has no external dependencies, so a
/// running process is a healthy process.
async fn health() -> &'static str {
    "ok"
}
