//! End-to-end handler tests driven through `tower::ServiceExt::oneshot`.
//!
//! Each test builds a fresh app over an empty registry, so tests share
//! nothing and can run in parallel.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use greffe_api::state::AppState;

fn app() -> Router {
    greffe_api::app(AppState::new())
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = match body {
        Some(value) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

fn court_payload(name: &str) -> Value {
    json!({
        "name": name,
        "kind": "TGI",
        "jurisdiction": "Kinshasa/Gombe",
        "address": "Avenue de la Justice 1",
    })
}

async fn create(app: &Router, uri: &str, payload: Value) -> Value {
    let (status, body) = send(app, Method::POST, uri, Some(payload)).await;
    assert_eq!(status, StatusCode::CREATED, "create {uri} failed: {body}");
    body
}

/// Create a court, a nature, and a dossier; returns (court, dossier) ids.
async fn seed_dossier(app: &Router, registry_number: &str) -> (String, String) {
    let court = create(app, "/v1/courts", court_payload("TGI Gombe")).await;
    let court_id = court["id"].as_str().unwrap().to_string();
    let nature = create(
        app,
        "/v1/natures",
        json!({
            "name": format!("Recouvrement {registry_number}"),
            "code": format!("RC-{registry_number}"),
            "matter": "CIVILE",
        }),
    )
    .await;
    let dossier = create(
        app,
        "/v1/dossiers",
        json!({
            "registry_number": registry_number,
            "title": "Mbala c. Kasongo",
            "subject": "Recouvrement de créance",
            "nature": nature["id"],
            "court": court_id,
            "registered_on": "2026-03-02",
        }),
    )
    .await;
    (court_id, dossier["id"].as_str().unwrap().to_string())
}

// ── basics ───────────────────────────────────────────────────

#[tokio::test]
async fn health_is_unauthenticated() {
    let app = app();
    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"ok");
}

#[tokio::test]
async fn create_returns_stored_record() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/v1/courts",
        Some(court_payload("TGI Gombe")),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(body["id"].as_str().is_some());
    assert_eq!(body["name"], "TGI Gombe");
    assert_eq!(body["active"], true);
    assert!(body["created_at"].as_str().is_some());
}

#[tokio::test]
async fn fetch_unknown_id_is_404() {
    let app = app();
    let uri = format!("/v1/courts/{}", uuid::Uuid::new_v4());
    let (status, body) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
    assert!(body["error"]["message"].as_str().is_some());
}

// ── error mapping ────────────────────────────────────────────

#[tokio::test]
async fn malformed_json_is_422() {
    let app = app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/v1/courts")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn blank_required_field_is_422() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/v1/courts",
        Some(json!({
            "name": "  ",
            "kind": "TGI",
            "jurisdiction": "Kinshasa/Gombe",
            "address": "Avenue de la Justice 1",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn duplicate_username_is_409() {
    let app = app();
    let payload = json!({"username": "greffier1", "full_name": "Alphonse Ilunga"});
    create(&app, "/v1/users", payload.clone()).await;
    let (status, body) = send(&app, Method::POST, "/v1/users", Some(payload)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "CONFLICT");
}

#[tokio::test]
async fn dangling_reference_is_422() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/v1/dossiers",
        Some(json!({
            "registry_number": "RC 001/2026",
            "title": "Mbala c. Kasongo",
            "subject": "Recouvrement de créance",
            "nature": uuid::Uuid::new_v4(),
            "court": uuid::Uuid::new_v4(),
            "registered_on": "2026-03-02",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn protected_delete_is_409() {
    let app = app();
    let (court_id, _) = seed_dossier(&app, "RC 002/2026").await;
    let (status, body) = send(&app, Method::DELETE, &format!("/v1/courts/{court_id}"), None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "CONFLICT");
}

// ── full lifecycle ───────────────────────────────────────────

#[tokio::test]
async fn dossier_crud_lifecycle() {
    let app = app();
    let (court_id, dossier_id) = seed_dossier(&app, "RC 003/2026").await;

    // Point read.
    let (status, body) = send(&app, Method::GET, &format!("/v1/dossiers/{dossier_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["registry_number"], "RC 003/2026");
    assert_eq!(body["status"], "ENREGISTRE");

    // Full replace changes the title and refreshes modified_at, but the
    // identifier and creation stamp survive.
    let nature_id = body["nature"].clone();
    let (status, updated) = send(
        &app,
        Method::PUT,
        &format!("/v1/dossiers/{dossier_id}"),
        Some(json!({
            "registry_number": "RC 003/2026",
            "title": "Mbala c. Kasongo et crts",
            "subject": "Recouvrement de créance",
            "nature": nature_id,
            "court": court_id,
            "status": "MISE_EN_ETAT",
            "registered_on": "2026-03-02",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], body["id"]);
    assert_eq!(updated["title"], "Mbala c. Kasongo et crts");
    assert_eq!(updated["status"], "MISE_EN_ETAT");
    assert_eq!(updated["created_at"], body["created_at"]);

    // Delete, then the point read misses.
    let (status, _) = send(&app, Method::DELETE, &format!("/v1/dossiers/{dossier_id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(&app, Method::GET, &format!("/v1/dossiers/{dossier_id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn dossier_delete_cascades_over_http() {
    let app = app();
    let (_, dossier_id) = seed_dossier(&app, "RC 004/2026").await;
    let note = create(
        &app,
        "/v1/notes",
        json!({"dossier": dossier_id, "body": "Signification à vérifier."}),
    )
    .await;
    let note_id = note["id"].as_str().unwrap();

    let (status, _) = send(&app, Method::DELETE, &format!("/v1/dossiers/{dossier_id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(&app, Method::GET, &format!("/v1/notes/{note_id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ── list endpoints ───────────────────────────────────────────

#[tokio::test]
async fn list_is_paginated_in_insertion_order() {
    let app = app();
    for i in 1..=5 {
        create(&app, "/v1/courts", court_payload(&format!("TGI {i}"))).await;
    }
    let (status, body) = send(&app, Method::GET, "/v1/courts?limit=2&offset=1", None).await;
    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["name"], "TGI 2");
    assert_eq!(rows[1]["name"], "TGI 3");
}

#[tokio::test]
async fn list_scopes_to_dossier() {
    let app = app();
    let (_, first) = seed_dossier(&app, "RC 005/2026").await;
    let (_, second) = seed_dossier(&app, "RC 006/2026").await;
    create(&app, "/v1/notes", json!({"dossier": first, "body": "Premier dossier."})).await;
    create(&app, "/v1/notes", json!({"dossier": second, "body": "Second dossier."})).await;

    let (status, body) = send(&app, Method::GET, &format!("/v1/notes?dossier={second}"), None).await;
    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["body"], "Second dossier.");
}

#[tokio::test]
async fn offices_scope_to_court() {
    let app = app();
    let a = create(&app, "/v1/courts", court_payload("TGI Gombe")).await;
    let b = create(&app, "/v1/courts", court_payload("TGI Matete")).await;
    for (court, name) in [(&a, "PGI Gombe"), (&b, "PGI Matete")] {
        create(
            &app,
            "/v1/offices",
            json!({
                "name": name,
                "kind": "PGI",
                "court": court["id"],
                "address": "Palais de Justice",
                "territorial_scope": "Kinshasa",
            }),
        )
        .await;
    }
    let uri = format!("/v1/offices?court={}", b["id"].as_str().unwrap());
    let (status, body) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["name"], "PGI Matete");
}
