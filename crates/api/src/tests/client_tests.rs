// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! `HttpClient` against an in-process axum server.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use maintdesk_domain::{
    Incident, IncidentFilters, IncidentPayload, IncidentSeverity, IncidentStatus, Paginated,
};
use serde_json::{Value, json};

use crate::{
    ApiError, ApiRequest, ClientConfig, HttpClient, HttpTransport, Incidents, Manager, Outcome,
    normalize_base_url,
};

type Store = Arc<Mutex<Vec<Value>>>;

async fn list_incidents(
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Json<Value> {
    let authorization: Option<&str> = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());
    Json(json!({
        "data": [],
        "meta": {
            "current_page": 1,
            "last_page": 0,
            "per_page": 15,
            "total": 0,
            "echo": params,
            "authorization": authorization
        }
    }))
}

async fn create_incident(State(store): State<Store>, Json(body): Json<Value>) -> Response {
    let title: &str = body["title"].as_str().unwrap_or_default();
    if title.trim().is_empty() {
        let errors: Value = json!({
            "message": "The title field is required.",
            "errors": {
                "title": ["The title field is required.", "The title must be a string."]
            }
        });
        return (StatusCode::UNPROCESSABLE_ENTITY, Json(errors)).into_response();
    }

    let mut records = store.lock().unwrap();
    let id: usize = records.len() + 1;
    let record: Value = json!({
        "id": id,
        "title": title,
        "description": body["description"],
        "status": body.get("status").cloned().unwrap_or_else(|| json!("open")),
        "severity": body["severity"],
        "material": { "id": body["material_id"], "name": "Pump P-3" },
        "created_at": "2026-03-02T08:15:00Z"
    });
    records.push(record.clone());
    (StatusCode::CREATED, Json(json!({ "data": record }))).into_response()
}

async fn show_incident(State(store): State<Store>, Path(id): Path<usize>) -> Response {
    let records = store.lock().unwrap();
    match id.checked_sub(1).and_then(|index| records.get(index)) {
        Some(record) => Json(json!({ "data": record })).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "message": "No query results for model [Incident]." })),
        )
            .into_response(),
    }
}

async fn delete_incident() -> StatusCode {
    StatusCode::NO_CONTENT
}

async fn fixed_status(Path(code): Path<u16>) -> Response {
    let status: StatusCode = StatusCode::from_u16(code).unwrap();
    (status, "<html><body>gateway down</body></html>").into_response()
}

async fn spawn_server() -> String {
    let store: Store = Arc::default();
    let app: Router = Router::new()
        .route("/api/incidents", get(list_incidents).post(create_incident))
        .route(
            "/api/incidents/{id}",
            get(show_incident).delete(delete_incident),
        )
        .route("/api/status/{code}", get(fixed_status))
        .with_state(store);

    let listener: tokio::net::TcpListener =
        tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: std::net::SocketAddr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("{addr}/api/")
}

fn create_client(base_url: &str, token: Option<&str>) -> HttpClient {
    let mut config: ClientConfig = ClientConfig::new(base_url);
    config.timeout_secs = 5;
    config.token = token.map(String::from);
    HttpClient::new(&config).unwrap()
}

#[test]
fn test_normalize_base_url() {
    assert_eq!(
        normalize_base_url("127.0.0.1:8000/api/"),
        "http://127.0.0.1:8000/api"
    );
    assert_eq!(
        normalize_base_url("https://acme.example.com/api"),
        "https://acme.example.com/api"
    );
}

#[test]
fn test_build_url_joins_without_double_slash() {
    let client: HttpClient = create_client("https://acme.example.com/api/", None);
    assert_eq!(
        client.build_url("/incidents/4"),
        "https://acme.example.com/api/incidents/4"
    );
}

#[tokio::test]
async fn test_query_and_bearer_token_reach_the_server() {
    let base_url: String = spawn_server().await;
    let client: HttpClient = create_client(&base_url, Some("secret-token"));

    let request: ApiRequest = ApiRequest::get("/incidents").with_query(vec![
        (String::from("search"), String::from("pump seal")),
        (String::from("page"), String::from("2")),
    ]);
    let body: Value = client.send(request).await.unwrap();

    assert_eq!(body["meta"]["echo"]["search"], "pump seal");
    assert_eq!(body["meta"]["echo"]["page"], "2");
    assert_eq!(body["meta"]["authorization"], "Bearer secret-token");
}

#[tokio::test]
async fn test_validation_response_maps_first_message_per_field() {
    let base_url: String = spawn_server().await;
    let client: HttpClient = create_client(&base_url, None);

    let request: ApiRequest =
        ApiRequest::new(crate::Method::Post, "/incidents").with_body(json!({ "title": "" }));
    let err: ApiError = client.send(request).await.unwrap_err();

    let ApiError::Validation { message, errors } = err else {
        panic!("expected a validation error, got {err:?}");
    };
    assert_eq!(message, "The title field is required.");
    assert_eq!(errors.len(), 1);
    assert_eq!(errors["title"], "The title field is required.");
}

#[tokio::test]
async fn test_empty_success_body_is_null() {
    let base_url: String = spawn_server().await;
    let client: HttpClient = create_client(&base_url, None);

    let body: Value = client
        .send(ApiRequest::delete("/incidents/1"))
        .await
        .unwrap();

    assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn test_non_json_error_body_keeps_status() {
    let base_url: String = spawn_server().await;
    let client: HttpClient = create_client(&base_url, None);

    let err: ApiError = client
        .send(ApiRequest::get("/status/502"))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ApiError::Status {
            status: 502,
            message: String::from("HTTP 502"),
        }
    );
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() {
    let listener: tokio::net::TcpListener =
        tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: std::net::SocketAddr = listener.local_addr().unwrap();
    drop(listener);
    let client: HttpClient = create_client(&format!("http://{addr}"), None);

    let err: ApiError = client.send(ApiRequest::get("/incidents")).await.unwrap_err();

    assert!(matches!(err, ApiError::Transport { .. }));
}

#[tokio::test]
async fn test_create_then_get_round_trip() {
    let base_url: String = spawn_server().await;
    let transport: Arc<dyn HttpTransport> = Arc::new(create_client(&base_url, None));
    let manager: Manager<Incidents> = Manager::from_transport(transport);

    let payload: IncidentPayload = IncidentPayload {
        title: String::from("Pump leaking"),
        description: Some(String::from("Puddle under P-3")),
        material_id: 3,
        severity: IncidentSeverity::Critical,
        status: Some(IncidentStatus::InProgress),
        maintenance_id: None,
    };
    let created: Outcome<Incident> = manager.create(&payload).await;
    let id: i64 = created.data().unwrap().id;
    let fetched: Incident = manager.get_by_id(id).await.into_result().unwrap();

    assert_eq!(fetched.title, payload.title);
    assert_eq!(fetched.description, payload.description);
    assert_eq!(fetched.material.map(|m| m.id), Some(payload.material_id));
    assert_eq!(fetched.severity, payload.severity);
    assert_eq!(fetched.status, IncidentStatus::InProgress);
}

#[tokio::test]
async fn test_missing_record_through_manager() {
    let base_url: String = spawn_server().await;
    let transport: Arc<dyn HttpTransport> = Arc::new(create_client(&base_url, None));
    let manager: Manager<Incidents> = Manager::from_transport(transport);

    let outcome: Outcome<Incident> = manager.get_by_id(77).await;

    assert_eq!(
        outcome.error(),
        Some("The requested incident 77 could not be found.")
    );
}

#[tokio::test]
async fn test_list_through_manager_decodes_empty_page() {
    let base_url: String = spawn_server().await;
    let transport: Arc<dyn HttpTransport> = Arc::new(create_client(&base_url, None));
    let manager: Manager<Incidents> = Manager::from_transport(transport);

    let outcome: Outcome<Paginated<Incident>> =
        manager.get_all(&IncidentFilters::default()).await;

    let page: Paginated<Incident> = outcome.into_result().unwrap();
    assert!(page.data.is_empty());
    assert!(page.check_invariants().is_ok());
}
