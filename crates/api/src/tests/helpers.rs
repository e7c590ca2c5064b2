// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{Value, json};

use crate::{ApiError, ApiRequest, HttpTransport, Method};

/// A transport answering from a fixed route table and recording every
/// request it receives.
#[derive(Debug, Default)]
pub struct FakeTransport {
    routes: Mutex<HashMap<(Method, String), Result<Value, ApiError>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl FakeTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Answers `method path` with `response` from now on.
    pub fn respond(&self, method: Method, path: &str, response: Result<Value, ApiError>) {
        self.routes
            .lock()
            .unwrap()
            .insert((method, path.to_string()), response);
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl HttpTransport for FakeTransport {
    async fn send(&self, request: ApiRequest) -> Result<Value, ApiError> {
        let key: (Method, String) = (request.method, request.path.clone());
        self.requests.lock().unwrap().push(request);
        self.routes
            .lock()
            .unwrap()
            .get(&key)
            .cloned()
            .unwrap_or_else(|| {
                Err(ApiError::Transport {
                    message: format!("no route for {} {}", key.0, key.1),
                })
            })
    }
}

pub fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
    raw.iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

pub fn connection_refused() -> ApiError {
    ApiError::Transport {
        message: String::from("error sending request: connection refused"),
    }
}

pub fn incident_json(id: i64, title: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "description": "Pump leaking at the base",
        "status": "open",
        "status_label": "Open",
        "severity": "high",
        "severity_label": "High",
        "material": { "id": 3, "name": "Pump P-3" },
        "site": { "id": 1, "name": "North plant" },
        "reporter": { "id": 8, "name": "Ana Ruiz" },
        "created_at": "2026-03-02T08:15:00Z",
        "updated_at": null
    })
}

pub fn maintenance_json(id: i64) -> Value {
    json!({
        "id": id,
        "title": "Replace pump seal",
        "type": "corrective",
        "type_label": "Corrective",
        "realization": "internal",
        "realization_label": "Internal",
        "status": "planned",
        "status_label": "Planned",
        "material": { "id": 3, "name": "Pump P-3" },
        "operator": { "id": 8, "name": "Ana Ruiz" },
        "incidents_count": 1,
        "scheduled_at": "2026-03-05T07:00:00Z",
        "created_at": "2026-03-02T09:00:00Z"
    })
}

pub fn page_json(data: Vec<Value>, current_page: u32, last_page: u32, total: u64) -> Value {
    json!({
        "data": data,
        "meta": {
            "current_page": current_page,
            "last_page": last_page,
            "per_page": 15,
            "total": total
        }
    })
}

pub fn summaries_json(names: &[&str]) -> Value {
    let data: Vec<Value> = names
        .iter()
        .enumerate()
        .map(|(i, name)| json!({ "id": i + 1, "name": name }))
        .collect();
    json!({ "data": data })
}
