// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{ApiError, describe_error};

#[test]
fn test_404_keeps_path_and_server_message_apart() {
    let body: &[u8] = br#"{"message":"No query results for model [Material]."}"#;
    let err: ApiError = ApiError::from_response(404, body, "/incidents/available-materials");
    assert_eq!(
        err,
        ApiError::NotFound {
            what: String::from("/incidents/available-materials"),
            message: Some(String::from("No query results for model [Material].")),
        }
    );
    assert_eq!(describe_error(&err), "No query results for model [Material].");
}

#[test]
fn test_404_without_body_uses_path() {
    let err: ApiError = ApiError::from_response(404, b"", "/roles/4");
    assert_eq!(
        err,
        ApiError::NotFound {
            what: String::from("/roles/4"),
            message: None,
        }
    );
    assert_eq!(describe_error(&err), "The requested /roles/4 could not be found.");
}

#[test]
fn test_for_record_replaces_server_message() {
    let err: ApiError = ApiError::from_response(
        404,
        br#"{"message":"No query results for model [Role] 4"}"#,
        "/roles/4",
    )
    .for_record("role", 4);
    assert_eq!(describe_error(&err), "The requested role 4 could not be found.");
}

#[test]
fn test_422_without_message_gets_default() {
    let body: &[u8] = br#"{"errors":{"name":["The name has already been taken."]}}"#;
    let err: ApiError = ApiError::from_response(422, body, "/roles");

    assert_eq!(describe_error(&err), "The given data was invalid.");
    assert_eq!(
        err.validation_errors().unwrap()["name"],
        "The name has already been taken."
    );
}

#[test]
fn test_for_record_only_rewrites_not_found() {
    let other: ApiError = ApiError::Status {
        status: 409,
        message: String::from("Conflict"),
    };
    assert_eq!(other.clone().for_record("role", 4), other);
}

#[test]
fn test_describe_error_is_never_empty() {
    let errors: Vec<ApiError> = vec![
        ApiError::Transport {
            message: String::new(),
        },
        ApiError::Status {
            status: 400,
            message: String::new(),
        },
        ApiError::Status {
            status: 401,
            message: String::new(),
        },
        ApiError::Status {
            status: 503,
            message: String::new(),
        },
        ApiError::Validation {
            message: String::new(),
            errors: std::collections::BTreeMap::new(),
        },
        ApiError::NotFound {
            what: String::from("incident 2"),
            message: Some(String::new()),
        },
        ApiError::Decode {
            message: String::new(),
        },
        ApiError::InvalidRequest {
            message: String::from("bad"),
        },
    ];

    for err in &errors {
        assert!(!describe_error(err).trim().is_empty(), "{err:?}");
    }
}

#[test]
fn test_client_error_passes_server_message_through() {
    let err: ApiError = ApiError::from_response(
        409,
        br#"{"message":"The role is assigned to users."}"#,
        "/roles/2",
    );
    assert_eq!(describe_error(&err), "The role is assigned to users.");
}
