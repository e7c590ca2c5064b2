// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Client-side form checks.
//!
//! These mirror the server's required-field rules so a form can flag
//! obvious mistakes before submitting. The server remains authoritative:
//! an empty map here does not mean the server will accept the payload.

use crate::incident::IncidentPayload;
use crate::maintenance::{MaintenancePayload, Realization};
use crate::role::RolePayload;
use crate::types::ValidationErrors;

/// Longest title the server accepts.
pub const MAX_TITLE_LENGTH: usize = 255;

fn check_title(errors: &mut ValidationErrors, field: &str, value: &str) {
    let trimmed: &str = value.trim();
    if trimmed.is_empty() {
        errors.insert(field.to_string(), format!("The {field} field is required."));
    } else if trimmed.chars().count() > MAX_TITLE_LENGTH {
        errors.insert(
            field.to_string(),
            format!("The {field} may not be greater than {MAX_TITLE_LENGTH} characters."),
        );
    }
}

fn check_id(errors: &mut ValidationErrors, field: &str, value: i64) {
    if value <= 0 {
        errors.insert(field.to_string(), format!("The selected {field} is invalid."));
    }
}

/// Checks an incident creation form.
///
/// # Returns
///
/// Field-level messages; empty when no rule is violated.
#[must_use]
pub fn validate_incident_payload(payload: &IncidentPayload) -> ValidationErrors {
    let mut errors: ValidationErrors = ValidationErrors::new();
    check_title(&mut errors, "title", &payload.title);
    check_id(&mut errors, "material_id", payload.material_id);
    if let Some(maintenance_id) = payload.maintenance_id {
        check_id(&mut errors, "maintenance_id", maintenance_id);
    }
    errors
}

/// Checks a maintenance creation form.
///
/// Internal work needs an operator and external work needs a company.
#[must_use]
pub fn validate_maintenance_payload(payload: &MaintenancePayload) -> ValidationErrors {
    let mut errors: ValidationErrors = ValidationErrors::new();
    check_title(&mut errors, "title", &payload.title);
    check_id(&mut errors, "material_id", payload.material_id);

    match payload.realization {
        Realization::Internal => match payload.operator_id {
            Some(operator_id) => check_id(&mut errors, "operator_id", operator_id),
            None => {
                errors.insert(
                    String::from("operator_id"),
                    String::from("An operator is required for internal maintenance."),
                );
            }
        },
        Realization::External => match payload.company_id {
            Some(company_id) => check_id(&mut errors, "company_id", company_id),
            None => {
                errors.insert(
                    String::from("company_id"),
                    String::from("A company is required for external maintenance."),
                );
            }
        },
    }

    errors
}

/// Checks a role creation form.
#[must_use]
pub fn validate_role_payload(payload: &RolePayload) -> ValidationErrors {
    let mut errors: ValidationErrors = ValidationErrors::new();
    check_title(&mut errors, "name", &payload.name);
    if payload.permission_ids.iter().any(|id| *id <= 0) {
        errors.insert(
            String::from("permission_ids"),
            String::from("One or more selected permissions are invalid."),
        );
    }
    errors
}
