// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Resource access for the maintdesk REST API.
//!
//! Three layers sit between a screen and the network:
//!
//! - [`HttpTransport`] performs one HTTP request ([`HttpClient`] over
//!   `reqwest` in production).
//! - [`Repository`] maps each logical operation of a [`Resource`] to
//!   exactly one request and returns raw [`ApiError`]s.
//! - [`Manager`] wraps each repository call into an [`Outcome`] and never
//!   propagates an error.
//!
//! [`compute_capabilities`] derives which actions a screen should offer.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod capabilities;
mod client;
mod error;
mod manager;
mod outcome;
mod repository;
mod resource;
mod transport;

#[cfg(test)]
mod tests;

pub use capabilities::{
    Action, Capability, PermissionSet, PermissionSource, ResourceCapabilities, ResourceGate,
    TenantScope, compute_capabilities, permission_key,
};
pub use client::{ClientConfig, DEFAULT_TIMEOUT_SECS, HttpClient, normalize_base_url};
pub use error::{ApiError, describe_error};
pub use manager::{IncidentFormOptions, MaintenanceFormOptions, Manager};
pub use outcome::Outcome;
pub use repository::Repository;
pub use resource::{Incidents, Maintenances, Resource, Roles};
pub use transport::{ApiRequest, HttpTransport, Method, decode, decode_data};
