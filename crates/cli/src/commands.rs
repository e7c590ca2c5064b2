// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use clap::{Args, Subcommand};
use maintdesk::{ListController, ListQueryConfig, ListQueryState, ListView};
use maintdesk_api::{HttpTransport, Incidents, Maintenances, Manager, Outcome, Resource, Roles};
use maintdesk_domain::{
    FilterValue, IncidentSeverity, IncidentStatus, MATERIAL_ID, MaintenanceStatus,
    MaintenanceType, PageSearch, PermissionSearch, REALIZATION, Realization, RecordId, SEVERITY,
    STATUS, SortDirection, TYPE,
};
use serde::Serialize;
use std::collections::BTreeMap;
use std::process::ExitCode;
use std::sync::Arc;

type CommandResult = Result<ExitCode, Box<dyn std::error::Error>>;

/// The resource to operate on.
#[derive(Subcommand, Debug)]
pub enum ResourceCommand {
    /// Incidents reported against materials
    Incidents {
        #[command(subcommand)]
        action: IncidentAction,
    },
    /// Maintenances carried out on materials
    Maintenances {
        #[command(subcommand)]
        action: MaintenanceAction,
    },
    /// Roles and their permissions
    Roles {
        #[command(subcommand)]
        action: RoleAction,
    },
}

/// Paging, search and sort flags shared by every `list` command.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// 1-based page to fetch
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    page: u32,

    /// Free-text search
    #[arg(long)]
    search: Option<String>,

    /// Column to sort on
    #[arg(long)]
    sort_by: Option<String>,

    /// Sort descending instead of ascending
    #[arg(long, requires = "sort_by")]
    desc: bool,
}

impl ListArgs {
    fn into_state(self, filters: BTreeMap<String, FilterValue>) -> ListQueryState {
        let mut state: ListQueryState = ListQueryState::new(&ListQueryConfig::default());
        let search: String = self.search.unwrap_or_default();
        state.page = self.page;
        state.search_input.clone_from(&search);
        state.search = search;
        state.sort_by = self.sort_by;
        state.sort_direction = if self.desc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };
        state.filters = filters;
        state
    }
}

#[derive(Subcommand, Debug)]
pub enum IncidentAction {
    /// List one page of incidents
    List {
        #[command(flatten)]
        list: ListArgs,
        /// Only incidents on this material
        #[arg(long)]
        material_id: Option<RecordId>,
        /// Only incidents in this status
        #[arg(long)]
        status: Option<IncidentStatus>,
        /// Only incidents of this severity
        #[arg(long)]
        severity: Option<IncidentSeverity>,
    },
    /// Show one incident
    Show { id: RecordId },
    /// Delete one incident
    Delete { id: RecordId },
    /// Show the lookups the incident form needs
    Options,
}

#[derive(Subcommand, Debug)]
pub enum MaintenanceAction {
    /// List one page of maintenances
    List {
        #[command(flatten)]
        list: ListArgs,
        /// Only maintenances on this material
        #[arg(long)]
        material_id: Option<RecordId>,
        /// Only maintenances in this status
        #[arg(long)]
        status: Option<MaintenanceStatus>,
        /// Only maintenances of this type
        #[arg(long = "type")]
        maintenance_type: Option<MaintenanceType>,
        /// Only maintenances with this realization
        #[arg(long)]
        realization: Option<Realization>,
    },
    /// Show one maintenance
    Show { id: RecordId },
    /// Delete one maintenance
    Delete { id: RecordId },
    /// List the incidents attached to a maintenance
    Incidents { id: RecordId },
    /// List the stock movements of a maintenance
    Movements {
        id: RecordId,
        /// 1-based page to fetch
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,
    },
    /// Show the lookups the maintenance form needs
    Options,
}

#[derive(Subcommand, Debug)]
pub enum RoleAction {
    /// List one page of roles
    List {
        #[command(flatten)]
        list: ListArgs,
    },
    /// Show one role with its permissions
    Show { id: RecordId },
    /// List the users holding a role
    Users {
        id: RecordId,
        /// 1-based page to fetch
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,
        /// Free-text search on name or e-mail
        #[arg(long)]
        search: Option<String>,
    },
    /// List the permissions a role may be granted
    Permissions {
        /// Substring of the permission key or label
        #[arg(long)]
        search: Option<String>,
        /// Maximum number of permissions returned
        #[arg(long)]
        limit: Option<u32>,
    },
}

/// Runs one command against the API.
///
/// # Errors
///
/// Returns an error if a result cannot be written to stdout.
pub async fn run(command: ResourceCommand, transport: Arc<dyn HttpTransport>) -> CommandResult {
    match command {
        ResourceCommand::Incidents { action } => {
            run_incidents(action, Manager::from_transport(transport)).await
        }
        ResourceCommand::Maintenances { action } => {
            run_maintenances(action, Manager::from_transport(transport)).await
        }
        ResourceCommand::Roles { action } => {
            run_roles(action, Manager::from_transport(transport)).await
        }
    }
}

async fn run_incidents(action: IncidentAction, manager: Manager<Incidents>) -> CommandResult {
    match action {
        IncidentAction::List {
            list,
            material_id,
            status,
            severity,
        } => {
            let filters: BTreeMap<String, FilterValue> = collect_filters([
                (MATERIAL_ID, material_id.map(FilterValue::from)),
                (STATUS, status.map(|s| FilterValue::from(s.as_str()))),
                (SEVERITY, severity.map(|s| FilterValue::from(s.as_str()))),
            ]);
            run_list(manager, list.into_state(filters)).await
        }
        IncidentAction::Show { id } => report(manager.get_by_id(id).await),
        IncidentAction::Delete { id } => {
            report(manager.delete(id).await.map(|()| Deleted::new(id)))
        }
        IncidentAction::Options => report(manager.incident_form_options().await),
    }
}

async fn run_maintenances(
    action: MaintenanceAction,
    manager: Manager<Maintenances>,
) -> CommandResult {
    match action {
        MaintenanceAction::List {
            list,
            material_id,
            status,
            maintenance_type,
            realization,
        } => {
            let filters: BTreeMap<String, FilterValue> = collect_filters([
                (MATERIAL_ID, material_id.map(FilterValue::from)),
                (STATUS, status.map(|s| FilterValue::from(s.as_str()))),
                (TYPE, maintenance_type.map(|t| FilterValue::from(t.as_str()))),
                (REALIZATION, realization.map(|r| FilterValue::from(r.as_str()))),
            ]);
            run_list(manager, list.into_state(filters)).await
        }
        MaintenanceAction::Show { id } => report(manager.get_by_id(id).await),
        MaintenanceAction::Delete { id } => {
            report(manager.delete(id).await.map(|()| Deleted::new(id)))
        }
        MaintenanceAction::Incidents { id } => report(manager.incidents(id).await),
        MaintenanceAction::Movements { id, page } => {
            let query: PageSearch = PageSearch {
                page: Some(page),
                search: None,
            };
            report(manager.item_movements(id, &query).await)
        }
        MaintenanceAction::Options => report(manager.maintenance_form_options().await),
    }
}

async fn run_roles(action: RoleAction, manager: Manager<Roles>) -> CommandResult {
    match action {
        RoleAction::List { list } => run_list(manager, list.into_state(BTreeMap::new())).await,
        RoleAction::Show { id } => report(manager.get_by_id(id).await),
        RoleAction::Users { id, page, search } => {
            let query: PageSearch = PageSearch {
                page: Some(page),
                search,
            };
            report(manager.users(id, &query).await)
        }
        RoleAction::Permissions { search, limit } => {
            let query: PermissionSearch = PermissionSearch { search, limit };
            report(manager.available_permissions(&query).await)
        }
    }
}

/// Loads one page through a list controller and prints the resulting view.
async fn run_list<R: Resource>(manager: Manager<R>, state: ListQueryState) -> CommandResult {
    let controller: ListController<Manager<R>> =
        ListController::with_state(manager, ListQueryConfig::default(), state);
    controller.refresh().await;
    controller.settle().await;

    let view: ListView<R::Entity> = controller.snapshot();
    if let Some(error) = &view.error {
        eprintln!("error: {error}");
        return Ok(ExitCode::FAILURE);
    }
    emit(&view)
}

#[derive(Debug, Serialize)]
struct Deleted {
    deleted: RecordId,
}

impl Deleted {
    const fn new(id: RecordId) -> Self {
        Self { deleted: id }
    }
}

fn collect_filters<const N: usize>(
    entries: [(&str, Option<FilterValue>); N],
) -> BTreeMap<String, FilterValue> {
    entries
        .into_iter()
        .filter_map(|(name, value)| value.map(|value| (name.to_string(), value)))
        .collect()
}

fn report<T: Serialize>(outcome: Outcome<T>) -> CommandResult {
    match outcome {
        Outcome::Success { data } => emit(&data),
        Outcome::Failure {
            error,
            validation_errors,
        } => {
            eprintln!("error: {error}");
            for (field, message) in validation_errors.iter().flatten() {
                eprintln!("  {field}: {message}");
            }
            Ok(ExitCode::FAILURE)
        }
    }
}

fn emit<T: Serialize + ?Sized>(value: &T) -> CommandResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used)]

    use super::*;
    use clap::Parser;

    #[derive(Parser, Debug)]
    struct TestCli {
        #[command(subcommand)]
        resource: ResourceCommand,
    }

    fn parse(args: &[&str]) -> ResourceCommand {
        let mut argv: Vec<&str> = vec!["maintdesk"];
        argv.extend_from_slice(args);
        TestCli::try_parse_from(argv).unwrap().resource
    }

    #[test]
    fn test_list_args_build_query_state() {
        let ResourceCommand::Incidents {
            action:
                IncidentAction::List {
                    list,
                    material_id,
                    status,
                    severity,
                },
        } = parse(&[
            "incidents",
            "list",
            "--page",
            "3",
            "--search",
            "pump",
            "--sort-by",
            "created_at",
            "--desc",
            "--status",
            "open",
            "--material-id",
            "12",
        ])
        else {
            panic!("expected incidents list");
        };
        assert!(severity.is_none());

        let filters: BTreeMap<String, FilterValue> = collect_filters([
            (MATERIAL_ID, material_id.map(FilterValue::from)),
            (STATUS, status.map(|s| FilterValue::from(s.as_str()))),
            (SEVERITY, severity.map(|s| FilterValue::from(s.as_str()))),
        ]);
        let state: ListQueryState = list.into_state(filters);

        assert_eq!(state.page, 3);
        assert_eq!(state.search, "pump");
        assert_eq!(state.search_input, "pump");
        assert_eq!(state.sort_by.as_deref(), Some("created_at"));
        assert_eq!(state.sort_direction, SortDirection::Desc);
        assert_eq!(state.filters.len(), 2);
        assert_eq!(state.filters.get(STATUS), Some(&FilterValue::from("open")));
        assert_eq!(
            state.filters.get(MATERIAL_ID),
            Some(&FilterValue::from(12_i64))
        );
    }

    #[test]
    fn test_list_defaults_to_first_page_ascending() {
        let ResourceCommand::Roles {
            action: RoleAction::List { list },
        } = parse(&["roles", "list"])
        else {
            panic!("expected roles list");
        };
        let state: ListQueryState = list.into_state(BTreeMap::new());

        assert_eq!(state.page, 1);
        assert!(state.search.is_empty());
        assert!(state.sort_by.is_none());
        assert_eq!(state.sort_direction, SortDirection::Asc);
        assert!(state.filters.is_empty());
    }

    #[test]
    fn test_page_zero_is_rejected() {
        let argv: [&str; 5] = ["maintdesk", "roles", "list", "--page", "0"];
        assert!(TestCli::try_parse_from(argv).is_err());
    }

    #[test]
    fn test_nested_page_zero_is_rejected() {
        let movements: [&str; 6] = ["maintdesk", "maintenances", "movements", "4", "--page", "0"];
        let users: [&str; 6] = ["maintdesk", "roles", "users", "2", "--page", "0"];
        assert!(TestCli::try_parse_from(movements).is_err());
        assert!(TestCli::try_parse_from(users).is_err());

        let ResourceCommand::Roles {
            action: RoleAction::Users { id, page, .. },
        } = parse(&["roles", "users", "2", "--page", "3"])
        else {
            panic!("expected roles users");
        };
        assert_eq!((id, page), (2, 3));
    }

    #[test]
    fn test_desc_requires_sort_column() {
        let argv: [&str; 4] = ["maintdesk", "incidents", "list", "--desc"];
        assert!(TestCli::try_parse_from(argv).is_err());
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let argv: [&str; 5] = ["maintdesk", "incidents", "list", "--status", "bogus"];
        assert!(TestCli::try_parse_from(argv).is_err());
    }

    #[test]
    fn test_unset_filters_are_omitted() {
        let filters: BTreeMap<String, FilterValue> =
            collect_filters([(MATERIAL_ID, None), (TYPE, Some(FilterValue::from("corrective")))]);

        assert_eq!(filters.len(), 1);
        assert!(filters.contains_key(TYPE));
    }
}
