// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    AvailableMaintenancesQuery, DomainError, FilterValue, IncidentFilters, IncidentSeverity,
    IncidentStatus, ListQuery, MaintenanceFilters, MaintenanceType, PermissionSearch, QueryFilter,
    Realization, RoleFilters, SortDirection,
};

fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
    items
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

fn names(pairs: &[(String, String)]) -> Vec<&str> {
    pairs.iter().map(|(k, _)| k.as_str()).collect()
}

#[test]
fn test_sort_direction_flips() {
    assert_eq!(SortDirection::Asc.flipped(), SortDirection::Desc);
    assert_eq!(SortDirection::Desc.flipped(), SortDirection::Asc);
    assert_eq!(SortDirection::Desc.flipped().flipped(), SortDirection::Desc);
}

#[test]
fn test_sort_direction_parses_case_insensitively() {
    assert_eq!("ASC".parse::<SortDirection>().unwrap(), SortDirection::Asc);
    assert_eq!("desc".parse::<SortDirection>().unwrap(), SortDirection::Desc);
    assert!("sideways".parse::<SortDirection>().is_err());
}

#[test]
fn test_empty_incident_filters_produce_no_pairs() {
    let filters: IncidentFilters = IncidentFilters::default();
    assert!(filters.query_pairs().is_empty());
}

#[test]
fn test_incident_filters_follow_endpoint_order() {
    let filters: IncidentFilters = IncidentFilters {
        page: Some(2),
        search: Some(String::from("pump")),
        material_id: Some(7),
        status: Some(IncidentStatus::InProgress),
        severity: Some(IncidentSeverity::High),
        sort_by: Some(String::from("created_at")),
        sort_direction: Some(SortDirection::Desc),
    };

    assert_eq!(
        filters.query_pairs(),
        pairs(&[
            ("page", "2"),
            ("search", "pump"),
            ("material_id", "7"),
            ("status", "in_progress"),
            ("severity", "high"),
            ("sort_by", "created_at"),
            ("sort_direction", "desc"),
        ])
    );
}

#[test]
fn test_sort_direction_omitted_without_sort_field() {
    let incident: IncidentFilters = IncidentFilters {
        sort_direction: Some(SortDirection::Asc),
        ..IncidentFilters::default()
    };
    let maintenance: MaintenanceFilters = MaintenanceFilters {
        sort_direction: Some(SortDirection::Desc),
        ..MaintenanceFilters::default()
    };
    let role: RoleFilters = RoleFilters {
        page: Some(1),
        sort_direction: Some(SortDirection::Desc),
        ..RoleFilters::default()
    };
    let query: ListQuery = ListQuery {
        sort_direction: SortDirection::Desc,
        ..ListQuery::default()
    };

    for pairs in [
        incident.query_pairs(),
        maintenance.query_pairs(),
        role.query_pairs(),
        query.query_pairs(),
    ] {
        assert!(!names(&pairs).contains(&"sort_direction"));
    }
}

#[test]
fn test_blank_search_is_omitted() {
    let filters: RoleFilters = RoleFilters {
        search: Some(String::from("   ")),
        ..RoleFilters::default()
    };
    assert!(filters.query_pairs().is_empty());
}

#[test]
fn test_maintenance_filters_use_type_parameter() {
    let filters: MaintenanceFilters = MaintenanceFilters {
        maintenance_type: Some(MaintenanceType::Corrective),
        realization: Some(Realization::External),
        ..MaintenanceFilters::default()
    };
    assert_eq!(
        filters.query_pairs(),
        pairs(&[("type", "corrective"), ("realization", "external")])
    );
}

#[test]
fn test_list_query_emits_additional_filters_in_name_order() {
    let mut query: ListQuery = ListQuery::new();
    query.page = 3;
    query.search = Some(String::from("valve"));
    query
        .filters
        .insert(String::from("status"), FilterValue::from("open"));
    query
        .filters
        .insert(String::from("material_id"), FilterValue::from(12_i64));
    query
        .filters
        .insert(String::from("archived"), FilterValue::from(false));
    query
        .filters
        .insert(String::from("severity"), FilterValue::from(""));

    assert_eq!(
        query.query_pairs(),
        pairs(&[
            ("page", "3"),
            ("search", "valve"),
            ("archived", "0"),
            ("material_id", "12"),
            ("status", "open"),
        ])
    );
}

#[test]
fn test_incident_filters_narrow_list_query() {
    let mut query: ListQuery = ListQuery::new();
    query.page = 2;
    query.sort_by = Some(String::from("severity"));
    query.sort_direction = SortDirection::Desc;
    query
        .filters
        .insert(String::from("status"), FilterValue::from("resolved"));
    query
        .filters
        .insert(String::from("material_id"), FilterValue::from("42"));
    query
        .filters
        .insert(String::from("severity"), FilterValue::from("high"));

    let filters: IncidentFilters = IncidentFilters::try_from(&query).unwrap();
    assert_eq!(filters.page, Some(2));
    assert_eq!(filters.status, Some(IncidentStatus::Resolved));
    assert_eq!(filters.material_id, Some(42));
    assert_eq!(filters.severity, Some(IncidentSeverity::High));
    assert_eq!(filters.sort_by.as_deref(), Some("severity"));
    assert_eq!(filters.sort_direction, Some(SortDirection::Desc));
}

#[test]
fn test_incident_filters_reject_unknown_filter_name() {
    let mut query: ListQuery = ListQuery::new();
    query
        .filters
        .insert(String::from("status"), FilterValue::from("open"));
    query
        .filters
        .insert(String::from("site_id"), FilterValue::from(3_i64));

    let err: DomainError = IncidentFilters::try_from(&query).unwrap_err();
    assert_eq!(
        err,
        DomainError::UnknownFilter {
            resource: "incident",
            name: String::from("site_id"),
        }
    );
}

#[test]
fn test_incident_filters_reject_unknown_status_text() {
    let mut query: ListQuery = ListQuery::new();
    query
        .filters
        .insert(String::from("status"), FilterValue::from("bogus"));

    let err: DomainError = IncidentFilters::try_from(&query).unwrap_err();
    assert_eq!(
        err,
        DomainError::UnknownStatus {
            resource: "incident",
            value: String::from("bogus"),
        }
    );
}

#[test]
fn test_incident_filters_reject_integer_status() {
    let mut query: ListQuery = ListQuery::new();
    query
        .filters
        .insert(String::from("status"), FilterValue::from(2_i64));

    let err: DomainError = IncidentFilters::try_from(&query).unwrap_err();
    assert_eq!(
        err,
        DomainError::InvalidFilterValue {
            name: String::from("status"),
            value: String::from("2"),
        }
    );
}

#[test]
fn test_maintenance_filters_reject_non_numeric_material() {
    let mut query: ListQuery = ListQuery::new();
    query
        .filters
        .insert(String::from("material_id"), FilterValue::from("pump"));

    let err: DomainError = MaintenanceFilters::try_from(&query).unwrap_err();
    assert_eq!(
        err,
        DomainError::InvalidFilterValue {
            name: String::from("material_id"),
            value: String::from("pump"),
        }
    );
}

#[test]
fn test_maintenance_filters_treat_blank_text_as_absent() {
    let mut query: ListQuery = ListQuery::new();
    query
        .filters
        .insert(String::from("type"), FilterValue::from("  "));
    query
        .filters
        .insert(String::from("realization"), FilterValue::from("external"));

    let filters: MaintenanceFilters = MaintenanceFilters::try_from(&query).unwrap();
    assert_eq!(filters.maintenance_type, None);
    assert_eq!(filters.realization, Some(Realization::External));
}

#[test]
fn test_role_filters_accept_no_additional_filters() {
    let mut query: ListQuery = ListQuery::new();
    query
        .filters
        .insert(String::from("status"), FilterValue::from("open"));

    assert!(RoleFilters::try_from(&query).is_err());
}

#[test]
fn test_role_filters_drop_direction_without_sort() {
    let query: ListQuery = ListQuery {
        sort_direction: SortDirection::Desc,
        ..ListQuery::default()
    };
    let filters: RoleFilters = RoleFilters::try_from(&query).unwrap();
    assert_eq!(filters.sort_direction, None);
}

#[test]
fn test_lookup_queries() {
    let available: AvailableMaintenancesQuery = AvailableMaintenancesQuery {
        material_id: Some(5),
    };
    assert_eq!(available.query_pairs(), pairs(&[("material_id", "5")]));

    let search: PermissionSearch = PermissionSearch {
        search: Some(String::from("incidents")),
        limit: Some(20),
    };
    assert_eq!(
        search.query_pairs(),
        pairs(&[("search", "incidents"), ("limit", "20")])
    );
}

#[test]
fn test_list_query_round_trips_through_json() {
    let mut query: ListQuery = ListQuery::new();
    query.sort_by = Some(String::from("title"));
    query
        .filters
        .insert(String::from("material_id"), FilterValue::from(3_i64));

    let json: String = serde_json::to_string(&query).unwrap();
    let parsed: ListQuery = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, query);
}
