//! End-to-end tests for the dashboard derivations.
//!
//! These tests go through the same path as the binary:
//! 1. Load a catalog file
//! 2. Validate it (hard errors and dangling references)
//! 3. Derive the dashboard figures, distribution, and visible rows

#![allow(clippy::expect_used, clippy::unwrap_used)]

use logitrack_common::types::{ContainerStatus, StatusFilter};
use logitrack_core::catalog::Catalog;
use logitrack_core::engine;

fn write_catalog(json: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("catalog.json");
    std::fs::write(&path, json).expect("write catalog");
    (dir, path)
}

#[test]
fn pipeline_one_container_per_status() {
    let json = r#"{
        "containers": [
            {"id": "1", "number": "TCNU3458923", "status": "operating",   "location": "Hamburg", "type": "40HC"},
            {"id": "2", "number": "MSCU7654321", "status": "reserved",    "location": "Intake",  "type": "20DC"},
            {"id": "3", "number": "GLDU2345678", "status": "in-transit",  "location": "Transit", "type": "40HC"},
            {"id": "4", "number": "HLBU9876543", "status": "pre-loading", "location": "Release", "type": "20DC"},
            {"id": "5", "number": "TEMU4567890", "status": "empty",       "location": "Hamburg", "type": "40HC"},
            {"id": "6", "number": "CMAU1234567", "status": "dirty",       "location": "Intake",  "type": "20DC"}
        ],
        "requests": []
    }"#;
    let (_dir, path) = write_catalog(json);

    let catalog = Catalog::load(&path).expect("load");
    assert!(catalog.validate().expect("valid").is_empty());

    let shares = engine::status_distribution(&catalog.containers);
    assert_eq!(shares.len(), 9);
    for share in &shares {
        match share.status {
            ContainerStatus::ForSale | ContainerStatus::Faulty | ContainerStatus::Unverified => {
                assert_eq!(share.count, 0);
                assert!(share.percentage.abs() < f64::EPSILON);
            }
            _ => {
                assert_eq!(share.count, 1);
                assert!((share.percentage - 16.7).abs() < 0.05, "got {}", share.percentage);
            }
        }
    }

    let metrics = engine::dashboard_metrics(&catalog.containers, &catalog.requests);
    assert_eq!(metrics.total_containers, 6);
    assert_eq!(metrics.active_requests, 0);
    assert_eq!(metrics.in_transit, 1);
}

#[test]
fn pipeline_filter_then_search_narrows_rows() {
    let catalog = Catalog::sample();

    let hamburg = engine::filter_containers(&catalog.containers, StatusFilter::All, "Гамбург");
    assert_eq!(hamburg.len(), 2);

    let filter: StatusFilter = "empty".parse().expect("known status");
    let narrowed = engine::filter_containers(&catalog.containers, filter, "Гамбург");
    let numbers: Vec<_> = narrowed.iter().map(|c| c.number.as_str()).collect();
    assert_eq!(numbers, vec!["TEMU4567890"]);
}

#[test]
fn pipeline_dangling_request_is_reported_not_rejected() {
    let json = r#"{
        "containers": [
            {"id": "1", "number": "TCNU3458923", "status": "operating", "location": "Hamburg", "type": "40HC"}
        ],
        "requests": [
            {"id": "1", "type": "intake",  "container": "TCNU3458923", "date": "2025-10-26", "client": "A", "status": "new"},
            {"id": "2", "type": "release", "container": "MSCU7654321", "date": "2025-10-25", "client": "B", "status": "in-progress"}
        ]
    }"#;
    let (_dir, path) = write_catalog(json);

    let catalog = Catalog::load(&path).expect("load");
    let warnings = catalog.validate().expect("dangling references are warnings");
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].container, "MSCU7654321");

    assert_eq!(engine::active_request_count(&catalog.requests), 2);
}

#[test]
fn pipeline_empty_catalog_has_no_nan() {
    let (_dir, path) = write_catalog(r#"{ "containers": [] }"#);

    let catalog = Catalog::load(&path).expect("load");
    let shares = engine::status_distribution(&catalog.containers);
    assert!(shares.iter().all(|s| s.count == 0 && s.percentage == 0.0));

    let metrics = engine::dashboard_metrics(&catalog.containers, &catalog.requests);
    assert_eq!(metrics.total_containers, 0);
    assert_eq!(metrics.active_requests, 0);
}
