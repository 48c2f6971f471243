//! Container and request catalog.
//!
//! The catalog is read-only for the lifetime of a session. It is either the
//! built-in sample data or a JSON file supplied by the operator, checked once
//! at ingestion by [`Catalog::validate`].

use std::collections::HashSet;
use std::path::Path;

use chrono::NaiveDate;
use logitrack_common::error::{LogitrackError, Result};
use logitrack_common::types::{
    Container, ContainerId, ContainerStatus, Request, RequestId, RequestStatus, RequestType,
};
use serde::{Deserialize, Serialize};

/// The full set of containers and requests shown by the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Containers, in display order.
    pub containers: Vec<Container>,
    /// Client requests, most recent first.
    #[serde(default)]
    pub requests: Vec<Request>,
}

/// A request whose container number matches no container in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DanglingReferenceWarning {
    /// Request holding the reference.
    pub request_id: RequestId,
    /// Container number that could not be resolved.
    pub container: String,
}

impl std::fmt::Display for DanglingReferenceWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "request {} references unknown container {}",
            self.request_id, self.container
        )
    }
}

impl Catalog {
    /// Creates a catalog from already-ingested records.
    #[must_use]
    pub const fn new(containers: Vec<Container>, requests: Vec<Request>) -> Self {
        Self {
            containers,
            requests,
        }
    }

    /// The demonstration catalog: six containers and three requests.
    #[must_use]
    pub fn sample() -> Self {
        let containers = vec![
            sample_container("1", "TCNU3458923", ContainerStatus::Operating, "Гамбург", "40HC"),
            sample_container("2", "MSCU7654321", ContainerStatus::Reserved, "Прием", "20DC"),
            sample_container("3", "GLDU2345678", ContainerStatus::InTransit, "Транзит", "40HC"),
            sample_container("4", "HLBU9876543", ContainerStatus::PreLoading, "Выдача", "20DC"),
            sample_container("5", "TEMU4567890", ContainerStatus::Empty, "Гамбург", "40HC"),
            sample_container("6", "CMAU1234567", ContainerStatus::Dirty, "Прием", "20DC"),
        ];
        let requests = vec![
            sample_request(
                "1",
                RequestType::Intake,
                "TCNU3458923",
                (2025, 10, 26),
                "ООО \"Транслогистика\"",
                RequestStatus::New,
            ),
            sample_request(
                "2",
                RequestType::Release,
                "MSCU7654321",
                (2025, 10, 25),
                "ИП Иванов",
                RequestStatus::InProgress,
            ),
            sample_request(
                "3",
                RequestType::AncillaryService,
                "GLDU2345678",
                (2025, 10, 27),
                "АО \"ГрузТранс\"",
                RequestStatus::Completed,
            ),
        ];
        Self::new(containers, requests)
    }

    /// Loads a catalog from a JSON file.
    ///
    /// The file is only parsed here; call [`Catalog::validate`] before use.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not match the
    /// catalog shape (including unknown status names).
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| LogitrackError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let catalog: Self = serde_json::from_str(&raw)?;
        tracing::info!(
            path = %path.display(),
            containers = catalog.containers.len(),
            requests = catalog.requests.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    /// Checks ingestion invariants.
    ///
    /// # Checks performed
    ///
    /// 1. Container ids are unique.
    /// 2. Container numbers are unique.
    /// 3. Request ids are unique.
    /// 4. Every request references a known container number. Violations are
    ///    returned as warnings rather than errors.
    ///
    /// # Errors
    ///
    /// Returns an error if any of checks 1-3 fails.
    pub fn validate(&self) -> Result<Vec<DanglingReferenceWarning>> {
        check_unique("container id", self.containers.iter().map(|c| c.id.as_str()))?;
        check_unique("container number", self.containers.iter().map(|c| c.number.as_str()))?;
        check_unique("request id", self.requests.iter().map(|r| r.id.as_str()))?;

        let numbers: HashSet<&str> = self.containers.iter().map(|c| c.number.as_str()).collect();
        let warnings: Vec<DanglingReferenceWarning> = self
            .requests
            .iter()
            .filter(|r| !numbers.contains(r.container.as_str()))
            .map(|r| DanglingReferenceWarning {
                request_id: r.id.clone(),
                container: r.container.clone(),
            })
            .collect();
        for warning in &warnings {
            tracing::warn!(
                request = %warning.request_id,
                container = %warning.container,
                "dangling container reference"
            );
        }
        Ok(warnings)
    }

    /// Container numbers, in catalog order.
    pub fn container_numbers(&self) -> impl Iterator<Item = &str> {
        self.containers.iter().map(|c| c.number.as_str())
    }

    /// Looks up a container by its number.
    #[must_use]
    pub fn find_container(&self, number: &str) -> Option<&Container> {
        self.containers.iter().find(|c| c.number == number)
    }
}

fn check_unique<'a>(kind: &str, values: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for value in values {
        if !seen.insert(value) {
            return Err(LogitrackError::Catalog {
                message: format!("duplicate {kind}: \"{value}\""),
            });
        }
    }
    Ok(())
}

fn sample_container(
    id: &str,
    number: &str,
    status: ContainerStatus,
    location: &str,
    kind: &str,
) -> Container {
    Container {
        id: ContainerId::new(id),
        number: number.into(),
        status,
        location: location.into(),
        kind: kind.into(),
    }
}

fn sample_request(
    id: &str,
    kind: RequestType,
    container: &str,
    (year, month, day): (i32, u32, u32),
    client: &str,
    status: RequestStatus,
) -> Request {
    Request {
        id: RequestId::new(id),
        kind,
        container: container.into(),
        date: NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default(),
        client: client.into(),
        status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_catalog_is_valid() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.containers.len(), 6);
        assert_eq!(catalog.requests.len(), 3);
        let warnings = catalog.validate().expect("sample validates");
        assert!(warnings.is_empty());
    }

    #[test]
    fn duplicate_container_id_fails() {
        let mut catalog = Catalog::sample();
        catalog.containers[1].id = ContainerId::new("1");
        let err = catalog.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate container id"), "got: {err}");
    }

    #[test]
    fn duplicate_container_number_fails() {
        let mut catalog = Catalog::sample();
        catalog.containers[2].number = "TCNU3458923".into();
        let err = catalog.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate container number"), "got: {err}");
    }

    #[test]
    fn duplicate_request_id_fails() {
        let mut catalog = Catalog::sample();
        catalog.requests[2].id = RequestId::new("2");
        let err = catalog.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate request id"), "got: {err}");
    }

    #[test]
    fn dangling_reference_is_a_warning() {
        let mut catalog = Catalog::sample();
        catalog.requests[0].container = "GHST0000000".into();
        let warnings = catalog.validate().expect("dangling references do not fail");
        assert_eq!(
            warnings,
            vec![DanglingReferenceWarning {
                request_id: RequestId::new("1"),
                container: "GHST0000000".into(),
            }]
        );
        assert!(warnings[0].to_string().contains("GHST0000000"));
    }

    #[test]
    fn find_container_by_number() {
        let catalog = Catalog::sample();
        let found = catalog.find_container("GLDU2345678").expect("present");
        assert_eq!(found.status, ContainerStatus::InTransit);
        assert!(catalog.find_container("NOPE0000000").is_none());
    }

    #[test]
    fn container_numbers_follow_catalog_order() {
        let catalog = Catalog::sample();
        let numbers: Vec<_> = catalog.container_numbers().collect();
        assert_eq!(numbers.first(), Some(&"TCNU3458923"));
        assert_eq!(numbers.last(), Some(&"CMAU1234567"));
    }

    #[test]
    fn load_reads_json_catalog() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("catalog.json");
        let json = serde_json::to_string_pretty(&Catalog::sample()).expect("serialize");
        std::fs::write(&path, json).expect("write");

        let loaded = Catalog::load(&path).expect("load");
        assert_eq!(loaded, Catalog::sample());
    }

    #[test]
    fn load_rejects_unknown_status() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("catalog.json");
        std::fs::write(
            &path,
            r#"{"containers":[{"id":"1","number":"X","status":"sunk","location":"L","type":"20DC"}]}"#,
        )
        .expect("write");

        let err = Catalog::load(&path).unwrap_err();
        assert!(matches!(err, LogitrackError::Serialization { .. }));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = Catalog::load(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, LogitrackError::Io { .. }));
    }
}
