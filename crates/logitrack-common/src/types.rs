//! Domain primitive types used across the LogiTrack workspace.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::LogitrackError;

/// Unique identifier for a container record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContainerId(String);

impl ContainerId {
    /// Creates a new container ID from a string value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the inner string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a client request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(String);

impl RequestId {
    /// Creates a new request ID from a string value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the inner string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Operational state of a container. Exactly one applies at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContainerStatus {
    /// Loaded and in active operation.
    Operating,
    /// Held for a client.
    Reserved,
    /// Listed for sale.
    ForSale,
    /// Damaged and awaiting repair.
    Faulty,
    /// Requires cleaning before reuse.
    Dirty,
    /// Empty and available.
    Empty,
    /// Moving between sites.
    InTransit,
    /// Staged for loading.
    PreLoading,
    /// Not yet inspected.
    Unverified,
}

impl ContainerStatus {
    /// Every status, in display order.
    pub const ALL: [Self; 9] = [
        Self::Operating,
        Self::Reserved,
        Self::ForSale,
        Self::Faulty,
        Self::Dirty,
        Self::Empty,
        Self::InTransit,
        Self::PreLoading,
        Self::Unverified,
    ];

    /// Machine name, as used on the command line and in catalog files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Operating => "operating",
            Self::Reserved => "reserved",
            Self::ForSale => "for-sale",
            Self::Faulty => "faulty",
            Self::Dirty => "dirty",
            Self::Empty => "empty",
            Self::InTransit => "in-transit",
            Self::PreLoading => "pre-loading",
            Self::Unverified => "unverified",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Operating => "в оперировании",
            Self::Reserved => "забронирован",
            Self::ForSale => "на продажу",
            Self::Faulty => "неисправный",
            Self::Dirty => "грязный",
            Self::Empty => "порожний",
            Self::InTransit => "в пути",
            Self::PreLoading => "под погрузку",
            Self::Unverified => "непроверенный",
        }
    }
}

impl fmt::Display for ContainerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ContainerStatus {
    type Err = LogitrackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| LogitrackError::UnknownStatus {
                value: s.to_string(),
            })
    }
}

/// Category of a client-facing logistics operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RequestType {
    /// Cargo intake.
    Intake,
    /// Cargo release.
    Release,
    /// Additional services.
    AncillaryService,
}

impl RequestType {
    /// Every request type, in display order.
    pub const ALL: [Self; 3] = [Self::Intake, Self::Release, Self::AncillaryService];

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Intake => "Прием груза",
            Self::Release => "Выдача груза",
            Self::AncillaryService => "Доп. услуги",
        }
    }
}

impl fmt::Display for RequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Lifecycle stage of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RequestStatus {
    /// Received, not yet picked up.
    New,
    /// Being processed.
    InProgress,
    /// Done.
    Completed,
}

impl RequestStatus {
    /// Every request status, in lifecycle order.
    pub const ALL: [Self; 3] = [Self::New, Self::InProgress, Self::Completed];

    /// Machine name, as used on the command line and in catalog files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::New => "новая",
            Self::InProgress => "в работе",
            Self::Completed => "выполнена",
        }
    }

    /// Whether the request still needs work.
    #[must_use]
    pub const fn is_active(self) -> bool {
        !matches!(self, Self::Completed)
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for RequestStatus {
    type Err = LogitrackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| LogitrackError::UnknownStatus {
                value: s.to_string(),
            })
    }
}

/// A shipping container tracked by the operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container {
    /// Unique record identifier.
    pub id: ContainerId,
    /// Shipping-container number (4 letters + 7 digits, not validated).
    pub number: String,
    /// Current operational status.
    pub status: ContainerStatus,
    /// Site name.
    pub location: String,
    /// Equipment size code, e.g. `20DC` or `40HC`.
    #[serde(rename = "type")]
    pub kind: String,
}

/// A client request against a container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    /// Unique record identifier.
    pub id: RequestId,
    /// Operation category.
    #[serde(rename = "type")]
    pub kind: RequestType,
    /// Number of the referenced container. Not guaranteed to exist.
    pub container: String,
    /// Requested date.
    pub date: NaiveDate,
    /// Client name.
    pub client: String,
    /// Lifecycle stage.
    pub status: RequestStatus,
}

/// Status selection applied to the container registry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StatusFilter {
    /// No status restriction.
    #[default]
    All,
    /// Only containers in the given status.
    Only(ContainerStatus),
}

impl StatusFilter {
    /// Returns whether a container in `status` passes this filter.
    #[must_use]
    pub fn matches(self, status: ContainerStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == status,
        }
    }

    /// The filter after this one when cycling `All`, then each status in order.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::All => Self::Only(ContainerStatus::ALL[0]),
            Self::Only(status) => {
                let idx = status_index(status);
                ContainerStatus::ALL
                    .get(idx + 1)
                    .map_or(Self::All, |&next| Self::Only(next))
            }
        }
    }

    /// The filter before this one; inverse of [`StatusFilter::next`].
    #[must_use]
    pub fn previous(self) -> Self {
        match self {
            Self::All => Self::Only(ContainerStatus::ALL[ContainerStatus::ALL.len() - 1]),
            Self::Only(status) => match status_index(status) {
                0 => Self::All,
                idx => Self::Only(ContainerStatus::ALL[idx - 1]),
            },
        }
    }
}

fn status_index(status: ContainerStatus) -> usize {
    ContainerStatus::ALL
        .iter()
        .position(|&s| s == status)
        .unwrap_or_default()
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.pad("all"),
            Self::Only(status) => fmt::Display::fmt(status, f),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = LogitrackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(Self::All);
        }
        s.parse().map(Self::Only)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn container_status_roundtrips_through_str() {
        for status in ContainerStatus::ALL {
            assert_eq!(status.as_str().parse::<ContainerStatus>().unwrap(), status);
        }
    }

    #[test]
    fn every_enum_has_a_distinct_label() {
        let container: HashSet<_> = ContainerStatus::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(container.len(), ContainerStatus::ALL.len());
        let kinds: HashSet<_> = RequestType::ALL.iter().map(|k| k.label()).collect();
        assert_eq!(kinds.len(), RequestType::ALL.len());
        let requests: HashSet<_> = RequestStatus::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(requests.len(), RequestStatus::ALL.len());
    }

    #[test]
    fn labels_differ_from_machine_names() {
        assert_eq!(ContainerStatus::Empty.label(), "порожний");
        assert_eq!(RequestStatus::InProgress.label(), "в работе");
        assert_eq!(RequestStatus::InProgress.to_string(), "in-progress");
        assert_eq!(RequestType::ALL[2].label(), "Доп. услуги");
    }

    #[test]
    fn unknown_status_is_rejected() {
        let err = "broken".parse::<ContainerStatus>().unwrap_err();
        assert!(err.to_string().contains("broken"), "got: {err}");
    }

    #[test]
    fn status_filter_parses_all_and_statuses() {
        assert_eq!("all".parse::<StatusFilter>().unwrap(), StatusFilter::All);
        assert_eq!(
            "in-transit".parse::<StatusFilter>().unwrap(),
            StatusFilter::Only(ContainerStatus::InTransit)
        );
        assert!("everything".parse::<StatusFilter>().is_err());
    }

    #[test]
    fn status_filter_cycles_through_every_status() {
        let mut filter = StatusFilter::All;
        let mut seen = Vec::new();
        for _ in 0..ContainerStatus::ALL.len() {
            filter = filter.next();
            seen.push(filter);
        }
        assert_eq!(filter, StatusFilter::Only(ContainerStatus::Unverified));
        assert_eq!(filter.next(), StatusFilter::All);
        assert_eq!(seen.len(), 9);
    }

    #[test]
    fn status_filter_previous_inverts_next() {
        let mut filter = StatusFilter::All;
        for _ in 0..12 {
            assert_eq!(filter.next().previous(), filter);
            filter = filter.next();
        }
    }

    #[test]
    fn container_serializes_kind_as_type() {
        let container = Container {
            id: ContainerId::new("1"),
            number: "TCNU3458923".into(),
            status: ContainerStatus::InTransit,
            location: "Гамбург".into(),
            kind: "40HC".into(),
        };
        let json = serde_json::to_value(&container).unwrap();
        assert_eq!(json["type"], "40HC");
        assert_eq!(json["status"], "in-transit");
    }

    #[test]
    fn request_deserializes_from_catalog_shape() {
        let json = r#"{
            "id": "3",
            "type": "ancillary-service",
            "container": "GLDU2345678",
            "date": "2025-10-27",
            "client": "АО \"ГрузТранс\"",
            "status": "completed"
        }"#;
        let request: Request = serde_json::from_str(json).unwrap();
        assert_eq!(request.kind, RequestType::AncillaryService);
        assert_eq!(request.status, RequestStatus::Completed);
        assert!(!request.status.is_active());
        assert_eq!(request.id.to_string(), "#3");
    }

    #[test]
    fn request_with_unknown_status_fails_to_deserialize() {
        let json = r#"{"id":"1","type":"intake","container":"X","date":"2025-10-26","client":"c","status":"lost"}"#;
        assert!(serde_json::from_str::<Request>(json).is_err());
    }
}
