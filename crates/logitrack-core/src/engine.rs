//! Derived-state engine.
//!
//! Computes every number and row the dashboard displays from the catalog
//! plus the caller's filter inputs. All functions are pure: they hold no
//! state between calls and may be invoked on every input change.

use logitrack_common::constants::DEFAULT_UTILIZATION_PERCENT;
use logitrack_common::types::{Container, ContainerStatus, Request, RequestStatus, StatusFilter};
use serde::Serialize;

/// Share of the catalog held by one container status.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatusShare {
    /// Status this entry describes.
    pub status: ContainerStatus,
    /// Containers currently in `status`.
    pub count: usize,
    /// `count` as a percentage of the catalog; 0 for an empty catalog.
    pub percentage: f64,
}

/// Headline figures for the dashboard cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DashboardMetrics {
    /// Size of the container catalog.
    pub total_containers: usize,
    /// Requests not yet completed.
    pub active_requests: usize,
    /// Containers in the `in-transit` status.
    pub in_transit: usize,
    /// Displayed utilization. Not derived from the catalog.
    pub utilization_percent: u8,
}

impl DashboardMetrics {
    /// Replaces the displayed utilization figure, clamped to 100.
    #[must_use]
    pub fn with_utilization(mut self, percent: u8) -> Self {
        self.utilization_percent = percent.min(100);
        self
    }
}

/// Counts containers in the given status.
pub fn count_by_status(containers: &[Container], status: ContainerStatus) -> usize {
    containers.iter().filter(|c| c.status == status).count()
}

/// Per-status counts and percentages, one entry per status in enumeration order.
#[allow(clippy::cast_precision_loss)]
pub fn status_distribution(containers: &[Container]) -> Vec<StatusShare> {
    let total = containers.len();
    tracing::debug!(total, "computing status distribution");
    ContainerStatus::ALL
        .into_iter()
        .map(|status| {
            let count = count_by_status(containers, status);
            let percentage = if total == 0 {
                0.0
            } else {
                100.0 * count as f64 / total as f64
            };
            StatusShare {
                status,
                count,
                percentage,
            }
        })
        .collect()
}

/// Returns the containers visible under the status filter and search text.
///
/// The search is case-insensitive and matches either the container number or
/// its location. Input order is preserved.
pub fn filter_containers<'a>(
    containers: &'a [Container],
    status_filter: StatusFilter,
    search_text: &str,
) -> Vec<&'a Container> {
    let needle = search_text.to_lowercase();
    let visible: Vec<&Container> = containers
        .iter()
        .filter(|c| status_filter.matches(c.status) && matches_search(c, &needle))
        .collect();
    tracing::debug!(
        filter = %status_filter,
        search = search_text,
        visible = visible.len(),
        total = containers.len(),
        "filtered containers"
    );
    visible
}

fn matches_search(container: &Container, needle: &str) -> bool {
    needle.is_empty()
        || container.number.to_lowercase().contains(needle)
        || container.location.to_lowercase().contains(needle)
}

/// Counts requests that are not yet completed.
pub fn active_request_count(requests: &[Request]) -> usize {
    requests.iter().filter(|r| r.status.is_active()).count()
}

/// Counts requests in the given lifecycle stage.
pub fn requests_by_status(requests: &[Request], status: RequestStatus) -> usize {
    requests.iter().filter(|r| r.status == status).count()
}

/// The first `limit` requests in catalog order.
pub fn recent_requests(requests: &[Request], limit: usize) -> &[Request] {
    &requests[..limit.min(requests.len())]
}

/// Aggregates the dashboard's headline figures.
///
/// `utilization_percent` carries the default display value; use
/// [`DashboardMetrics::with_utilization`] to apply a configured one.
pub fn dashboard_metrics(containers: &[Container], requests: &[Request]) -> DashboardMetrics {
    DashboardMetrics {
        total_containers: containers.len(),
        active_requests: active_request_count(requests),
        in_transit: count_by_status(containers, ContainerStatus::InTransit),
        utilization_percent: DEFAULT_UTILIZATION_PERCENT,
    }
}
