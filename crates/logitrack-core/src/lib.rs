//! # logitrack-core
//!
//! Everything the dashboard shows is computed here:
//! - [`engine`]: pure filter, count, and aggregate functions over a catalog.
//! - [`catalog`]: the container and request catalog, its sample data, and
//!   ingestion checks.
//! - [`planning`]: the five-week slot-planning calendar.

#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

pub mod catalog;
pub mod engine;
pub mod planning;
