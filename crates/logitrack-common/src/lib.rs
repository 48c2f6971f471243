//! # logitrack-common
//!
//! Shared domain types, error definitions, configuration models, and constants
//! used across the entire LogiTrack workspace.
//!
//! This crate is the leaf of the dependency graph: it depends on no other
//! internal crate and provides the catalog entities (containers and client
//! requests) that every other crate derives its views from.

#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
