//! Configuration and report orchestration for the Arbor carbon dashboard.
//!
//! This crate sits between the binary and the two pure engines. It owns
//! the typed configuration and composes aggregation, statistics, status,
//! chart data, and the forest scene into one serializable report.
//!
//! # Modules
//!
//! - [`config`] -- Configuration loading from `arbor-config.yaml` into
//!   strongly-typed structs.
//! - [`dashboard`] -- [`Dashboard`] and the [`DashboardReport`] it builds.
//!
//! [`Dashboard`]: dashboard::Dashboard
//! [`DashboardReport`]: dashboard::DashboardReport

pub mod config;
pub mod dashboard;

pub use config::{ArborConfig, ConfigError};
pub use dashboard::{Dashboard, DashboardError, DashboardReport};
