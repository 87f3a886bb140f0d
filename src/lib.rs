//! dashlink-rs: linked-view survey dashboard core.
//!
//! This crate provides the data aggregation pipeline and the cross-chart
//! selection coordination for a dashboard of five linked statistical views.
//! Rendering backends stay behind the `render::Renderer` seam.

pub mod api;
pub mod core;
pub mod dataset;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{Dashboard, DashboardConfig, DashboardSnapshot};
pub use error::{DashError, DashResult};
