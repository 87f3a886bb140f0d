mod category_trend_view;
mod cluster_view;
mod dashboard;
mod dashboard_config;
mod flow_view;
mod region_view;
mod snapshot;
mod unit_dot_view;
mod view_phase;

pub use category_trend_view::CategoryTrendView;
pub use cluster_view::ClusterView;
pub use dashboard::Dashboard;
pub use dashboard_config::DashboardConfig;
pub use flow_view::FlowView;
pub use region_view::RegionView;
pub use snapshot::{
    DASHBOARD_SNAPSHOT_JSON_SCHEMA_V1, DashboardSnapshot, DashboardSnapshotJsonContractV1,
    ViewSnapshot,
};
pub use unit_dot_view::UnitDotView;
pub use view_phase::ViewPhase;
