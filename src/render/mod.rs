mod null_renderer;
mod recording_renderer;
mod scene;

pub use null_renderer::NullRenderer;
pub use recording_renderer::RecordingRenderer;
pub use scene::{
    CategoryTrendMark, CategoryTrendScene, ClusterMark, ClusterScene, FlowLink, FlowScene,
    GridDensity, RegionMark, RegionScene, Scene, UnitGridScene, UnitMark,
};

use crate::error::DashResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive fully shaped scene data: aggregation, filtering, and
/// highlight flags are already resolved, so drawing code stays isolated from
/// dashboard domain and interaction logic. Layout (force simulation, treemap
/// tiling, flow routing) is the backend's business.
pub trait Renderer {
    fn render(&mut self, scene: &Scene) -> DashResult<()>;
}
