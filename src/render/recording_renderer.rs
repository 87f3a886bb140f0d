use crate::error::DashResult;
use crate::render::{Renderer, Scene};

/// Renderer that stores every validated scene it receives.
///
/// Equality over recorded scenes is how tests assert render idempotency:
/// two renders with unchanged view state must produce identical scenes.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    scenes: Vec<Scene>,
}

impl RecordingRenderer {
    #[must_use]
    pub fn scenes(&self) -> &[Scene] {
        &self.scenes
    }

    #[must_use]
    pub fn last_scene(&self) -> Option<&Scene> {
        self.scenes.last()
    }

    #[must_use]
    pub fn render_count(&self) -> usize {
        self.scenes.len()
    }
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, scene: &Scene) -> DashResult<()> {
        scene.validate()?;
        self.scenes.push(scene.clone());
        Ok(())
    }
}
