use crate::error::DashResult;
use crate::render::{Renderer, Scene};

/// No-op renderer used by tests and headless dashboard usage.
///
/// It still validates scene content so tests can catch duplicate keys or bad
/// link indices before a real backend is introduced.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub render_calls: usize,
    pub last_mark_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, scene: &Scene) -> DashResult<()> {
        scene.validate()?;
        self.render_calls += 1;
        self.last_mark_count = scene.mark_count();
        Ok(())
    }
}
