use crate::error::TimelineResult;
use crate::render::{Renderer, Scene};

/// No-op renderer used by tests and headless usage.
///
/// It still validates scene content so tests catch invalid geometry before a
/// real sink is attached.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub render_count: usize,
    pub last_point_count: usize,
    pub last_visible_label_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, scene: &Scene) -> TimelineResult<()> {
        scene.validate()?;
        self.render_count += 1;
        self.last_point_count = scene.points.len();
        self.last_visible_label_count = scene.visible_label_count();
        Ok(())
    }
}
