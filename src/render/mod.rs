mod null_renderer;
mod primitives;
mod scene;

pub use null_renderer::NullRenderer;
pub use primitives::Color;
pub use scene::{
    AnnotationStyle, AxisSpec, LayoutStyle, MarkerStyle, Scene, SceneAnnotation, ScenePoint,
    SceneStyle,
};

use crate::error::TimelineResult;

/// Contract implemented by any rendering sink.
///
/// Sinks receive a fully materialized, deterministic `Scene` so drawing code
/// stays isolated from filtering and view-state logic.
pub trait Renderer {
    fn render(&mut self, scene: &Scene) -> TimelineResult<()>;
}
