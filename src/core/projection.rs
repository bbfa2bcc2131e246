#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;
use tracing::trace;

use crate::core::{CategorySelection, KnowledgeNode, PlotWindow, ScaleMode};
use crate::render::{AxisSpec, Scene, SceneAnnotation, ScenePoint, SceneStyle};

/// X span below which per-point labels become visible.
pub const DEFAULT_LABEL_REVEAL_SPAN: f64 = 2.0;

/// Static inputs of a projection that do not come from view controls.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionSettings {
    pub title: String,
    pub label_reveal_span: f64,
    pub linear_axis_label: String,
    pub log_axis_label: String,
    pub y_axis_label: String,
    pub style: SceneStyle,
}

impl Default for ProjectionSettings {
    fn default() -> Self {
        Self {
            title: "2D Visualization of Human Knowledge".to_owned(),
            label_reveal_span: DEFAULT_LABEL_REVEAL_SPAN,
            linear_axis_label: "Linear Scale".to_owned(),
            log_axis_label: "Logarithmic Scale".to_owned(),
            y_axis_label: "Complexity".to_owned(),
            style: SceneStyle::default(),
        }
    }
}

impl ProjectionSettings {
    #[must_use]
    pub fn x_axis_label(&self, mode: ScaleMode) -> &str {
        match mode {
            ScaleMode::Linear => &self.linear_axis_label,
            ScaleMode::Logarithmic => &self.log_axis_label,
        }
    }

    /// Labels are revealed only when an X range is known and narrower than
    /// the reveal span.
    #[must_use]
    pub fn labels_visible(&self, viewport: Option<PlotWindow>) -> bool {
        viewport
            .and_then(PlotWindow::x_span)
            .is_some_and(|span| span < self.label_reveal_span)
    }
}

/// Projects nodes into a scene with default settings.
#[must_use]
pub fn project(
    nodes: &[KnowledgeNode],
    selection: &CategorySelection,
    mode: ScaleMode,
    viewport: Option<PlotWindow>,
) -> Scene {
    project_with(nodes, selection, mode, viewport, &ProjectionSettings::default())
}

/// Projects the selected nodes into a declarative scene.
///
/// Pure: identical arguments always produce an identical scene, with points
/// and annotations in node order. Every selected node gets one point and one
/// annotation; annotation text stays empty unless labels are revealed.
#[must_use]
pub fn project_with(
    nodes: &[KnowledgeNode],
    selection: &CategorySelection,
    mode: ScaleMode,
    viewport: Option<PlotWindow>,
    settings: &ProjectionSettings,
) -> Scene {
    let show_labels = settings.labels_visible(viewport);

    #[cfg(feature = "parallel-projection")]
    let projected: Vec<(ScenePoint, SceneAnnotation)> = nodes
        .par_iter()
        .filter(|node| selection.contains(&node.category))
        .map(|node| project_node(node, mode, show_labels))
        .collect();

    #[cfg(not(feature = "parallel-projection"))]
    let projected: Vec<(ScenePoint, SceneAnnotation)> = nodes
        .iter()
        .filter(|node| selection.contains(&node.category))
        .map(|node| project_node(node, mode, show_labels))
        .collect();

    let (points, annotations): (Vec<_>, Vec<_>) = projected.into_iter().unzip();
    trace!(
        points = points.len(),
        %mode,
        show_labels,
        "projected scene"
    );

    Scene {
        title: settings.title.clone(),
        points,
        annotations,
        x_axis: AxisSpec {
            label: settings.x_axis_label(mode).to_owned(),
            range: viewport.and_then(|window| window.x).map(|range| range.as_tuple()),
        },
        y_axis: AxisSpec {
            label: settings.y_axis_label.clone(),
            range: viewport.and_then(|window| window.y).map(|range| range.as_tuple()),
        },
        style: settings.style.clone(),
    }
}

fn project_node(
    node: &KnowledgeNode,
    mode: ScaleMode,
    show_labels: bool,
) -> (ScenePoint, SceneAnnotation) {
    let x = mode.x_of(node);
    let y = node.complexity;
    let point = ScenePoint {
        x,
        y,
        color: node.color,
        hover_text: node.id.clone(),
    };
    let annotation = SceneAnnotation {
        x,
        y,
        text: if show_labels {
            node.id.clone()
        } else {
            String::new()
        },
        color: node.color,
    };
    (point, annotation)
}
