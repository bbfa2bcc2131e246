use tracing::{debug, warn};

use crate::core::{KnowledgeGraph, ProjectionSettings, project_with};
use crate::error::TimelineResult;
use crate::interaction::{InteractionEvent, ViewState};
use crate::render::{Renderer, Scene};

use super::{DetailPanel, NodeDetail, TimelineConfig};

/// Result of dispatching one interaction event.
#[derive(Debug, Clone, PartialEq)]
pub enum EventOutcome {
    /// A control changed and this scene was rendered.
    Redrawn(Scene),
    /// A point was clicked; the detail panel now shows this content.
    Detail(DetailPanel),
}

/// Explicit event-dispatch loop between the UI layer and the projection core.
///
/// Borrows the immutable graph and owns the only mutable state: the current
/// view controls and detail panel. Every control change re-projects the full
/// scene from that state, so no-op events redraw an identical scene.
pub struct InteractionController<'g, R: Renderer> {
    graph: &'g KnowledgeGraph,
    renderer: R,
    config: TimelineConfig,
    settings: ProjectionSettings,
    view: ViewState,
    detail: DetailPanel,
}

impl<'g, R: Renderer> InteractionController<'g, R> {
    /// Creates a controller with every category selected and the configured
    /// initial scale mode.
    pub fn new(
        graph: &'g KnowledgeGraph,
        renderer: R,
        config: TimelineConfig,
    ) -> TimelineResult<Self> {
        config.validate()?;
        let view = ViewState::initial(graph, config.initial_scale_mode);
        let settings = config.projection_settings();
        debug!(
            nodes = graph.len(),
            categories = view.selection().len(),
            scale_mode = %view.scale_mode(),
            "interaction controller ready"
        );
        Ok(Self {
            graph,
            renderer,
            config,
            settings,
            view,
            detail: DetailPanel::Prompt,
        })
    }

    #[must_use]
    pub fn graph(&self) -> &'g KnowledgeGraph {
        self.graph
    }

    #[must_use]
    pub fn config(&self) -> &TimelineConfig {
        &self.config
    }

    #[must_use]
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    #[must_use]
    pub fn detail(&self) -> &DetailPanel {
        &self.detail
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Projects the current view state without rendering.
    #[must_use]
    pub fn current_scene(&self) -> Scene {
        project_with(
            self.graph.nodes(),
            self.view.selection(),
            self.view.scale_mode(),
            self.view.viewport(),
            &self.settings,
        )
    }

    /// Projects the current view state and hands the scene to the renderer.
    pub fn render(&mut self) -> TimelineResult<Scene> {
        let scene = self.current_scene();
        self.renderer.render(&scene)?;
        Ok(scene)
    }

    /// Applies one event and performs exactly one projection or lookup.
    pub fn handle(&mut self, event: InteractionEvent) -> TimelineResult<EventOutcome> {
        match event {
            InteractionEvent::CategorySelectionChanged(selection) => {
                debug!(selected = selection.len(), "category selection changed");
                self.view.set_selection(selection);
            }
            InteractionEvent::ScaleModeChanged(mode) => {
                debug!(%mode, "scale mode changed");
                self.view.set_scale_mode(mode);
            }
            InteractionEvent::ViewportChanged(viewport) => {
                debug!(?viewport, "viewport changed");
                self.view.set_viewport(viewport);
            }
            InteractionEvent::PointClicked(id) => {
                self.detail = self.lookup(&id);
                return Ok(EventOutcome::Detail(self.detail.clone()));
            }
        }
        self.render().map(EventOutcome::Redrawn)
    }

    /// Resolves a clicked id to panel content. Unknown ids yield
    /// [`DetailPanel::Unavailable`] instead of an error.
    #[must_use]
    pub fn lookup(&self, id: &str) -> DetailPanel {
        match self.graph.find_by_id(id) {
            Ok(node) => DetailPanel::Node(NodeDetail::from_node(node)),
            Err(err) => {
                warn!(%id, error = %err, "clicked point does not resolve to a node");
                DetailPanel::Unavailable
            }
        }
    }
}
