use serde::{Deserialize, Serialize};

use crate::core::{CategorySelection, KnowledgeGraph, PlotWindow, ScaleMode};

/// Control change or click delivered by the UI layer, one at a time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InteractionEvent {
    CategorySelectionChanged(CategorySelection),
    ScaleModeChanged(ScaleMode),
    ViewportChanged(Option<PlotWindow>),
    /// Hover text of the clicked point, which is the node id.
    PointClicked(String),
}

impl InteractionEvent {
    /// Returns `true` for events that require a new scene.
    #[must_use]
    pub fn is_control_change(&self) -> bool {
        !matches!(self, Self::PointClicked(_))
    }
}

/// The three pieces of UI state a scene is projected from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    selection: CategorySelection,
    scale_mode: ScaleMode,
    viewport: Option<PlotWindow>,
}

impl ViewState {
    #[must_use]
    pub fn new(selection: CategorySelection, scale_mode: ScaleMode) -> Self {
        Self {
            selection,
            scale_mode,
            viewport: None,
        }
    }

    /// Initial state: every category selected, no viewport.
    #[must_use]
    pub fn initial(graph: &KnowledgeGraph, scale_mode: ScaleMode) -> Self {
        Self::new(CategorySelection::all(graph), scale_mode)
    }

    #[must_use]
    pub fn selection(&self) -> &CategorySelection {
        &self.selection
    }

    #[must_use]
    pub fn scale_mode(&self) -> ScaleMode {
        self.scale_mode
    }

    #[must_use]
    pub fn viewport(&self) -> Option<PlotWindow> {
        self.viewport
    }

    pub fn set_selection(&mut self, selection: CategorySelection) {
        self.selection = selection;
    }

    pub fn set_scale_mode(&mut self, mode: ScaleMode) {
        self.scale_mode = mode;
    }

    pub fn set_viewport(&mut self, viewport: Option<PlotWindow>) {
        self.viewport = viewport;
    }
}
