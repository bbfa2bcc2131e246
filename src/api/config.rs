use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_LABEL_REVEAL_SPAN, ProjectionSettings, ScaleMode};
use crate::error::{TimelineError, TimelineResult};
use crate::render::{AnnotationStyle, LayoutStyle, MarkerStyle, SceneStyle};

/// Public timeline bootstrap configuration.
///
/// Serializable so hosts can persist and load setup without inventing their
/// own format. Every field has a default, so partial documents are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_label_reveal_span")]
    pub label_reveal_span: f64,
    #[serde(default)]
    pub initial_scale_mode: ScaleMode,
    #[serde(default = "default_y_axis_label")]
    pub y_axis_label: String,
    #[serde(default = "default_linear_axis_label")]
    pub linear_axis_label: String,
    #[serde(default = "default_log_axis_label")]
    pub log_axis_label: String,
    #[serde(default)]
    pub marker: MarkerStyle,
    #[serde(default)]
    pub annotation: AnnotationStyle,
    #[serde(default)]
    pub layout: LayoutStyle,
    #[serde(default = "default_prompt_text")]
    pub prompt_text: String,
    #[serde(default = "default_unavailable_text")]
    pub unavailable_text: String,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            label_reveal_span: default_label_reveal_span(),
            initial_scale_mode: ScaleMode::default(),
            y_axis_label: default_y_axis_label(),
            linear_axis_label: default_linear_axis_label(),
            log_axis_label: default_log_axis_label(),
            marker: MarkerStyle::default(),
            annotation: AnnotationStyle::default(),
            layout: LayoutStyle::default(),
            prompt_text: default_prompt_text(),
            unavailable_text: default_unavailable_text(),
        }
    }
}

impl TimelineConfig {
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the X span below which point labels are revealed.
    #[must_use]
    pub fn with_label_reveal_span(mut self, span: f64) -> Self {
        self.label_reveal_span = span;
        self
    }

    #[must_use]
    pub fn with_initial_scale_mode(mut self, mode: ScaleMode) -> Self {
        self.initial_scale_mode = mode;
        self
    }

    #[must_use]
    pub fn with_marker_style(mut self, marker: MarkerStyle) -> Self {
        self.marker = marker;
        self
    }

    #[must_use]
    pub fn with_annotation_style(mut self, annotation: AnnotationStyle) -> Self {
        self.annotation = annotation;
        self
    }

    #[must_use]
    pub fn with_layout_style(mut self, layout: LayoutStyle) -> Self {
        self.layout = layout;
        self
    }

    pub fn validate(&self) -> TimelineResult<()> {
        if !self.label_reveal_span.is_finite() || self.label_reveal_span <= 0.0 {
            return Err(TimelineError::InvalidData(
                "label reveal span must be finite and > 0".to_owned(),
            ));
        }
        self.scene_style().validate()
    }

    #[must_use]
    pub fn scene_style(&self) -> SceneStyle {
        SceneStyle {
            marker: self.marker,
            annotation: self.annotation,
            layout: self.layout.clone(),
        }
    }

    #[must_use]
    pub fn projection_settings(&self) -> ProjectionSettings {
        ProjectionSettings {
            title: self.title.clone(),
            label_reveal_span: self.label_reveal_span,
            linear_axis_label: self.linear_axis_label.clone(),
            log_axis_label: self.log_axis_label.clone(),
            y_axis_label: self.y_axis_label.clone(),
            style: self.scene_style(),
        }
    }

    /// Serializes config to pretty JSON.
    pub fn to_json_pretty(&self) -> TimelineResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| TimelineError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes and validates config from JSON.
    pub fn from_json_str(input: &str) -> TimelineResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| TimelineError::InvalidData(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_path(path: impl AsRef<Path>) -> TimelineResult<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| TimelineError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }
}

fn default_title() -> String {
    "2D Visualization of Human Knowledge".to_owned()
}

fn default_label_reveal_span() -> f64 {
    DEFAULT_LABEL_REVEAL_SPAN
}

fn default_y_axis_label() -> String {
    "Complexity".to_owned()
}

fn default_linear_axis_label() -> String {
    "Linear Scale".to_owned()
}

fn default_log_axis_label() -> String {
    "Logarithmic Scale".to_owned()
}

fn default_prompt_text() -> String {
    "Click a node to see more information here.".to_owned()
}

fn default_unavailable_text() -> String {
    "No information available.".to_owned()
}
