use serde::{Deserialize, Serialize};

use crate::error::{TimelineError, TimelineResult};
use crate::render::Color;

/// One scatter marker in data space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenePoint {
    pub x: f64,
    pub y: f64,
    pub color: Color,
    /// Node id; also the identity reported back on click.
    pub hover_text: String,
}

/// Per-point callout. Empty `text` means present but blank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneAnnotation {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisSpec {
    pub label: String,
    /// Fixed range, or `None` to let the sink auto-fit.
    pub range: Option<(f64, f64)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerStyle {
    pub size_px: f64,
    pub outline_width_px: f64,
    pub outline_color: Color,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            size_px: 10.0,
            outline_width_px: 2.0,
            outline_color: Color::DARK_BLUE,
        }
    }
}

/// Arrow callout geometry; offsets are pixels from the anchored point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnnotationStyle {
    pub show_arrow: bool,
    pub arrow_head: u8,
    pub offset_x_px: f64,
    pub offset_y_px: f64,
}

impl Default for AnnotationStyle {
    fn default() -> Self {
        Self {
            show_arrow: true,
            arrow_head: 7,
            offset_x_px: 0.0,
            offset_y_px: -20.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutStyle {
    pub background: Color,
    pub grid_color: Color,
    pub zero_line_color: Color,
    pub margin_px: f64,
    pub height_px: f64,
    pub hover_mode: String,
}

impl Default for LayoutStyle {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            grid_color: Color::LIGHT_GREY,
            zero_line_color: Color::GREY,
            margin_px: 40.0,
            height_px: 800.0,
            hover_mode: "closest".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SceneStyle {
    pub marker: MarkerStyle,
    pub annotation: AnnotationStyle,
    pub layout: LayoutStyle,
}

impl SceneStyle {
    pub fn validate(&self) -> TimelineResult<()> {
        for (value, name) in [
            (self.marker.size_px, "marker.size_px"),
            (self.marker.outline_width_px, "marker.outline_width_px"),
            (self.layout.height_px, "layout.height_px"),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(TimelineError::InvalidData(format!(
                    "style `{name}` must be finite and > 0"
                )));
            }
        }
        if !self.layout.margin_px.is_finite() || self.layout.margin_px < 0.0 {
            return Err(TimelineError::InvalidData(
                "style `layout.margin_px` must be finite and >= 0".to_owned(),
            ));
        }
        if !self.annotation.offset_x_px.is_finite() || !self.annotation.offset_y_px.is_finite() {
            return Err(TimelineError::InvalidData(
                "annotation offsets must be finite".to_owned(),
            ));
        }
        self.marker.outline_color.validate()?;
        self.layout.background.validate()?;
        self.layout.grid_color.validate()?;
        self.layout.zero_line_color.validate()
    }
}

/// Renderer-agnostic description of one projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub title: String,
    pub points: Vec<ScenePoint>,
    pub annotations: Vec<SceneAnnotation>,
    pub x_axis: AxisSpec,
    pub y_axis: AxisSpec,
    #[serde(default)]
    pub style: SceneStyle,
}

impl Scene {
    /// Checks coordinates and colors. Axis ranges may be reversed or
    /// non-finite; the sink decides how to clamp them.
    pub fn validate(&self) -> TimelineResult<()> {
        for point in &self.points {
            if !point.x.is_finite() || !point.y.is_finite() {
                return Err(TimelineError::InvalidData(format!(
                    "point `{}` coordinates must be finite",
                    point.hover_text
                )));
            }
            point.color.validate()?;
        }
        for annotation in &self.annotations {
            if !annotation.x.is_finite() || !annotation.y.is_finite() {
                return Err(TimelineError::InvalidData(
                    "annotation coordinates must be finite".to_owned(),
                ));
            }
            annotation.color.validate()?;
        }
        self.style.validate()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty() && self.annotations.is_empty()
    }

    /// Annotations that carry label text.
    #[must_use]
    pub fn visible_label_count(&self) -> usize {
        self.annotations
            .iter()
            .filter(|annotation| !annotation.text.is_empty())
            .count()
    }
}
