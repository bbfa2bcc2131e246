use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::KnowledgeNode;
use crate::error::{TimelineError, TimelineResult};

/// Transform applied to the time (X) axis. The Y axis is always linear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ScaleMode {
    /// Raw signed years.
    Linear,
    /// Sign-preserving `log10(|year| + 1)`.
    #[default]
    #[serde(alias = "log")]
    Logarithmic,
}

impl ScaleMode {
    /// X coordinate of a node under this mode.
    #[must_use]
    pub fn x_of(self, node: &KnowledgeNode) -> f64 {
        match self {
            Self::Linear => node.year as f64,
            Self::Logarithmic => node.log_year,
        }
    }

    /// Value used by the scale toggle control.
    #[must_use]
    pub fn control_value(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Logarithmic => "log",
        }
    }
}

impl fmt::Display for ScaleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.control_value())
    }
}

impl FromStr for ScaleMode {
    type Err = TimelineError;

    fn from_str(value: &str) -> TimelineResult<Self> {
        match value {
            "linear" => Ok(Self::Linear),
            "log" | "logarithmic" => Ok(Self::Logarithmic),
            other => Err(TimelineError::InvalidData(format!(
                "unknown scale mode `{other}`"
            ))),
        }
    }
}

/// Visible range of one axis, in that axis' active units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// `max - min`; negative when the range is reversed.
    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn as_tuple(self) -> (f64, f64) {
        (self.min, self.max)
    }
}

/// Viewport reported by the rendering sink after zoom or pan.
///
/// Each axis is optional because sinks may report only the axis that changed.
/// Bounds are passed through unvalidated.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PlotWindow {
    #[serde(default)]
    pub x: Option<AxisRange>,
    #[serde(default)]
    pub y: Option<AxisRange>,
}

impl PlotWindow {
    #[must_use]
    pub const fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x: Some(AxisRange::new(x_min, x_max)),
            y: Some(AxisRange::new(y_min, y_max)),
        }
    }

    #[must_use]
    pub const fn x_only(x_min: f64, x_max: f64) -> Self {
        Self {
            x: Some(AxisRange::new(x_min, x_max)),
            y: None,
        }
    }

    #[must_use]
    pub const fn y_only(y_min: f64, y_max: f64) -> Self {
        Self {
            x: None,
            y: Some(AxisRange::new(y_min, y_max)),
        }
    }

    #[must_use]
    pub fn x_span(self) -> Option<f64> {
        self.x.map(AxisRange::span)
    }
}
