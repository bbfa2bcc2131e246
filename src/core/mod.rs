pub mod date;
pub mod graph;
pub mod normalize;
pub mod palette;
pub mod projection;
pub mod scale;
pub mod selection;
pub mod types;

pub use date::{log_year, parse_signed_year};
pub use graph::{KnowledgeGraph, find_by_id};
pub use normalize::{normalize, normalize_with_palette};
pub use palette::{Palette, build_palette, palette_color};
pub use projection::{DEFAULT_LABEL_REVEAL_SPAN, ProjectionSettings, project, project_with};
pub use scale::{AxisRange, PlotWindow, ScaleMode};
pub use selection::CategorySelection;
pub use types::{KnowledgeNode, RawGraphDocument, RawNode};
