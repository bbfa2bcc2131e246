//! knowledge-timeline: projection engine for dated knowledge graphs.
//!
//! Raw graph nodes are normalized once into an immutable [`core::KnowledgeGraph`]
//! and then projected into renderer-agnostic [`render::Scene`] values every
//! time a view control changes.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{InteractionController, TimelineConfig};
pub use error::{TimelineError, TimelineResult};
