//! Host-facing surface: configuration, the interaction controller and JSON
//! contracts for scenes.

mod config;
mod controller;
mod detail;
mod json_contract;

pub use config::TimelineConfig;
pub use controller::{EventOutcome, InteractionController};
pub use detail::{DetailPanel, NodeDetail};
pub use json_contract::{SCENE_JSON_SCHEMA_V1, SceneJsonContractV1};
