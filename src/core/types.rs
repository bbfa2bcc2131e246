use serde::{Deserialize, Serialize};

use crate::render::Color;

/// One node as it appears in the input document.
///
/// Fields beyond these four are ignored on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawNode {
    pub id: String,
    pub category: String,
    pub date: String,
    pub complexity: f64,
}

impl RawNode {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        category: impl Into<String>,
        date: impl Into<String>,
        complexity: f64,
    ) -> Self {
        Self {
            id: id.into(),
            category: category.into(),
            date: date.into(),
            complexity,
        }
    }
}

/// Top-level input document: `{ "nodes": [...] }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawGraphDocument {
    pub nodes: Vec<RawNode>,
}

/// Enriched node with derived time coordinates and resolved color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeNode {
    pub id: String,
    pub category: String,
    pub date: String,
    pub complexity: f64,
    /// Signed year: BC is negative, AD is positive.
    pub year: i64,
    /// `sign(year) * log10(|year| + 1)`.
    pub log_year: f64,
    pub color: Color,
}
