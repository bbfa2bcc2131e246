use serde::{Deserialize, Serialize};

use crate::api::TimelineConfig;
use crate::core::KnowledgeNode;
use crate::render::Color;

/// Fields shown for a clicked node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeDetail {
    pub title: String,
    pub title_color: Color,
    pub category: String,
    pub complexity: f64,
    pub date: String,
}

impl NodeDetail {
    #[must_use]
    pub fn from_node(node: &KnowledgeNode) -> Self {
        Self {
            title: node.id.clone(),
            title_color: node.color,
            category: node.category.clone(),
            complexity: node.complexity,
            date: node.date.clone(),
        }
    }

    /// Body lines under the title.
    #[must_use]
    pub fn lines(&self) -> [String; 3] {
        [
            format!("Category: {}", self.category),
            format!("Complexity: {}", self.complexity),
            format!("Date: {}", self.date),
        ]
    }
}

/// Content of the node detail panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DetailPanel {
    /// Nothing clicked yet.
    Prompt,
    Node(NodeDetail),
    /// The clicked id did not resolve to a node.
    Unavailable,
}

impl DetailPanel {
    #[must_use]
    pub fn node(&self) -> Option<&NodeDetail> {
        match self {
            Self::Node(detail) => Some(detail),
            Self::Prompt | Self::Unavailable => None,
        }
    }
}

impl DetailPanel {
    /// Placeholder text for panels without node content.
    #[must_use]
    pub fn placeholder_text<'a>(&self, config: &'a TimelineConfig) -> Option<&'a str> {
        match self {
            Self::Prompt => Some(&config.prompt_text),
            Self::Unavailable => Some(&config.unavailable_text),
            Self::Node(_) => None,
        }
    }
}
