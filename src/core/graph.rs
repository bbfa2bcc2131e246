use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use indexmap::map::Entry;
use tracing::{debug, warn};

use crate::core::{KnowledgeNode, Palette, RawGraphDocument, RawNode, build_palette};
use crate::core::normalize::normalize_with_palette;
use crate::error::{TimelineError, TimelineResult};

/// Immutable, fully enriched knowledge graph.
///
/// Built once at startup and shared by reference with projection and node
/// lookup. Nothing in it changes after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct KnowledgeGraph {
    nodes: Vec<KnowledgeNode>,
    palette: Palette,
    id_index: IndexMap<String, usize>,
}

impl KnowledgeGraph {
    /// Builds the palette from first-occurrence category order, then
    /// normalizes every node.
    pub fn from_raw_nodes(raw_nodes: &[RawNode]) -> TimelineResult<Self> {
        let palette = build_palette(raw_nodes.iter().map(|node| node.category.as_str()));
        let nodes = normalize_with_palette(raw_nodes, &palette)?;

        let mut id_index = IndexMap::with_capacity(nodes.len());
        for (position, node) in nodes.iter().enumerate() {
            match id_index.entry(node.id.clone()) {
                Entry::Vacant(slot) => {
                    slot.insert(position);
                }
                Entry::Occupied(first) => {
                    warn!(
                        id = %node.id,
                        first = *first.get(),
                        duplicate = position,
                        "duplicate node id; lookups resolve to the first occurrence"
                    );
                }
            }
        }

        debug!(
            nodes = nodes.len(),
            categories = palette.len(),
            "knowledge graph ready"
        );
        Ok(Self {
            nodes,
            palette,
            id_index,
        })
    }

    pub fn from_document(document: &RawGraphDocument) -> TimelineResult<Self> {
        Self::from_raw_nodes(&document.nodes)
    }

    pub fn from_json_str(input: &str) -> TimelineResult<Self> {
        let document: RawGraphDocument = serde_json::from_str(input).map_err(|e| {
            TimelineError::InvalidData(format!("failed to parse knowledge graph json: {e}"))
        })?;
        Self::from_document(&document)
    }

    pub fn from_json_path(path: impl AsRef<Path>) -> TimelineResult<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| TimelineError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = raw.len(), "loading knowledge graph");
        Self::from_json_str(&raw)
    }

    #[must_use]
    pub fn nodes(&self) -> &[KnowledgeNode] {
        &self.nodes
    }

    #[must_use]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Distinct categories in first-occurrence order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.palette.categories()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Indexed lookup; duplicate ids resolve to their first occurrence.
    pub fn find_by_id(&self, id: &str) -> TimelineResult<&KnowledgeNode> {
        self.id_index
            .get(id)
            .map(|&position| &self.nodes[position])
            .ok_or_else(|| TimelineError::NodeNotFound { id: id.to_owned() })
    }
}

/// Linear lookup over a node slice, returning the first match.
pub fn find_by_id<'a>(nodes: &'a [KnowledgeNode], id: &str) -> TimelineResult<&'a KnowledgeNode> {
    nodes
        .iter()
        .find(|node| node.id == id)
        .ok_or_else(|| TimelineError::NodeNotFound { id: id.to_owned() })
}
