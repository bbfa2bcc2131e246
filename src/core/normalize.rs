use tracing::{debug, trace};

use crate::core::date::{log_year, parse_signed_year};
use crate::core::{KnowledgeNode, Palette, RawNode, build_palette};
use crate::error::{TimelineError, TimelineResult};

/// Normalizes raw nodes with a palette built from their own categories.
pub fn normalize(raw_nodes: &[RawNode]) -> TimelineResult<Vec<KnowledgeNode>> {
    let palette = build_palette(raw_nodes.iter().map(|node| node.category.as_str()));
    normalize_with_palette(raw_nodes, &palette)
}

/// Enriches raw nodes with signed year, log year and palette color.
///
/// Output order matches input order. The first malformed date aborts the
/// whole batch.
pub fn normalize_with_palette(
    raw_nodes: &[RawNode],
    palette: &Palette,
) -> TimelineResult<Vec<KnowledgeNode>> {
    let mut nodes = Vec::with_capacity(raw_nodes.len());
    for raw in raw_nodes {
        nodes.push(normalize_node(raw, palette)?);
    }
    debug!(count = nodes.len(), "normalized knowledge nodes");
    Ok(nodes)
}

fn normalize_node(raw: &RawNode, palette: &Palette) -> TimelineResult<KnowledgeNode> {
    let year = parse_signed_year(&raw.date).ok_or_else(|| TimelineError::MalformedDate {
        node_id: raw.id.clone(),
        date: raw.date.clone(),
    })?;
    let color = palette.color_of(&raw.category).ok_or_else(|| {
        TimelineError::InvalidData(format!(
            "category `{}` of node `{}` has no palette color",
            raw.category, raw.id
        ))
    })?;
    trace!(id = %raw.id, year, "normalized node");

    Ok(KnowledgeNode {
        id: raw.id.clone(),
        category: raw.category.clone(),
        date: raw.date.clone(),
        complexity: raw.complexity,
        year,
        log_year: log_year(year),
        color,
    })
}
