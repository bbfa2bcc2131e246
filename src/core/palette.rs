use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::render::Color;

const PALETTE_ALPHA: f64 = 0.7;

/// Category to color mapping.
///
/// Categories keep first-occurrence order, so the same ordered input always
/// produces the same assignment. Colors are not guaranteed to be distinct.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette {
    colors: IndexMap<String, Color>,
}

impl Palette {
    #[must_use]
    pub fn color_of(&self, category: &str) -> Option<Color> {
        self.colors.get(category).copied()
    }

    #[must_use]
    pub fn contains(&self, category: &str) -> bool {
        self.colors.contains_key(category)
    }

    /// Categories in assignment order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.colors.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Color)> {
        self.colors
            .iter()
            .map(|(category, color)| (category.as_str(), *color))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// Builds a palette from a category sequence, deduplicating by first occurrence.
pub fn build_palette<I, S>(categories: I) -> Palette
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut colors: IndexMap<String, Color> = IndexMap::new();
    for category in categories {
        let category = category.as_ref();
        if colors.contains_key(category) {
            continue;
        }
        let color = palette_color(colors.len());
        colors.insert(category.to_owned(), color);
    }
    debug!(categories = colors.len(), "built category palette");
    Palette { colors }
}

/// Color assigned to the category at `index`.
#[must_use]
pub fn palette_color(index: usize) -> Color {
    let channel = |step: usize| (index.wrapping_mul(step) % 255) as u8;
    Color::rgba8(channel(37), channel(57), channel(97), PALETTE_ALPHA)
}
