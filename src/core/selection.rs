use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::core::KnowledgeGraph;

/// Set of categories currently shown by the category filter.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategorySelection {
    categories: IndexSet<String>,
}

impl CategorySelection {
    /// Empty selection; projects to an empty scene.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Every category discovered in the graph, in palette order.
    #[must_use]
    pub fn all(graph: &KnowledgeGraph) -> Self {
        graph.categories().collect()
    }

    #[must_use]
    pub fn contains(&self, category: &str) -> bool {
        self.categories.contains(category)
    }

    /// Returns `true` when the category was not selected before.
    pub fn insert(&mut self, category: impl Into<String>) -> bool {
        self.categories.insert(category.into())
    }

    pub fn remove(&mut self, category: &str) -> bool {
        self.categories.shift_remove(category)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for CategorySelection {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            categories: iter.into_iter().map(Into::into).collect(),
        }
    }
}
