//! Tag-based visibility filtering

use std::collections::HashSet;

/// True when every active tag appears in the item's own tags.
///
/// An empty selection matches everything. Comparison is exact string
/// equality, case-sensitive; duplicates on either side do not affect the
/// result. This is set inclusion, not overlap: the item must carry ALL
/// active tags.
pub fn matches_all_tags(item_tags: &[String], active: &[String]) -> bool {
    if active.is_empty() {
        return true;
    }
    let set: HashSet<&str> = item_tags.iter().map(String::as_str).collect();
    active.iter().all(|tag| set.contains(tag.as_str()))
}

/// The currently selected filter tags.
///
/// Owned by one presentation-layer controller; the filter functions only
/// read it. Selection order is preserved so toggling feels predictable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSelection {
    active: Vec<String>,
}

impl TagSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a selection from an ordered list of tags.
    pub fn from_tags<I>(tags: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            active: tags.into_iter().collect(),
        }
    }

    /// Add the tag if absent, remove it if present.
    pub fn toggle(&mut self, tag: &str) {
        if let Some(pos) = self.active.iter().position(|t| t == tag) {
            self.active.remove(pos);
        } else {
            self.active.push(tag.to_string());
        }
    }

    /// Deselect everything.
    pub fn clear(&mut self) {
        self.active.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.active
    }
}
