use super::GalleryItem;
use std::fmt;

/// Keyword of the universal tag.
pub const ALL_TAG: &str = "all";

/// The active tag: either everything, or items carrying one specific tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum TagFilter {
    #[default]
    All,
    Tag(String),
}

impl TagFilter {
    /// Parse a tag name. `"all"` (any case) selects the universal tag.
    pub fn parse(name: &str) -> Self {
        let name = name.trim();
        if name.eq_ignore_ascii_case(ALL_TAG) {
            TagFilter::All
        } else {
            TagFilter::Tag(name.to_string())
        }
    }

    /// Whether an item with the given tag passes this filter.
    pub fn matches(&self, tag: Option<&str>) -> bool {
        match self {
            TagFilter::All => true,
            TagFilter::Tag(wanted) => tag == Some(wanted.as_str()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            TagFilter::All => ALL_TAG,
            TagFilter::Tag(tag) => tag,
        }
    }

    /// Human-readable label, using `all_label` for the universal tag.
    pub fn label<'a>(&'a self, all_label: &'a str) -> &'a str {
        match self {
            TagFilter::All => all_label,
            TagFilter::Tag(tag) => tag,
        }
    }
}

impl fmt::Display for TagFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unique tags in first-encounter order. The universal tag is implicit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet {
    tags: Vec<String>,
}

impl TagSet {
    /// Scan items once. A tag literally named "all" collides with the
    /// universal tag and is not listed.
    pub fn from_items(items: &[GalleryItem]) -> Self {
        let mut tags: Vec<String> = Vec::new();
        for tag in items.iter().filter_map(|item| item.tag.as_deref()) {
            if tag.eq_ignore_ascii_case(ALL_TAG) {
                continue;
            }
            if !tags.iter().any(|t| t == tag) {
                tags.push(tag.to_string());
            }
        }
        Self { tags }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Whether `filter` may become the active tag.
    pub fn admits(&self, filter: &TagFilter) -> bool {
        match filter {
            TagFilter::All => true,
            TagFilter::Tag(tag) => self.contains(tag),
        }
    }

    /// Every selectable filter, universal tag first, as the tag bar lists them.
    pub fn filters(&self) -> Vec<TagFilter> {
        std::iter::once(TagFilter::All)
            .chain(self.tags.iter().cloned().map(TagFilter::Tag))
            .collect()
    }

    /// Neighbour of `current` in the tag bar, wrapping at both ends.
    pub fn cycle(&self, current: &TagFilter, forward: bool) -> TagFilter {
        let filters = self.filters();
        let len = filters.len();
        let pos = filters.iter().position(|f| f == current).unwrap_or(0);
        let next = if forward {
            (pos + 1) % len
        } else if pos == 0 {
            len - 1
        } else {
            pos - 1
        };
        filters[next].clone()
    }
}

/// Holder of the single active tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    active: TagFilter,
}

impl FilterState {
    pub fn active(&self) -> &TagFilter {
        &self.active
    }

    /// Install a new active tag and hand back the previous one.
    pub fn replace(&mut self, filter: TagFilter) -> TagFilter {
        std::mem::replace(&mut self.active, filter)
    }
}
