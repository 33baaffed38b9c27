//! Gallery core: items, tag filtering and lightbox navigation.
//!
//! A [`Gallery`] owns everything one gallery instance needs: its items, the
//! tag set built from them, the active filter and the viewer state. All
//! transitions are synchronous and report their visible effects to a
//! [`Presenter`], which plays the role of the rendered surface. Nothing is
//! shared between instances.

use crate::config::GalleryOptions;
use crate::presentation::Presenter;
use crate::utils::is_image_locator;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

mod dispatch;
mod filter;
mod registry;
mod viewer;

pub use dispatch::{GalleryEvent, ParseEventError};
pub use filter::{FilterState, TagFilter, TagSet};
pub use registry::{filtered_sequence, navigable_sequence};
pub use viewer::{neighbor, Step, ViewerState};

/// Stable identity of an item: its position in source order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub usize);

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Element kind. Only images open in the lightbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    #[default]
    Image,
    Other,
}

impl ItemKind {
    /// Derive the kind from a locator's extension.
    pub fn from_locator(locator: &str) -> Self {
        if is_image_locator(locator) {
            ItemKind::Image
        } else {
            ItemKind::Other
        }
    }
}

/// Item as described by a source, before it is given an identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDescriptor {
    pub src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    /// Falls back to the locator's extension when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ItemKind>,
}

impl ItemDescriptor {
    pub fn new(src: impl Into<String>, tag: Option<&str>) -> Self {
        Self {
            src: src.into(),
            tag: tag.map(str::to_string),
            kind: None,
        }
    }

    pub fn with_kind(mut self, kind: ItemKind) -> Self {
        self.kind = Some(kind);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GalleryItem {
    pub id: ItemId,
    /// Media locator (path or URL)
    pub src: String,
    pub tag: Option<String>,
    pub kind: ItemKind,
}

impl GalleryItem {
    pub fn is_image(&self) -> bool {
        self.kind == ItemKind::Image
    }

    /// Short label for grid cells: the last path segment of the locator.
    pub fn label(&self) -> &str {
        self.src
            .rsplit(['/', '\\'])
            .find(|s| !s.is_empty())
            .unwrap_or(&self.src)
    }
}

pub struct Gallery {
    name: String,
    items: Vec<GalleryItem>,
    tags: TagSet,
    filter: FilterState,
    viewer: ViewerState,
    options: GalleryOptions,
}

impl Gallery {
    /// Build a gallery instance. Items get identities in the given order.
    pub fn new(
        name: impl Into<String>,
        descriptors: Vec<ItemDescriptor>,
        options: GalleryOptions,
    ) -> Self {
        let name = name.into();
        let items: Vec<GalleryItem> = descriptors
            .into_iter()
            .enumerate()
            .map(|(idx, d)| {
                let kind = d.kind.unwrap_or_else(|| ItemKind::from_locator(&d.src));
                GalleryItem {
                    id: ItemId(idx),
                    tag: d
                        .tag
                        .map(|t| t.trim().to_string())
                        .filter(|t| !t.is_empty()),
                    src: d.src,
                    kind,
                }
            })
            .collect();
        let tags = TagSet::from_items(&items);

        debug!(
            gallery = %name,
            items = items.len(),
            tags = tags.len(),
            "gallery initialised"
        );

        Self {
            name,
            items,
            tags,
            filter: FilterState::default(),
            viewer: ViewerState::Closed,
            options,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    pub fn item(&self, id: ItemId) -> Option<&GalleryItem> {
        self.items.get(id.0)
    }

    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    pub fn options(&self) -> &GalleryOptions {
        &self.options
    }

    pub fn active_filter(&self) -> &TagFilter {
        self.filter.active()
    }

    pub fn viewer(&self) -> ViewerState {
        self.viewer
    }

    /// Item currently shown in the lightbox, if open.
    pub fn current_item(&self) -> Option<&GalleryItem> {
        self.viewer.current().and_then(|id| self.item(id))
    }

    /// Items matching the active filter, in source order.
    pub fn filtered(&self) -> Vec<&GalleryItem> {
        filtered_sequence(&self.items, self.filter.active())
    }

    pub fn is_visible(&self, id: ItemId) -> bool {
        self.item(id)
            .map(|item| self.filter.active().matches(item.tag.as_deref()))
            .unwrap_or(false)
    }

    /// Push the initial state to a freshly created presenter.
    pub fn attach<P: Presenter + ?Sized>(&self, presenter: &mut P) {
        let active = self.filter.active();
        presenter.highlight_tag(&TagFilter::All, *active == TagFilter::All);
        for tag in self.tags.iter() {
            let filter = TagFilter::Tag(tag.to_string());
            let is_active = *active == filter;
            presenter.highlight_tag(&filter, is_active);
        }
        self.sync_visibility(presenter);
        if let Some(item) = self.current_item() {
            presenter.set_viewer_media(self.options.lightbox_id(), &item.src);
        }
        presenter.set_viewer_visible(self.options.lightbox_id(), self.viewer.is_open());
    }

    /// Select the active tag. Returns `false` when nothing changed.
    pub fn set_active_tag<P: Presenter + ?Sized>(
        &mut self,
        filter: TagFilter,
        presenter: &mut P,
    ) -> bool {
        if *self.filter.active() == filter {
            return false;
        }
        if !self.tags.admits(&filter) {
            warn!(gallery = %self.name, tag = %filter, "ignoring unknown tag");
            return false;
        }

        let previous = self.filter.replace(filter);
        presenter.highlight_tag(&previous, false);
        presenter.highlight_tag(self.filter.active(), true);
        self.sync_visibility(presenter);

        debug!(
            gallery = %self.name,
            from = %previous,
            to = %self.filter.active(),
            visible = self.filtered().len(),
            "filter changed"
        );
        true
    }

    /// Open the lightbox on `id`. The active filter is bypassed on purpose:
    /// any item in the collection can be opened directly.
    pub fn open<P: Presenter + ?Sized>(&mut self, id: ItemId, presenter: &mut P) -> bool {
        let Some(item) = self.items.get(id.0) else {
            warn!(gallery = %self.name, item = %id, "ignoring open on unknown item");
            return false;
        };

        self.viewer = ViewerState::Open { current: id };
        presenter.set_viewer_media(self.options.lightbox_id(), &item.src);
        presenter.set_viewer_visible(self.options.lightbox_id(), true);
        debug!(gallery = %self.name, item = %id, src = %item.src, "viewer opened");
        true
    }

    pub fn next<P: Presenter + ?Sized>(&mut self, presenter: &mut P) -> bool {
        self.step(Step::Next, presenter)
    }

    pub fn prev<P: Presenter + ?Sized>(&mut self, presenter: &mut P) -> bool {
        self.step(Step::Prev, presenter)
    }

    /// Move the viewer one step within the navigable sequence, recomputed
    /// against the filter as it stands now.
    pub fn step<P: Presenter + ?Sized>(&mut self, step: Step, presenter: &mut P) -> bool {
        let Some(current) = self.current_item() else {
            return false;
        };
        let sequence = navigable_sequence(&self.items, self.filter.active());
        let Some(target) = neighbor(&sequence, &current.src, step) else {
            return false;
        };

        let (target_id, target_src) = (target.id, target.src.clone());
        self.viewer = ViewerState::Open { current: target_id };
        presenter.set_viewer_media(self.options.lightbox_id(), &target_src);
        debug!(gallery = %self.name, ?step, item = %target_id, "viewer moved");
        true
    }

    pub fn close<P: Presenter + ?Sized>(&mut self, presenter: &mut P) -> bool {
        if !self.viewer.is_open() {
            return false;
        }
        self.viewer = ViewerState::Closed;
        presenter.set_viewer_visible(self.options.lightbox_id(), false);
        true
    }

    fn sync_visibility<P: Presenter + ?Sized>(&self, presenter: &mut P) {
        let active = self.filter.active();
        for item in &self.items {
            if active.matches(item.tag.as_deref()) {
                presenter.show_item(item);
            } else {
                presenter.hide_item(item);
            }
        }
    }
}
