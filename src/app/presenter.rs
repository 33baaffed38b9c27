use std::collections::HashSet;
use tessera::gallery::{GalleryItem, ItemId, TagFilter};
use tessera::Presenter;

/// Render model for one gallery instance, fed only by presenter commands.
/// The draw code reads this and never inspects gallery state directly.
#[derive(Debug, Default)]
pub struct TuiPresenter {
    hidden: HashSet<ItemId>,
    highlighted: Option<TagFilter>,
    viewer_media: Option<String>,
    viewer_visible: bool,
    lightbox_id: Option<String>,
}

impl TuiPresenter {
    pub fn is_hidden(&self, id: ItemId) -> bool {
        self.hidden.contains(&id)
    }

    pub fn highlighted(&self) -> Option<&TagFilter> {
        self.highlighted.as_ref()
    }

    pub fn viewer_media(&self) -> Option<&str> {
        self.viewer_media.as_deref()
    }

    pub fn viewer_visible(&self) -> bool {
        self.viewer_visible
    }

    /// Lightbox surface last addressed, used as the popup title.
    pub fn lightbox_id(&self) -> Option<&str> {
        self.lightbox_id.as_deref()
    }
}

impl Presenter for TuiPresenter {
    fn show_item(&mut self, item: &GalleryItem) {
        self.hidden.remove(&item.id);
    }

    fn hide_item(&mut self, item: &GalleryItem) {
        self.hidden.insert(item.id);
    }

    fn highlight_tag(&mut self, tag: &TagFilter, active: bool) {
        if active {
            self.highlighted = Some(tag.clone());
        } else if self.highlighted.as_ref() == Some(tag) {
            self.highlighted = None;
        }
    }

    fn set_viewer_media(&mut self, lightbox_id: &str, locator: &str) {
        self.lightbox_id = Some(lightbox_id.to_string());
        self.viewer_media = Some(locator.to_string());
    }

    fn set_viewer_visible(&mut self, lightbox_id: &str, visible: bool) {
        self.lightbox_id = Some(lightbox_id.to_string());
        self.viewer_visible = visible;
    }
}
