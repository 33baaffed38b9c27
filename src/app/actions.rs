use super::App;
use tessera::gallery::{navigable_sequence, GalleryEvent, ItemId};

impl App {
    /// Open the lightbox on the item under the cursor.
    pub fn open_selected(&mut self) {
        let Some(item) = self.selected_item() else {
            return;
        };
        let (id, is_image) = (item.id, item.is_image());
        if !self.dispatch(GalleryEvent::ThumbnailActivated(id)) {
            self.ui.status_message = Some(if !is_image {
                "Only images open in the lightbox".to_string()
            } else {
                "Lightbox is disabled for this gallery".to_string()
            });
        }
    }

    /// Open any item by id, visible or not.
    pub fn open_item(&mut self, id: ItemId) -> bool {
        self.dispatch(GalleryEvent::ThumbnailActivated(id))
    }

    pub fn viewer_next(&mut self) {
        self.dispatch(GalleryEvent::NextActivated);
    }

    pub fn viewer_prev(&mut self) {
        self.dispatch(GalleryEvent::PrevActivated);
    }

    /// Dismiss the lightbox and put the grid cursor on the last viewed item
    /// when it is visible.
    pub fn close_viewer(&mut self) {
        let current = self.instance().gallery.viewer().current();
        if !self.dispatch(GalleryEvent::CloseActivated) {
            return;
        }
        let instance = self.instance_mut();
        let visible = instance.visible_ids();
        if let Some(pos) = current.and_then(|id| visible.iter().position(|v| *v == id)) {
            instance.cursor = pos;
        }
    }

    pub fn viewer_open(&self) -> bool {
        self.instance().view.viewer_visible()
    }

    /// 1-based position of the viewed item in the navigable sequence, and
    /// the sequence length.
    pub fn viewer_position(&self) -> Option<(usize, usize)> {
        let gallery = &self.instance().gallery;
        let current = gallery.current_item()?;
        let sequence = navigable_sequence(gallery.items(), gallery.active_filter());
        let pos = sequence.iter().position(|item| item.src == current.src)?;
        Some((pos + 1, sequence.len()))
    }

    pub(super) fn dispatch(&mut self, event: GalleryEvent) -> bool {
        let instance = self.instance_mut();
        instance.gallery.dispatch(event, &mut instance.view)
    }

    pub fn toggle_help(&mut self) {
        self.ui.show_help = !self.ui.show_help;
    }
}
