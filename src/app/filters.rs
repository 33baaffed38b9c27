use super::App;
use tessera::gallery::{GalleryEvent, TagFilter};

impl App {
    /// Activate the next (or previous) entry of the tag bar, wrapping
    /// through the universal tag.
    pub fn cycle_tag_filter(&mut self, forward: bool) {
        let instance = self.instance();
        let target = instance
            .gallery
            .tags()
            .cycle(instance.gallery.active_filter(), forward);
        self.activate_tag(target);
    }

    pub fn clear_tag_filter(&mut self) {
        self.activate_tag(TagFilter::All);
    }

    /// Dispatch a tag-bar activation. The cursor is reset since the set of
    /// visible cells changed.
    pub fn activate_tag(&mut self, filter: TagFilter) -> bool {
        let instance = self.instance_mut();
        let changed = instance
            .gallery
            .dispatch(GalleryEvent::TagActivated(filter), &mut instance.view);
        if changed {
            instance.cursor = 0;
        }
        changed
    }

    /// Active tag-bar entry as the render model knows it.
    pub fn active_tag_label(&self) -> String {
        let instance = self.instance();
        let all_label = &instance.gallery.options().all_label;
        instance
            .view
            .highlighted()
            .map(|tag| tag.label(all_label).to_string())
            .unwrap_or_else(|| all_label.clone())
    }
}
