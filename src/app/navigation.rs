use super::App;
use tessera::gallery::GalleryItem;

impl App {
    /// Item under the grid cursor, if any item is visible.
    pub fn selected_item(&self) -> Option<&GalleryItem> {
        let instance = self.instance();
        instance
            .visible_ids()
            .get(instance.cursor)
            .and_then(|&id| instance.gallery.item(id))
    }

    /// Move the cursor one cell right, wrapping to the first cell.
    pub fn cursor_next(&mut self) {
        let instance = self.instance_mut();
        let len = instance.visible_ids().len();
        if len > 0 {
            instance.cursor = (instance.cursor + 1) % len;
        }
    }

    /// Move the cursor one cell left, wrapping to the last cell.
    pub fn cursor_prev(&mut self) {
        let instance = self.instance_mut();
        let len = instance.visible_ids().len();
        if len > 0 {
            instance.cursor = if instance.cursor == 0 {
                len - 1
            } else {
                instance.cursor - 1
            };
        }
    }

    /// Move the cursor one row down, stopping at the last cell.
    pub fn cursor_down(&mut self) {
        let columns = self.ui.columns;
        let instance = self.instance_mut();
        let len = instance.visible_ids().len();
        if len > 0 {
            instance.cursor = (instance.cursor + columns).min(len - 1);
        }
    }

    /// Move the cursor one row up, stopping at the first row.
    pub fn cursor_up(&mut self) {
        let columns = self.ui.columns;
        let instance = self.instance_mut();
        instance.cursor = instance.cursor.saturating_sub(columns);
    }

    pub fn cursor_home(&mut self) {
        self.instance_mut().cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        let instance = self.instance_mut();
        instance.cursor = instance.visible_ids().len().saturating_sub(1);
    }

    /// Switch to the next gallery instance. Each keeps its own cursor,
    /// filter and lightbox.
    pub fn next_gallery(&mut self) {
        if self.instances.len() > 1 {
            self.active = (self.active + 1) % self.instances.len();
            self.recompute_layout();
        }
    }

    pub fn prev_gallery(&mut self) {
        if self.instances.len() > 1 {
            self.active = if self.active == 0 {
                self.instances.len() - 1
            } else {
                self.active - 1
            };
            self.recompute_layout();
        }
    }

    /// Jump to a gallery by name or 1-based position.
    pub fn select_gallery(&mut self, key: &str) -> bool {
        let by_position = key
            .parse::<usize>()
            .ok()
            .filter(|n| *n > 0 && *n <= self.instances.len())
            .map(|n| n - 1);
        let by_name = || {
            self.instances
                .iter()
                .position(|i| i.gallery.name().eq_ignore_ascii_case(key))
        };
        match by_position.or_else(by_name) {
            Some(idx) => {
                self.active = idx;
                self.recompute_layout();
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::app::tests::test_app;

    #[test]
    fn cursor_wraps_horizontally() {
        let mut app = test_app();
        app.cursor_prev();
        assert_eq!(app.instance().cursor, 3);
        app.cursor_next();
        assert_eq!(app.instance().cursor, 0);
    }

    #[test]
    fn cursor_moves_by_rows() {
        let mut app = test_app();
        app.cursor_down();
        assert_eq!(app.instance().cursor, 3);
        app.cursor_down();
        assert_eq!(app.instance().cursor, 3);
        app.cursor_up();
        assert_eq!(app.instance().cursor, 0);
        app.cursor_end();
        assert_eq!(app.selected_item().map(|i| i.src.as_str()), Some("clips/tram.mp4"));
    }

    #[test]
    fn galleries_keep_their_own_cursor() {
        let mut app = test_app();
        app.cursor_next();
        app.next_gallery();
        assert_eq!(app.active, 1);
        assert_eq!(app.instance().cursor, 0);
        app.next_gallery();
        assert_eq!(app.active, 0);
        assert_eq!(app.instance().cursor, 1);
        app.prev_gallery();
        assert_eq!(app.active, 1);
    }

    #[test]
    fn select_gallery_by_name_or_position() {
        let mut app = test_app();
        assert!(app.select_gallery("Portraits"));
        assert_eq!(app.active, 1);
        assert!(app.select_gallery("1"));
        assert_eq!(app.active, 0);
        assert!(!app.select_gallery("9"));
        assert!(!app.select_gallery("unknown"));
    }
}
