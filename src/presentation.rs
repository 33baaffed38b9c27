//! Boundary between the gallery core and whatever renders it.
//!
//! The core never draws anything itself. Every visible effect of a
//! transition is issued as a command on a [`Presenter`]: show or hide an
//! item, mark a tag-bar entry, swap the lightbox media, toggle the
//! lightbox. Items are never removed, only hidden.

use crate::gallery::{GalleryItem, TagFilter};

mod recording;

pub use recording::{PresenterCommand, RecordingPresenter};

pub trait Presenter {
    /// Reveal an item that matches the active filter.
    fn show_item(&mut self, item: &GalleryItem);

    /// Hide an item the active filter excludes. It stays in the layout.
    fn hide_item(&mut self, item: &GalleryItem);

    /// Mark or unmark a tag-bar entry as the active one.
    fn highlight_tag(&mut self, tag: &TagFilter, active: bool);

    /// Point the lightbox surface at a media locator.
    fn set_viewer_media(&mut self, lightbox_id: &str, locator: &str);

    /// Show or dismiss the lightbox surface.
    fn set_viewer_visible(&mut self, lightbox_id: &str, visible: bool);
}
