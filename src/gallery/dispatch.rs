use super::{Gallery, ItemId, Step, TagFilter};
use crate::presentation::Presenter;
use std::str::FromStr;
use thiserror::Error;
use tracing::trace;

/// A user interaction on one gallery instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryEvent {
    /// A thumbnail in the grid was activated
    ThumbnailActivated(ItemId),
    /// An entry of the tag bar was activated
    TagActivated(TagFilter),
    /// The lightbox "previous" control
    PrevActivated,
    /// The lightbox "next" control
    NextActivated,
    /// The lightbox was dismissed
    CloseActivated,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseEventError {
    #[error("empty event")]
    Empty,
    #[error("invalid item id '{0}'")]
    InvalidItem(String),
    #[error("missing tag name in '{0}'")]
    MissingTag(String),
    #[error("unknown event '{0}' (expected open:<id>, tag:<name>, next, prev or close)")]
    Unknown(String),
}

impl FromStr for GalleryEvent {
    type Err = ParseEventError;

    /// Script syntax: `open:<id>`, `tag:<name>`, `tag:all`, `next`, `prev`, `close`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseEventError::Empty);
        }
        let (name, arg) = match trimmed.split_once(':') {
            Some((name, arg)) => (name.trim(), Some(arg.trim())),
            None => (trimmed, None),
        };

        match (name.to_ascii_lowercase().as_str(), arg) {
            ("open" | "o", Some(id)) => id
                .parse::<usize>()
                .map(|id| GalleryEvent::ThumbnailActivated(ItemId(id)))
                .map_err(|_| ParseEventError::InvalidItem(id.to_string())),
            ("open" | "o", None) => Err(ParseEventError::InvalidItem(String::new())),
            ("tag" | "t", Some(tag)) if !tag.is_empty() => {
                Ok(GalleryEvent::TagActivated(TagFilter::parse(tag)))
            }
            ("tag" | "t", _) => Err(ParseEventError::MissingTag(trimmed.to_string())),
            ("next" | "n", None) => Ok(GalleryEvent::NextActivated),
            ("prev" | "p", None) => Ok(GalleryEvent::PrevActivated),
            ("close" | "c", None) => Ok(GalleryEvent::CloseActivated),
            _ => Err(ParseEventError::Unknown(trimmed.to_string())),
        }
    }
}

impl Gallery {
    /// Route one interaction to the matching transition. Returns whether the
    /// gallery state changed.
    ///
    /// Thumbnails open the lightbox only when it is enabled and the item is
    /// an image. Prev/next controls only exist when navigation is enabled.
    /// Activating the tag that is already active is dropped before dispatch.
    pub fn dispatch<P: Presenter + ?Sized>(
        &mut self,
        event: GalleryEvent,
        presenter: &mut P,
    ) -> bool {
        trace!(gallery = %self.name, ?event, "dispatch");
        match event {
            GalleryEvent::ThumbnailActivated(id) => {
                let openable = self.item(id).is_some_and(|item| item.is_image());
                if !self.options.light_box || !openable {
                    return false;
                }
                self.open(id, presenter)
            }
            GalleryEvent::TagActivated(filter) => {
                if *self.active_filter() == filter {
                    return false;
                }
                self.set_active_tag(filter, presenter)
            }
            GalleryEvent::PrevActivated if self.navigation_enabled() => {
                self.step(Step::Prev, presenter)
            }
            GalleryEvent::NextActivated if self.navigation_enabled() => {
                self.step(Step::Next, presenter)
            }
            GalleryEvent::PrevActivated | GalleryEvent::NextActivated => false,
            GalleryEvent::CloseActivated => self.close(presenter),
        }
    }

    fn navigation_enabled(&self) -> bool {
        self.options.light_box && self.options.navigation
    }
}
