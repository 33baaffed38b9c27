//! Tessera - a tiled, tag-filterable media gallery with a lightbox viewer.
//!
//! The library holds the gallery core (item registry, filter state, viewer
//! navigation, event dispatch) and the [`presentation::Presenter`] boundary
//! that front ends implement. The `tessera` binary drives it from a
//! ratatui terminal UI.

pub mod config;
pub mod error;
pub mod gallery;
pub mod layout;
pub mod presentation;
pub mod source;
pub mod utils;

pub use error::SourceError;
pub use gallery::{Gallery, GalleryEvent, GalleryItem, ItemId, ItemKind, TagFilter, TagSet};
pub use presentation::{Presenter, PresenterCommand, RecordingPresenter};
