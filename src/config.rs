use crate::layout::{Columns, TagsPosition};
use serde::{Deserialize, Serialize};

/// Lightbox id used when none is configured.
pub const DEFAULT_LIGHTBOX_ID: &str = "galleryLightbox";

/// Per-gallery initialisation options. Missing fields take their defaults,
/// so a partial table is always valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryOptions {
    /// Column count, or a per-breakpoint table
    pub columns: Columns,
    /// Enable the lightbox viewer
    #[serde(alias = "lightBox")]
    pub light_box: bool,
    /// Identifier of the lightbox surface
    #[serde(alias = "lightboxId", skip_serializing_if = "Option::is_none")]
    pub lightbox_id: Option<String>,
    /// Render the tag filter bar
    #[serde(alias = "showTags")]
    pub show_tags: bool,
    /// "top" or "bottom"
    #[serde(alias = "tagsPosition")]
    pub tags_position: TagsPosition,
    /// Show prev/next controls in the lightbox
    pub navigation: bool,
    /// Label of the universal tag in the tag bar
    #[serde(alias = "allLabel")]
    pub all_label: String,
}

impl Default for GalleryOptions {
    fn default() -> Self {
        Self {
            columns: Columns::default(),
            light_box: true,
            lightbox_id: None,
            show_tags: true,
            tags_position: TagsPosition::Bottom,
            navigation: true,
            all_label: "All".to_string(),
        }
    }
}

impl GalleryOptions {
    /// Effective lightbox id.
    pub fn lightbox_id(&self) -> &str {
        self.lightbox_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .unwrap_or(DEFAULT_LIGHTBOX_ID)
    }
}
