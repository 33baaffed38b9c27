use super::{GalleryItem, TagFilter};

/// Items passing `active`, in original order. Pure and recomputed by every
/// caller, so it can never go stale relative to the filter.
pub fn filtered_sequence<'a>(items: &'a [GalleryItem], active: &TagFilter) -> Vec<&'a GalleryItem> {
    items
        .iter()
        .filter(|item| active.matches(item.tag.as_deref()))
        .collect()
}

/// The lightbox's navigation order: the filtered sequence restricted to images.
pub fn navigable_sequence<'a>(
    items: &'a [GalleryItem],
    active: &TagFilter,
) -> Vec<&'a GalleryItem> {
    items
        .iter()
        .filter(|item| item.is_image() && active.matches(item.tag.as_deref()))
        .collect()
}
