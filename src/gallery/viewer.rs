use super::{GalleryItem, ItemId};

/// Lightbox state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewerState {
    #[default]
    Closed,
    Open { current: ItemId },
}

impl ViewerState {
    pub fn is_open(&self) -> bool {
        matches!(self, ViewerState::Open { .. })
    }

    pub fn current(&self) -> Option<ItemId> {
        match self {
            ViewerState::Open { current } => Some(*current),
            ViewerState::Closed => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Next,
    Prev,
}

/// Neighbour of the item displaying `current_src` within `sequence`.
///
/// The current position is the first element whose locator equals
/// `current_src`, so items sharing a locator cannot be told apart. When the
/// locator is absent from the sequence, `Next` lands on the first element and
/// `Prev` on the last. Both ends wrap. Returns `None` only for an empty
/// sequence.
pub fn neighbor<'a>(
    sequence: &[&'a GalleryItem],
    current_src: &str,
    step: Step,
) -> Option<&'a GalleryItem> {
    if sequence.is_empty() {
        return None;
    }
    let len = sequence.len();
    let position = sequence.iter().position(|item| item.src == current_src);

    let target = match (step, position) {
        (Step::Next, Some(i)) => (i + 1) % len,
        (Step::Next, None) => 0,
        (Step::Prev, Some(0)) | (Step::Prev, None) => len - 1,
        (Step::Prev, Some(i)) => i - 1,
    };
    Some(sequence[target])
}
