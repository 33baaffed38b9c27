use super::Presenter;
use crate::gallery::{GalleryItem, ItemId, TagFilter};
use std::fmt;

/// One command as received by a [`RecordingPresenter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterCommand {
    Show(ItemId),
    Hide(ItemId),
    Highlight(TagFilter, bool),
    ViewerMedia(String, String),
    ViewerVisible(String, bool),
}

impl fmt::Display for PresenterCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PresenterCommand::Show(id) => write!(f, "show {id}"),
            PresenterCommand::Hide(id) => write!(f, "hide {id}"),
            PresenterCommand::Highlight(tag, true) => write!(f, "highlight {tag}"),
            PresenterCommand::Highlight(tag, false) => write!(f, "unhighlight {tag}"),
            PresenterCommand::ViewerMedia(id, src) => write!(f, "viewer #{id} src={src}"),
            PresenterCommand::ViewerVisible(id, true) => write!(f, "viewer #{id} shown"),
            PresenterCommand::ViewerVisible(id, false) => write!(f, "viewer #{id} hidden"),
        }
    }
}

/// Presenter that renders nothing and keeps every command it receives.
#[derive(Debug, Default, Clone)]
pub struct RecordingPresenter {
    commands: Vec<PresenterCommand>,
}

impl RecordingPresenter {
    pub fn commands(&self) -> &[PresenterCommand] {
        &self.commands
    }

    pub fn take(&mut self) -> Vec<PresenterCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Presenter for RecordingPresenter {
    fn show_item(&mut self, item: &GalleryItem) {
        self.commands.push(PresenterCommand::Show(item.id));
    }

    fn hide_item(&mut self, item: &GalleryItem) {
        self.commands.push(PresenterCommand::Hide(item.id));
    }

    fn highlight_tag(&mut self, tag: &TagFilter, active: bool) {
        self.commands
            .push(PresenterCommand::Highlight(tag.clone(), active));
    }

    fn set_viewer_media(&mut self, lightbox_id: &str, locator: &str) {
        self.commands.push(PresenterCommand::ViewerMedia(
            lightbox_id.to_string(),
            locator.to_string(),
        ));
    }

    fn set_viewer_visible(&mut self, lightbox_id: &str, visible: bool) {
        self.commands
            .push(PresenterCommand::ViewerVisible(lightbox_id.to_string(), visible));
    }
}
