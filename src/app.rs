use anyhow::Result;
use crossterm::event;
use tessera::gallery::{Gallery, ItemId};
use tessera::layout::TagBarPlacement;

mod actions;
mod commands;
mod config;
mod filters;
mod navigation;
mod presenter;
mod runtime;
mod sources;

pub use config::Config;
pub use presenter::TuiPresenter;
pub use runtime::run_tui;
pub use sources::{load_galleries, SourceRequest};

/// Events from background threads
pub enum AppEvent {
    Key(event::KeyEvent),
    Resize(u16),
    Tick,
}

/// UI-related transient state (popups, command mode, status line).
pub struct UiState {
    pub should_quit: bool,
    pub show_help: bool,
    pub command_mode: bool,
    pub command_buffer: String,
    pub status_message: Option<String>,
    /// Grid width in cells, as of the last resize
    pub width: u16,
    /// Column count resolved for `width`
    pub columns: usize,
    /// Where the tag bar goes, `None` when it is hidden
    pub tag_bar: Option<TagBarPlacement>,
    pub theme: crate::ui::theme::Theme,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            should_quit: false,
            show_help: false,
            command_mode: false,
            command_buffer: String::new(),
            status_message: None,
            width: 80,
            columns: 1,
            tag_bar: None,
            theme: crate::ui::theme::Theme::detect(),
        }
    }
}

/// One gallery instance with its own render model and grid cursor.
pub struct Instance {
    pub gallery: Gallery,
    pub view: TuiPresenter,
    /// Index into the visible items
    pub cursor: usize,
}

impl Instance {
    pub fn new(gallery: Gallery) -> Self {
        let mut view = TuiPresenter::default();
        gallery.attach(&mut view);
        Self {
            gallery,
            view,
            cursor: 0,
        }
    }

    /// Item ids the render model currently shows, in source order.
    pub fn visible_ids(&self) -> Vec<ItemId> {
        self.gallery
            .items()
            .iter()
            .map(|item| item.id)
            .filter(|id| !self.view.is_hidden(*id))
            .collect()
    }
}

pub struct App {
    pub config: Config,
    pub instances: Vec<Instance>,
    pub active: usize,
    pub ui: UiState,
}

impl App {
    pub fn new(config: Config, galleries: Vec<Gallery>) -> Result<Self> {
        if galleries.is_empty() {
            anyhow::bail!("no galleries to show");
        }
        let instances = galleries.into_iter().map(Instance::new).collect();
        let mut app = Self {
            config,
            instances,
            active: 0,
            ui: UiState::default(),
        };
        app.recompute_layout();
        Ok(app)
    }

    pub fn instance(&self) -> &Instance {
        &self.instances[self.active]
    }

    pub fn instance_mut(&mut self) -> &mut Instance {
        &mut self.instances[self.active]
    }

    /// Record a new terminal width and re-resolve the column count.
    pub fn handle_resize(&mut self, width: u16) {
        self.ui.width = width;
        self.recompute_layout();
    }

    /// Resolve column count and tag-bar placement for the active gallery.
    /// Malformed options are logged here, once per change, not per frame.
    fn recompute_layout(&mut self) {
        // Two border cells around the grid.
        let width = self.ui.width.saturating_sub(2);
        let options = self.instances[self.active].gallery.options();
        // A cell is at least one terminal column wide.
        self.ui.columns = options
            .columns
            .resolve_or_single(width)
            .clamp(1, usize::from(width.max(1)));
        self.ui.tag_bar = if options.show_tags {
            options.tags_position.placement()
        } else {
            None
        };
    }
}
