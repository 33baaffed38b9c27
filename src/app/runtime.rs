use super::{App, AppEvent, Config};
use crate::ui;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::mpsc::{self, Receiver, SyncSender, TrySendError};
use std::thread;
use std::time::Duration;
use tessera::gallery::Gallery;
use tracing::info;

const APP_EVENT_QUEUE_CAPACITY: usize = 256;

pub fn run_tui(config: Config, galleries: Vec<Gallery>) -> Result<()> {
    let mut app = App::new(config, galleries)?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let size = terminal.size()?;
    app.handle_resize(size.width);
    info!(
        galleries = app.instances.len(),
        width = size.width,
        "tui started"
    );

    let (event_tx, event_rx) = mpsc::sync_channel::<AppEvent>(APP_EVENT_QUEUE_CAPACITY);
    thread::spawn(move || {
        input_worker(event_tx);
    });

    let res = run_app(&mut terminal, &mut app, event_rx);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("tui stopped");
    res
}

/// Background thread that polls for input events.
fn input_worker(tx: SyncSender<AppEvent>) {
    loop {
        if event::poll(Duration::from_millis(50)).unwrap_or(false) {
            match event::read() {
                Ok(Event::Key(key)) => {
                    if tx.send(AppEvent::Key(key)).is_err() {
                        break;
                    }
                }
                Ok(Event::Resize(width, _)) => {
                    if tx.send(AppEvent::Resize(width)).is_err() {
                        break;
                    }
                }
                _ => {}
            }
        } else {
            match tx.try_send(AppEvent::Tick) {
                Ok(()) | Err(TrySendError::Full(_)) => {}
                Err(TrySendError::Disconnected(_)) => break,
            }
        }
    }
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    event_rx: Receiver<AppEvent>,
) -> Result<()> {
    let mut needs_redraw = true;

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw(f, app))?;
            needs_redraw = false;
        }

        let event = match event_rx.recv_timeout(Duration::from_millis(100)) {
            Ok(event) => event,
            Err(mpsc::RecvTimeoutError::Timeout) => continue,
            Err(mpsc::RecvTimeoutError::Disconnected) => return Ok(()),
        };

        match event {
            AppEvent::Key(key) => {
                handle_key(app, key);
                needs_redraw = true;
            }
            AppEvent::Resize(width) => {
                app.handle_resize(width);
                terminal.clear()?;
                needs_redraw = true;
            }
            AppEvent::Tick => {}
        }

        if app.ui.should_quit {
            return Ok(());
        }
    }
}

/// Route one key press. Popups and the lightbox take input before the grid.
pub(super) fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    let code = key.code;

    if app.ui.show_help {
        if matches!(code, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Enter) {
            app.ui.show_help = false;
        }
        return;
    }

    if app.ui.command_mode {
        match code {
            KeyCode::Esc => app.exit_command_mode(),
            KeyCode::Enter => app.execute_command(),
            KeyCode::Backspace => app.command_backspace(),
            KeyCode::Char(c) => app.command_input(c),
            _ => {}
        }
        return;
    }

    // Any key press clears the previous status line.
    app.ui.status_message = None;
    let kb = app.config.keybindings.clone();

    if app.viewer_open() {
        if kb.matches(code, &kb.close) || code == KeyCode::Esc {
            app.close_viewer();
        } else if kb.matches(code, &kb.next) || code == KeyCode::Right {
            app.viewer_next();
        } else if kb.matches(code, &kb.prev) || code == KeyCode::Left {
            app.viewer_prev();
        } else if kb.matches(code, &kb.quit) {
            app.ui.should_quit = true;
        }
        return;
    }

    if kb.matches(code, &kb.quit) {
        app.ui.should_quit = true;
    } else if kb.matches(code, &kb.open) {
        app.open_selected();
    } else if kb.matches(code, &kb.next_tag) {
        app.cycle_tag_filter(true);
    } else if kb.matches(code, &kb.prev_tag) {
        app.cycle_tag_filter(false);
    } else if kb.matches(code, &kb.next_gallery) {
        app.next_gallery();
    } else if kb.matches(code, &kb.prev_gallery) {
        app.prev_gallery();
    } else {
        match code {
            KeyCode::Right | KeyCode::Char('l') => app.cursor_next(),
            KeyCode::Left | KeyCode::Char('h') => app.cursor_prev(),
            KeyCode::Down | KeyCode::Char('j') => app.cursor_down(),
            KeyCode::Up | KeyCode::Char('k') => app.cursor_up(),
            KeyCode::Home | KeyCode::Char('g') => app.cursor_home(),
            KeyCode::End | KeyCode::Char('G') => app.cursor_end(),
            KeyCode::Char('a') => app.clear_tag_filter(),
            KeyCode::Char(':') => app.enter_command_mode(),
            KeyCode::Char('?') => app.toggle_help(),
            _ => {}
        }
    }
}
