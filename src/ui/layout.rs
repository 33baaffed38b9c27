use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders},
    Frame,
};
use tessera::layout::TagBarPlacement;

mod grid;
mod header;
mod popups;
mod tags_bar;

use grid::draw_grid;
use header::{draw_footer, draw_header, draw_status};
use popups::{draw_help_popup, draw_lightbox};
use tags_bar::draw_tag_bar;

pub fn draw(f: &mut Frame, app: &mut App) {
    let theme = app.ui.theme.clone();
    let area = f.area();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().bg(theme.bg));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let has_status = app.ui.status_message.is_some();
    let tag_bar = app.ui.tag_bar;

    let mut constraints = vec![Constraint::Length(2)]; // Header
    if tag_bar == Some(TagBarPlacement::Top) {
        constraints.push(Constraint::Length(1));
    }
    if has_status {
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Min(4)); // Grid
    if tag_bar == Some(TagBarPlacement::Bottom) {
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Length(2)); // Footer

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let mut chunk_idx = 0;

    draw_header(f, app, chunks[chunk_idx], &theme);
    chunk_idx += 1;

    if tag_bar == Some(TagBarPlacement::Top) {
        draw_tag_bar(f, app, chunks[chunk_idx], &theme);
        chunk_idx += 1;
    }

    if has_status {
        draw_status(f, app, chunks[chunk_idx], &theme);
        chunk_idx += 1;
    }

    draw_grid(f, app, chunks[chunk_idx], &theme);
    chunk_idx += 1;

    if tag_bar == Some(TagBarPlacement::Bottom) {
        draw_tag_bar(f, app, chunks[chunk_idx], &theme);
        chunk_idx += 1;
    }

    draw_footer(f, app, chunks[chunk_idx], &theme);

    if app.instance().view.viewer_visible() {
        draw_lightbox(f, app, area, &theme);
    }
    if app.ui.show_help {
        draw_help_popup(f, app, area, &theme);
    }
}

fn center_vertically(area: Rect, height: u16) -> Rect {
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(area.x, y, area.width, height.min(area.height))
}

/// Rect of `width` x `height` centred in `area`, clipped to it.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::test_app;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(app: &mut App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).expect("terminal");
        app.handle_resize(width);
        terminal.draw(|f| draw(f, app)).expect("draw");
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn centered_stays_inside_area() {
        let area = Rect::new(0, 0, 40, 10);
        let r = centered(area, 100, 100);
        assert!(r.width <= area.width && r.height <= area.height);
        assert_eq!(center_vertically(area, 2).y, 4);
    }

    #[test]
    fn grid_and_tag_bar_render() {
        let mut app = test_app();
        let screen = render(&mut app, 100, 30);
        assert!(screen.contains("forest.jpg"));
        assert!(screen.contains("tram.mp4"));
        assert!(screen.contains("All"));
        assert!(screen.contains("nature"));
        assert!(screen.contains("travel"));
    }

    #[test]
    fn hidden_items_are_not_drawn() {
        let mut app = test_app();
        app.activate_tag(tessera::gallery::TagFilter::Tag("city".into()));
        let screen = render(&mut app, 100, 30);
        assert!(screen.contains("street.jpg"));
        assert!(!screen.contains("forest.jpg"));
    }

    #[test]
    fn lightbox_popup_shows_media() {
        let mut app = test_app();
        app.open_selected();
        app.viewer_next();
        let screen = render(&mut app, 100, 30);
        assert!(screen.contains("galleryLightbox"));
        assert!(screen.contains("img/street.jpg"));
        assert!(screen.contains("2/3"));
    }

    #[test]
    fn huge_column_count_renders() {
        let mut app = test_app();
        let items = app.instance().gallery.items().len();
        let gallery = tessera::Gallery::new(
            "wide",
            (0..items)
                .map(|i| tessera::gallery::ItemDescriptor::new(format!("img/{i}.jpg"), None))
                .collect(),
            toml::from_str("columns = 65536").expect("options"),
        );
        app.instances[0] = crate::app::Instance::new(gallery);
        let screen = render(&mut app, 100, 30);
        assert!(screen.contains("wide"));

        // Drawing with a stale column count must not divide by zero either.
        app.ui.columns = 65536;
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).expect("terminal");
        terminal.draw(|f| draw(f, &mut app)).expect("draw");
    }

    #[test]
    fn help_popup_shows_configured_keys() {
        let mut app = test_app();
        app.config.keybindings.next = "n".into();
        app.config.keybindings.prev = "p".into();
        app.config.keybindings.next_tag = "t".into();
        app.ui.show_help = true;
        let screen = render(&mut app, 100, 30);
        assert!(screen.contains("n/→"));
        assert!(screen.contains("p/←"));
        assert!(screen.contains("t/BackTab"));
        assert!(!screen.contains("l/→"));
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let mut app = test_app();
        app.open_selected();
        app.ui.show_help = true;
        let _ = render(&mut app, 8, 4);
    }
}
