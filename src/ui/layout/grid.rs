use super::center_vertically;
use crate::app::App;
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tessera::gallery::GalleryItem;
use tessera::layout::grid_position;

/// Height of one grid cell including its border.
const CELL_HEIGHT: u16 = 4;

/// First grid row to draw so that `cursor_row` stays on screen.
fn first_row(cursor_row: usize, rows_visible: usize) -> usize {
    let rows_visible = rows_visible.max(1);
    if cursor_row >= rows_visible {
        cursor_row + 1 - rows_visible
    } else {
        0
    }
}

pub(super) fn draw_grid(f: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let instance = app.instance();
    let visible = instance.visible_ids();

    if visible.is_empty() {
        let text = Paragraph::new("No items")
            .style(Style::default().fg(theme.fg_muted))
            .alignment(Alignment::Center);
        f.render_widget(text, center_vertically(area, 1));
        return;
    }
    if area.width == 0 || area.height == 0 {
        return;
    }

    let columns = app.ui.columns.clamp(1, usize::from(area.width));
    let cell_width = (area.width / columns as u16).max(1);
    let rows_visible = (area.height / CELL_HEIGHT).max(1) as usize;
    let (cursor_row, _) = grid_position(instance.cursor, columns);
    let skip = first_row(cursor_row, rows_visible);

    for (idx, id) in visible.iter().enumerate() {
        let (row, col) = grid_position(idx, columns);
        if row < skip || row >= skip + rows_visible {
            continue;
        }
        let Some(item) = instance.gallery.item(*id) else {
            continue;
        };

        let x = area.x + col as u16 * cell_width;
        let y = area.y + (row - skip) as u16 * CELL_HEIGHT;
        if x >= area.x + area.width || y >= area.y + area.height {
            continue;
        }
        let cell = Rect::new(
            x,
            y,
            cell_width.min(area.x + area.width - x),
            CELL_HEIGHT.min(area.y + area.height - y),
        );
        draw_cell(f, item, cell, idx == instance.cursor, theme);
    }
}

fn draw_cell(f: &mut Frame, item: &GalleryItem, area: Rect, focused: bool, theme: &Theme) {
    let border = if focused {
        Style::default().fg(theme.border_focused)
    } else {
        Style::default().fg(theme.border)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(format!(" {} ", item.id));

    let marker = if item.is_image() { "▣ " } else { "▶ " };
    let label_style = if focused {
        Style::default()
            .fg(theme.fg_primary)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.fg_secondary)
    };
    let lines = vec![
        Line::from(vec![
            Span::styled(marker, Style::default().fg(theme.accent_primary)),
            Span::styled(item.label(), label_style),
        ]),
        Line::from(Span::styled(
            item.tag.as_deref().map(|t| format!("#{t}")).unwrap_or_default(),
            Style::default().fg(theme.accent_highlight),
        )),
    ];

    let paragraph = Paragraph::new(lines).block(block);
    f.render_widget(paragraph, area);
}
