use super::centered;
use crate::app::App;
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Lightbox surface: whatever media the render model was last pointed at.
pub(super) fn draw_lightbox(f: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let instance = app.instance();
    let popup_area = centered(area, 70, 11);
    if popup_area.width < 3 || popup_area.height < 3 {
        return;
    }
    f.render_widget(Clear, popup_area);

    let title = format!(" #{} ", instance.view.lightbox_id().unwrap_or_default());
    let block = Block::default()
        .title(title)
        .title_style(
            Style::default()
                .fg(theme.accent_highlight)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent_primary))
        .style(Style::default().bg(theme.bg));

    let inner = block.inner(popup_area);
    f.render_widget(block, popup_area);

    let media = instance.view.viewer_media().unwrap_or_default();
    let item = instance.gallery.current_item();
    let tag = item
        .and_then(|i| i.tag.as_deref())
        .map(|t| format!("#{t}"))
        .unwrap_or_else(|| "untagged".to_string());
    let position = app
        .viewer_position()
        .map(|(pos, len)| format!("{pos}/{len}"))
        .unwrap_or_else(|| "–".to_string());

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            item.map(|i| i.label()).unwrap_or_default(),
            Style::default()
                .fg(theme.fg_primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(media, Style::default().fg(theme.fg_secondary))),
        Line::from(Span::styled(tag, Style::default().fg(theme.accent_highlight))),
        Line::from(""),
    ];

    if instance.gallery.options().navigation {
        let kb = &app.config.keybindings;
        lines.push(Line::from(vec![
            Span::styled(format!("‹ {}", kb.prev), Style::default().fg(theme.accent_primary)),
            Span::styled(format!("   {position}   "), Style::default().fg(theme.fg_muted)),
            Span::styled(format!("{} ›", kb.next), Style::default().fg(theme.accent_primary)),
        ]));
    } else {
        lines.push(Line::from(Span::styled(
            position,
            Style::default().fg(theme.fg_muted),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, inner);
}

pub(super) fn draw_help_popup(f: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let popup_area = centered(area, 50, 22);
    if popup_area.width < 3 || popup_area.height < 3 {
        return;
    }
    f.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Tessera Help ")
        .title_style(
            Style::default()
                .fg(theme.accent_highlight)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent_primary))
        .style(Style::default().bg(theme.bg));

    let inner = block.inner(popup_area);
    f.render_widget(block, popup_area);

    let heading = |text: &'static str| {
        Line::from(Span::styled(
            text,
            Style::default()
                .fg(theme.accent_highlight)
                .add_modifier(Modifier::BOLD),
        ))
    };
    let entry = |keys: String, what: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {keys:<10}"), Style::default().fg(theme.accent_primary)),
            Span::styled(what, Style::default().fg(theme.fg_secondary)),
        ])
    };

    let kb = &app.config.keybindings;
    let help_text = vec![
        heading("Grid"),
        entry("hjkl/←↓↑→".into(), "Move cursor"),
        entry("g/G".into(), "First / last item"),
        entry(kb.open.clone(), "Open in lightbox"),
        entry(format!("{}/{}", kb.next_tag, kb.prev_tag), "Next / previous tag"),
        entry("a".into(), "Show all"),
        entry(format!("{} {}", kb.prev_gallery, kb.next_gallery), "Switch gallery"),
        entry(kb.quit.clone(), "Quit"),
        Line::from(""),
        heading("Lightbox"),
        entry(format!("{}/→", kb.next), "Next image"),
        entry(format!("{}/←", kb.prev), "Previous image"),
        entry(format!("{}/Esc", kb.close), "Close"),
        Line::from(""),
        heading("Commands (:)"),
        entry(":t <tag>".into(), "Filter by tag"),
        entry(":all".into(), "Clear filter"),
        entry(":open <id>".into(), "Open item by id"),
        entry(":gallery".into(), "List or switch galleries"),
        entry(":q".into(), "Quit"),
    ];

    let paragraph = Paragraph::new(help_text);
    f.render_widget(paragraph, inner);
}
