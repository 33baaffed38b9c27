use crate::app::App;
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub(super) fn draw_status(f: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    if let Some(message) = &app.ui.status_message {
        let line = Line::from(vec![
            Span::styled("⚠ ", Style::default().fg(theme.warning)),
            Span::styled(message, Style::default().fg(theme.warning)),
        ]);
        let paragraph = Paragraph::new(line).alignment(Alignment::Center);
        f.render_widget(paragraph, area);
    }
}

pub(super) fn draw_header(f: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let instance = app.instance();
    let gallery = &instance.gallery;

    let gallery_info = if app.instances.len() > 1 {
        format!(
            "{} ({}/{})",
            gallery.name(),
            app.active + 1,
            app.instances.len()
        )
    } else {
        gallery.name().to_string()
    };

    let visible = instance.visible_ids().len();
    let count_info = if visible == 0 {
        format!("0/{}", gallery.items().len())
    } else {
        format!("{}/{}", instance.cursor + 1, visible)
    };

    let sep = Span::styled(" │ ", Style::default().fg(theme.fg_muted));
    let mut spans = vec![
        Span::styled(
            " Tessera ",
            Style::default()
                .fg(theme.accent_highlight)
                .add_modifier(Modifier::BOLD),
        ),
        sep.clone(),
        Span::styled(gallery_info, Style::default().fg(theme.fg_secondary)),
        sep.clone(),
        Span::styled(count_info, Style::default().fg(theme.accent_primary)),
        sep,
        Span::styled(
            format!("[#{}]", app.active_tag_label()),
            Style::default().fg(theme.accent_highlight),
        ),
        Span::styled(
            format!(" [{} col]", app.ui.columns),
            Style::default().fg(theme.fg_secondary),
        ),
    ];

    if !gallery.options().light_box {
        spans.push(Span::styled(
            " [no lightbox]",
            Style::default().fg(theme.fg_muted),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

pub(super) fn draw_footer(f: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    if app.ui.command_mode {
        let cmd_line = Line::from(vec![
            Span::styled(
                ":",
                Style::default()
                    .fg(theme.accent_primary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                &app.ui.command_buffer,
                Style::default().fg(theme.fg_primary),
            ),
            Span::styled("█", Style::default().fg(theme.accent_primary)),
        ]);
        f.render_widget(Paragraph::new(cmd_line), area);
        return;
    }

    let kb = &app.config.keybindings;
    let sep = Span::styled(" │ ", Style::default().fg(theme.fg_muted));
    let key = |label: String| Span::styled(label, Style::default().fg(theme.accent_primary));
    let text = |label: &'static str| Span::styled(label, Style::default().fg(theme.fg_muted));

    let help = if app.viewer_open() {
        let mut spans = Vec::new();
        if app.instance().gallery.options().navigation {
            spans.extend([
                key(format!("{}/←", kb.prev)),
                text(" prev"),
                sep.clone(),
                key(format!("{}/→", kb.next)),
                text(" next"),
                sep.clone(),
            ]);
        }
        spans.extend([key(kb.close.clone()), text(" close")]);
        Line::from(spans)
    } else {
        Line::from(vec![
            key("←↓↑→".to_string()),
            text(" move"),
            sep.clone(),
            key(kb.open.clone()),
            text(" open"),
            sep.clone(),
            key(kb.next_tag.clone()),
            text(" tag"),
            sep.clone(),
            key(format!("{}{}", kb.prev_gallery, kb.next_gallery)),
            text(" gallery"),
            sep.clone(),
            key(":".to_string()),
            text(" cmd"),
            sep.clone(),
            key("?".to_string()),
            text(" help"),
            sep,
            key(kb.quit.clone()),
            text(" quit"),
        ])
    };

    let paragraph = Paragraph::new(help).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}
