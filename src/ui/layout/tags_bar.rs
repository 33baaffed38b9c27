use crate::app::App;
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// One entry per tag-bar filter, universal tag first. The entry the render
/// model has highlighted is drawn as active.
pub(super) fn draw_tag_bar(f: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let instance = app.instance();
    let all_label = &instance.gallery.options().all_label;
    let highlighted = instance.view.highlighted();

    let mut spans = Vec::new();
    for (i, filter) in instance.gallery.tags().filters().iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        let label = format!(" {} ", filter.label(all_label));
        let style = if highlighted == Some(filter) {
            Style::default()
                .fg(theme.bg)
                .bg(theme.accent_highlight)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.accent_secondary)
        };
        spans.push(Span::styled(label, style));
    }

    let paragraph = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}
