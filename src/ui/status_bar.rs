use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

const KEY_HINTS: &str = " Tab/↑↓ move · Enter/Space press · Esc quit ";

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    if state.config.ui.show_key_hints {
        parts.push(Span::styled(KEY_HINTS, Theme::status_bar()));
    }

    // Focus indicator, right-aligned
    let focus_name = format!(" [{}] ", state.focus.label());
    let used: usize = parts.iter().map(|s| s.content.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + focus_name.width());
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        focus_name,
        Style::default()
            .fg(Theme::accent(state.config.ui.accent))
            .bg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
