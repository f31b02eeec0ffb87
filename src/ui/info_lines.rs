use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

/// The three read-only lines mirroring the profile record.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let profile = &state.profile;
    let lines = vec![
        Line::from(profile.name_line()),
        Line::from(profile.age_line()),
        Line::from(profile.count_line()),
    ];
    let paragraph = Paragraph::new(lines)
        .style(Theme::info_text())
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
