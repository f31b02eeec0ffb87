use crate::app::state::{AppState, FocusTarget, TextField};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};

pub const NAME_PLACEHOLDER: &str = "enter a name";
pub const AGE_PLACEHOLDER: &str = "enter an age";

pub fn render_name(frame: &mut Frame, area: Rect, state: &AppState) {
    render(
        frame,
        area,
        state,
        &state.name_input,
        FocusTarget::NameInput,
        " Name ",
        NAME_PLACEHOLDER,
    );
}

pub fn render_age(frame: &mut Frame, area: Rect, state: &AppState) {
    render(
        frame,
        area,
        state,
        &state.age_input,
        FocusTarget::AgeInput,
        " Age (0-9) ",
        AGE_PLACEHOLDER,
    );
}

fn render(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    field: &TextField,
    target: FocusTarget,
    title: &str,
    placeholder: &str,
) {
    let focused = state.focus == target;
    let accent = state.config.ui.accent;
    let (border_style, border_type) = if focused {
        (Theme::border_focused(accent), Theme::border_type_focused())
    } else {
        (Theme::border(), Theme::border_type())
    };

    let block = Block::default()
        .title(title)
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .padding(Padding::horizontal(1));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let paragraph = if field.text.is_empty() {
        Paragraph::new(Span::styled(placeholder, Theme::placeholder()))
    } else {
        Paragraph::new(Span::styled(field.text.as_str(), Theme::input_text()))
    };
    frame.render_widget(paragraph, inner);

    if focused && inner.width > 0 && inner.height > 0 {
        let cursor_x = inner.x.saturating_add(field.cursor_width() as u16);
        frame.set_cursor_position((cursor_x.min(inner.right() - 1), inner.y));
    }
}
