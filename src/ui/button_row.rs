use crate::app::state::{AppState, FocusTarget};
use crate::ui::layout::FormLayout;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, layout: &FormLayout, state: &AppState) {
    render_button(frame, layout.increment, state, FocusTarget::Increment, "increment");
    render_button(frame, layout.decrement, state, FocusTarget::Decrement, "decrement");
    render_button(frame, layout.reset, state, FocusTarget::Reset, "reset");
}

fn render_button(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    target: FocusTarget,
    label: &str,
) {
    let accent = state.config.ui.accent;
    let focused = state.focus == target;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(if focused {
            Theme::border_type_focused()
        } else {
            Theme::border_type()
        })
        .border_style(if focused {
            Theme::border_focused(accent)
        } else {
            Theme::border()
        });

    let style = if focused {
        Theme::button_focused(accent)
    } else {
        Theme::button()
    };
    let paragraph = Paragraph::new(Span::styled(label, style))
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}
