mod button_row;
mod info_lines;
pub mod layout;
mod status_bar;
mod text_field;
mod theme;

use crate::app::state::AppState;
use ratatui::prelude::*;
use ratatui::widgets::Block;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    frame.render_widget(Block::default().style(theme::Theme::background()), area);

    let form = layout::compute_layout(area);

    text_field::render_name(frame, form.name_input, state);
    text_field::render_age(frame, form.age_input, state);
    info_lines::render(frame, form.info, state);
    button_row::render(frame, &form, state);
    status_bar::render(frame, form.status_bar, state);
}
