use crate::app::state::FocusTarget;
use ratatui::layout::{Constraint, Direction, Flex, Layout, Position, Rect};

pub struct FormLayout {
    pub name_input: Rect,
    pub age_input: Rect,
    pub info: Rect,
    pub increment: Rect,
    pub decrement: Rect,
    pub reset: Rect,
    pub status_bar: Rect,
}

impl FormLayout {
    /// Control under the given terminal cell, if any.
    pub fn target_at(&self, column: u16, row: u16) -> Option<FocusTarget> {
        let pos = Position::new(column, row);
        [
            (self.name_input, FocusTarget::NameInput),
            (self.age_input, FocusTarget::AgeInput),
            (self.increment, FocusTarget::Increment),
            (self.decrement, FocusTarget::Decrement),
            (self.reset, FocusTarget::Reset),
        ]
        .into_iter()
        .find(|(rect, _)| rect.contains(pos))
        .map(|(_, target)| target)
    }
}

pub fn compute_layout(area: Rect) -> FormLayout {
    // Main vertical split: content | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Form
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let content = main_chunks[0];
    let status_bar = main_chunks[1];

    // Form column takes 80% of the width, centered
    let column = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(10),
            Constraint::Percentage(80),
            Constraint::Percentage(10),
        ])
        .split(content)[1];

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .flex(Flex::Center)
        .spacing(1)
        .constraints([
            Constraint::Length(3), // Name input
            Constraint::Length(3), // Age input
            Constraint::Length(3), // Info lines
            Constraint::Length(3), // Buttons
        ])
        .split(column);

    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(2)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(rows[3]);

    FormLayout {
        name_input: rows[0],
        age_input: rows[1],
        info: rows[2],
        increment: buttons[0],
        decrement: buttons[1],
        reset: buttons[2],
        status_bar,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_controls_stack_top_to_bottom() {
        let layout = compute_layout(Rect::new(0, 0, 80, 24));
        assert!(layout.name_input.bottom() <= layout.age_input.y);
        assert!(layout.age_input.bottom() <= layout.info.y);
        assert!(layout.info.bottom() <= layout.increment.y);
        assert_eq!(layout.name_input.height, 3);
        assert_eq!(layout.status_bar, Rect::new(0, 23, 80, 1));
    }

    #[test]
    fn test_buttons_share_a_row() {
        let layout = compute_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.increment.y, layout.decrement.y);
        assert_eq!(layout.decrement.y, layout.reset.y);
        assert!(layout.increment.right() <= layout.decrement.x);
        assert!(layout.decrement.right() <= layout.reset.x);
    }

    #[test]
    fn test_target_at() {
        let layout = compute_layout(Rect::new(0, 0, 80, 24));
        let r = layout.reset;
        assert_eq!(layout.target_at(r.x, r.y), Some(FocusTarget::Reset));
        let n = layout.name_input;
        assert_eq!(
            layout.target_at(n.right() - 1, n.bottom() - 1),
            Some(FocusTarget::NameInput)
        );
        assert_eq!(layout.target_at(0, 0), None);
        assert_eq!(layout.target_at(0, 23), None);
    }
}
