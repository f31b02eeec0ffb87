use crate::config::Accent;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const BACKGROUND: Color = Color::Rgb(0xa0, 0xa0, 0xa0);

    pub fn accent(accent: Accent) -> Color {
        match accent {
            Accent::Cyan => Color::Cyan,
            Accent::Green => Color::Green,
            Accent::Yellow => Color::Yellow,
            Accent::Magenta => Color::Magenta,
            Accent::Blue => Color::Blue,
        }
    }

    pub fn background() -> Style {
        Style::default().bg(Self::BACKGROUND)
    }

    pub fn border() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn border_focused(accent: Accent) -> Style {
        Style::default().fg(Self::accent(accent))
    }

    pub fn border_type() -> BorderType {
        BorderType::Plain
    }

    pub fn border_type_focused() -> BorderType {
        BorderType::Rounded
    }

    pub fn title() -> Style {
        Style::default().fg(Color::Black).add_modifier(Modifier::BOLD)
    }

    pub fn input_text() -> Style {
        Style::default().fg(Color::Black)
    }

    pub fn placeholder() -> Style {
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC)
    }

    pub fn info_text() -> Style {
        Style::default().fg(Color::Black).add_modifier(Modifier::BOLD)
    }

    pub fn button() -> Style {
        Style::default().fg(Color::Blue)
    }

    pub fn button_focused(accent: Accent) -> Style {
        Style::default()
            .fg(Color::White)
            .bg(Self::accent(accent))
            .add_modifier(Modifier::BOLD)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }
}
