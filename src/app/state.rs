use crate::config::AppConfig;
use crate::profile::{reduce, ProfileIntent, ProfileState};
use ratatui::layout::Rect;
use unicode_width::UnicodeWidthStr;

/// Editing buffer for one text input. `cursor` is a byte offset that always
/// sits on a char boundary.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextField {
    pub text: String,
    pub cursor: usize,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.text.drain(self.cursor..next);
        }
    }

    pub fn delete_word_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let head = &self.text[..self.cursor];
        let trimmed = head.trim_end_matches(' ');
        let start = trimmed.rfind(' ').map(|i| i + 1).unwrap_or(0);
        self.text.drain(start..self.cursor);
        self.cursor = start;
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    /// Replace the text with the value derived from state. The cursor jumps
    /// to the end only when the text actually changes.
    pub fn sync(&mut self, text: &str) {
        if self.text != text {
            self.text = text.to_string();
            self.cursor = self.text.len();
        }
    }

    /// Terminal columns between the start of the text and the cursor.
    pub fn cursor_width(&self) -> usize {
        self.text[..self.cursor].width()
    }
}

/// Focusable controls, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    NameInput,
    AgeInput,
    Increment,
    Decrement,
    Reset,
}

impl FocusTarget {
    pub const ALL: [FocusTarget; 5] = [
        FocusTarget::NameInput,
        FocusTarget::AgeInput,
        FocusTarget::Increment,
        FocusTarget::Decrement,
        FocusTarget::Reset,
    ];

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn is_text_input(self) -> bool {
        matches!(self, FocusTarget::NameInput | FocusTarget::AgeInput)
    }

    /// The intent a button raises when pressed; `None` for text inputs.
    pub fn press_intent(self) -> Option<ProfileIntent> {
        match self {
            FocusTarget::Increment => Some(ProfileIntent::IncrementCount),
            FocusTarget::Decrement => Some(ProfileIntent::DecrementCount),
            FocusTarget::Reset => Some(ProfileIntent::ResetCount),
            FocusTarget::NameInput | FocusTarget::AgeInput => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FocusTarget::NameInput => "NAME",
            FocusTarget::AgeInput => "AGE",
            FocusTarget::Increment => "INCREMENT",
            FocusTarget::Decrement => "DECREMENT",
            FocusTarget::Reset => "RESET",
        }
    }
}

pub struct AppState {
    pub config: AppConfig,
    pub profile: ProfileState,
    pub name_input: TextField,
    pub age_input: TextField,
    pub focus: FocusTarget,
    /// Last known terminal area, used for mouse hit-testing.
    pub viewport: Rect,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let mut state = Self {
            config,
            profile: ProfileState::default(),
            name_input: TextField::new(),
            age_input: TextField::new(),
            focus: FocusTarget::NameInput,
            viewport: Rect::default(),
            should_quit: false,
            dirty: true,
        };
        state.sync_inputs();
        state
    }

    /// Run an intent through the reducer, replacing the profile wholesale,
    /// then re-derive both inputs from the new record.
    pub fn dispatch(&mut self, intent: ProfileIntent) {
        tracing::debug!(?intent, "dispatch");
        self.profile = reduce(&self.profile, intent);
        self.sync_inputs();
        tracing::debug!(profile = ?self.profile, "profile updated");
        self.dirty = true;
    }

    fn sync_inputs(&mut self) {
        self.name_input.sync(&self.profile.name);
        self.age_input.sync(&self.profile.age.input_text());
    }

    pub fn focused_input_mut(&mut self) -> Option<&mut TextField> {
        match self.focus {
            FocusTarget::NameInput => Some(&mut self.name_input),
            FocusTarget::AgeInput => Some(&mut self.age_input),
            _ => None,
        }
    }

    pub fn set_focus(&mut self, target: FocusTarget) {
        if self.focus != target {
            self.focus = target;
            self.dirty = true;
        }
    }

    pub fn cycle_focus(&mut self) {
        self.set_focus(self.focus.next());
    }

    pub fn cycle_focus_back(&mut self) {
        self.set_focus(self.focus.prev());
    }

    /// Press the focused button. No-op when a text input has focus.
    pub fn press_focused(&mut self) {
        if let Some(intent) = self.focus.press_intent() {
            self.dispatch(intent);
        }
    }
}
