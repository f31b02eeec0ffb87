use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::profile::ProfileIntent;
use crate::ui::layout::compute_layout;
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Rect;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::InputClosed => {
            tracing::warn!("terminal input closed");
            vec![Action::Quit]
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => handle_key(state, key),
        CEvent::Mouse(mouse) => {
            handle_mouse(state, mouse);
            vec![]
        }
        CEvent::Resize(width, height) => {
            state.viewport = Rect::new(0, 0, width, height);
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    match key.code {
        KeyCode::Esc => return vec![Action::Quit],
        KeyCode::Tab | KeyCode::Down => {
            state.cycle_focus();
            return vec![];
        }
        KeyCode::BackTab | KeyCode::Up => {
            state.cycle_focus_back();
            return vec![];
        }
        _ => {}
    }

    if state.focus.is_text_input() {
        handle_input_key(state, key);
    } else {
        handle_button_key(state, key);
    }
    vec![]
}

fn handle_button_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => state.press_focused(),
        KeyCode::Left => state.cycle_focus_back(),
        KeyCode::Right => state.cycle_focus(),
        _ => {}
    }
}

/// Edit the focused input. Any change to its text is dispatched as the
/// full replacement text, after which the input is re-derived from state.
fn handle_input_key(state: &mut AppState, key: KeyEvent) {
    if key.code == KeyCode::Enter {
        state.cycle_focus();
        return;
    }

    let focus = state.focus;
    let Some(field) = state.focused_input_mut() else {
        return;
    };
    let before = field.text.clone();

    match key.code {
        KeyCode::Backspace => {
            if key.modifiers.contains(KeyModifiers::ALT) {
                field.delete_word_back();
            } else {
                field.delete_back();
            }
        }
        KeyCode::Delete => field.delete_forward(),
        KeyCode::Left => field.move_left(),
        KeyCode::Right => field.move_right(),
        KeyCode::Home => field.move_home(),
        KeyCode::End => field.move_end(),
        KeyCode::Char(c) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                match c {
                    'a' => field.move_home(),
                    'e' => field.move_end(),
                    'w' => field.delete_word_back(),
                    'u' => field.clear(),
                    _ => {}
                }
            } else {
                field.insert_char(c);
            }
        }
        _ => {}
    }

    let text = field.text.clone();
    if text == before {
        // Cursor movement only.
        state.dirty = true;
        return;
    }

    let intent = match focus {
        FocusTarget::NameInput => ProfileIntent::SetName(text),
        _ => ProfileIntent::SetAge(text),
    };
    state.dispatch(intent);
}

fn handle_mouse(state: &mut AppState, mouse: MouseEvent) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    let layout = compute_layout(state.viewport);
    let Some(target) = layout.target_at(mouse.column, mouse.row) else {
        return;
    };
    state.set_focus(target);
    state.press_focused();
}
