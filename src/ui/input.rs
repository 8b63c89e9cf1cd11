use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::trivia::ANSWER_SLOTS;

/// What a key press means to the quiz screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// Answer with the option in this slot (0-based).
    Answer(usize),
    SelectPrev,
    SelectNext,
    /// Answer with the highlighted option, or continue once answered.
    Confirm,
    Retry,
    NewSession,
}

pub fn action_for(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char(c @ '1'..='9') => {
            let slot = c as usize - '1' as usize;
            (slot < ANSWER_SLOTS).then_some(Action::Answer(slot))
        }
        KeyCode::Up | KeyCode::Char('k') => Some(Action::SelectPrev),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => Some(Action::SelectNext),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Confirm),
        KeyCode::Char('r') => Some(Action::Retry),
        KeyCode::Char('n') => Some(Action::NewSession),
        _ => None,
    }
}
