//! Maps raw key events to form actions.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Insert(char),
    Newline,
    Backspace,
    Submit,
    Quit,
    Ignore,
}

/// Enter together with Ctrl, Meta or Super submits; plain Enter is a newline.
///
/// Terminals without the keyboard enhancement protocol deliver Ctrl+Enter as
/// Ctrl+J, which is mapped to submit as well.
pub fn action_for(key: &KeyEvent) -> FormAction {
    if key.kind == KeyEventKind::Release {
        return FormAction::Ignore;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let command = key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::META | KeyModifiers::SUPER);

    match key.code {
        KeyCode::Enter if command => FormAction::Submit,
        KeyCode::Char('j') if ctrl => FormAction::Submit,
        KeyCode::F(5) => FormAction::Submit,
        KeyCode::Enter => FormAction::Newline,
        KeyCode::Esc => FormAction::Quit,
        KeyCode::Char('c') | KeyCode::Char('d') if ctrl => FormAction::Quit,
        KeyCode::Backspace => FormAction::Backspace,
        KeyCode::Tab => FormAction::Insert(' '),
        KeyCode::Char(c) if !command && !key.modifiers.contains(KeyModifiers::ALT) => {
            FormAction::Insert(c)
        }
        _ => FormAction::Ignore,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn command_enter_submits() {
        for modifiers in [KeyModifiers::CONTROL, KeyModifiers::META, KeyModifiers::SUPER] {
            assert_eq!(action_for(&key(KeyCode::Enter, modifiers)), FormAction::Submit);
        }
        assert_eq!(
            action_for(&key(KeyCode::Char('j'), KeyModifiers::CONTROL)),
            FormAction::Submit
        );
        assert_eq!(action_for(&key(KeyCode::F(5), KeyModifiers::NONE)), FormAction::Submit);
    }

    #[test]
    fn plain_enter_is_newline() {
        assert_eq!(action_for(&key(KeyCode::Enter, KeyModifiers::NONE)), FormAction::Newline);
        assert_eq!(action_for(&key(KeyCode::Enter, KeyModifiers::SHIFT)), FormAction::Newline);
    }

    #[test]
    fn typing_inserts_characters() {
        assert_eq!(
            action_for(&key(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            FormAction::Insert('A')
        );
        assert_eq!(action_for(&key(KeyCode::Char('ж'), KeyModifiers::NONE)), FormAction::Insert('ж'));
        assert_eq!(
            action_for(&key(KeyCode::Char('x'), KeyModifiers::CONTROL)),
            FormAction::Ignore
        );
    }

    #[test]
    fn escape_and_ctrl_c_quit() {
        assert_eq!(action_for(&key(KeyCode::Esc, KeyModifiers::NONE)), FormAction::Quit);
        assert_eq!(
            action_for(&key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            FormAction::Quit
        );
    }

    #[test]
    fn releases_are_ignored() {
        let mut release = key(KeyCode::Enter, KeyModifiers::CONTROL);
        release.kind = KeyEventKind::Release;
        assert_eq!(action_for(&release), FormAction::Ignore);
    }
}
