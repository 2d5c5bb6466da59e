use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::App;
use crate::ui::paraphrase::ParaphraseIntent;

/// Handle a key event.
///
/// Returns the input text when a paraphrase request should be
/// dispatched; the caller owns the network side effect.
pub fn handle_key(app: &mut App, key: KeyEvent) -> Option<String> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return None;
    }

    if is_ctrl_char(key, 'p') {
        return app.submit();
    }

    match key.code {
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.dispatch(ParaphraseIntent::InsertChar(ch));
        }
        // The input is a multi-line text area; Enter inserts a newline
        // rather than submitting.
        KeyCode::Enter => {
            app.dispatch(ParaphraseIntent::InsertChar('\n'));
        }
        KeyCode::Backspace => {
            app.dispatch(ParaphraseIntent::DeleteChar);
        }
        _ => {}
    }

    None
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
