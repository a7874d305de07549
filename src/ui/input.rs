use crate::calculator::{CalculatorIntent, Digit, Operation};
use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Maps a typed character to the button it stands for.
///
/// Shared by the TUI and headless replay so both accept the same input:
/// digits and `.` (`,` as an alias), `+ - * /` (and `÷`), `=` to evaluate,
/// `<` to delete, `c` to clear.
pub fn intent_for_char(ch: char) -> Option<CalculatorIntent> {
    match ch {
        '=' => Some(CalculatorIntent::Evaluate),
        '<' => Some(CalculatorIntent::DeleteDigit),
        'c' | 'C' => Some(CalculatorIntent::Clear),
        ',' => Some(CalculatorIntent::AddDigit(Digit::POINT)),
        _ => Digit::try_from(ch)
            .map(CalculatorIntent::AddDigit)
            .or_else(|_| Operation::try_from(ch).map(CalculatorIntent::ChooseOperation))
            .ok(),
    }
}

/// Maps a key press to a calculator intent. Quit keys are not intents.
pub fn intent_for_key(key: KeyEvent) -> Option<CalculatorIntent> {
    if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return None;
    }
    match key.code {
        KeyCode::Enter => Some(CalculatorIntent::Evaluate),
        KeyCode::Backspace => Some(CalculatorIntent::DeleteDigit),
        KeyCode::Delete | KeyCode::Esc => Some(CalculatorIntent::Clear),
        KeyCode::Char(ch) => intent_for_char(ch),
        _ => None,
    }
}

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_quit(key) {
        app.request_quit();
        return;
    }

    match intent_for_key(key) {
        Some(intent) => app.dispatch(intent),
        None => tracing::trace!(code = ?key.code, "Unbound key"),
    }
}

fn is_quit(key: KeyEvent) -> bool {
    let KeyCode::Char(ch) = key.code else {
        return false;
    };
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return ch.eq_ignore_ascii_case(&'c') || ch.eq_ignore_ascii_case(&'q');
    }
    ch == 'q' && key.modifiers.is_empty()
}
