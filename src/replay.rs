//! Headless mode: replays a key sequence and reports the display.

use crate::calculator::{CalculatorReducer, CalculatorState, InputError, OperandFormatter};
use crate::mvi::Reducer;
use crate::ui::input::intent_for_char;
use std::fmt;

/// The two display lines after a replay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayLines {
    pub previous: String,
    pub current: String,
}

impl fmt::Display for DisplayLines {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.previous)?;
        write!(f, "{}", self.current)
    }
}

/// Feeds every character of `keys` to the calculator as if typed.
/// Whitespace is skipped; any other unbound character fails the whole
/// replay before state is touched.
pub fn replay(keys: &str, formatter: &OperandFormatter) -> Result<DisplayLines, InputError> {
    let intents = keys
        .chars()
        .filter(|ch| !ch.is_whitespace())
        .map(|ch| intent_for_char(ch).ok_or(InputError::UnboundKey(ch)))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(count = intents.len(), "Replaying key sequence");
    let state = CalculatorReducer::reduce_all(CalculatorState::default(), intents);

    Ok(DisplayLines {
        previous: state.previous_display(formatter),
        current: state.current_display(formatter),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_expression() {
        let lines = replay("1234 * 1000 =", &OperandFormatter::default()).unwrap();
        assert_eq!(lines.previous, "");
        assert_eq!(lines.current, "1,234,000");
    }

    #[test]
    fn pending_operation_shows_on_previous_line() {
        let lines = replay("12+", &OperandFormatter::default()).unwrap();
        assert_eq!(lines.to_string(), "12 +\n");
    }

    #[test]
    fn unbound_key_rejected() {
        assert_eq!(
            replay("1 x 2", &OperandFormatter::default()),
            Err(InputError::UnboundKey('x'))
        );
    }
}
