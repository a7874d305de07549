//! On-screen keypad: button table, layout and hit-testing.

use crate::calculator::{CalculatorIntent, Digit, Operation};
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Columns in the keypad grid.
pub const KEYPAD_COLUMNS: u16 = 4;
/// Terminal rows per keypad row (label plus top and bottom border).
pub const BUTTON_HEIGHT: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeypadButton {
    pub label: &'static str,
    /// Grid columns occupied.
    pub span: u16,
}

impl KeypadButton {
    const fn new(label: &'static str) -> Self {
        Self { label, span: 1 }
    }

    const fn wide(label: &'static str) -> Self {
        Self { label, span: 2 }
    }

    pub fn intent(&self) -> Option<CalculatorIntent> {
        match self.label {
            "AC" => Some(CalculatorIntent::Clear),
            "DEL" => Some(CalculatorIntent::DeleteDigit),
            "=" => Some(CalculatorIntent::Evaluate),
            label => label
                .parse::<Operation>()
                .map(CalculatorIntent::ChooseOperation)
                .ok()
                .or_else(|| {
                    let mut chars = label.chars();
                    match (chars.next(), chars.next()) {
                        (Some(ch), None) => Digit::try_from(ch).map(CalculatorIntent::AddDigit).ok(),
                        _ => None,
                    }
                }),
        }
    }
}

pub const KEYPAD: [&[KeypadButton]; 5] = [
    &[
        KeypadButton::wide("AC"),
        KeypadButton::new("DEL"),
        KeypadButton::new("÷"),
    ],
    &[
        KeypadButton::new("1"),
        KeypadButton::new("2"),
        KeypadButton::new("3"),
        KeypadButton::new("*"),
    ],
    &[
        KeypadButton::new("4"),
        KeypadButton::new("5"),
        KeypadButton::new("6"),
        KeypadButton::new("+"),
    ],
    &[
        KeypadButton::new("7"),
        KeypadButton::new("8"),
        KeypadButton::new("9"),
        KeypadButton::new("-"),
    ],
    &[
        KeypadButton::new("."),
        KeypadButton::new("0"),
        KeypadButton::wide("="),
    ],
];

/// Total terminal rows the keypad wants.
pub fn keypad_height() -> u16 {
    KEYPAD.len() as u16 * BUTTON_HEIGHT
}

/// Splits `area` into one rect per button, row by row.
pub fn button_rects(area: Rect) -> Vec<(Rect, KeypadButton)> {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(KEYPAD.iter().map(|_| Constraint::Ratio(1, KEYPAD.len() as u32)))
        .split(area);

    let mut rects = Vec::with_capacity(20);
    for (row_area, buttons) in rows.iter().zip(KEYPAD.iter()) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(
                buttons
                    .iter()
                    .map(|button| Constraint::Ratio(button.span as u32, KEYPAD_COLUMNS as u32)),
            )
            .split(*row_area);
        rects.extend(columns.iter().copied().zip(buttons.iter().copied()));
    }
    rects
}

/// Button under the terminal cell (`column`, `row`), if any.
pub fn button_at(area: Rect, column: u16, row: u16) -> Option<KeypadButton> {
    button_rects(area)
        .into_iter()
        .find(|(rect, _)| {
            column >= rect.x
                && column < rect.x.saturating_add(rect.width)
                && row >= rect.y
                && row < rect.y.saturating_add(rect.height)
        })
        .map(|(_, button)| button)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_button_has_an_intent() {
        for button in KEYPAD.iter().flat_map(|row| row.iter()) {
            assert!(button.intent().is_some(), "{} has no intent", button.label);
        }
    }

    #[test]
    fn operation_labels_map_to_operations() {
        let operations: Vec<_> = KEYPAD
            .iter()
            .flat_map(|row| row.iter())
            .filter_map(|button| match button.intent() {
                Some(CalculatorIntent::ChooseOperation(op)) => Some((button.label, op)),
                _ => None,
            })
            .collect();
        assert_eq!(
            operations,
            vec![
                ("÷", Operation::Divide),
                ("*", Operation::Multiply),
                ("+", Operation::Add),
                ("-", Operation::Subtract),
            ]
        );
        assert_eq!(KeypadButton::new("AC").intent(), Some(CalculatorIntent::Clear));
        assert_eq!(KeypadButton::new("x").intent(), None);
        assert_eq!(KeypadButton::new("12").intent(), None);
    }

    #[test]
    fn rows_fill_four_columns() {
        for row in KEYPAD {
            assert_eq!(row.iter().map(|b| b.span).sum::<u16>(), KEYPAD_COLUMNS);
        }
    }

    #[test]
    fn hit_test_finds_buttons() {
        let area = Rect::new(0, 0, 40, keypad_height());
        let ac = button_at(area, 1, 1).unwrap();
        assert_eq!(ac.label, "AC");
        assert_eq!(ac.intent(), Some(CalculatorIntent::Clear));

        let divide = button_at(area, 35, 1).unwrap();
        assert_eq!(
            divide.intent(),
            Some(CalculatorIntent::ChooseOperation(Operation::Divide))
        );

        let zero = button_at(area, 15, 13).unwrap();
        assert_eq!(
            zero.intent(),
            Some(CalculatorIntent::AddDigit(Digit::ZERO))
        );

        let equals = button_at(area, 39, 14).unwrap();
        assert_eq!(equals.intent(), Some(CalculatorIntent::Evaluate));
    }

    #[test]
    fn hit_test_outside_is_none() {
        let area = Rect::new(5, 5, 40, keypad_height());
        assert_eq!(button_at(area, 0, 0), None);
        assert_eq!(button_at(area, 45, 6), None);
        assert_eq!(button_at(area, 6, 5 + keypad_height()), None);
    }
}
