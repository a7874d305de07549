//! Calculator state.

use crate::calculator::format::OperandFormatter;
use crate::calculator::input::Operation;
use crate::mvi::UiState;

/// Everything the calculator remembers between button presses.
///
/// The default value is the empty state the app starts in and returns to
/// on Clear.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CalculatorState {
    /// Operand being typed, or the last result when `overwrite` is set.
    pub current_operand: Option<String>,
    /// Left-hand side of the pending operation.
    pub previous_operand: Option<String>,
    pub operation: Option<Operation>,
    /// Set right after Evaluate so the next digit starts a fresh operand.
    pub overwrite: bool,
}

impl UiState for CalculatorState {}

impl CalculatorState {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Upper display line: previous operand followed by the operation symbol.
    pub fn previous_display(&self, formatter: &OperandFormatter) -> String {
        let operand = formatter.format(self.previous_operand.as_deref());
        let symbol = self.operation.map(Operation::symbol);
        match (operand, symbol) {
            (Some(operand), Some(symbol)) => format!("{operand} {symbol}"),
            (Some(operand), None) => operand,
            (None, Some(symbol)) => symbol.to_string(),
            (None, None) => String::new(),
        }
    }

    /// Lower display line: the current operand.
    pub fn current_display(&self, formatter: &OperandFormatter) -> String {
        formatter
            .format(self.current_operand.as_deref())
            .unwrap_or_default()
    }
}
