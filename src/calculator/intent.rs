//! Intents accepted by the calculator reducer.

use crate::calculator::input::{Digit, Operation};
use crate::mvi::Intent;

/// One button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculatorIntent {
    /// Append a digit or decimal point to the current operand.
    AddDigit(Digit),
    /// Pick the pending operation, folding any complete expression first.
    ChooseOperation(Operation),
    /// Reset to the empty state ("AC").
    Clear,
    /// Remove the last typed character ("DEL").
    DeleteDigit,
    /// Compute the pending expression ("=").
    Evaluate,
}

impl Intent for CalculatorIntent {}
