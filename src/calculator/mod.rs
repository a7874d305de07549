//! Calculator core: state, intents, reducer, arithmetic and formatting.
//!
//! Everything here is pure. The UI owns a single [`CalculatorState`] and
//! replaces it with `CalculatorReducer::reduce(state, intent)` on every
//! button press.

mod evaluate;
mod format;
mod input;
mod intent;
mod reducer;
mod state;

pub use evaluate::{evaluate, number_to_string, parse_operand};
pub use format::{format_operand, OperandFormatter};
pub use input::{Digit, InputError, Operation};
pub use intent::CalculatorIntent;
pub use reducer::CalculatorReducer;
pub use state::CalculatorState;
