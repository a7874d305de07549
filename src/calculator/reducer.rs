//! Reducer for calculator state transitions.

use crate::calculator::evaluate::evaluate;
use crate::calculator::input::{Digit, Operation};
use crate::calculator::intent::CalculatorIntent;
use crate::calculator::state::CalculatorState;
use crate::mvi::Reducer;

/// Pure calculator state machine. Never fails: presses that make no sense
/// in the current state leave it untouched.
pub struct CalculatorReducer;

impl Reducer for CalculatorReducer {
    type State = CalculatorState;
    type Intent = CalculatorIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CalculatorIntent::AddDigit(digit) => add_digit(state, digit),
            CalculatorIntent::ChooseOperation(operation) => choose_operation(state, operation),
            CalculatorIntent::Clear => CalculatorState::default(),
            CalculatorIntent::DeleteDigit => delete_digit(state),
            CalculatorIntent::Evaluate => evaluate_pending(state),
        }
    }
}

fn add_digit(state: CalculatorState, digit: Digit) -> CalculatorState {
    if state.overwrite {
        return CalculatorState {
            current_operand: Some(digit.to_string()),
            overwrite: false,
            ..state
        };
    }

    let current = state.current_operand.as_deref();
    if digit == Digit::ZERO && current == Some("0") {
        return state;
    }
    if digit.is_point() && current.is_some_and(|operand| operand.contains('.')) {
        return state;
    }

    let mut operand = state.current_operand.unwrap_or_default();
    operand.push(digit.as_char());
    CalculatorState {
        current_operand: Some(operand),
        ..state
    }
}

fn choose_operation(state: CalculatorState, operation: Operation) -> CalculatorState {
    match (state.previous_operand, state.current_operand) {
        (None, None) => CalculatorState {
            previous_operand: None,
            current_operand: None,
            ..state
        },
        // Switching the pending operator.
        (previous @ Some(_), None) => CalculatorState {
            previous_operand: previous,
            current_operand: None,
            operation: Some(operation),
            ..state
        },
        (None, current @ Some(_)) => CalculatorState {
            previous_operand: current,
            current_operand: None,
            operation: Some(operation),
            ..state
        },
        (Some(previous), Some(current)) => {
            let folded = match state.operation {
                Some(pending) => evaluate(&previous, &current, pending),
                None => String::new(),
            };
            CalculatorState {
                previous_operand: Some(folded),
                current_operand: None,
                operation: Some(operation),
                ..state
            }
        }
    }
}

fn delete_digit(state: CalculatorState) -> CalculatorState {
    if state.overwrite {
        return CalculatorState {
            current_operand: None,
            overwrite: false,
            ..state
        };
    }

    match state.current_operand {
        None => CalculatorState {
            current_operand: None,
            ..state
        },
        Some(mut operand) => {
            operand.pop();
            CalculatorState {
                current_operand: (!operand.is_empty()).then_some(operand),
                ..state
            }
        }
    }
}

fn evaluate_pending(state: CalculatorState) -> CalculatorState {
    let (Some(previous), Some(current), Some(operation)) = (
        state.previous_operand.as_deref(),
        state.current_operand.as_deref(),
        state.operation,
    ) else {
        return state;
    };

    let result = evaluate(previous, current, operation);
    CalculatorState {
        current_operand: Some(result),
        previous_operand: None,
        operation: None,
        overwrite: true,
    }
}
