//! Shared test utilities.

#![allow(dead_code)]

use calcterm::calculator::{CalculatorIntent, CalculatorReducer, CalculatorState, Digit, Operation};
use calcterm::mvi::Reducer;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

/// Write `content` to a `config.toml` inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

pub fn digit(ch: char) -> CalculatorIntent {
    CalculatorIntent::AddDigit(Digit::try_from(ch).expect("valid digit"))
}

pub fn op(ch: char) -> CalculatorIntent {
    CalculatorIntent::ChooseOperation(Operation::try_from(ch).expect("valid operation"))
}

/// Reduce `intents` starting from the empty state.
pub fn run(intents: impl IntoIterator<Item = CalculatorIntent>) -> CalculatorState {
    CalculatorReducer::reduce_all(CalculatorState::default(), intents)
}

pub fn calcterm_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_calcterm"))
}
