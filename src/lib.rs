//! A pocket calculator for the terminal.
//!
//! The [`calculator`] module holds the pure core: a reducer over
//! [`calculator::CalculatorState`], string arithmetic and display
//! formatting. [`ui`] wraps it in a ratatui front end and [`replay`] drives
//! it headlessly from a key sequence.

pub mod calculator;
pub mod config;
pub mod logging;
pub mod mvi;
pub mod replay;
pub mod ui;
