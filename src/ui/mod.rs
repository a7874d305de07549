//! Terminal front end: turns key presses and keypad clicks into
//! calculator intents and draws the two display lines.

pub mod app;
pub mod events;
pub mod footer;
pub mod input;
pub mod keypad;
pub mod layout;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;

pub use runtime::run;
