//! Model-View-Intent primitives.
//!
//! Every piece of mutable state in the crate is driven through these
//! traits, giving unidirectional data flow:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────── key / click ─────────┘
//! ```
//!
//! - **State**: plain value describing everything the view needs
//! - **Intent**: a typed user action
//! - **Reducer**: pure function from (state, intent) to the next state

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
