//! Model-View-Intent (MVI) primitives.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: immutable snapshot the view renders from
//! - **Intent**: a user action or an async result (e.g. questions fetched)
//! - **Reducer**: pure function from (state, intent) to the next state
//!
//! Side effects (network fetches, randomness) stay outside the reducer; the
//! owner of the state performs them and feeds the outcome back as an intent.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
