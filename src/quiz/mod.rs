//! Quiz session feature.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Immutable session snapshot
//! - `intent.rs` - Session transitions
//! - `reducer.rs` - Pure state transitions
//! - `session.rs` - Owner of state, randomness and the question provider
//!
//! The presentation layer only talks to [`QuizSession`]; every operation
//! returns the new [`QuizState`] snapshot.

mod error;
mod intent;
mod reducer;
mod request;
mod session;
mod state;

pub use error::{QuizError, SessionError};
pub use intent::QuizIntent;
pub use reducer::QuizReducer;
pub use request::{LoadRequest, MAX_AMOUNT};
pub use session::QuizSession;
pub use state::{QuizPhase, QuizState, ReviewEntry, SlotLabel};
