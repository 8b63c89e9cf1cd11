//! Terminal presentation layer.
//!
//! `runtime::run` owns the terminal and the event loop; `App` turns key
//! presses and fetch results into quiz session operations; `render` draws
//! the current [`QuizState`](crate::quiz::QuizState).

pub mod app;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;

pub use runtime::run;
