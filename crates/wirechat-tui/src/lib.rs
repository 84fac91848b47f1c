//! Terminal UI for wirechat.
//!
//! The [`Runtime`] event loop is the single owner of the terminal and the
//! message log: both the transport's decoded events and the user's keystrokes
//! reach it over channels, so rendering and log mutation are serialized by
//! construction, without locks.

pub mod app;
pub mod input;
pub mod runtime;
pub mod ui;

pub use app::{App, AppAction, AppEvent};
pub use input::{InputState, KeyInput};
pub use runtime::{Runtime, RuntimeError};
