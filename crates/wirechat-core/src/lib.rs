//! Core logic for the wirechat terminal chat client.
//!
//! Everything in this crate is pure: no sockets, no terminal, no async
//! runtime. The transport and TUI crates drive these state machines and
//! execute their decisions, which keeps the interesting behavior fully
//! testable without I/O.

pub mod config;
pub mod error;
pub mod log;
pub mod session;
pub mod wire;

pub use config::ChatConfig;
pub use error::ChatError;
pub use log::{Message, MessageKind, MessageLog};
pub use session::SessionState;
