//! TCP transport for the wirechat client.
//!
//! Wraps the raw socket behind channels: lines go out through a sender,
//! decoded [`ServerEvent`]s come back through a receiver, and a single
//! connection task owns the socket so it is closed exactly once on every
//! exit path.

pub mod transport;

pub use transport::{ConnectedClient, ServerEvent, connect};
