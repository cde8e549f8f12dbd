//! WebSocket transport for the tavern protocol.
//!
//! - `hub` - shared registry of room membership & per-room broadcast channels
//! - `connection` - per-socket state machine turning frames into replies
//! - `handler` - the `GET /ws` upgrade handler and socket task

pub mod connection;
pub mod handler;
pub mod hub;
