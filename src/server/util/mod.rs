//! Utility functions and helpers for server operations.
//!
//! This module provides reusable helpers shared by services, the WebSocket connection handler
//! and the startup seed, currently JSON encoding & decoding with errors mapped into the
//! server's [`Error`](crate::server::error::Error) type.

pub mod json;
