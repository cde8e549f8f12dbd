//! Server application models and type definitions.
//!
//! This module contains data models for the server application: the shared application state
//! and session data structures.

pub mod app;
pub mod session;
