//! Data transfer objects shared by the REST API and the WebSocket protocol.

pub mod action;
pub mod api;
pub mod bartender;
pub mod inventory;
pub mod room;
pub mod user;
pub mod ws;
