//! HTTP controller endpoints for the Pixel Tavern web API.
//!
//! This module contains Axum handlers for authentication, rooms, bartenders, inventories and
//! game actions. Controllers read the user from the tower-sessions session, call into the
//! services and return JSON responses. Every handler is annotated for utoipa's OpenAPI
//! documentation.

pub mod action;
pub mod auth;
pub mod bartender;
pub mod inventory;
pub mod room;
pub mod util;
