//! Server application core modules.
//!
//! This module contains all server-side functionality for Pixel Tavern: the REST API and
//! WebSocket endpoint, the room hub that fans chat out to connected players, the services
//! implementing bartenders, inventories and game actions, database repositories, and the
//! scheduler that keeps bartender moods drifting back to neutral.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod seed;
pub mod service;
pub mod startup;
pub mod util;
pub mod ws;
