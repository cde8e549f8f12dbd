//! Data access layer repositories.
//!
//! This module contains all database repository implementations for the application.
//! Repositories are generic over [`sea_orm::ConnectionTrait`] so services can run them on a
//! plain connection or inside a transaction.

pub mod bartender;
pub mod inventory;
pub mod item;
pub mod message;
pub mod room;
pub mod user;
