//! Service layer for business logic.
//!
//! Services implement the tavern's rules on top of the repositories in
//! [`crate::server::data`]: logging users in, chat in rooms, ordering from and talking to
//! bartenders, managing inventories and dispatching game actions. Multi-step writes run in a
//! single database transaction, and reads are retried on transient database failures.

pub mod action;
pub mod bartender;
pub mod inventory;
pub mod retry;
pub mod room;
pub mod user;
