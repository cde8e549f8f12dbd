//! Test fixture modules for database row creation.
//!
//! - `user` - tavern users
//! - `room` - rooms and their messages
//! - `bartender` - bartenders, menus, moods and memories
//! - `item` - the item catalogue and user inventories

pub mod bartender;
pub mod item;
pub mod room;
pub mod user;
