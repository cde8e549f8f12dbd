//! SeaORM entities for the Pixel Tavern schema.

pub mod prelude;

pub mod tavern_bartender;
pub mod tavern_bartender_memory;
pub mod tavern_bartender_mood;
pub mod tavern_item;
pub mod tavern_menu_item;
pub mod tavern_message;
pub mod tavern_room;
pub mod tavern_user;
pub mod tavern_user_inventory;
