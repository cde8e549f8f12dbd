pub use super::tavern_bartender::Entity as TavernBartender;
pub use super::tavern_bartender_memory::Entity as TavernBartenderMemory;
pub use super::tavern_bartender_mood::Entity as TavernBartenderMood;
pub use super::tavern_item::Entity as TavernItem;
pub use super::tavern_menu_item::Entity as TavernMenuItem;
pub use super::tavern_message::Entity as TavernMessage;
pub use super::tavern_room::Entity as TavernRoom;
pub use super::tavern_user::Entity as TavernUser;
pub use super::tavern_user_inventory::Entity as TavernUserInventory;
