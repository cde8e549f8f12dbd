pub use sea_orm_migration::prelude::*;

mod m20251020_000001_tavern_user;
mod m20251020_000002_tavern_room;
mod m20251020_000003_tavern_bartender;
mod m20251020_000004_tavern_message;
mod m20251020_000005_tavern_menu_item;
mod m20251020_000006_tavern_bartender_mood;
mod m20251020_000007_tavern_bartender_memory;
mod m20251020_000008_tavern_item;
mod m20251020_000009_tavern_user_inventory;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251020_000001_tavern_user::Migration),
            Box::new(m20251020_000002_tavern_room::Migration),
            Box::new(m20251020_000003_tavern_bartender::Migration),
            Box::new(m20251020_000004_tavern_message::Migration),
            Box::new(m20251020_000005_tavern_menu_item::Migration),
            Box::new(m20251020_000006_tavern_bartender_mood::Migration),
            Box::new(m20251020_000007_tavern_bartender_memory::Migration),
            Box::new(m20251020_000008_tavern_item::Migration),
            Box::new(m20251020_000009_tavern_user_inventory::Migration),
        ]
    }
}
