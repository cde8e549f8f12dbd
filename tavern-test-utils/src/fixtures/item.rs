use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn item<'a>(&'a self) -> ItemFixtures<'a> {
        ItemFixtures { setup: self }
    }
}

pub struct ItemFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> ItemFixtures<'a> {
    /// Insert a catalogue item, `slot` uses the equipment slot keys (`head`, `mainHand`, ...)
    pub async fn insert_item(
        &self,
        name: &str,
        slot: Option<&str>,
    ) -> Result<entity::tavern_item::Model, TestError> {
        Ok(
            entity::prelude::TavernItem::insert(entity::tavern_item::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                description: ActiveValue::Set(format!("A trusty {}", name)),
                rarity: ActiveValue::Set("common".to_string()),
                slot: ActiveValue::Set(slot.map(str::to_string)),
                stats: ActiveValue::Set(serde_json::json!({ "defense": 1 })),
                price: ActiveValue::Set(10),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_inventory_entry(
        &self,
        user_id: i32,
        item_id: i32,
        quantity: i32,
    ) -> Result<entity::tavern_user_inventory::Model, TestError> {
        Ok(entity::prelude::TavernUserInventory::insert(
            entity::tavern_user_inventory::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                item_id: ActiveValue::Set(item_id),
                quantity: ActiveValue::Set(quantity),
                equipped: ActiveValue::Set(false),
                slot: ActiveValue::Set(None),
                acquired_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.setup.db)
        .await?)
    }
}
