use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder,
};

pub struct ItemRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ItemRepository<'a, C> {
    /// Creates a new instance of [`ItemRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        name: &str,
        description: &str,
        rarity: &str,
        slot: Option<&str>,
        stats: serde_json::Value,
        price: i32,
    ) -> Result<entity::tavern_item::Model, DbErr> {
        let item = entity::tavern_item::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            description: ActiveValue::Set(description.to_string()),
            rarity: ActiveValue::Set(rarity.to_string()),
            slot: ActiveValue::Set(slot.map(str::to_string)),
            stats: ActiveValue::Set(stats),
            price: ActiveValue::Set(price),
            ..Default::default()
        };

        item.insert(self.db).await
    }

    pub async fn get_by_id(&self, item_id: i32) -> Result<Option<entity::tavern_item::Model>, DbErr> {
        entity::prelude::TavernItem::find_by_id(item_id)
            .one(self.db)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::tavern_item::Model>, DbErr> {
        entity::prelude::TavernItem::find()
            .order_by_asc(entity::tavern_item::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::TavernItem::find().count(self.db).await
    }
}
