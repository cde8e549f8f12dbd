use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

pub struct MenuItemRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MenuItemRepository<'a, C> {
    /// Creates a new instance of [`MenuItemRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        bartender_id: i32,
        name: &str,
        description: &str,
        category: &str,
        price: i32,
    ) -> Result<entity::tavern_menu_item::Model, DbErr> {
        let menu_item = entity::tavern_menu_item::ActiveModel {
            bartender_id: ActiveValue::Set(bartender_id),
            name: ActiveValue::Set(name.to_string()),
            description: ActiveValue::Set(description.to_string()),
            category: ActiveValue::Set(category.to_string()),
            price: ActiveValue::Set(price),
            ..Default::default()
        };

        menu_item.insert(self.db).await
    }

    pub async fn get_by_id(
        &self,
        menu_item_id: i32,
    ) -> Result<Option<entity::tavern_menu_item::Model>, DbErr> {
        entity::prelude::TavernMenuItem::find_by_id(menu_item_id)
            .one(self.db)
            .await
    }

    /// Menu of a bartender, cheapest first
    pub async fn get_by_bartender_id(
        &self,
        bartender_id: i32,
    ) -> Result<Vec<entity::tavern_menu_item::Model>, DbErr> {
        entity::prelude::TavernMenuItem::find()
            .filter(entity::tavern_menu_item::Column::BartenderId.eq(bartender_id))
            .order_by_asc(entity::tavern_menu_item::Column::Price)
            .order_by_asc(entity::tavern_menu_item::Column::Id)
            .all(self.db)
            .await
    }
}
