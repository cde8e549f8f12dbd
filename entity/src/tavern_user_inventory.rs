use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tavern_user_inventory")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub item_id: i32,
    pub quantity: i32,
    pub equipped: bool,
    /// Slot the entry occupies while equipped
    pub slot: Option<String>,
    pub acquired_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::tavern_user::Entity",
        from = "Column::UserId",
        to = "super::tavern_user::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    TavernUser,
    #[sea_orm(
        belongs_to = "super::tavern_item::Entity",
        from = "Column::ItemId",
        to = "super::tavern_item::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    TavernItem,
}

impl Related<super::tavern_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TavernUser.def()
    }
}

impl Related<super::tavern_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TavernItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
