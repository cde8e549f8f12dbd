use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "tavern_item")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub rarity: String,
    /// Equipment slot key, `None` for items that cannot be equipped
    pub slot: Option<String>,
    pub stats: Json,
    pub price: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::tavern_user_inventory::Entity")]
    TavernUserInventory,
}

impl Related<super::tavern_user_inventory::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TavernUserInventory.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
