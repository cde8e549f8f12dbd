use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tavern_user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    pub avatar: String,
    pub gold: i32,
    pub level: i32,
    pub created_at: DateTime,
    pub last_seen_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::tavern_message::Entity")]
    TavernMessage,
    #[sea_orm(has_many = "super::tavern_user_inventory::Entity")]
    TavernUserInventory,
    #[sea_orm(has_many = "super::tavern_bartender_mood::Entity")]
    TavernBartenderMood,
    #[sea_orm(has_many = "super::tavern_bartender_memory::Entity")]
    TavernBartenderMemory,
}

impl Related<super::tavern_message::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TavernMessage.def()
    }
}

impl Related<super::tavern_user_inventory::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TavernUserInventory.def()
    }
}

impl Related<super::tavern_bartender_mood::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TavernBartenderMood.def()
    }
}

impl Related<super::tavern_bartender_memory::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TavernBartenderMemory.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
