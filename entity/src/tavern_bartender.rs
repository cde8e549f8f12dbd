use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tavern_bartender")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub room_id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub personality: String,
    #[sea_orm(column_type = "Text")]
    pub greeting: String,
    pub avatar: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::tavern_room::Entity",
        from = "Column::RoomId",
        to = "super::tavern_room::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    TavernRoom,
    #[sea_orm(has_many = "super::tavern_menu_item::Entity")]
    TavernMenuItem,
    #[sea_orm(has_many = "super::tavern_bartender_mood::Entity")]
    TavernBartenderMood,
    #[sea_orm(has_many = "super::tavern_bartender_memory::Entity")]
    TavernBartenderMemory,
}

impl Related<super::tavern_room::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TavernRoom.def()
    }
}

impl Related<super::tavern_menu_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TavernMenuItem.def()
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
