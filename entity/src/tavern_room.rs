use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tavern_room")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub description: String,
    pub theme: String,
    pub capacity: i32,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::tavern_message::Entity")]
    TavernMessage,
    #[sea_orm(has_many = "super::tavern_bartender::Entity")]
    TavernBartender,
}

impl Related<super::tavern_message::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TavernMessage.def()
    }
}

impl Related<super::tavern_bartender::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TavernBartender.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
