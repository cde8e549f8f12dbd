use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tavern_message")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub room_id: i32,
    pub user_id: Option<i32>,
    pub bartender_id: Option<i32>,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub kind: String,
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
    #[sea_orm(
        belongs_to = "super::tavern_user::Entity",
        from = "Column::UserId",
        to = "super::tavern_user::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    TavernUser,
    #[sea_orm(
        belongs_to = "super::tavern_bartender::Entity",
        from = "Column::BartenderId",
        to = "super::tavern_bartender::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    TavernBartender,
}

impl Related<super::tavern_room::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TavernRoom.def()
    }
}

impl Related<super::tavern_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TavernUser.def()
    }
}

impl Related<super::tavern_bartender::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TavernBartender.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
