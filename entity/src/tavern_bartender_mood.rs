use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tavern_bartender_mood")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub bartender_id: i32,
    pub user_id: i32,
    pub mood: i32,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::tavern_bartender::Entity",
        from = "Column::BartenderId",
        to = "super::tavern_bartender::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    TavernBartender,
    #[sea_orm(
        belongs_to = "super::tavern_user::Entity",
        from = "Column::UserId",
        to = "super::tavern_user::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    TavernUser,
}

impl Related<super::tavern_bartender::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TavernBartender.def()
    }
}

impl Related<super::tavern_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TavernUser.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
