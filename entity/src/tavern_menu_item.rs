use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tavern_menu_item")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub bartender_id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub category: String,
    pub price: i32,
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
}

impl Related<super::tavern_bartender::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TavernBartender.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
