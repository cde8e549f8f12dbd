use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251020_000003_tavern_bartender::TavernBartender;

static IDX_MENU_ITEM_BARTENDER_ID: &str = "idx-tavern_menu_item-bartender_id";
static FK_MENU_ITEM_BARTENDER_ID: &str = "fk-tavern_menu_item-bartender_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TavernMenuItem::Table)
                    .if_not_exists()
                    .col(pk_auto(TavernMenuItem::Id))
                    .col(integer(TavernMenuItem::BartenderId))
                    .col(string(TavernMenuItem::Name))
                    .col(text(TavernMenuItem::Description))
                    .col(string(TavernMenuItem::Category))
                    .col(integer(TavernMenuItem::Price))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MENU_ITEM_BARTENDER_ID)
                    .table(TavernMenuItem::Table)
                    .col(TavernMenuItem::BartenderId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MENU_ITEM_BARTENDER_ID)
                    .from_tbl(TavernMenuItem::Table)
                    .from_col(TavernMenuItem::BartenderId)
                    .to_tbl(TavernBartender::Table)
                    .to_col(TavernBartender::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_MENU_ITEM_BARTENDER_ID)
                    .table(TavernMenuItem::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_MENU_ITEM_BARTENDER_ID)
                    .table(TavernMenuItem::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(TavernMenuItem::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum TavernMenuItem {
    Table,
    Id,
    BartenderId,
    Name,
    Description,
    Category,
    Price,
}
