use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251020_000002_tavern_room::TavernRoom;

static IDX_BARTENDER_ROOM_ID: &str = "idx-tavern_bartender-room_id";
static FK_BARTENDER_ROOM_ID: &str = "fk-tavern_bartender-room_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TavernBartender::Table)
                    .if_not_exists()
                    .col(pk_auto(TavernBartender::Id))
                    .col(integer(TavernBartender::RoomId))
                    .col(string(TavernBartender::Name))
                    .col(text(TavernBartender::Personality))
                    .col(text(TavernBartender::Greeting))
                    .col(string(TavernBartender::Avatar))
                    .col(timestamp(TavernBartender::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_BARTENDER_ROOM_ID)
                    .table(TavernBartender::Table)
                    .col(TavernBartender::RoomId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_BARTENDER_ROOM_ID)
                    .from_tbl(TavernBartender::Table)
                    .from_col(TavernBartender::RoomId)
                    .to_tbl(TavernRoom::Table)
                    .to_col(TavernRoom::Id)
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
                    .name(FK_BARTENDER_ROOM_ID)
                    .table(TavernBartender::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_BARTENDER_ROOM_ID)
                    .table(TavernBartender::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(TavernBartender::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum TavernBartender {
    Table,
    Id,
    RoomId,
    Name,
    Personality,
    Greeting,
    Avatar,
    CreatedAt,
}
