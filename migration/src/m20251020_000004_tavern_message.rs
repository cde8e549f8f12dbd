use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251020_000001_tavern_user::TavernUser, m20251020_000002_tavern_room::TavernRoom,
    m20251020_000003_tavern_bartender::TavernBartender,
};

static IDX_MESSAGE_ROOM_ID_CREATED_AT: &str = "idx-tavern_message-room_id-created_at";
static FK_MESSAGE_ROOM_ID: &str = "fk-tavern_message-room_id";
static FK_MESSAGE_USER_ID: &str = "fk-tavern_message-user_id";
static FK_MESSAGE_BARTENDER_ID: &str = "fk-tavern_message-bartender_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TavernMessage::Table)
                    .if_not_exists()
                    .col(pk_auto(TavernMessage::Id))
                    .col(integer(TavernMessage::RoomId))
                    .col(integer_null(TavernMessage::UserId))
                    .col(integer_null(TavernMessage::BartenderId))
                    .col(text(TavernMessage::Content))
                    .col(string(TavernMessage::Kind))
                    .col(timestamp(TavernMessage::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MESSAGE_ROOM_ID_CREATED_AT)
                    .table(TavernMessage::Table)
                    .col(TavernMessage::RoomId)
                    .col(TavernMessage::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MESSAGE_ROOM_ID)
                    .from_tbl(TavernMessage::Table)
                    .from_col(TavernMessage::RoomId)
                    .to_tbl(TavernRoom::Table)
                    .to_col(TavernRoom::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MESSAGE_USER_ID)
                    .from_tbl(TavernMessage::Table)
                    .from_col(TavernMessage::UserId)
                    .to_tbl(TavernUser::Table)
                    .to_col(TavernUser::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MESSAGE_BARTENDER_ID)
                    .from_tbl(TavernMessage::Table)
                    .from_col(TavernMessage::BartenderId)
                    .to_tbl(TavernBartender::Table)
                    .to_col(TavernBartender::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for fk in [
            FK_MESSAGE_BARTENDER_ID,
            FK_MESSAGE_USER_ID,
            FK_MESSAGE_ROOM_ID,
        ] {
            manager
                .drop_foreign_key(
                    ForeignKey::drop()
                        .name(fk)
                        .table(TavernMessage::Table)
                        .to_owned(),
                )
                .await?;
        }

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_MESSAGE_ROOM_ID_CREATED_AT)
                    .table(TavernMessage::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(TavernMessage::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum TavernMessage {
    Table,
    Id,
    RoomId,
    UserId,
    BartenderId,
    Content,
    Kind,
    CreatedAt,
}
