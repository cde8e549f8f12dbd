use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251020_000001_tavern_user::TavernUser, m20251020_000003_tavern_bartender::TavernBartender,
};

static IDX_MEMORY_BARTENDER_ID_USER_ID: &str = "idx-tavern_bartender_memory-bartender_id-user_id";
static FK_MEMORY_BARTENDER_ID: &str = "fk-tavern_bartender_memory-bartender_id";
static FK_MEMORY_USER_ID: &str = "fk-tavern_bartender_memory-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TavernBartenderMemory::Table)
                    .if_not_exists()
                    .col(pk_auto(TavernBartenderMemory::Id))
                    .col(integer(TavernBartenderMemory::BartenderId))
                    .col(integer(TavernBartenderMemory::UserId))
                    .col(string(TavernBartenderMemory::Kind))
                    .col(text(TavernBartenderMemory::Content))
                    .col(integer(TavernBartenderMemory::Importance))
                    .col(json_binary(TavernBartenderMemory::Details))
                    .col(timestamp(TavernBartenderMemory::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MEMORY_BARTENDER_ID_USER_ID)
                    .table(TavernBartenderMemory::Table)
                    .col(TavernBartenderMemory::BartenderId)
                    .col(TavernBartenderMemory::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MEMORY_BARTENDER_ID)
                    .from_tbl(TavernBartenderMemory::Table)
                    .from_col(TavernBartenderMemory::BartenderId)
                    .to_tbl(TavernBartender::Table)
                    .to_col(TavernBartender::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MEMORY_USER_ID)
                    .from_tbl(TavernBartenderMemory::Table)
                    .from_col(TavernBartenderMemory::UserId)
                    .to_tbl(TavernUser::Table)
                    .to_col(TavernUser::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for fk in [FK_MEMORY_USER_ID, FK_MEMORY_BARTENDER_ID] {
            manager
                .drop_foreign_key(
                    ForeignKey::drop()
                        .name(fk)
                        .table(TavernBartenderMemory::Table)
                        .to_owned(),
                )
                .await?;
        }

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_MEMORY_BARTENDER_ID_USER_ID)
                    .table(TavernBartenderMemory::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(
                Table::drop()
                    .table(TavernBartenderMemory::Table)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum TavernBartenderMemory {
    Table,
    Id,
    BartenderId,
    UserId,
    Kind,
    Content,
    Importance,
    Details,
    CreatedAt,
}
