use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251020_000001_tavern_user::TavernUser, m20251020_000003_tavern_bartender::TavernBartender,
};

static IDX_MOOD_BARTENDER_ID_USER_ID: &str = "idx-tavern_bartender_mood-bartender_id-user_id";
static FK_MOOD_BARTENDER_ID: &str = "fk-tavern_bartender_mood-bartender_id";
static FK_MOOD_USER_ID: &str = "fk-tavern_bartender_mood-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TavernBartenderMood::Table)
                    .if_not_exists()
                    .col(pk_auto(TavernBartenderMood::Id))
                    .col(integer(TavernBartenderMood::BartenderId))
                    .col(integer(TavernBartenderMood::UserId))
                    .col(integer(TavernBartenderMood::Mood).default(50))
                    .col(timestamp(TavernBartenderMood::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MOOD_BARTENDER_ID_USER_ID)
                    .table(TavernBartenderMood::Table)
                    .col(TavernBartenderMood::BartenderId)
                    .col(TavernBartenderMood::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MOOD_BARTENDER_ID)
                    .from_tbl(TavernBartenderMood::Table)
                    .from_col(TavernBartenderMood::BartenderId)
                    .to_tbl(TavernBartender::Table)
                    .to_col(TavernBartender::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MOOD_USER_ID)
                    .from_tbl(TavernBartenderMood::Table)
                    .from_col(TavernBartenderMood::UserId)
                    .to_tbl(TavernUser::Table)
                    .to_col(TavernUser::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for fk in [FK_MOOD_USER_ID, FK_MOOD_BARTENDER_ID] {
            manager
                .drop_foreign_key(
                    ForeignKey::drop()
                        .name(fk)
                        .table(TavernBartenderMood::Table)
                        .to_owned(),
                )
                .await?;
        }

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_MOOD_BARTENDER_ID_USER_ID)
                    .table(TavernBartenderMood::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(TavernBartenderMood::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum TavernBartenderMood {
    Table,
    Id,
    BartenderId,
    UserId,
    Mood,
    UpdatedAt,
}
