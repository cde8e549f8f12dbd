use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TavernUser::Table)
                    .if_not_exists()
                    .col(pk_auto(TavernUser::Id))
                    .col(string_uniq(TavernUser::Username))
                    .col(string(TavernUser::Avatar))
                    .col(integer(TavernUser::Gold).default(100))
                    .col(integer(TavernUser::Level).default(1))
                    .col(timestamp(TavernUser::CreatedAt))
                    .col(timestamp(TavernUser::LastSeenAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TavernUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum TavernUser {
    Table,
    Id,
    Username,
    Avatar,
    Gold,
    Level,
    CreatedAt,
    LastSeenAt,
}
