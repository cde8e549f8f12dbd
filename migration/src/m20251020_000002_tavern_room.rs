use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TavernRoom::Table)
                    .if_not_exists()
                    .col(pk_auto(TavernRoom::Id))
                    .col(string_uniq(TavernRoom::Name))
                    .col(string(TavernRoom::Description))
                    .col(string(TavernRoom::Theme))
                    .col(integer(TavernRoom::Capacity))
                    .col(timestamp(TavernRoom::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TavernRoom::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum TavernRoom {
    Table,
    Id,
    Name,
    Description,
    Theme,
    Capacity,
    CreatedAt,
}
