use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TavernItem::Table)
                    .if_not_exists()
                    .col(pk_auto(TavernItem::Id))
                    .col(string_uniq(TavernItem::Name))
                    .col(text(TavernItem::Description))
                    .col(string(TavernItem::Rarity))
                    .col(string_null(TavernItem::Slot))
                    .col(json_binary(TavernItem::Stats))
                    .col(integer(TavernItem::Price))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TavernItem::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum TavernItem {
    Table,
    Id,
    Name,
    Description,
    Rarity,
    Slot,
    Stats,
    Price,
}
