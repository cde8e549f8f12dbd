use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251020_000001_tavern_user::TavernUser, m20251020_000008_tavern_item::TavernItem};

static IDX_INVENTORY_USER_ID: &str = "idx-tavern_user_inventory-user_id";
static FK_INVENTORY_USER_ID: &str = "fk-tavern_user_inventory-user_id";
static FK_INVENTORY_ITEM_ID: &str = "fk-tavern_user_inventory-item_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TavernUserInventory::Table)
                    .if_not_exists()
                    .col(pk_auto(TavernUserInventory::Id))
                    .col(integer(TavernUserInventory::UserId))
                    .col(integer(TavernUserInventory::ItemId))
                    .col(integer(TavernUserInventory::Quantity).default(1))
                    .col(boolean(TavernUserInventory::Equipped).default(false))
                    .col(string_null(TavernUserInventory::Slot))
                    .col(timestamp(TavernUserInventory::AcquiredAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_INVENTORY_USER_ID)
                    .table(TavernUserInventory::Table)
                    .col(TavernUserInventory::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_INVENTORY_USER_ID)
                    .from_tbl(TavernUserInventory::Table)
                    .from_col(TavernUserInventory::UserId)
                    .to_tbl(TavernUser::Table)
                    .to_col(TavernUser::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_INVENTORY_ITEM_ID)
                    .from_tbl(TavernUserInventory::Table)
                    .from_col(TavernUserInventory::ItemId)
                    .to_tbl(TavernItem::Table)
                    .to_col(TavernItem::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for fk in [FK_INVENTORY_ITEM_ID, FK_INVENTORY_USER_ID] {
            manager
                .drop_foreign_key(
                    ForeignKey::drop()
                        .name(fk)
                        .table(TavernUserInventory::Table)
                        .to_owned(),
                )
                .await?;
        }

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_INVENTORY_USER_ID)
                    .table(TavernUserInventory::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(TavernUserInventory::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum TavernUserInventory {
    Table,
    Id,
    UserId,
    ItemId,
    Quantity,
    Equipped,
    Slot,
    AcquiredAt,
}
