use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    DeleteResult, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

pub struct InventoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> InventoryRepository<'a, C> {
    /// Creates a new instance of [`InventoryRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        user_id: i32,
        item_id: i32,
        quantity: i32,
    ) -> Result<entity::tavern_user_inventory::Model, DbErr> {
        let entry = entity::tavern_user_inventory::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            item_id: ActiveValue::Set(item_id),
            quantity: ActiveValue::Set(quantity),
            equipped: ActiveValue::Set(false),
            slot: ActiveValue::Set(None),
            acquired_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        entry.insert(self.db).await
    }

    /// Gets an inventory entry owned by the user along with its item
    pub async fn get_by_id(
        &self,
        user_id: i32,
        inventory_id: i32,
    ) -> Result<
        Option<(
            entity::tavern_user_inventory::Model,
            Option<entity::tavern_item::Model>,
        )>,
        DbErr,
    > {
        entity::prelude::TavernUserInventory::find_by_id(inventory_id)
            .filter(entity::tavern_user_inventory::Column::UserId.eq(user_id))
            .find_also_related(entity::prelude::TavernItem)
            .one(self.db)
            .await
    }

    /// Gets all inventory entries of a user along with their items, oldest first
    pub async fn get_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<
        Vec<(
            entity::tavern_user_inventory::Model,
            Option<entity::tavern_item::Model>,
        )>,
        DbErr,
    > {
        entity::prelude::TavernUserInventory::find()
            .filter(entity::tavern_user_inventory::Column::UserId.eq(user_id))
            .order_by_asc(entity::tavern_user_inventory::Column::Id)
            .find_also_related(entity::prelude::TavernItem)
            .all(self.db)
            .await
    }

    /// Gets every row of an item owned by the user, unequipped rows first
    pub async fn get_by_user_and_item(
        &self,
        user_id: i32,
        item_id: i32,
    ) -> Result<Vec<entity::tavern_user_inventory::Model>, DbErr> {
        entity::prelude::TavernUserInventory::find()
            .filter(entity::tavern_user_inventory::Column::UserId.eq(user_id))
            .filter(entity::tavern_user_inventory::Column::ItemId.eq(item_id))
            .order_by_asc(entity::tavern_user_inventory::Column::Equipped)
            .order_by_asc(entity::tavern_user_inventory::Column::Id)
            .all(self.db)
            .await
    }

    /// Finds the unequipped stack new copies of an item are added to
    pub async fn find_unequipped_stack(
        &self,
        user_id: i32,
        item_id: i32,
    ) -> Result<Option<entity::tavern_user_inventory::Model>, DbErr> {
        entity::prelude::TavernUserInventory::find()
            .filter(entity::tavern_user_inventory::Column::UserId.eq(user_id))
            .filter(entity::tavern_user_inventory::Column::ItemId.eq(item_id))
            .filter(entity::tavern_user_inventory::Column::Equipped.eq(false))
            .order_by_asc(entity::tavern_user_inventory::Column::Id)
            .one(self.db)
            .await
    }

    pub async fn update_quantity(
        &self,
        entry: entity::tavern_user_inventory::Model,
        quantity: i32,
    ) -> Result<entity::tavern_user_inventory::Model, DbErr> {
        let mut entry_am = entry.into_active_model();
        entry_am.quantity = ActiveValue::Set(quantity);

        entry_am.update(self.db).await
    }

    /// Marks an entry as equipped in `slot`, or unequipped when `slot` is `None`
    pub async fn set_equipped(
        &self,
        entry: entity::tavern_user_inventory::Model,
        slot: Option<&str>,
    ) -> Result<entity::tavern_user_inventory::Model, DbErr> {
        let mut entry_am = entry.into_active_model();
        entry_am.equipped = ActiveValue::Set(slot.is_some());
        entry_am.slot = ActiveValue::Set(slot.map(str::to_string));

        entry_am.update(self.db).await
    }

    /// Gets the rows the user has equipped in `slot`
    pub async fn get_in_slot(
        &self,
        user_id: i32,
        slot: &str,
    ) -> Result<Vec<entity::tavern_user_inventory::Model>, DbErr> {
        entity::prelude::TavernUserInventory::find()
            .filter(entity::tavern_user_inventory::Column::UserId.eq(user_id))
            .filter(entity::tavern_user_inventory::Column::Slot.eq(slot))
            .order_by_asc(entity::tavern_user_inventory::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn delete(&self, inventory_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::TavernUserInventory::delete_by_id(inventory_id)
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use tavern_test_utils::prelude::*;

    use crate::server::data::inventory::InventoryRepository;

    /// Expect entries to be returned with their item
    #[tokio::test]
    async fn lists_user_inventory_with_items() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_tavern_tables()
            .with_user("rowan")
            .with_user("brom")
            .build()
            .await?;
        let helm = test.item().insert_item("Iron Helm", Some("head")).await?;
        let mug = test.item().insert_item("Ale Mug", None).await?;
        test.item().insert_inventory_entry(1, helm.id, 1).await?;
        test.item().insert_inventory_entry(1, mug.id, 3).await?;
        test.item().insert_inventory_entry(2, mug.id, 1).await?;

        let inventory_repo = InventoryRepository::new(&test.db);
        let entries = inventory_repo.get_by_user_id(1).await?;

        assert_eq!(entries.len(), 2);
        assert_eq!(
            entries[1].1.as_ref().map(|item| item.name.as_str()),
            Some("Ale Mug")
        );
        assert_eq!(entries[1].0.quantity, 3);

        Ok(())
    }

    /// Expect Ok(None) when the entry belongs to another user
    #[tokio::test]
    async fn hides_entries_of_other_users() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_tavern_tables()
            .with_user("rowan")
            .with_user("brom")
            .build()
            .await?;
        let mug = test.item().insert_item("Ale Mug", None).await?;
        let entry = test.item().insert_inventory_entry(2, mug.id, 1).await?;

        let inventory_repo = InventoryRepository::new(&test.db);

        assert!(matches!(inventory_repo.get_by_id(1, entry.id).await, Ok(None)));
        assert!(matches!(
            inventory_repo.get_by_id(2, entry.id).await,
            Ok(Some(_))
        ));

        Ok(())
    }

    /// Expect equipped rows to be skipped when looking for a stack
    #[tokio::test]
    async fn finds_unequipped_stack() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_tavern_tables()
            .with_user("rowan")
            .build()
            .await?;
        let helm = test.item().insert_item("Iron Helm", Some("head")).await?;
        let equipped = test.item().insert_inventory_entry(1, helm.id, 1).await?;

        let inventory_repo = InventoryRepository::new(&test.db);
        inventory_repo.set_equipped(equipped, Some("head")).await?;

        assert!(matches!(
            inventory_repo.find_unequipped_stack(1, helm.id).await,
            Ok(None)
        ));

        let spare = inventory_repo.create(1, helm.id, 1).await?;
        let stack = inventory_repo.find_unequipped_stack(1, helm.id).await?;

        assert_eq!(stack.map(|s| s.id), Some(spare.id));

        Ok(())
    }

    /// Expect only the user's own rows in the given slot
    #[tokio::test]
    async fn finds_rows_in_slot() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_tavern_tables()
            .with_user("rowan")
            .with_user("brom")
            .build()
            .await?;
        let helm = test.item().insert_item("Iron Helm", Some("head")).await?;
        let boots = test.item().insert_item("Iron Boots", Some("feet")).await?;
        let mine = test.item().insert_inventory_entry(1, helm.id, 1).await?;
        let theirs = test.item().insert_inventory_entry(2, helm.id, 1).await?;
        let feet = test.item().insert_inventory_entry(1, boots.id, 1).await?;

        let inventory_repo = InventoryRepository::new(&test.db);
        let mine = inventory_repo.set_equipped(mine, Some("head")).await?;
        inventory_repo.set_equipped(theirs, Some("head")).await?;
        inventory_repo.set_equipped(feet, Some("feet")).await?;

        let rows = inventory_repo.get_in_slot(1, "head").await?;

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, mine.id);

        Ok(())
    }
}
