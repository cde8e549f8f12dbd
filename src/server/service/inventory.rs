//! Inventory service layer.
//!
//! A user's inventory is a list of stacks of catalogue items. Copies of an item are added to
//! the user's unequipped stack, while an equipped row always holds the item that occupies one
//! of the user's equipment slots.

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::inventory::{EquipmentSlot, InventoryItemDto, ItemDto},
    server::{
        data::{inventory::InventoryRepository, item::ItemRepository, user::UserRepository},
        error::{action::ActionError, tavern::TavernError, Error},
    },
};

fn parse_slot(slot: Option<&str>) -> Result<Option<EquipmentSlot>, Error> {
    slot.map(|slot| slot.parse::<EquipmentSlot>().map_err(Error::ParseError))
        .transpose()
}

pub(crate) fn item_dto(item: entity::tavern_item::Model) -> Result<ItemDto, Error> {
    Ok(ItemDto {
        slot: parse_slot(item.slot.as_deref())?,
        id: item.id,
        name: item.name,
        description: item.description,
        rarity: item.rarity,
        stats: item.stats,
        price: item.price,
    })
}

fn inventory_item_dto(
    entry: entity::tavern_user_inventory::Model,
    item: Option<entity::tavern_item::Model>,
) -> Result<InventoryItemDto, Error> {
    let item = item.ok_or_else(|| {
        // Only possible if the item foreign key isn't enforced
        Error::InternalError(format!(
            "Failed to find item ID {} for inventory entry ID {}",
            entry.item_id, entry.id
        ))
    })?;

    Ok(InventoryItemDto {
        slot: parse_slot(entry.slot.as_deref())?,
        id: entry.id,
        item: item_dto(item)?,
        quantity: entry.quantity,
        equipped: entry.equipped,
        acquired_at: entry.acquired_at,
    })
}

/// Result of removing copies of an item from an inventory
#[derive(Debug, PartialEq)]
pub struct RemovedItem {
    pub item_id: i32,
    /// Copies of the item the user still owns
    pub remaining: i32,
}

/// Service for user inventories and equipment.
pub struct InventoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InventoryService<'a> {
    /// Creates a new instance of InventoryService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    async fn load_entry<C: ConnectionTrait>(
        conn: &C,
        user_id: i32,
        inventory_id: i32,
    ) -> Result<(entity::tavern_user_inventory::Model, entity::tavern_item::Model), Error> {
        let (entry, item) = InventoryRepository::new(conn)
            .get_by_id(user_id, inventory_id)
            .await?
            .ok_or(TavernError::InventoryEntryNotFound(inventory_id))?;
        let item = item.ok_or(TavernError::ItemNotFound(entry.item_id))?;

        Ok((entry, item))
    }

    /// Takes a row out of its slot and folds it back into the user's unequipped stack of the
    /// same item. Rows stay separate when the merged quantity would not fit.
    async fn stash<C: ConnectionTrait>(
        conn: &C,
        entry: entity::tavern_user_inventory::Model,
    ) -> Result<(), Error> {
        let inventory_repo = InventoryRepository::new(conn);
        let stack = inventory_repo
            .find_unequipped_stack(entry.user_id, entry.item_id)
            .await?;

        match stack.and_then(|stack| {
            let total = stack.quantity.checked_add(entry.quantity)?;
            Some((stack, total))
        }) {
            Some((stack, total)) => {
                let entry_id = entry.id;
                inventory_repo.update_quantity(stack, total).await?;
                inventory_repo.delete(entry_id).await?;
            }
            None => {
                inventory_repo.set_equipped(entry, None).await?;
            }
        }

        Ok(())
    }

    /// Lists the user's inventory in the order items were acquired.
    pub async fn list(&self, user_id: i32) -> Result<Vec<InventoryItemDto>, Error> {
        InventoryRepository::new(self.db)
            .get_by_user_id(user_id)
            .await?
            .into_iter()
            .map(|(entry, item)| inventory_item_dto(entry, item))
            .collect()
    }

    /// Gives a user `quantity` copies of an item.
    ///
    /// The copies are stacked onto the user's unequipped row of the item, a new row is created
    /// when there is none.
    ///
    /// # Returns
    /// - `Ok(InventoryItemDto)` - The row holding the new copies
    /// - `Err(Error::ActionError(InvalidQuantity))` - `quantity` is below 1
    /// - `Err(Error::TavernError(UserNotFound | ItemNotFound))` - An ID doesn't exist
    pub async fn add_item(
        &self,
        user_id: i32,
        item_id: i32,
        quantity: i32,
    ) -> Result<InventoryItemDto, Error> {
        if quantity < 1 {
            return Err(ActionError::InvalidQuantity(quantity).into());
        }

        let txn = self.db.begin().await?;

        if UserRepository::new(&txn).get_by_id(user_id).await?.is_none() {
            return Err(TavernError::UserNotFound(user_id).into());
        }
        let item = ItemRepository::new(&txn)
            .get_by_id(item_id)
            .await?
            .ok_or(TavernError::ItemNotFound(item_id))?;

        let inventory_repo = InventoryRepository::new(&txn);
        let entry = match inventory_repo.find_unequipped_stack(user_id, item_id).await? {
            Some(stack) => {
                let total = stack.quantity.saturating_add(quantity);
                inventory_repo.update_quantity(stack, total).await?
            }
            None => inventory_repo.create(user_id, item_id, quantity).await?,
        };

        txn.commit().await?;

        inventory_item_dto(entry, Some(item))
    }

    /// Takes `quantity` copies of an item from a user.
    ///
    /// Unequipped copies are taken first. Rows reaching zero are deleted.
    ///
    /// # Returns
    /// - `Ok(RemovedItem)` - How many copies the user has left
    /// - `Err(Error::ActionError(InvalidQuantity))` - `quantity` is below 1
    /// - `Err(Error::TavernError(InsufficientQuantity))` - The user owns fewer copies
    pub async fn remove_item(
        &self,
        user_id: i32,
        item_id: i32,
        quantity: i32,
    ) -> Result<RemovedItem, Error> {
        if quantity < 1 {
            return Err(ActionError::InvalidQuantity(quantity).into());
        }

        let txn = self.db.begin().await?;
        let inventory_repo = InventoryRepository::new(&txn);

        let rows = inventory_repo.get_by_user_and_item(user_id, item_id).await?;
        let available: i64 = rows.iter().map(|row| i64::from(row.quantity)).sum();
        if available < i64::from(quantity) {
            return Err(TavernError::InsufficientQuantity {
                item_id,
                requested: quantity,
                available: i32::try_from(available).unwrap_or(i32::MAX),
            }
            .into());
        }

        let mut to_remove = quantity;
        for row in rows {
            if to_remove == 0 {
                break;
            }

            let taken = row.quantity.min(to_remove);
            to_remove -= taken;

            if taken == row.quantity {
                inventory_repo.delete(row.id).await?;
            } else {
                let left = row.quantity - taken;
                inventory_repo.update_quantity(row, left).await?;
            }
        }

        txn.commit().await?;

        Ok(RemovedItem {
            item_id,
            remaining: i32::try_from(available - i64::from(quantity)).unwrap_or(i32::MAX),
        })
    }

    /// Equips an inventory entry into its item's slot.
    ///
    /// Whatever the user had in that slot is put back into its unequipped stack.
    ///
    /// # Returns
    /// - `Ok(Vec<InventoryItemDto>)` - The user's updated inventory
    /// - `Err(Error::TavernError(InventoryEntryNotFound))` - The entry doesn't exist or belongs
    ///   to another user
    /// - `Err(Error::TavernError(ItemNotEquippable))` - The item has no slot
    pub async fn equip(
        &self,
        user_id: i32,
        inventory_id: i32,
    ) -> Result<Vec<InventoryItemDto>, Error> {
        let txn = self.db.begin().await?;

        let (entry, item) = Self::load_entry(&txn, user_id, inventory_id).await?;
        let slot = parse_slot(item.slot.as_deref())?
            .ok_or(TavernError::ItemNotEquippable(item.id))?;

        if !entry.equipped {
            let inventory_repo = InventoryRepository::new(&txn);
            let displaced = inventory_repo.get_in_slot(user_id, slot.as_str()).await?;
            inventory_repo.set_equipped(entry, Some(slot.as_str())).await?;

            for row in displaced {
                Self::stash(&txn, row).await?;
            }
        }

        txn.commit().await?;

        self.list(user_id).await
    }

    /// Takes an inventory entry out of its slot, merging it into the unequipped stack of the
    /// same item.
    pub async fn unequip(
        &self,
        user_id: i32,
        inventory_id: i32,
    ) -> Result<Vec<InventoryItemDto>, Error> {
        let txn = self.db.begin().await?;

        let (entry, _) = Self::load_entry(&txn, user_id, inventory_id).await?;
        if entry.equipped {
            Self::stash(&txn, entry).await?;
        }

        txn.commit().await?;

        self.list(user_id).await
    }
}
