//! Game action dispatcher.
//!
//! Actions arrive as a name plus a loosely typed JSON payload, over either `POST /api/actions`
//! or a `game_action` WebSocket message. The name selects an [`Action`], the payload is then
//! decoded into that action's typed data and handled.

use std::{fmt, str::FromStr};

use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, TransactionTrait};
use serde::{de::DeserializeOwned, Deserialize};

use crate::{
    model::action::ActionResultDto,
    server::{
        data::user::UserRepository,
        error::{action::ActionError, tavern::TavernError, Error},
        service::inventory::InventoryService,
        util::json::parse_json_value,
    },
};

pub const MIN_LEVEL: i32 = 1;
pub const MAX_LEVEL: i32 = 100;

/// Actions a client can request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    UpdateGold,
    UpdateLevel,
    AddInventoryItem,
    RemoveInventoryItem,
}

impl Action {
    pub const ALL: [Action; 4] = [
        Self::UpdateGold,
        Self::UpdateLevel,
        Self::AddInventoryItem,
        Self::RemoveInventoryItem,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UpdateGold => "update_gold",
            Self::UpdateLevel => "update_level",
            Self::AddInventoryItem => "add_inventory_item",
            Self::RemoveInventoryItem => "remove_inventory_item",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = ActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| ActionError::UnknownAction(s.to_string()))
    }
}

/// `update_gold` payload, `amount` may be negative
#[derive(Debug, Deserialize)]
pub struct UpdateGoldData {
    pub amount: i32,
}

/// `update_level` payload, the new absolute level
#[derive(Debug, Deserialize)]
pub struct UpdateLevelData {
    pub level: i32,
}

/// `add_inventory_item` & `remove_inventory_item` payload
#[derive(Debug, Deserialize)]
pub struct InventoryItemData {
    pub item_id: i32,
    #[serde(default = "default_quantity")]
    pub quantity: i32,
}

fn default_quantity() -> i32 {
    1
}

fn decode<T: DeserializeOwned>(action: Action, data: serde_json::Value) -> Result<T, Error> {
    parse_json_value(data).map_err(|e| {
        ActionError::InvalidPayload {
            action: action.to_string(),
            reason: match e {
                Error::ParseError(reason) => reason,
                other => other.to_string(),
            },
        }
        .into()
    })
}

/// Service running game actions on behalf of a user.
pub struct ActionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ActionService<'a> {
    /// Creates a new instance of ActionService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Parses and runs an action for a user.
    ///
    /// # Arguments
    /// - `user_id` - User the action applies to
    /// - `action` - Action name such as `update_gold`
    /// - `data` - JSON payload of the action
    ///
    /// # Returns
    /// - `Ok(ActionResultDto)` - The state after the action
    /// - `Err(Error::ActionError(UnknownAction))` - `action` names no known action
    /// - `Err(Error::ActionError(InvalidPayload))` - `data` doesn't fit the action
    /// - `Err(Error::TavernError)` - The action broke a tavern rule, such as negative gold
    pub async fn dispatch(
        &self,
        user_id: i32,
        action: &str,
        data: serde_json::Value,
    ) -> Result<ActionResultDto, Error> {
        let action = action.parse::<Action>()?;

        tracing::debug!(user_id, action = %action, "Dispatching game action");

        match action {
            Action::UpdateGold => self.update_gold(user_id, decode(action, data)?).await,
            Action::UpdateLevel => self.update_level(user_id, decode(action, data)?).await,
            Action::AddInventoryItem => {
                self.add_inventory_item(user_id, decode(action, data)?)
                    .await
            }
            Action::RemoveInventoryItem => {
                self.remove_inventory_item(user_id, decode(action, data)?)
                    .await
            }
        }
    }

    async fn update_gold(
        &self,
        user_id: i32,
        data: UpdateGoldData,
    ) -> Result<ActionResultDto, Error> {
        let txn = self.db.begin().await?;
        let user_repo = UserRepository::new(&txn);

        let user = user_repo
            .get_by_id(user_id)
            .await?
            .ok_or(TavernError::UserNotFound(user_id))?;

        let gold = user.gold.saturating_add(data.amount);
        if gold < 0 {
            return Err(TavernError::InsufficientGold {
                required: data.amount.saturating_neg(),
                available: user.gold,
            }
            .into());
        }

        user_repo.update_gold(user_id, gold).await?;
        txn.commit().await?;

        Ok(ActionResultDto::UpdateGold { user_id, gold })
    }

    async fn update_level(
        &self,
        user_id: i32,
        data: UpdateLevelData,
    ) -> Result<ActionResultDto, Error> {
        if !(MIN_LEVEL..=MAX_LEVEL).contains(&data.level) {
            return Err(ActionError::LevelOutOfRange(data.level).into());
        }

        let user = UserRepository::new(self.db)
            .update_level(user_id, data.level)
            .await?
            .ok_or(TavernError::UserNotFound(user_id))?;

        Ok(ActionResultDto::UpdateLevel {
            user_id,
            level: user.level,
        })
    }

    async fn add_inventory_item(
        &self,
        user_id: i32,
        data: InventoryItemData,
    ) -> Result<ActionResultDto, Error> {
        let entry = InventoryService::new(self.db)
            .add_item(user_id, data.item_id, data.quantity)
            .await?;

        Ok(ActionResultDto::AddInventoryItem { user_id, entry })
    }

    async fn remove_inventory_item(
        &self,
        user_id: i32,
        data: InventoryItemData,
    ) -> Result<ActionResultDto, Error> {
        let removed = InventoryService::new(self.db)
            .remove_item(user_id, data.item_id, data.quantity)
            .await?;

        Ok(ActionResultDto::RemoveInventoryItem {
            user_id,
            item_id: removed.item_id,
            remaining: removed.remaining,
        })
    }
}
