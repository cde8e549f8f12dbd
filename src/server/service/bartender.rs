//! Bartender service layer.
//!
//! Every bartender keeps a 0-100 mood per user and a log of memories about them. Orders and
//! conversation lift the mood, the scheduler slowly pulls it back to neutral, and the
//! mood's tier decides which lines the bartender answers with.

use chrono::NaiveDateTime;
use rand::seq::IndexedRandom;
use sea_orm::{DatabaseConnection, TransactionTrait};
use serde_json::json;

use crate::{
    model::{
        bartender::{
            BartenderDto, BartenderResponseDto, MemoryDto, MenuItemDto, MoodDto, MoodTier,
            OrderResultDto,
        },
        room::MessageKind,
    },
    server::{
        data::{
            bartender::{
                memory::BartenderMemoryRepository, menu_item::MenuItemRepository,
                mood::BartenderMoodRepository, BartenderRepository,
            },
            message::{MessageAuthor, MessageRepository},
            room::RoomRepository,
            user::UserRepository,
        },
        error::{tavern::TavernError, Error},
        service::{retry::RetryContext, room::validate_content},
    },
};

pub const MIN_MOOD: i32 = 0;
pub const MAX_MOOD: i32 = 100;
/// Mood of a bartender toward a user they haven't met
pub const NEUTRAL_MOOD: i32 = 50;
pub const ORDER_MOOD_DELTA: i32 = 5;
pub const TALK_MOOD_DELTA: i32 = 2;

pub const MEMORY_KIND_ORDER: &str = "order";
pub const MEMORY_KIND_CONVERSATION: &str = "conversation";
/// Memories included in a [`MoodDto`]
pub const MOOD_MEMORY_LIMIT: u64 = 10;

const GRUMPY_ORDER_LINES: &[&str] = &[
    "*slams the {item} on the counter* There. Happy, {user}?",
    "{item}. Don't spill it.",
    "Fine. One {item}. Try not to cause trouble this time, {user}.",
];
const NEUTRAL_ORDER_LINES: &[&str] = &[
    "One {item}, coming right up.",
    "Here's your {item}, {user}.",
    "{item} for {user}. Enjoy.",
];
const FRIENDLY_ORDER_LINES: &[&str] = &[
    "Ah, {user}! Your {item}, poured just the way you like it.",
    "For my favourite regular, the finest {item} in the house!",
    "*grins* A {item} for {user}. This one's extra cold.",
];

const GRUMPY_TALK_LINES: &[&str] = &[
    "Are you ordering or just talking, {user}?",
    "*grunts and keeps wiping the same mug*",
    "I've got customers to serve.",
];
const NEUTRAL_TALK_LINES: &[&str] = &[
    "Is that so? Interesting times, {user}.",
    "Hm. Heard something similar from a traveller last week.",
    "*nods* Go on.",
];
const FRIENDLY_TALK_LINES: &[&str] = &[
    "Ha! You always have the best stories, {user}.",
    "Pull up a stool, {user}, tell me everything.",
    "*leans on the counter* Now that's a tale worth a free refill.",
];

/// Adds `delta` to a mood, keeping it within 0-100
pub fn apply_mood_delta(mood: i32, delta: i32) -> i32 {
    mood.saturating_add(delta).clamp(MIN_MOOD, MAX_MOOD)
}

/// Moves a mood at most `step` points toward [`NEUTRAL_MOOD`] without overshooting
pub fn drift_toward_neutral(mood: i32, step: i32) -> i32 {
    if mood > NEUTRAL_MOOD {
        (mood - step).max(NEUTRAL_MOOD)
    } else {
        (mood + step).min(NEUTRAL_MOOD)
    }
}

fn order_lines(tier: MoodTier) -> &'static [&'static str] {
    match tier {
        MoodTier::Grumpy => GRUMPY_ORDER_LINES,
        MoodTier::Neutral => NEUTRAL_ORDER_LINES,
        MoodTier::Friendly => FRIENDLY_ORDER_LINES,
    }
}

fn talk_lines(tier: MoodTier) -> &'static [&'static str] {
    match tier {
        MoodTier::Grumpy => GRUMPY_TALK_LINES,
        MoodTier::Neutral => NEUTRAL_TALK_LINES,
        MoodTier::Friendly => FRIENDLY_TALK_LINES,
    }
}

/// Picks a random line and fills in the `{user}` & `{item}` placeholders
fn pick_line(lines: &[&str], user: &str, item: &str) -> String {
    let line = lines.choose(&mut rand::rng()).copied().unwrap_or("...");

    line.replace("{user}", user).replace("{item}", item)
}

pub(crate) fn bartender_dto(bartender: entity::tavern_bartender::Model) -> BartenderDto {
    BartenderDto {
        id: bartender.id,
        room_id: bartender.room_id,
        name: bartender.name,
        personality: bartender.personality,
        greeting: bartender.greeting,
        avatar: bartender.avatar,
    }
}

fn menu_item_dto(menu_item: entity::tavern_menu_item::Model) -> MenuItemDto {
    MenuItemDto {
        id: menu_item.id,
        bartender_id: menu_item.bartender_id,
        name: menu_item.name,
        description: menu_item.description,
        category: menu_item.category,
        price: menu_item.price,
    }
}

fn memory_dto(memory: entity::tavern_bartender_memory::Model) -> MemoryDto {
    MemoryDto {
        id: memory.id,
        kind: memory.kind,
        content: memory.content,
        importance: memory.importance,
        details: memory.details,
        created_at: memory.created_at,
    }
}

/// Service for bartenders, their menus and how they feel about users.
pub struct BartenderService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BartenderService<'a> {
    /// Creates a new instance of BartenderService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    async fn get_bartender(
        &self,
        bartender_id: i32,
    ) -> Result<entity::tavern_bartender::Model, Error> {
        Ok(BartenderRepository::new(self.db)
            .get_by_id(bartender_id)
            .await?
            .ok_or(TavernError::BartenderNotFound(bartender_id))?)
    }

    /// Lists the bartenders working in a room.
    ///
    /// # Returns
    /// - `Ok(Vec<BartenderDto>)` - Bartenders of the room, possibly empty
    /// - `Err(Error::TavernError(RoomNotFound))` - No room with that ID
    pub async fn list_for_room(&self, room_id: i32) -> Result<Vec<BartenderDto>, Error> {
        let ctx = RetryContext::new();
        let db = self.db;

        ctx.execute_with_retry(&format!("list bartenders of room ID {}", room_id), || {
            Box::pin(async move {
                if RoomRepository::new(db).get_by_id(room_id).await?.is_none() {
                    return Err(TavernError::RoomNotFound(room_id).into());
                }

                Ok(BartenderRepository::new(db)
                    .get_by_room_id(room_id)
                    .await?
                    .into_iter()
                    .map(bartender_dto)
                    .collect())
            })
        })
        .await
    }

    /// Returns a bartender's menu, cheapest first.
    pub async fn menu(&self, bartender_id: i32) -> Result<Vec<MenuItemDto>, Error> {
        let bartender = self.get_bartender(bartender_id).await?;

        Ok(MenuItemRepository::new(self.db)
            .get_by_bartender_id(bartender.id)
            .await?
            .into_iter()
            .map(menu_item_dto)
            .collect())
    }

    /// Buys an item from a bartender's menu.
    ///
    /// Deducts the price from the user's gold, raises the bartender's mood toward the user by
    /// [`ORDER_MOOD_DELTA`], records an `order` memory and stores the bartender's reply in
    /// their room, all in one transaction.
    ///
    /// # Returns
    /// - `Ok(OrderResultDto)` - The purchased item, remaining gold and the bartender's reply
    /// - `Err(Error::TavernError(UserNotFound | BartenderNotFound | MenuItemNotFound))` - An
    ///   ID doesn't exist, or the item isn't on this bartender's menu
    /// - `Err(Error::TavernError(InsufficientGold))` - The user can't afford the item
    pub async fn order_item(
        &self,
        user_id: i32,
        bartender_id: i32,
        menu_item_id: i32,
    ) -> Result<OrderResultDto, Error> {
        let ctx = RetryContext::new();
        let db = self.db;

        ctx.execute_with_retry(
            &format!(
                "order of menu item ID {} from bartender ID {} by user ID {}",
                menu_item_id, bartender_id, user_id
            ),
            || {
                Box::pin(async move {
                    let txn = db.begin().await?;

                    let user = UserRepository::new(&txn)
                        .get_by_id(user_id)
                        .await?
                        .ok_or(TavernError::UserNotFound(user_id))?;
                    let bartender = BartenderRepository::new(&txn)
                        .get_by_id(bartender_id)
                        .await?
                        .ok_or(TavernError::BartenderNotFound(bartender_id))?;
                    let menu_item = MenuItemRepository::new(&txn)
                        .get_by_id(menu_item_id)
                        .await?
                        .filter(|item| item.bartender_id == bartender.id)
                        .ok_or(TavernError::MenuItemNotFound {
                            bartender_id,
                            menu_item_id,
                        })?;

                    if user.gold < menu_item.price {
                        return Err(TavernError::InsufficientGold {
                            required: menu_item.price,
                            available: user.gold,
                        }
                        .into());
                    }

                    let gold_remaining = user.gold - menu_item.price;
                    UserRepository::new(&txn)
                        .update_gold(user.id, gold_remaining)
                        .await?;

                    let mood_repo = BartenderMoodRepository::new(&txn);
                    let current = mood_repo
                        .get(bartender.id, user.id)
                        .await?
                        .map(|m| m.mood)
                        .unwrap_or(NEUTRAL_MOOD);
                    let mood = apply_mood_delta(current, ORDER_MOOD_DELTA);
                    mood_repo.upsert(bartender.id, user.id, mood).await?;

                    BartenderMemoryRepository::new(&txn)
                        .create(
                            bartender.id,
                            user.id,
                            MEMORY_KIND_ORDER,
                            &format!("Ordered {}", menu_item.name),
                            if menu_item.price >= 20 { 3 } else { 2 },
                            json!({
                                "menu_item_id": menu_item.id,
                                "name": menu_item.name,
                                "price": menu_item.price,
                            }),
                        )
                        .await?;

                    let tier = MoodTier::from_mood(mood);
                    let text = pick_line(order_lines(tier), &user.username, &menu_item.name);

                    MessageRepository::new(&txn)
                        .create(
                            bartender.room_id,
                            MessageAuthor::Bartender(bartender.id),
                            MessageKind::Bartender,
                            &text,
                        )
                        .await?;

                    txn.commit().await?;

                    Ok(OrderResultDto {
                        menu_item: menu_item_dto(menu_item),
                        gold_remaining,
                        response: BartenderResponseDto {
                            bartender_id: bartender.id,
                            room_id: bartender.room_id,
                            bartender_name: bartender.name,
                            user_id: user.id,
                            text,
                            mood,
                            tier,
                        },
                    })
                })
            },
        )
        .await
    }

    /// Says something to a bartender.
    ///
    /// Raises the mood by [`TALK_MOOD_DELTA`] and records a `conversation` memory. A bartender
    /// meeting the user for the first time answers with their greeting.
    ///
    /// # Returns
    /// - `Ok(BartenderResponseDto)` - The bartender's reply
    /// - `Err(Error::TavernError(InvalidMessage))` - Text empty after trimming or too long
    /// - `Err(Error::TavernError(UserNotFound | BartenderNotFound))` - An ID doesn't exist
    pub async fn talk(
        &self,
        user_id: i32,
        bartender_id: i32,
        text: &str,
    ) -> Result<BartenderResponseDto, Error> {
        let text = validate_content(text)?.to_string();

        let ctx = RetryContext::new();
        let db = self.db;

        ctx.execute_with_retry(
            &format!("talk to bartender ID {} by user ID {}", bartender_id, user_id),
            || {
                let text = text.clone();

                Box::pin(async move {
                    let txn = db.begin().await?;

                    let user = UserRepository::new(&txn)
                        .get_by_id(user_id)
                        .await?
                        .ok_or(TavernError::UserNotFound(user_id))?;
                    let bartender = BartenderRepository::new(&txn)
                        .get_by_id(bartender_id)
                        .await?
                        .ok_or(TavernError::BartenderNotFound(bartender_id))?;

                    let mood_repo = BartenderMoodRepository::new(&txn);
                    let existing = mood_repo.get(bartender.id, user.id).await?;
                    let first_meeting = existing.is_none();
                    let current = existing.map(|m| m.mood).unwrap_or(NEUTRAL_MOOD);
                    let mood = apply_mood_delta(current, TALK_MOOD_DELTA);
                    mood_repo.upsert(bartender.id, user.id, mood).await?;

                    BartenderMemoryRepository::new(&txn)
                        .create(
                            bartender.id,
                            user.id,
                            MEMORY_KIND_CONVERSATION,
                            &text,
                            1,
                            json!({ "text": text }),
                        )
                        .await?;

                    let tier = MoodTier::from_mood(mood);
                    let reply = if first_meeting {
                        bartender.greeting.clone()
                    } else {
                        pick_line(talk_lines(tier), &user.username, "")
                    };

                    MessageRepository::new(&txn)
                        .create(
                            bartender.room_id,
                            MessageAuthor::Bartender(bartender.id),
                            MessageKind::Bartender,
                            &reply,
                        )
                        .await?;

                    txn.commit().await?;

                    Ok(BartenderResponseDto {
                        bartender_id: bartender.id,
                        room_id: bartender.room_id,
                        bartender_name: bartender.name,
                        user_id: user.id,
                        text: reply,
                        mood,
                        tier,
                    })
                })
            },
        )
        .await
    }

    /// Returns a bartender's mood toward a user with their most recent memories.
    ///
    /// Users the bartender hasn't met get [`NEUTRAL_MOOD`].
    pub async fn mood(&self, user_id: i32, bartender_id: i32) -> Result<MoodDto, Error> {
        let bartender = self.get_bartender(bartender_id).await?;

        let mood = BartenderMoodRepository::new(self.db)
            .get(bartender.id, user_id)
            .await?
            .map(|m| m.mood)
            .unwrap_or(NEUTRAL_MOOD);
        let memories = self
            .memories(user_id, bartender.id, MOOD_MEMORY_LIMIT)
            .await?;

        Ok(MoodDto {
            bartender_id: bartender.id,
            user_id,
            mood,
            tier: MoodTier::from_mood(mood),
            memories,
        })
    }

    /// Returns the newest `limit` memories a bartender holds about a user.
    pub async fn memories(
        &self,
        user_id: i32,
        bartender_id: i32,
        limit: u64,
    ) -> Result<Vec<MemoryDto>, Error> {
        Ok(BartenderMemoryRepository::new(self.db)
            .get_recent(bartender_id, user_id, limit)
            .await?
            .into_iter()
            .map(memory_dto)
            .collect())
    }

    /// Moves every stored mood `step` points toward neutral, returns how many changed
    pub async fn drift_moods(&self, step: i32) -> Result<u64, Error> {
        let mood_repo = BartenderMoodRepository::new(self.db);

        let mut changed = 0;
        for mood in mood_repo.get_all().await? {
            let drifted = drift_toward_neutral(mood.mood, step);
            if drifted != mood.mood {
                mood_repo.set_mood(mood, drifted).await?;
                changed += 1;
            }
        }

        Ok(changed)
    }

    /// Forgets memories at or below `max_importance` created before `before`
    pub async fn prune_memories(
        &self,
        max_importance: i32,
        before: NaiveDateTime,
    ) -> Result<u64, Error> {
        let result = BartenderMemoryRepository::new(self.db)
            .delete_stale(max_importance, before)
            .await?;

        Ok(result.rows_affected)
    }
}
