//! Default tavern content.
//!
//! A fresh database gets a handful of rooms, each staffed by a bartender with a menu, and the
//! starting item catalogue. Seeding only happens while the room table is empty, so restarting
//! the server never duplicates content.

use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, TransactionTrait};
use serde_json::{Map, Value};

use crate::server::{
    data::{
        bartender::{menu_item::MenuItemRepository, BartenderRepository},
        item::ItemRepository,
        room::RoomRepository,
    },
    error::Error,
    util::json::parse_json_or_default,
};

struct SeedRoom {
    name: &'static str,
    description: &'static str,
    theme: &'static str,
    capacity: i32,
    bartender: SeedBartender,
}

struct SeedBartender {
    name: &'static str,
    personality: &'static str,
    greeting: &'static str,
    avatar: &'static str,
    // (name, description, category, price)
    menu: &'static [(&'static str, &'static str, &'static str, i32)],
}

struct SeedItem {
    name: &'static str,
    description: &'static str,
    rarity: &'static str,
    slot: Option<&'static str>,
    stats: &'static str,
    price: i32,
}

const ROOMS: &[SeedRoom] = &[
    SeedRoom {
        name: "The Common Room",
        description: "A roaring hearth, long oak tables and the smell of fresh bread.",
        theme: "hearth",
        capacity: 30,
        bartender: SeedBartender {
            name: "Brom",
            personality: "gruff dwarf with a soft spot for regulars",
            greeting: "Welcome, traveler. Sit, drink, don't break anything.",
            avatar: "dwarf",
            menu: &[
                ("Dragon Stout", "Dark, smoky and warm all the way down.", "drink", 12),
                ("Honey Mead", "Sweet mead from the valley hives.", "drink", 8),
                ("Hearty Stew", "Whatever the cook caught this morning.", "food", 10),
                ("Black Bread", "Dense, crusty and still warm.", "food", 3),
            ],
        },
    },
    SeedRoom {
        name: "The Wizard's Nook",
        description: "Candles that never burn down and books that whisper back.",
        theme: "arcane",
        capacity: 12,
        bartender: SeedBartender {
            name: "Elowen",
            personality: "curious elf who collects rumours",
            greeting: "Ah, a new face. Tell me something I don't know.",
            avatar: "elf",
            menu: &[
                ("Starlight Elixir", "Shimmers faintly. Tastes of mint and lightning.", "drink", 25),
                ("Moonleaf Tea", "Calms the mind before a long study.", "drink", 6),
                ("Sugared Figs", "A small plate for long nights of reading.", "food", 5),
            ],
        },
    },
    SeedRoom {
        name: "The Cellar",
        description: "Low ceilings, loud dice and louder patrons.",
        theme: "cellar",
        capacity: 20,
        bartender: SeedBartender {
            name: "Grizzle",
            personality: "sly goblin who is always running a game",
            greeting: "Coin on the table and we'll get along fine.",
            avatar: "goblin",
            menu: &[
                ("Bog Water", "Nobody knows what's in it. Cheap, though.", "drink", 2),
                ("Firewhiskey", "Not recommended before a dice game.", "drink", 15),
                ("Roasted Rat on a Stick", "Crunchy.", "food", 4),
            ],
        },
    },
];

const ITEMS: &[SeedItem] = &[
    SeedItem {
        name: "Leather Cap",
        description: "Keeps the rain and the occasional mug off your head.",
        rarity: "common",
        slot: Some("head"),
        stats: r#"{"defense": 1}"#,
        price: 15,
    },
    SeedItem {
        name: "Traveler's Cloak",
        description: "Worn at the hem from many roads.",
        rarity: "common",
        slot: Some("chest"),
        stats: r#"{"defense": 2, "charm": 1}"#,
        price: 30,
    },
    SeedItem {
        name: "Iron Shortsword",
        description: "Plain, sharp and honest.",
        rarity: "uncommon",
        slot: Some("mainHand"),
        stats: r#"{"attack": 4}"#,
        price: 60,
    },
    SeedItem {
        name: "Oak Buckler",
        description: "Dented in all the right places.",
        rarity: "uncommon",
        slot: Some("offHand"),
        stats: r#"{"defense": 3}"#,
        price: 45,
    },
    SeedItem {
        name: "Lucky Charm",
        description: "A rabbit's foot on a string. Probably lucky.",
        rarity: "rare",
        slot: Some("accessory"),
        stats: r#"{"luck": 5}"#,
        price: 120,
    },
    SeedItem {
        name: "Tavern Token",
        description: "Good for one round on the house, if the bartender likes you.",
        rarity: "common",
        slot: None,
        stats: "{}",
        price: 5,
    },
];

/// Seeds the default rooms, bartenders, menus and items into an empty database.
///
/// # Returns
/// - `Ok(true)` - Default content was inserted
/// - `Ok(false)` - Rooms already exist, nothing was inserted
/// - `Err(Error)` - A database insert failed, nothing is committed
pub async fn seed_defaults(db: &DatabaseConnection) -> Result<bool, Error> {
    if RoomRepository::new(db).count().await? > 0 {
        tracing::debug!("Rooms already exist, skipping seed");

        return Ok(false);
    }

    let txn = db.begin().await?;

    let room_repo = RoomRepository::new(&txn);
    let bartender_repo = BartenderRepository::new(&txn);
    let menu_repo = MenuItemRepository::new(&txn);
    let item_repo = ItemRepository::new(&txn);

    for seed in ROOMS {
        let room = room_repo
            .create(seed.name, seed.description, seed.theme, seed.capacity)
            .await?;

        let b = &seed.bartender;
        let bartender = bartender_repo
            .create(room.id, b.name, b.personality, b.greeting, b.avatar)
            .await?;

        for (name, description, category, price) in b.menu {
            menu_repo
                .create(bartender.id, name, description, category, *price)
                .await?;
        }
    }

    for seed in ITEMS {
        let stats: Map<String, Value> = parse_json_or_default(Some(seed.stats));

        item_repo
            .create(
                seed.name,
                seed.description,
                seed.rarity,
                seed.slot,
                Value::Object(stats),
                seed.price,
            )
            .await?;
    }

    txn.commit().await?;

    tracing::info!(
        "Seeded {} rooms and {} items into the tavern",
        ROOMS.len(),
        ITEMS.len()
    );

    Ok(true)
}
