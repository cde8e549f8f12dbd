//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_tavern_tables: bool,

    // Database fixtures to insert
    users: Vec<String>,
    rooms: Vec<(String, i32)>, // (name, capacity)
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_tavern_tables: false,
            users: Vec::new(),
            rooms: Vec::new(),
        }
    }

    /// Add every tavern table to the test database, parents before children.
    pub fn with_tavern_tables(mut self) -> Self {
        self.include_tavern_tables = true;
        self
    }

    /// Add a single entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    /// Chain multiple calls to add multiple tables.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a user with default gold and level during `build()`.
    pub fn with_user(mut self, username: &str) -> Self {
        self.users.push(username.to_string());
        self
    }

    /// Insert a room during `build()`.
    pub fn with_room(mut self, name: &str, capacity: i32) -> Self {
        self.rooms.push((name.to_string(), capacity));
        self
    }

    /// Build the test context, creating tables and inserting fixtures.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context
    /// - `Err(TestError::DbErr)` - Table creation or a fixture insert failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_tavern_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::TavernUser),
                schema.create_table_from_entity(entity::prelude::TavernRoom),
                schema.create_table_from_entity(entity::prelude::TavernBartender),
                schema.create_table_from_entity(entity::prelude::TavernMessage),
                schema.create_table_from_entity(entity::prelude::TavernMenuItem),
                schema.create_table_from_entity(entity::prelude::TavernBartenderMood),
                schema.create_table_from_entity(entity::prelude::TavernBartenderMemory),
                schema.create_table_from_entity(entity::prelude::TavernItem),
                schema.create_table_from_entity(entity::prelude::TavernUserInventory),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for username in self.users {
            setup.user().insert_user(&username).await?;
        }

        for (name, capacity) in self.rooms {
            setup.room().insert_room(&name, capacity).await?;
        }

        Ok(setup)
    }
}
