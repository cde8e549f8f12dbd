//! Integration tests for the REST controllers.
//!
//! Handlers are called directly with extractors built from a [`TestContext`], the same way the
//! router would invoke them.

mod action;
mod auth;
mod inventory;
mod room;

use tavern_test_utils::prelude::*;
