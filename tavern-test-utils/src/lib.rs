//! Test utilities for the Pixel Tavern server.
//!
//! Tests are set up in two phases: a [`TestBuilder`] declares which tables and fixtures the
//! test needs, and `build()` returns a [`TestContext`] holding an in-memory SQLite database
//! and a session, with fixture helpers for inserting additional rows during the test.

pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{TestBuilder, TestContext, TestError};
}
