//! irrverbs Test Utils
//!
//! Provides shared testing utilities for the bot's unit tests. This crate offers a builder
//! pattern for creating test contexts with in-memory SQLite databases, factories for inserting
//! preference rows, and builders for Serenity model objects.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::GuildPreference;
//!
//! #[tokio::test]
//! async fn test_preference_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(GuildPreference)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod serenity;
