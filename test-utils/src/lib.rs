//! Interaction Bot Test Utils
//!
//! Provides shared testing utilities for the bot's database-backed code. This crate
//! offers a builder for creating test contexts with in-memory SQLite databases and
//! customizable table schemas, plus factories for inserting test rows.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Row factories with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::AnalyticsEvent;
//!
//! #[tokio::test]
//! async fn test_analytics() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(AnalyticsEvent)
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
