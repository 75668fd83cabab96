//! Giveaway Test Utils
//!
//! Shared testing utilities for the giveaway crates. Provides a builder for test
//! contexts backed by in-memory SQLite databases, factories for seeding giveaway
//! rows, and helpers for constructing serenity API objects without a gateway.
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required database tables:
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_giveaway_queries() {
//!     let test = TestBuilder::new()
//!         .with_giveaway_tables()
//!         .build()
//!         .await
//!         .unwrap();
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod serenity;
