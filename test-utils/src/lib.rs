//! Questboard Test Utils
//!
//! Shared testing utilities for the questboard backend. Provides a builder
//! pattern for creating test contexts backed by in-memory SQLite databases,
//! plus factories for creating test entities with sensible defaults.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_task_operations() -> Result<(), DbErr> {
//!     let test = TestBuilder::new()
//!         .with_board_tables()
//!         .build()
//!         .await
//!         .unwrap();
//!     let db = test.db.as_ref().unwrap();
//!     // Perform database operations...
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
