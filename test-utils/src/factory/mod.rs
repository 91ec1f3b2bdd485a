//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for
//! customization and a `create_*` convenience function for quick default
//! creation. Factories handle foreign key dependencies, keeping tests
//! concise.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Create with defaults
//! let task = factory::task::create_task(&db).await?;
//! let application = factory::application::create_application(&db, task.id).await?;
//!
//! // Customize via the builder
//! let task = factory::task::TaskFactory::new(&db)
//!     .name("Dragon Hunt")
//!     .levels(Some(3), Some(7))
//!     .build()
//!     .await?;
//! ```

pub mod application;
pub mod helpers;
pub mod task;
pub mod window;

// Re-export commonly used factory functions for concise usage
pub use application::create_application;
pub use task::create_task;
pub use window::create_window;
