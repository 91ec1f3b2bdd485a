//! Database repository layer for all domain entities.
//!
//! Repository structs handle database operations for each entity kind. They
//! use SeaORM entity models internally and return domain models, keeping the
//! data layer separated from the business logic layer. Every write is a
//! single atomic store operation; task deletion cascades to applications at
//! the store level through the foreign key.

pub mod application;
pub mod task;
pub mod window;
