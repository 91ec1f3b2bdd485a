//! SeaORM entity models for the questboard database schema.

pub mod application;
pub mod prelude;
pub mod task;
pub mod window;
