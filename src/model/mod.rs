//! Domain models, operation parameters, and boundary DTOs.
//!
//! Domain models are converted from entity models at the repository boundary
//! and to DTOs at the controller boundary. Parameter types carry validated,
//! already-parsed values into the repository layer.

pub mod api;
pub mod application;
pub mod dashboard;
pub mod task;
pub mod window;
