//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller layer and the repository layer. They
//! own validation (required fields, date/time parsing, status domain),
//! time-window derivation, and the dashboard aggregation, and they translate
//! repository results into boundary DTOs. Services receive the database
//! handle by injection; they hold no global state.

pub mod application;
pub mod dashboard;
pub mod task;
pub mod window;
