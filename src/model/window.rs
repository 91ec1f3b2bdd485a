//! Domain models and DTOs for availability windows.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Administrator-declared block of availability. Advisory only; not related
/// to any task or application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    /// Unique identifier for the window.
    pub id: i32,
    /// Date the window applies to.
    pub game_date: NaiveDate,
    /// Start of the availability window.
    pub time_start: NaiveTime,
    /// End of the availability window.
    pub time_end: NaiveTime,
}

impl Window {
    /// Converts an entity model to a window domain model at the repository
    /// boundary.
    pub fn from_entity(entity: entity::window::Model) -> Self {
        Self {
            id: entity.id,
            game_date: entity.game_date,
            time_start: entity.time_start,
            time_end: entity.time_end,
        }
    }
}

/// Parameters for creating a new window. All fields are already parsed.
#[derive(Debug, Clone)]
pub struct CreateWindowParams {
    pub game_date: NaiveDate,
    pub time_start: NaiveTime,
    pub time_end: NaiveTime,
}

/// Request body for creating a window. All three fields are mandatory; no
/// derivation is performed for windows.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateWindowDto {
    pub game_date: String,
    pub time_start: String,
    pub time_end: String,
}

/// Window representation returned to callers.
#[derive(Debug, Clone, Serialize)]
pub struct WindowDto {
    pub id: i32,
    pub game_date: NaiveDate,
    pub time_start: NaiveTime,
    pub time_end: NaiveTime,
}

impl From<Window> for WindowDto {
    fn from(window: Window) -> Self {
        Self {
            id: window.id,
            game_date: window.game_date,
            time_start: window.time_start,
            time_end: window.time_end,
        }
    }
}
