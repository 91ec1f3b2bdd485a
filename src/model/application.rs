//! Domain models and DTOs for applications (participation requests).

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use entity::application::ApplicationStatus;
use sea_orm::ActiveEnum;
use serde::{Deserialize, Serialize};

/// Player request to participate in a task at a specific date/time window.
#[derive(Debug, Clone, PartialEq)]
pub struct Application {
    /// Unique identifier for the application.
    pub id: i32,
    /// ID of the task this application was submitted against.
    pub task_id: i32,
    /// Name of the submitting player.
    pub name: String,
    /// Optional free-text comment left by the player.
    pub info: Option<String>,
    /// Requested game date.
    pub game_date: NaiveDate,
    /// Start of the requested time window.
    pub time_start: NaiveTime,
    /// End of the requested time window, derived or explicit.
    pub time_end: Option<NaiveTime>,
    /// Moderation status.
    pub status: ApplicationStatus,
    /// Timestamp when the application was created. Immutable.
    pub created_at: DateTime<Utc>,
}

impl Application {
    /// Converts an entity model to an application domain model at the
    /// repository boundary.
    pub fn from_entity(entity: entity::application::Model) -> Self {
        Self {
            id: entity.id,
            task_id: entity.task_id,
            name: entity.name,
            info: entity.info,
            game_date: entity.game_date,
            time_start: entity.time_start,
            time_end: entity.time_end,
            status: entity.status,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for creating a new application. Date and times are already
/// parsed; the status is always `default` regardless of caller input.
#[derive(Debug, Clone)]
pub struct CreateApplicationParams {
    pub task_id: i32,
    pub name: String,
    pub info: Option<String>,
    pub game_date: NaiveDate,
    pub time_start: NaiveTime,
    pub time_end: NaiveTime,
}

/// Request body for submitting an application. Date and time fields arrive
/// as text and are parsed by the service layer.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateApplicationDto {
    pub task_id: i32,
    pub name: String,
    #[serde(default)]
    pub info: Option<String>,
    pub game_date: String,
    pub time_start: String,
    #[serde(default)]
    pub time_end: Option<String>,
}

/// Request body for the admin status update.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateApplicationStatusDto {
    pub status: String,
}

/// Application representation returned to both public and admin callers.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationDto {
    pub id: i32,
    pub task_id: i32,
    pub created_at: DateTime<Utc>,
    pub name: String,
    pub info: Option<String>,
    pub game_date: NaiveDate,
    pub time_start: NaiveTime,
    pub time_end: Option<NaiveTime>,
    pub status: String,
}

impl From<Application> for ApplicationDto {
    fn from(application: Application) -> Self {
        Self {
            id: application.id,
            task_id: application.task_id,
            created_at: application.created_at,
            name: application.name,
            info: application.info,
            game_date: application.game_date,
            time_start: application.time_start,
            time_end: application.time_end,
            status: application.status.to_value(),
        }
    }
}
