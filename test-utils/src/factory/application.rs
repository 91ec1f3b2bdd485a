//! Application factory for creating test application entities.

use crate::factory::helpers::next_id;
use chrono::{NaiveDate, NaiveTime, Utc};
use entity::application::ApplicationStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test applications with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::application::ApplicationFactory;
///
/// let application = ApplicationFactory::new(&db, task.id)
///     .status(ApplicationStatus::Confirmed)
///     .game_date(NaiveDate::from_ymd_opt(2026, 3, 14).unwrap())
///     .build()
///     .await?;
/// ```
pub struct ApplicationFactory<'a> {
    db: &'a DatabaseConnection,
    task_id: i32,
    name: String,
    info: Option<String>,
    game_date: NaiveDate,
    time_start: NaiveTime,
    time_end: Option<NaiveTime>,
    status: ApplicationStatus,
}

impl<'a> ApplicationFactory<'a> {
    /// Creates a new ApplicationFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Player {id}"` where id is auto-incremented
    /// - info: `Some("Test application info")`
    /// - game_date: `2026-03-14`
    /// - time_start: `18:00:00`, time_end: `23:00:00`
    /// - status: `ApplicationStatus::Default`
    pub fn new(db: &'a DatabaseConnection, task_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            task_id,
            name: format!("Player {}", id),
            info: Some("Test application info".to_string()),
            game_date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
            time_start: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
            time_end: Some(NaiveTime::from_hms_opt(23, 0, 0).unwrap()),
            status: ApplicationStatus::Default,
        }
    }

    /// Sets the submitter name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the free-text info field.
    pub fn info(mut self, info: Option<String>) -> Self {
        self.info = info;
        self
    }

    /// Sets the game date.
    pub fn game_date(mut self, game_date: NaiveDate) -> Self {
        self.game_date = game_date;
        self
    }

    /// Sets the time window.
    pub fn time_window(mut self, time_start: NaiveTime, time_end: Option<NaiveTime>) -> Self {
        self.time_start = time_start;
        self.time_end = time_end;
        self
    }

    /// Sets the application status.
    pub fn status(mut self, status: ApplicationStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the application entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::application::Model)` - Created application entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::application::Model, DbErr> {
        entity::application::ActiveModel {
            id: ActiveValue::NotSet,
            task_id: ActiveValue::Set(self.task_id),
            name: ActiveValue::Set(self.name),
            info: ActiveValue::Set(self.info),
            game_date: ActiveValue::Set(self.game_date),
            time_start: ActiveValue::Set(self.time_start),
            time_end: ActiveValue::Set(self.time_end),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an application with default values for the specified task.
///
/// Shorthand for `ApplicationFactory::new(db, task_id).build().await`.
pub async fn create_application(
    db: &DatabaseConnection,
    task_id: i32,
) -> Result<entity::application::Model, DbErr> {
    ApplicationFactory::new(db, task_id).build().await
}
