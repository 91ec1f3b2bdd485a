//! Window factory for creating test availability window entities.

use chrono::{NaiveDate, NaiveTime};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test availability windows with customizable fields.
pub struct WindowFactory<'a> {
    db: &'a DatabaseConnection,
    game_date: NaiveDate,
    time_start: NaiveTime,
    time_end: NaiveTime,
}

impl<'a> WindowFactory<'a> {
    /// Creates a new WindowFactory with default values.
    ///
    /// Defaults:
    /// - game_date: `2026-03-14`
    /// - time_start: `17:00:00`, time_end: `22:00:00`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            game_date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
            time_start: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
            time_end: NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
        }
    }

    /// Sets the game date.
    pub fn game_date(mut self, game_date: NaiveDate) -> Self {
        self.game_date = game_date;
        self
    }

    /// Sets the time window.
    pub fn time_window(mut self, time_start: NaiveTime, time_end: NaiveTime) -> Self {
        self.time_start = time_start;
        self.time_end = time_end;
        self
    }

    /// Builds and inserts the window entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::window::Model)` - Created window entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::window::Model, DbErr> {
        entity::window::ActiveModel {
            id: ActiveValue::NotSet,
            game_date: ActiveValue::Set(self.game_date),
            time_start: ActiveValue::Set(self.time_start),
            time_end: ActiveValue::Set(self.time_end),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a window with default values.
///
/// Shorthand for `WindowFactory::new(db).build().await`.
pub async fn create_window(db: &DatabaseConnection) -> Result<entity::window::Model, DbErr> {
    WindowFactory::new(db).build().await
}
