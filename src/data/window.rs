use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use crate::model::window::{CreateWindowParams, Window};

pub struct WindowRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WindowRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new availability window.
    ///
    /// # Arguments
    /// - `params`: Validated window fields with parsed date and times
    ///
    /// # Returns
    /// - `Ok(Window)`: The created window
    /// - `Err(DbErr)`: Database error
    pub async fn create(&self, params: CreateWindowParams) -> Result<Window, DbErr> {
        let window = entity::window::ActiveModel {
            id: ActiveValue::NotSet,
            game_date: ActiveValue::Set(params.game_date),
            time_start: ActiveValue::Set(params.time_start),
            time_end: ActiveValue::Set(params.time_end),
        }
        .insert(self.db)
        .await?;

        Ok(Window::from_entity(window))
    }

    /// Gets a window by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Window))`: The window
    /// - `Ok(None)`: Window not found
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Window>, DbErr> {
        let window = entity::prelude::Window::find_by_id(id).one(self.db).await?;

        Ok(window.map(Window::from_entity))
    }

    /// Gets all windows ordered by game date, then window start, ascending
    /// (soonest availability first).
    ///
    /// # Returns
    /// - `Ok(windows)`: Vector of windows
    /// - `Err(DbErr)`: Database error
    pub async fn get_all_ordered(&self) -> Result<Vec<Window>, DbErr> {
        let windows = entity::prelude::Window::find()
            .order_by_asc(entity::window::Column::GameDate)
            .order_by_asc(entity::window::Column::TimeStart)
            .all(self.db)
            .await?;

        Ok(windows.into_iter().map(Window::from_entity).collect())
    }

    /// Deletes a window by ID.
    ///
    /// # Returns
    /// - `Ok(())`: Window deleted
    /// - `Err(DbErr)`: Database error
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Window::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(())
    }
}
