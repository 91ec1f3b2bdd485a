use sea_orm::DatabaseConnection;

use crate::{
    data::window::WindowRepository,
    error::AppError,
    model::window::{CreateWindowDto, CreateWindowParams, WindowDto},
    util::parse,
};

pub struct WindowService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WindowService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new availability window.
    ///
    /// All three of game date, window start, and window end are mandatory
    /// and must parse; no derivation is performed for windows.
    ///
    /// # Returns
    /// - `Ok(WindowDto)`: The created window
    /// - `Err(AppError::Validation)`: Malformed date or time field
    /// - `Err(AppError)`: Database error
    pub async fn create(&self, dto: CreateWindowDto) -> Result<WindowDto, AppError> {
        let game_date = parse::parse_date(&dto.game_date);
        let time_start = parse::parse_time(&dto.time_start);
        let time_end = parse::parse_time(&dto.time_end);

        let (Some(game_date), Some(time_start), Some(time_end)) =
            (game_date, time_start, time_end)
        else {
            return Err(AppError::Validation(
                "Validation failed: Date/time format is incorrect (YYYY-MM-DD, HH:MM)."
                    .to_string(),
            ));
        };

        let repo = WindowRepository::new(self.db);
        let window = repo
            .create(CreateWindowParams {
                game_date,
                time_start,
                time_end,
            })
            .await?;

        Ok(window.into())
    }

    /// Lists all windows ordered by game date and window start, ascending.
    ///
    /// # Returns
    /// - `Ok(windows)`: Vector of windows
    /// - `Err(AppError)`: Database error
    pub async fn list(&self) -> Result<Vec<WindowDto>, AppError> {
        let repo = WindowRepository::new(self.db);

        let windows = repo.get_all_ordered().await?;

        Ok(windows.into_iter().map(Into::into).collect())
    }

    /// Deletes a window.
    ///
    /// # Returns
    /// - `Ok(())`: Window deleted
    /// - `Err(AppError::NotFound)`: No window with this ID
    /// - `Err(AppError)`: Database error
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = WindowRepository::new(self.db);

        if repo.get_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("Window not found".to_string()));
        }

        repo.delete(id).await?;

        Ok(())
    }
}
