use chrono::{Duration, NaiveTime};
use entity::application::ApplicationStatus;
use sea_orm::{ActiveEnum, DatabaseConnection};

use crate::{
    data::{application::ApplicationRepository, task::TaskRepository},
    error::AppError,
    model::application::{
        ApplicationDto, CreateApplicationDto, CreateApplicationParams, UpdateApplicationStatusDto,
    },
    util::parse,
};

/// Hours added to the window start when no explicit end is supplied.
const DERIVED_WINDOW_HOURS: i64 = 5;

pub struct ApplicationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ApplicationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new application against an existing task.
    ///
    /// The game date and window start arrive as text and must parse. The
    /// window end is optional: an explicit value must parse, an absent or
    /// empty value is derived as start + 5 hours. The status is always
    /// initialized to `default` regardless of caller input.
    ///
    /// # Returns
    /// - `Ok(ApplicationDto)`: The created application
    /// - `Err(AppError::NotFound)`: The referenced task does not exist
    /// - `Err(AppError::Validation)`: Malformed date or time field
    /// - `Err(AppError)`: Database error
    pub async fn create(&self, dto: CreateApplicationDto) -> Result<ApplicationDto, AppError> {
        let task_repo = TaskRepository::new(self.db);
        if task_repo.get_by_id(dto.task_id).await?.is_none() {
            return Err(AppError::NotFound("Task not found".to_string()));
        }

        let game_date = parse::parse_date(&dto.game_date).ok_or_else(|| {
            AppError::Validation(
                "Validation failed: Field 'game_date' must be in YYYY-MM-DD format.".to_string(),
            )
        })?;
        let time_start = parse::parse_time(&dto.time_start).ok_or_else(|| {
            AppError::Validation(
                "Validation failed: Field 'time_start' must be in HH:MM or HH:MM:SS format."
                    .to_string(),
            )
        })?;
        let time_end = Self::resolve_time_end(time_start, dto.time_end.as_deref())?;

        let repo = ApplicationRepository::new(self.db);
        let application = repo
            .create(CreateApplicationParams {
                task_id: dto.task_id,
                name: dto.name,
                info: dto.info,
                game_date,
                time_start,
                time_end,
            })
            .await?;

        Ok(application.into())
    }

    /// Lists all applications ordered by game date and window start,
    /// descending.
    ///
    /// # Returns
    /// - `Ok(applications)`: Vector of applications
    /// - `Err(AppError)`: Database error
    pub async fn list(&self) -> Result<Vec<ApplicationDto>, AppError> {
        let repo = ApplicationRepository::new(self.db);

        let applications = repo.get_all_ordered().await?;

        Ok(applications.into_iter().map(Into::into).collect())
    }

    /// Updates the status of an application.
    ///
    /// The target status must be one of the three canonical values; anything
    /// else fails validation and leaves the stored status unchanged. All
    /// transitions between canonical values are allowed; there are no
    /// automatic transitions.
    ///
    /// # Returns
    /// - `Ok(ApplicationDto)`: The updated application
    /// - `Err(AppError::Validation)`: Status outside the fixed domain
    /// - `Err(AppError::NotFound)`: No application with this ID
    /// - `Err(AppError)`: Database error
    pub async fn update_status(
        &self,
        id: i32,
        dto: UpdateApplicationStatusDto,
    ) -> Result<ApplicationDto, AppError> {
        let status = ApplicationStatus::try_from_value(&dto.status).map_err(|_| {
            AppError::Validation(
                "Validation failed: Status must be one of: default, confirmed, outdated."
                    .to_string(),
            )
        })?;

        let repo = ApplicationRepository::new(self.db);
        let application = repo
            .update_status(id, status)
            .await?
            .ok_or_else(|| AppError::NotFound("Application not found".to_string()))?;

        Ok(application.into())
    }

    /// Deletes an application.
    ///
    /// # Returns
    /// - `Ok(())`: Application deleted
    /// - `Err(AppError::NotFound)`: No application with this ID
    /// - `Err(AppError)`: Database error
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = ApplicationRepository::new(self.db);

        if repo.get_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("Application not found".to_string()));
        }

        repo.delete(id).await?;

        Ok(())
    }

    /// Resolves the end of an application's time window.
    ///
    /// An explicit non-empty value must parse; a parse failure is a
    /// validation error, distinct from absence. An absent or empty value is
    /// derived from the window start.
    fn resolve_time_end(
        time_start: NaiveTime,
        explicit: Option<&str>,
    ) -> Result<NaiveTime, AppError> {
        match explicit.filter(|value| !value.is_empty()) {
            Some(value) => parse::parse_time(value).ok_or_else(|| {
                AppError::Validation(
                    "Validation failed: Field 'time_end' must be in HH:MM or HH:MM:SS format."
                        .to_string(),
                )
            }),
            None => Ok(Self::derive_time_end(time_start)),
        }
    }

    /// Derives the window end as start + 5 hours on a time-of-day basis.
    ///
    /// The addition wraps past midnight; a derived end numerically earlier
    /// than the start is correct, not an error.
    fn derive_time_end(time_start: NaiveTime) -> NaiveTime {
        time_start
            .overflowing_add_signed(Duration::hours(DERIVED_WINDOW_HOURS))
            .0
    }
}
