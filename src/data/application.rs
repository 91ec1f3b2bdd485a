use chrono::{NaiveDate, Utc};
use entity::application::ApplicationStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType,
    PaginatorTrait, QueryOrder, QuerySelect, RelationTrait,
};

use crate::model::application::{Application, CreateApplicationParams};

pub struct ApplicationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ApplicationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new application.
    ///
    /// The status is always initialized to `default`; callers cannot choose
    /// an initial status.
    ///
    /// # Arguments
    /// - `params`: Validated application fields with parsed date and times
    ///
    /// # Returns
    /// - `Ok(Application)`: The created application
    /// - `Err(DbErr)`: Database error
    pub async fn create(&self, params: CreateApplicationParams) -> Result<Application, DbErr> {
        let application = entity::application::ActiveModel {
            id: ActiveValue::NotSet,
            task_id: ActiveValue::Set(params.task_id),
            name: ActiveValue::Set(params.name),
            info: ActiveValue::Set(params.info),
            game_date: ActiveValue::Set(params.game_date),
            time_start: ActiveValue::Set(params.time_start),
            time_end: ActiveValue::Set(Some(params.time_end)),
            status: ActiveValue::Set(ApplicationStatus::Default),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(Application::from_entity(application))
    }

    /// Gets an application by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Application))`: The application
    /// - `Ok(None)`: Application not found
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Application>, DbErr> {
        let application = entity::prelude::Application::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(application.map(Application::from_entity))
    }

    /// Gets all applications ordered by game date, then window start, both
    /// descending (most recent requests first).
    ///
    /// # Returns
    /// - `Ok(applications)`: Vector of applications
    /// - `Err(DbErr)`: Database error
    pub async fn get_all_ordered(&self) -> Result<Vec<Application>, DbErr> {
        let applications = entity::prelude::Application::find()
            .order_by_desc(entity::application::Column::GameDate)
            .order_by_desc(entity::application::Column::TimeStart)
            .all(self.db)
            .await?;

        Ok(applications
            .into_iter()
            .map(Application::from_entity)
            .collect())
    }

    /// Updates the status of an application.
    ///
    /// # Returns
    /// - `Ok(Some(Application))`: The updated application
    /// - `Ok(None)`: Application not found, nothing mutated
    /// - `Err(DbErr)`: Database error
    pub async fn update_status(
        &self,
        id: i32,
        status: ApplicationStatus,
    ) -> Result<Option<Application>, DbErr> {
        let Some(application) = entity::prelude::Application::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::application::ActiveModel = application.into();
        active_model.status = ActiveValue::Set(status);

        let updated = active_model.update(self.db).await?;

        Ok(Some(Application::from_entity(updated)))
    }

    /// Deletes an application by ID.
    ///
    /// # Returns
    /// - `Ok(())`: Application deleted
    /// - `Err(DbErr)`: Database error
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Application::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Counts all applications.
    ///
    /// # Returns
    /// - `Ok(count)`: Total number of applications
    /// - `Err(DbErr)`: Database error
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Application::find().count(self.db).await
    }

    /// Counts applications grouped by status.
    ///
    /// Only statuses present in the data appear in the result; zero-filling
    /// over the full status domain happens in the service layer.
    ///
    /// # Returns
    /// - `Ok(counts)`: Vector of (status, count) pairs
    /// - `Err(DbErr)`: Database error
    pub async fn count_by_status(&self) -> Result<Vec<(ApplicationStatus, i64)>, DbErr> {
        entity::prelude::Application::find()
            .select_only()
            .column(entity::application::Column::Status)
            .column_as(entity::application::Column::Id.count(), "application_count")
            .group_by(entity::application::Column::Status)
            .into_tuple::<(ApplicationStatus, i64)>()
            .all(self.db)
            .await
    }

    /// Counts applications grouped by owning task, joined with the task name.
    ///
    /// # Returns
    /// - `Ok(counts)`: Vector of (task_id, task_name, count) tuples
    /// - `Err(DbErr)`: Database error
    pub async fn count_by_task(&self) -> Result<Vec<(i32, String, i64)>, DbErr> {
        entity::prelude::Application::find()
            .select_only()
            .column(entity::application::Column::TaskId)
            .column(entity::task::Column::Name)
            .column_as(entity::application::Column::Id.count(), "application_count")
            .join(JoinType::InnerJoin, entity::application::Relation::Task.def())
            .group_by(entity::application::Column::TaskId)
            .group_by(entity::task::Column::Name)
            .into_tuple::<(i32, String, i64)>()
            .all(self.db)
            .await
    }

    /// Counts applications grouped by game date.
    ///
    /// # Returns
    /// - `Ok(counts)`: Vector of (game_date, count) pairs
    /// - `Err(DbErr)`: Database error
    pub async fn count_by_date(&self) -> Result<Vec<(NaiveDate, i64)>, DbErr> {
        entity::prelude::Application::find()
            .select_only()
            .column(entity::application::Column::GameDate)
            .column_as(entity::application::Column::Id.count(), "application_count")
            .group_by(entity::application::Column::GameDate)
            .into_tuple::<(NaiveDate, i64)>()
            .all(self.db)
            .await
    }
}
