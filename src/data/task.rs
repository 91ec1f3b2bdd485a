use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder,
};

use crate::model::task::{join_tags, CreateTaskParams, Task};

pub struct TaskRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TaskRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new task.
    ///
    /// The creation timestamp is assigned here and never updated afterwards.
    ///
    /// # Arguments
    /// - `params`: Validated task fields
    ///
    /// # Returns
    /// - `Ok(Task)`: The created task
    /// - `Err(DbErr)`: Database error
    pub async fn create(&self, params: CreateTaskParams) -> Result<Task, DbErr> {
        let task = entity::task::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(params.name),
            short_description: ActiveValue::Set(params.short_description),
            description: ActiveValue::Set(params.description),
            min_lvl: ActiveValue::Set(params.min_lvl),
            max_lvl: ActiveValue::Set(params.max_lvl),
            tags: ActiveValue::Set(join_tags(&params.tags)),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(Task::from_entity(task))
    }

    /// Gets a task by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Task))`: The task
    /// - `Ok(None)`: Task not found
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Task>, DbErr> {
        let task = entity::prelude::Task::find_by_id(id).one(self.db).await?;

        Ok(task.map(Task::from_entity))
    }

    /// Gets all tasks ordered by ID.
    ///
    /// # Returns
    /// - `Ok(tasks)`: Vector of tasks
    /// - `Err(DbErr)`: Database error
    pub async fn get_all(&self) -> Result<Vec<Task>, DbErr> {
        let tasks = entity::prelude::Task::find()
            .order_by_asc(entity::task::Column::Id)
            .all(self.db)
            .await?;

        Ok(tasks.into_iter().map(Task::from_entity).collect())
    }

    /// Counts all tasks.
    ///
    /// # Returns
    /// - `Ok(count)`: Total number of tasks
    /// - `Err(DbErr)`: Database error
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Task::find().count(self.db).await
    }

    /// Deletes a task by ID.
    ///
    /// The store cascades deletion of the task's applications atomically
    /// through the foreign key.
    ///
    /// # Returns
    /// - `Ok(())`: Task deleted
    /// - `Err(DbErr)`: Database error
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Task::delete_by_id(id).exec(self.db).await?;
        Ok(())
    }
}
