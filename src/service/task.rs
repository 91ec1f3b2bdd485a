use sea_orm::DatabaseConnection;
use std::collections::HashMap;

use crate::{
    data::{application::ApplicationRepository, task::TaskRepository},
    error::AppError,
    model::task::{CreateTaskDto, CreateTaskParams, TaskDto, TaskSummaryDto},
};

pub struct TaskService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TaskService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new task.
    ///
    /// Name, short description, and description must be non-empty. When both
    /// level bounds are present, `min_lvl` must not exceed `max_lvl`. The
    /// tag list defaults to empty.
    ///
    /// # Returns
    /// - `Ok(TaskDto)`: The created task with server-assigned id and timestamp
    /// - `Err(AppError)`: Validation or database error
    pub async fn create(&self, dto: CreateTaskDto) -> Result<TaskDto, AppError> {
        for (field, value) in [
            ("name", &dto.name),
            ("short_description", &dto.short_description),
            ("description", &dto.description),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::Validation(format!(
                    "Validation failed: Field '{}' is required.",
                    field
                )));
            }
        }

        if let (Some(min_lvl), Some(max_lvl)) = (dto.min_lvl, dto.max_lvl) {
            if min_lvl > max_lvl {
                return Err(AppError::Validation(
                    "Validation failed: 'min_lvl' must not exceed 'max_lvl'.".to_string(),
                ));
            }
        }

        let repo = TaskRepository::new(self.db);
        let task = repo
            .create(CreateTaskParams {
                name: dto.name,
                short_description: dto.short_description,
                description: dto.description,
                min_lvl: dto.min_lvl,
                max_lvl: dto.max_lvl,
                tags: dto.tags.unwrap_or_default(),
            })
            .await?;

        Ok(task.into())
    }

    /// Gets the detailed representation of a task.
    ///
    /// # Returns
    /// - `Ok(TaskDto)`: The task
    /// - `Err(AppError::NotFound)`: No task with this ID
    /// - `Err(AppError)`: Database error
    pub async fn get(&self, id: i32) -> Result<TaskDto, AppError> {
        let repo = TaskRepository::new(self.db);

        let task = repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Task not found".to_string()))?;

        Ok(task.into())
    }

    /// Lists all tasks as summaries, each enriched with the number of
    /// applications submitted against it.
    ///
    /// The counts come from one grouped query rather than a query per task.
    ///
    /// # Returns
    /// - `Ok(summaries)`: Vector of task summaries
    /// - `Err(AppError)`: Database error
    pub async fn list(&self) -> Result<Vec<TaskSummaryDto>, AppError> {
        let repo = TaskRepository::new(self.db);
        let application_repo = ApplicationRepository::new(self.db);

        let tasks = repo.get_all().await?;
        let counts: HashMap<i32, i64> = application_repo
            .count_by_task()
            .await?
            .into_iter()
            .map(|(task_id, _, count)| (task_id, count))
            .collect();

        Ok(tasks
            .into_iter()
            .map(|task| TaskSummaryDto {
                application_count: counts.get(&task.id).copied().unwrap_or(0) as u64,
                id: task.id,
                name: task.name,
                short_description: task.short_description,
                min_lvl: task.min_lvl,
                max_lvl: task.max_lvl,
                tags: task.tags,
            })
            .collect())
    }

    /// Deletes a task, cascading deletion of its applications.
    ///
    /// # Returns
    /// - `Ok(())`: Task and its applications deleted
    /// - `Err(AppError::NotFound)`: No task with this ID
    /// - `Err(AppError)`: Database error
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = TaskRepository::new(self.db);

        if repo.get_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("Task not found".to_string()));
        }

        repo.delete(id).await?;

        Ok(())
    }
}
