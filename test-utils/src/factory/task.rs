//! Task factory for creating test task entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test tasks with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::task::TaskFactory;
///
/// let task = TaskFactory::new(&db)
///     .name("Dragon Hunt")
///     .tags(vec!["combat", "outdoor"])
///     .build()
///     .await?;
/// ```
pub struct TaskFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    short_description: String,
    description: String,
    min_lvl: Option<i32>,
    max_lvl: Option<i32>,
    tags: String,
}

impl<'a> TaskFactory<'a> {
    /// Creates a new TaskFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Task {id}"` where id is auto-incremented
    /// - short_description: `"Short description {id}"`
    /// - description: `"Test task description"`
    /// - min_lvl / max_lvl: `None`
    /// - tags: empty
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Task {}", id),
            short_description: format!("Short description {}", id),
            description: "Test task description".to_string(),
            min_lvl: None,
            max_lvl: None,
            tags: String::new(),
        }
    }

    /// Sets the task name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the short description.
    pub fn short_description(mut self, short_description: impl Into<String>) -> Self {
        self.short_description = short_description.into();
        self
    }

    /// Sets the full description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the minimum and maximum level bounds.
    pub fn levels(mut self, min_lvl: Option<i32>, max_lvl: Option<i32>) -> Self {
        self.min_lvl = min_lvl;
        self.max_lvl = max_lvl;
        self
    }

    /// Sets the tag list, stored comma-joined like the repository layer does.
    pub fn tags(mut self, tags: Vec<&str>) -> Self {
        self.tags = tags.join(",");
        self
    }

    /// Builds and inserts the task entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::task::Model)` - Created task entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::task::Model, DbErr> {
        entity::task::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            short_description: ActiveValue::Set(self.short_description),
            description: ActiveValue::Set(self.description),
            min_lvl: ActiveValue::Set(self.min_lvl),
            max_lvl: ActiveValue::Set(self.max_lvl),
            tags: ActiveValue::Set(self.tags),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a task with default values.
///
/// Shorthand for `TaskFactory::new(db).build().await`.
pub async fn create_task(db: &DatabaseConnection) -> Result<entity::task::Model, DbErr> {
    TaskFactory::new(db).build().await
}
