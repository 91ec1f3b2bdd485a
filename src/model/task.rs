//! Domain models and DTOs for tasks (quest templates).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Delimiter used to encode the tag list as a single stored string.
///
/// Tags containing this character do not round-trip; this is a documented
/// limitation of the storage encoding.
pub const TAG_DELIMITER: char = ',';

/// Joins a tag list into its stored single-string encoding.
pub fn join_tags(tags: &[String]) -> String {
    tags.join(&TAG_DELIMITER.to_string())
}

/// Splits the stored tag string back into an ordered tag list.
///
/// An empty stored string yields an empty list, not a single empty tag.
pub fn split_tags(tags: &str) -> Vec<String> {
    if tags.is_empty() {
        return Vec::new();
    }
    tags.split(TAG_DELIMITER).map(str::to_string).collect()
}

/// Quest template published by an administrator.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    /// Unique identifier for the task.
    pub id: i32,
    /// Display name of the task.
    pub name: String,
    /// One-line description shown in listings.
    pub short_description: String,
    /// Full description of the task.
    pub description: String,
    /// Optional minimum player level.
    pub min_lvl: Option<i32>,
    /// Optional maximum player level.
    pub max_lvl: Option<i32>,
    /// Ordered tag list; insertion order preserved for display.
    pub tags: Vec<String>,
    /// Timestamp when the task was created. Immutable.
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Converts an entity model to a task domain model at the repository
    /// boundary, decoding the stored tag string.
    pub fn from_entity(entity: entity::task::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            short_description: entity.short_description,
            description: entity.description,
            min_lvl: entity.min_lvl,
            max_lvl: entity.max_lvl,
            tags: split_tags(&entity.tags),
            created_at: entity.created_at,
        }
    }
}

/// Parameters for creating a new task. Fields are already validated.
#[derive(Debug, Clone)]
pub struct CreateTaskParams {
    pub name: String,
    pub short_description: String,
    pub description: String,
    pub min_lvl: Option<i32>,
    pub max_lvl: Option<i32>,
    pub tags: Vec<String>,
}

/// Request body for creating a task.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTaskDto {
    pub name: String,
    pub short_description: String,
    pub description: String,
    #[serde(default)]
    pub min_lvl: Option<i32>,
    #[serde(default)]
    pub max_lvl: Option<i32>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

/// Detailed task representation returned by create and detail endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct TaskDto {
    pub id: i32,
    pub name: String,
    pub short_description: String,
    pub description: String,
    pub min_lvl: Option<i32>,
    pub max_lvl: Option<i32>,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Task> for TaskDto {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            name: task.name,
            short_description: task.short_description,
            description: task.description,
            min_lvl: task.min_lvl,
            max_lvl: task.max_lvl,
            tags: task.tags,
            created_at: task.created_at,
        }
    }
}

/// Short task representation for the public listing, enriched with the
/// number of applications submitted against it.
#[derive(Debug, Clone, Serialize)]
pub struct TaskSummaryDto {
    pub id: i32,
    pub name: String,
    pub short_description: String,
    pub min_lvl: Option<i32>,
    pub max_lvl: Option<i32>,
    pub tags: Vec<String>,
    pub application_count: u64,
}
