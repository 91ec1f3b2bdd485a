//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Provides monotonically increasing values for generating unique test
/// identifiers across all factories.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a task together with one application referencing it.
///
/// Convenience method for tests that need an application and don't care
/// about the owning task's contents.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((task, application))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_application_with_task(
    db: &DatabaseConnection,
) -> Result<(entity::task::Model, entity::application::Model), DbErr> {
    let task = crate::factory::task::create_task(db).await?;
    let application = crate::factory::application::create_application(db, task.id).await?;

    Ok((task, application))
}
