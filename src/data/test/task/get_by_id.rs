use super::*;

/// Tests getting a task by ID.
///
/// Verifies that the repository returns the task with the stored tag string
/// decoded back into a list.
///
/// Expected: Ok(Some) with matching task
#[tokio::test]
async fn gets_task_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::task::TaskFactory::new(db)
        .tags(vec!["combat", "outdoor"])
        .build()
        .await?;

    let repo = TaskRepository::new(db);
    let task = repo.get_by_id(created.id).await?;

    assert!(task.is_some());
    let task = task.unwrap();
    assert_eq!(task.id, created.id);
    assert_eq!(task.name, created.name);
    assert_eq!(task.tags, vec!["combat".to_string(), "outdoor".to_string()]);

    Ok(())
}

/// Tests getting a non-existent task.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_task() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TaskRepository::new(db);
    let task = repo.get_by_id(999).await?;

    assert!(task.is_none());

    Ok(())
}
