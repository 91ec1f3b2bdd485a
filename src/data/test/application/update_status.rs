use super::*;

/// Tests updating the status of an application.
///
/// Verifies that only the status changes and every other field is preserved.
///
/// Expected: Ok(Some) with updated status
#[tokio::test]
async fn updates_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_task, application) = factory::helpers::create_application_with_task(db).await?;

    let repo = ApplicationRepository::new(db);
    let updated = repo
        .update_status(application.id, ApplicationStatus::Confirmed)
        .await?;

    assert!(updated.is_some());
    let updated = updated.unwrap();
    assert_eq!(updated.status, ApplicationStatus::Confirmed);
    assert_eq!(updated.name, application.name);
    assert_eq!(updated.game_date, application.game_date);

    let stored = entity::prelude::Application::find_by_id(application.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, ApplicationStatus::Confirmed);

    Ok(())
}

/// Tests updating a non-existent application.
///
/// Verifies that the repository reports the miss without touching any row.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_application() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ApplicationRepository::new(db);
    let updated = repo.update_status(999, ApplicationStatus::Outdated).await?;

    assert!(updated.is_none());

    Ok(())
}
