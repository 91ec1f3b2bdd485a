use super::*;

/// Tests updating an application's status.
///
/// Expected: Ok with the new status echoed back
#[tokio::test]
async fn updates_status_to_confirmed() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_task, application) = factory::helpers::create_application_with_task(db).await?;

    let service = ApplicationService::new(db);
    let updated = service
        .update_status(
            application.id,
            UpdateApplicationStatusDto {
                status: "confirmed".to_string(),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.status, "confirmed");

    Ok(())
}

/// Tests that any transition between canonical statuses is allowed.
///
/// Expected: Ok moving confirmed back to default
#[tokio::test]
async fn allows_any_transition_between_canonical_statuses() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let task = factory::task::create_task(db).await?;
    let application = factory::application::ApplicationFactory::new(db, task.id)
        .status(ApplicationStatus::Confirmed)
        .build()
        .await?;

    let service = ApplicationService::new(db);
    let updated = service
        .update_status(
            application.id,
            UpdateApplicationStatusDto {
                status: "default".to_string(),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.status, "default");

    Ok(())
}

/// Tests a status outside the fixed domain.
///
/// Verifies that validation fails and the stored status is untouched.
///
/// Expected: Err(Validation) with stored status unchanged
#[tokio::test]
async fn rejects_unknown_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_task, application) = factory::helpers::create_application_with_task(db).await?;

    let service = ApplicationService::new(db);
    let result = service
        .update_status(
            application.id,
            UpdateApplicationStatusDto {
                status: "approved".to_string(),
            },
        )
        .await;

    match result {
        Err(AppError::Validation(msg)) => {
            assert_eq!(
                msg,
                "Validation failed: Status must be one of: default, confirmed, outdated."
            );
        }
        other => panic!("expected validation error, got {:?}", other.map(|a| a.id)),
    }

    let stored = entity::prelude::Application::find_by_id(application.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, ApplicationStatus::Default);

    Ok(())
}

/// Tests updating a non-existent application.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn returns_not_found_for_missing_application() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ApplicationService::new(db);
    let result = service
        .update_status(
            999,
            UpdateApplicationStatusDto {
                status: "confirmed".to_string(),
            },
        )
        .await;

    match result {
        Err(AppError::NotFound(msg)) => assert_eq!(msg, "Application not found"),
        other => panic!("expected not found, got {:?}", other.map(|a| a.id)),
    }

    Ok(())
}
