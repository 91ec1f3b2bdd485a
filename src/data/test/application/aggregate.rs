use super::*;

/// Tests the status histogram grouping.
///
/// Verifies that only statuses present in the data are returned and that
/// each count matches the stored rows.
///
/// Expected: Ok with one pair per present status
#[tokio::test]
async fn counts_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let task = factory::task::create_task(db).await?;
    factory::application::create_application(db, task.id).await?;
    factory::application::create_application(db, task.id).await?;
    factory::application::ApplicationFactory::new(db, task.id)
        .status(ApplicationStatus::Confirmed)
        .build()
        .await?;

    let repo = ApplicationRepository::new(db);
    let mut counts = repo.count_by_status().await?;
    counts.sort_by_key(|(status, _)| status.to_value());

    assert_eq!(
        counts,
        vec![
            (ApplicationStatus::Confirmed, 1),
            (ApplicationStatus::Default, 2),
        ]
    );

    Ok(())
}

/// Tests the per-task grouping joined with task names.
///
/// Expected: Ok with one tuple per task that has applications
#[tokio::test]
async fn counts_by_task_with_names() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let busy_task = factory::task::TaskFactory::new(db)
        .name("Dragon Hunt")
        .build()
        .await?;
    let quiet_task = factory::task::TaskFactory::new(db)
        .name("Errand")
        .build()
        .await?;
    // A task with no applications must not appear in the result
    factory::task::create_task(db).await?;

    factory::application::create_application(db, busy_task.id).await?;
    factory::application::create_application(db, busy_task.id).await?;
    factory::application::create_application(db, quiet_task.id).await?;

    let repo = ApplicationRepository::new(db);
    let mut counts = repo.count_by_task().await?;
    counts.sort_by_key(|(task_id, _, _)| *task_id);

    assert_eq!(
        counts,
        vec![
            (busy_task.id, "Dragon Hunt".to_string(), 2),
            (quiet_task.id, "Errand".to_string(), 1),
        ]
    );

    Ok(())
}

/// Tests the per-date grouping.
///
/// Expected: Ok with one pair per distinct game date
#[tokio::test]
async fn counts_by_date() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let task = factory::task::create_task(db).await?;
    let busy_date = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
    let quiet_date = NaiveDate::from_ymd_opt(2026, 3, 20).unwrap();

    factory::application::ApplicationFactory::new(db, task.id)
        .game_date(busy_date)
        .build()
        .await?;
    factory::application::ApplicationFactory::new(db, task.id)
        .game_date(busy_date)
        .build()
        .await?;
    factory::application::ApplicationFactory::new(db, task.id)
        .game_date(quiet_date)
        .build()
        .await?;

    let repo = ApplicationRepository::new(db);
    let mut counts = repo.count_by_date().await?;
    counts.sort_by_key(|(date, _)| *date);

    assert_eq!(counts, vec![(busy_date, 2), (quiet_date, 1)]);

    Ok(())
}

/// Tests all aggregates over an empty store.
///
/// Expected: Ok with empty vectors and zero total
#[tokio::test]
async fn aggregates_over_empty_store() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ApplicationRepository::new(db);

    assert_eq!(repo.count().await?, 0);
    assert!(repo.count_by_status().await?.is_empty());
    assert!(repo.count_by_task().await?.is_empty());
    assert!(repo.count_by_date().await?.is_empty());

    Ok(())
}
