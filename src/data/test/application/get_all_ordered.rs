use super::*;

/// Tests the admin listing order.
///
/// Verifies that applications come back ordered by game date descending and
/// by window start descending within the same date.
///
/// Expected: Ok with most recent requests first
#[tokio::test]
async fn orders_by_date_then_start_descending() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let task = factory::task::create_task(db).await?;

    let early_day = factory::application::ApplicationFactory::new(db, task.id)
        .game_date(NaiveDate::from_ymd_opt(2026, 3, 10).unwrap())
        .build()
        .await?;
    let late_day_morning = factory::application::ApplicationFactory::new(db, task.id)
        .game_date(NaiveDate::from_ymd_opt(2026, 3, 14).unwrap())
        .time_window(NaiveTime::from_hms_opt(9, 0, 0).unwrap(), None)
        .build()
        .await?;
    let late_day_evening = factory::application::ApplicationFactory::new(db, task.id)
        .game_date(NaiveDate::from_ymd_opt(2026, 3, 14).unwrap())
        .time_window(NaiveTime::from_hms_opt(20, 0, 0).unwrap(), None)
        .build()
        .await?;

    let repo = ApplicationRepository::new(db);
    let applications = repo.get_all_ordered().await?;

    assert_eq!(applications.len(), 3);
    assert_eq!(applications[0].id, late_day_evening.id);
    assert_eq!(applications[1].id, late_day_morning.id);
    assert_eq!(applications[2].id, early_day.id);

    Ok(())
}

/// Tests listing applications from an empty store.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_vec_when_no_applications() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ApplicationRepository::new(db);
    let applications = repo.get_all_ordered().await?;

    assert!(applications.is_empty());

    Ok(())
}
