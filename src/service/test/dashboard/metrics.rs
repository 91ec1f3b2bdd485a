use super::*;

/// Tests the dashboard over an empty store.
///
/// Verifies that the histogram still carries all three statuses, zero-filled,
/// and the top lists are empty rather than absent.
///
/// Expected: Ok with all-zero aggregates
#[tokio::test]
async fn reports_zero_state() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = DashboardService::new(db);
    let dashboard = service.metrics().await.unwrap();

    assert_eq!(dashboard.total_active_tasks, 0);
    assert_eq!(dashboard.applications_by_status.default, 0);
    assert_eq!(dashboard.applications_by_status.confirmed, 0);
    assert_eq!(dashboard.applications_by_status.outdated, 0);
    assert!(dashboard.top_5_tasks.is_empty());
    assert!(dashboard.top_5_dates.is_empty());

    Ok(())
}

/// Tests the status histogram.
///
/// Verifies zero-filling for absent statuses and that the histogram values
/// sum to the total number of applications.
///
/// Expected: Ok with counts 2 / 1 / 0
#[tokio::test]
async fn zero_fills_status_histogram() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let task = factory::task::create_task(db).await?;
    factory::application::create_application(db, task.id).await?;
    factory::application::create_application(db, task.id).await?;
    factory::application::ApplicationFactory::new(db, task.id)
        .status(ApplicationStatus::Confirmed)
        .build()
        .await?;

    let service = DashboardService::new(db);
    let dashboard = service.metrics().await.unwrap();

    let histogram = &dashboard.applications_by_status;
    assert_eq!(histogram.default, 2);
    assert_eq!(histogram.confirmed, 1);
    assert_eq!(histogram.outdated, 0);
    assert_eq!(histogram.default + histogram.confirmed + histogram.outdated, 3);

    Ok(())
}

/// Tests the top tasks aggregate.
///
/// Verifies count-descending order with ties broken by task creation order,
/// so repeated calls over the same data give the same list.
///
/// Expected: Ok with a deterministic order
#[tokio::test]
async fn orders_top_tasks_deterministically() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::task::TaskFactory::new(db).name("First").build().await?;
    let second = factory::task::TaskFactory::new(db).name("Second").build().await?;
    let third = factory::task::TaskFactory::new(db).name("Third").build().await?;

    // first and second tie at two applications each
    factory::application::create_application(db, first.id).await?;
    factory::application::create_application(db, first.id).await?;
    factory::application::create_application(db, second.id).await?;
    factory::application::create_application(db, second.id).await?;
    factory::application::create_application(db, third.id).await?;

    let service = DashboardService::new(db);
    let dashboard = service.metrics().await.unwrap();

    assert_eq!(dashboard.total_active_tasks, 3);
    let names: Vec<&str> = dashboard
        .top_5_tasks
        .iter()
        .map(|entry| entry.name.as_str())
        .collect();
    assert_eq!(names, vec!["First", "Second", "Third"]);
    assert_eq!(dashboard.top_5_tasks[0].count, 2);
    assert_eq!(dashboard.top_5_tasks[2].count, 1);

    Ok(())
}

/// Tests the top lists cap at five entries.
///
/// Expected: Ok with exactly five of six candidates
#[tokio::test]
async fn caps_top_tasks_at_five() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..6 {
        let task = factory::task::create_task(db).await?;
        factory::application::create_application(db, task.id).await?;
    }

    let service = DashboardService::new(db);
    let dashboard = service.metrics().await.unwrap();

    assert_eq!(dashboard.top_5_tasks.len(), 5);

    Ok(())
}

/// Tests the top dates list caps at five entries.
///
/// Expected: Ok with exactly five of six distinct dates
#[tokio::test]
async fn caps_top_dates_at_five() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let task = factory::task::create_task(db).await?;
    for day in 1..=6 {
        factory::application::ApplicationFactory::new(db, task.id)
            .game_date(NaiveDate::from_ymd_opt(2026, 4, day).unwrap())
            .build()
            .await?;
    }

    let service = DashboardService::new(db);
    let dashboard = service.metrics().await.unwrap();

    assert_eq!(dashboard.top_5_dates.len(), 5);
    // All six tie at one application, so the five earliest dates survive
    let dates: Vec<NaiveDate> = dashboard
        .top_5_dates
        .iter()
        .map(|entry| entry.date)
        .collect();
    let expected: Vec<NaiveDate> = (1..=5)
        .map(|day| NaiveDate::from_ymd_opt(2026, 4, day).unwrap())
        .collect();
    assert_eq!(dates, expected);

    Ok(())
}

/// Tests the top dates aggregate.
///
/// Verifies count-descending order with ties broken by date ascending.
///
/// Expected: Ok with the busiest date first
#[tokio::test]
async fn orders_top_dates_deterministically() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let task = factory::task::create_task(db).await?;
    let busy_date = NaiveDate::from_ymd_opt(2026, 3, 20).unwrap();
    let tied_early = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
    let tied_late = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();

    for date in [busy_date, busy_date, tied_late, tied_early] {
        factory::application::ApplicationFactory::new(db, task.id)
            .game_date(date)
            .build()
            .await?;
    }

    let service = DashboardService::new(db);
    let dashboard = service.metrics().await.unwrap();

    let dates: Vec<NaiveDate> = dashboard
        .top_5_dates
        .iter()
        .map(|entry| entry.date)
        .collect();
    assert_eq!(dates, vec![busy_date, tied_early, tied_late]);
    assert_eq!(dashboard.top_5_dates[0].count, 2);

    Ok(())
}
