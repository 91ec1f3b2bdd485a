use super::*;

/// Tests creating a new availability window.
///
/// Expected: Ok with window created
#[tokio::test]
async fn creates_window() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = WindowRepository::new(db);
    let result = repo
        .create(CreateWindowParams {
            game_date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
            time_start: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
            time_end: NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
        })
        .await;

    assert!(result.is_ok());
    let window = result.unwrap();
    assert_eq!(window.game_date, NaiveDate::from_ymd_opt(2026, 3, 14).unwrap());
    assert_eq!(window.time_start, NaiveTime::from_hms_opt(17, 0, 0).unwrap());
    assert_eq!(window.time_end, NaiveTime::from_hms_opt(22, 0, 0).unwrap());

    Ok(())
}
