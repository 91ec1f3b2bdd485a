use entity::application::ApplicationStatus;
use sea_orm::DatabaseConnection;

use crate::{
    data::{application::ApplicationRepository, task::TaskRepository},
    error::AppError,
    model::dashboard::{DashboardDto, DateCountDto, StatusMetricsDto, TaskCountDto},
};

/// Number of entries returned by the top-N aggregates.
const TOP_ENTRIES: usize = 5;

pub struct DashboardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DashboardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Computes all dashboard aggregates over the current store snapshot.
    ///
    /// Nothing is cached; every call recomputes from the store. The status
    /// histogram is a total mapping over the fixed status domain. The top-N
    /// aggregates sort by count descending with a deterministic secondary
    /// key: task id ascending for tasks, date ascending for dates.
    ///
    /// # Returns
    /// - `Ok(DashboardDto)`: All four aggregates
    /// - `Err(AppError)`: Database error
    pub async fn metrics(&self) -> Result<DashboardDto, AppError> {
        let task_repo = TaskRepository::new(self.db);
        let application_repo = ApplicationRepository::new(self.db);

        let total_active_tasks = task_repo.count().await?;

        let mut applications_by_status = StatusMetricsDto {
            default: 0,
            confirmed: 0,
            outdated: 0,
        };
        for (status, count) in application_repo.count_by_status().await? {
            let slot = match status {
                ApplicationStatus::Default => &mut applications_by_status.default,
                ApplicationStatus::Confirmed => &mut applications_by_status.confirmed,
                ApplicationStatus::Outdated => &mut applications_by_status.outdated,
            };
            *slot = count as u64;
        }

        let mut task_counts = application_repo.count_by_task().await?;
        task_counts.sort_by(|(a_id, _, a_count), (b_id, _, b_count)| {
            b_count.cmp(a_count).then(a_id.cmp(b_id))
        });
        task_counts.truncate(TOP_ENTRIES);
        let top_5_tasks = task_counts
            .into_iter()
            .map(|(_, name, count)| TaskCountDto {
                name,
                count: count as u64,
            })
            .collect();

        let mut date_counts = application_repo.count_by_date().await?;
        date_counts.sort_by(|(a_date, a_count), (b_date, b_count)| {
            b_count.cmp(a_count).then(a_date.cmp(b_date))
        });
        date_counts.truncate(TOP_ENTRIES);
        let top_5_dates = date_counts
            .into_iter()
            .map(|(date, count)| DateCountDto {
                date,
                count: count as u64,
            })
            .collect();

        Ok(DashboardDto {
            total_active_tasks,
            applications_by_status,
            top_5_tasks,
            top_5_dates,
        })
    }
}
