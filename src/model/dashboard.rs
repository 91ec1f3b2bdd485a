//! DTOs for the admin dashboard aggregates.

use chrono::NaiveDate;
use serde::Serialize;

/// Count of applications per status. A total mapping over the fixed status
/// domain: all three keys are always present, zero-filled when no
/// application carries the status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusMetricsDto {
    pub default: u64,
    pub confirmed: u64,
    pub outdated: u64,
}

/// One entry of the top-tasks-by-application-volume aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskCountDto {
    pub name: String,
    pub count: u64,
}

/// One entry of the top-dates-by-application-volume aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateCountDto {
    pub date: NaiveDate,
    pub count: u64,
}

/// Full dashboard response, recomputed from the store on every request.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardDto {
    pub total_active_tasks: u64,
    pub applications_by_status: StatusMetricsDto,
    pub top_5_tasks: Vec<TaskCountDto>,
    pub top_5_dates: Vec<DateCountDto>,
}
