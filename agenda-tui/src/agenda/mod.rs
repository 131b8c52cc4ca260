//! Agenda rules: date filtering, duration arithmetic, day summaries, weekly
//! statistics, permission checks and form validation. Everything here is pure
//! and operates on the types in [`crate::types`].

mod error;
pub mod permissions;
mod stats;
mod summary;
pub mod validation;

pub use error::AgendaError;
pub use stats::{
    week_bounds, weekly_daily_stats, weekly_project_stats, DailyProjectStat, DayStat, ProjectStat,
};
pub use summary::{
    duration_between, filter_by_date, format_duration, overlapping_ids, total_hours, DaySummary,
};
