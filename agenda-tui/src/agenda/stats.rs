use std::collections::HashMap;

use time::{Date, Duration};

use crate::types::Activity;

use super::summary::duration_between;

/// Per-project breakdown for the dashboard and statistics view.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectStat {
    pub label: String,
    pub hours: f64,
    pub percentage: f64, // 0.0–100.0 of total logged this week
}

#[derive(Debug, Clone, PartialEq)]
pub struct DailyProjectStat {
    pub label: String,
    pub hours: f64,
    pub color_index: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayStat {
    pub date: Date,
    pub day_name: String,
    pub total_hours: f64,
    pub projects: Vec<DailyProjectStat>,
}

/// Monday and Sunday of the week containing `date`.
pub fn week_bounds(date: Date) -> (Date, Date) {
    let back = Duration::days(date.weekday().number_days_from_monday() as i64);
    let monday = date.checked_sub(back).unwrap_or(Date::MIN);
    (monday, monday.checked_add(Duration::days(6)).unwrap_or(Date::MAX))
}

fn logged_hours(activity: &Activity) -> Option<f64> {
    duration_between(activity.start_time, activity.end_time)
        .map(|d| d.whole_seconds() as f64 / 3600.0)
}

fn in_week<'a>(activities: &'a [Activity], date: Date) -> impl Iterator<Item = &'a Activity> {
    let (monday, sunday) = week_bounds(date);
    activities
        .iter()
        .filter(move |a| a.date >= monday && a.date <= sunday)
}

/// Hours per project for the week containing `date` (≥ 1% of total, sorted desc).
///
/// Drafts count here: this is where time went, not what has been submitted.
pub fn weekly_project_stats(activities: &[Activity], date: Date) -> Vec<ProjectStat> {
    let mut map: HashMap<String, f64> = HashMap::new();
    for activity in in_week(activities, date) {
        if let Some(hours) = logged_hours(activity) {
            *map.entry(activity.project_label().to_string()).or_insert(0.0) += hours;
        }
    }

    let total: f64 = map.values().sum();
    if total == 0.0 {
        return Vec::new();
    }

    let mut stats: Vec<ProjectStat> = map
        .into_iter()
        .filter_map(|(label, hours)| {
            let percentage = hours / total * 100.0;
            (percentage >= 1.0).then_some(ProjectStat {
                label,
                hours,
                percentage,
            })
        })
        .collect();

    stats.sort_by(|a, b| {
        b.hours
            .partial_cmp(&a.hours)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.label.cmp(&b.label))
    });
    stats
}

/// Monday..Sunday totals for the week containing `date`, split by project.
///
/// Colour indices follow the order of [`weekly_project_stats`] so a project has
/// the same colour in the pie and in the bars.
pub fn weekly_daily_stats(activities: &[Activity], date: Date) -> Vec<DayStat> {
    let project_order: Vec<String> = weekly_project_stats(activities, date)
        .into_iter()
        .map(|s| s.label)
        .collect();
    let color_of = |label: &str| {
        project_order
            .iter()
            .position(|l| l == label)
            .unwrap_or(project_order.len())
    };

    let (monday, _) = week_bounds(date);
    (0..7)
        .map_while(|offset| monday.checked_add(Duration::days(offset)))
        .map(|day| {
            let mut per_project: HashMap<String, f64> = HashMap::new();
            for activity in activities.iter().filter(|a| a.date == day) {
                if let Some(hours) = logged_hours(activity) {
                    *per_project
                        .entry(activity.project_label().to_string())
                        .or_insert(0.0) += hours;
                }
            }

            let mut projects: Vec<DailyProjectStat> = per_project
                .into_iter()
                .map(|(label, hours)| DailyProjectStat {
                    color_index: color_of(&label),
                    label,
                    hours,
                })
                .collect();
            projects.sort_by_key(|p| p.color_index);

            DayStat {
                date: day,
                day_name: crate::time_utils::weekday_short(day).to_string(),
                total_hours: projects.iter().map(|p| p.hours).sum(),
                projects,
            }
        })
        .collect()
}
