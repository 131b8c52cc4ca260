use std::collections::{HashMap, HashSet};

use time::{Date, Duration, Time};

use crate::types::{Activity, ActivityStatus};

/// Activities logged on exactly `date`, ordered by start time.
pub fn filter_by_date(activities: &[Activity], date: Date) -> Vec<&Activity> {
    let mut day: Vec<&Activity> = activities.iter().filter(|a| a.date == date).collect();
    day.sort_by(|a, b| a.start_time.cmp(&b.start_time).then(a.id.cmp(&b.id)));
    day
}

/// Elapsed time between two times of day, or `None` unless `end` is strictly later.
pub fn duration_between(start: Time, end: Time) -> Option<Duration> {
    if end > start {
        Some(end - start)
    } else {
        None
    }
}

/// `"{h} h {m} min"`, minutes floored.
pub fn format_duration(duration: Duration) -> String {
    let total_minutes = duration.whole_minutes().max(0);
    format!("{} h {} min", total_minutes / 60, total_minutes % 60)
}

fn hours_of(activity: &Activity) -> f64 {
    duration_between(activity.start_time, activity.end_time)
        .map(|d| d.whole_seconds() as f64 / 3600.0)
        .unwrap_or(0.0)
}

/// Sum of `end - start` in hours over submitted activities.
pub fn total_hours<'a>(activities: impl IntoIterator<Item = &'a Activity>) -> f64 {
    activities
        .into_iter()
        .filter(|a| a.status == ActivityStatus::Submitted)
        .map(hours_of)
        .sum()
}

/// Figures shown above the daily activity list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DaySummary {
    pub hours: f64,
    pub submitted: usize,
    pub drafts: usize,
    pub active_projects: usize,
}

impl DaySummary {
    pub fn for_date(activities: &[Activity], date: Date) -> Self {
        let day = filter_by_date(activities, date);
        let submitted = day.iter().filter(|a| a.is_submitted()).count();
        let active_projects = day
            .iter()
            .map(|a| a.project_id.as_deref())
            .collect::<HashSet<_>>()
            .len();

        Self {
            hours: total_hours(day.iter().copied()),
            submitted,
            drafts: day.len() - submitted,
            active_projects,
        }
    }

    pub fn total(&self) -> usize {
        self.submitted + self.drafts
    }
}

/// Ids of activities whose time range overlaps another activity of the same
/// owner on the same date.
pub fn overlapping_ids(activities: &[Activity]) -> HashSet<String> {
    let mut overlapping = HashSet::new();

    let mut by_owner_and_day: HashMap<(&str, Date), Vec<&Activity>> = HashMap::new();
    for activity in activities {
        by_owner_and_day
            .entry((activity.user_id.as_str(), activity.date))
            .or_default()
            .push(activity);
    }

    for (_, mut day) in by_owner_and_day {
        if day.len() < 2 {
            continue;
        }
        day.sort_by_key(|a| a.start_time);

        for (i, current) in day.iter().enumerate() {
            for next in day.iter().skip(i + 1) {
                if next.start_time < current.end_time {
                    overlapping.insert(current.id.clone());
                    overlapping.insert(next.id.clone());
                } else {
                    break;
                }
            }
        }
    }

    overlapping
}
