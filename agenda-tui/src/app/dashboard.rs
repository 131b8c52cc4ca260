use super::*;
use crate::agenda::total_hours;
use crate::time_utils::{format_hours_hm, relative_day_label};

pub const RECENT_ACTIVITY_LIMIT: usize = 6;

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardCard {
    pub title: String,
    pub value: String,
    pub detail: String,
}

impl App {
    pub fn greeting(&self) -> String {
        format!("Welcome back, {}", self.current_user.first_name())
    }

    /// Summary cards, anchored on the selected date and its week.
    pub fn dashboard_cards(&self) -> Vec<DashboardCard> {
        let day = self.day_activities();
        let pending = day.iter().filter(|a| !a.is_submitted()).count();

        let (week_start, week_end) = week_bounds(self.selected_date);
        let week: Vec<&Activity> = self
            .activities
            .iter()
            .filter(|a| a.date >= week_start && a.date <= week_end)
            .collect();
        let submitted_week = week.iter().filter(|a| a.is_submitted()).count();
        let active_projects = week
            .iter()
            .filter_map(|a| a.project_id.as_deref())
            .collect::<HashSet<_>>()
            .len();

        let mut cards = vec![
            DashboardCard {
                title: format!(
                    "Activities {}",
                    relative_day_label(self.selected_date, self.today)
                ),
                value: day.len().to_string(),
                detail: format!("{pending} pending"),
            },
            DashboardCard {
                title: "Active projects".to_string(),
                value: active_projects.to_string(),
                detail: "this week".to_string(),
            },
            DashboardCard {
                title: "Submitted this week".to_string(),
                value: submitted_week.to_string(),
                detail: format_hours_hm(total_hours(week.iter().copied())),
            },
        ];

        cards.push(if self.is_supervisor() {
            DashboardCard {
                title: "Personnel".to_string(),
                value: self.personnel.len().to_string(),
                detail: "under supervision".to_string(),
            }
        } else {
            DashboardCard {
                title: "Assignments".to_string(),
                value: self.projects.len().to_string(),
                detail: "available projects".to_string(),
            }
        });

        cards
    }

    /// Latest activities up to the selected date, newest first.
    pub fn recent_activities(&self) -> Vec<&Activity> {
        let mut recent: Vec<&Activity> = self
            .activities
            .iter()
            .filter(|a| a.date <= self.selected_date)
            .collect();
        recent.sort_by(|a, b| {
            b.date
                .cmp(&a.date)
                .then(b.start_time.cmp(&a.start_time))
                .then(a.id.cmp(&b.id))
        });
        recent.truncate(RECENT_ACTIVITY_LIMIT);
        recent
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::types::{ActivityStatus, Role};
    use time::macros::time;

    fn seeded(role: Role) -> (App, tempfile::TempDir) {
        let (mut app, dir) = test_app(role);
        let mut rows = Vec::new();
        for day in 0..4 {
            let date = TODAY - Duration::days(day);
            rows.push(activity(
                &format!("m{day}"),
                "u-1",
                date,
                time!(9:00),
                time!(11:00),
                ActivityStatus::Submitted,
            ));
            rows.push(activity(
                &format!("a{day}"),
                "u-1",
                date,
                time!(14:00),
                time!(15:00),
                ActivityStatus::Draft,
            ));
        }
        rows.push(activity(
            "future",
            "u-1",
            TODAY + Duration::days(1),
            time!(9:00),
            time!(10:00),
            ActivityStatus::Draft,
        ));
        app.set_activities(rows, app.wanted_range());
        (app, dir)
    }

    #[test]
    fn greeting_uses_first_name() {
        let (app, _dir) = test_app(Role::Employee);
        assert_eq!(app.greeting(), "Welcome back, Ana");
    }

    #[test]
    fn recent_activities_are_newest_first_and_capped() {
        let (app, _dir) = seeded(Role::Employee);
        let ids: Vec<_> = app
            .recent_activities()
            .iter()
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(ids, vec!["a0", "m0", "a1", "m1", "a2", "m2"]);
    }

    #[test]
    fn cards_follow_role() {
        let (app, _dir) = seeded(Role::Employee);
        let cards = app.dashboard_cards();
        assert_eq!(cards.len(), 4);
        assert_eq!(cards[0].title, "Activities Today");
        assert_eq!(cards[0].value, "2");
        assert_eq!(cards[0].detail, "1 pending");
        assert_eq!(cards[1].value, "1");
        // Wednesday through Saturday each hold one submitted activity.
        assert_eq!(cards[2].value, "4");
        assert_eq!(cards[3].title, "Assignments");

        let (sup, _dir) = seeded(Role::Supervisor);
        assert_eq!(sup.dashboard_cards()[3].title, "Personnel");
    }
}
