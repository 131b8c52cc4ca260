use super::*;
use crate::agenda::{duration_between, format_duration};
use crate::time_utils::{format_date, format_hhmm, format_hours_hm, relative_day_label};
use crate::types::Activity;

pub fn render_daily_view(frame: &mut Frame, area: Rect, app: &mut App, theme: &Theme) {
    let owner = app.agenda_owner().display_name();
    let title = format!("Daily Activities · {owner}");
    let block = utils::panel(&title, theme, true);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    render_date_bar(frame, rows[0], app, theme);
    render_summary(frame, rows[1], app, theme);
    render_activity_list(frame, rows[3], app, theme);
}

fn render_date_bar(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let line = match &app.date_input {
        Some(input) => {
            let (before, after) = input.split_at_cursor();
            Line::from(vec![
                Span::styled("Go to date (YYYY-MM-DD): ", theme.accent()),
                Span::styled(before.to_string(), theme.text()),
                Span::styled("█", theme.accent()),
                Span::styled(after.to_string(), theme.text()),
            ])
        }
        None => Line::from(vec![
            Span::styled("◀ ", theme.muted()),
            Span::styled(format_date(app.selected_date), theme.title()),
            Span::styled(
                format!("  {}", relative_day_label(app.selected_date, app.today)),
                theme.muted(),
            ),
            Span::styled(" ▶", theme.muted()),
        ]),
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn render_summary(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let summary = app.day_summary();
    let line = Line::from(vec![
        Span::styled("Total hours: ", theme.muted()),
        Span::styled(format!("{:.1}", summary.hours), theme.text()),
        Span::styled(format!(" ({})", format_hours_hm(summary.hours)), theme.muted()),
        Span::styled("   Completed: ", theme.muted()),
        Span::styled(summary.submitted.to_string(), theme.success()),
        Span::styled("   Pending: ", theme.muted()),
        Span::styled(summary.drafts.to_string(), theme.warning()),
        Span::styled("   Projects: ", theme.muted()),
        Span::styled(summary.active_projects.to_string(), theme.text()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_activity_list(frame: &mut Frame, area: Rect, app: &mut App, theme: &Theme) {
    app.day_view_height = area.height as usize;

    let rows_per_item = app.rows_per_activity();
    let day = app.day_activities();
    if day.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled("No activities for this date", theme.muted()))
                .alignment(Alignment::Center),
            area,
        );
        return;
    }

    let visible = (area.height as usize / rows_per_item).max(1);
    let mut lines: Vec<Line> = Vec::new();
    for (idx, activity) in day.iter().enumerate().skip(app.day_scroll).take(visible) {
        let focused = app.focused_activity_index == Some(idx);
        let overlapping = app.overlapping_activity_ids.contains(&activity.id);
        let (first, second) = activity_lines(activity, focused, overlapping, area.width, theme);
        lines.push(first);
        lines.push(second);
        for _ in 2..rows_per_item {
            lines.push(Line::raw(""));
        }
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn activity_lines(
    activity: &Activity,
    focused: bool,
    overlapping: bool,
    width: u16,
    theme: &Theme,
) -> (Line<'static>, Line<'static>) {
    let time_style = if overlapping {
        theme.error()
    } else {
        theme.warning()
    };
    let duration = duration_between(activity.start_time, activity.end_time)
        .map(format_duration)
        .unwrap_or_else(|| "invalid range".to_string());
    let status_style = if activity.is_submitted() {
        theme.success()
    } else {
        theme.warning()
    };
    let marker = if focused { "▶ " } else { "  " };

    let mut first = vec![Span::styled(marker, theme.accent())];
    if overlapping {
        first.push(Span::styled("⚠ ", theme.error()));
    }
    first.extend([
        Span::styled(
            format!(
                "{} - {}",
                format_hhmm(activity.start_time),
                format_hhmm(activity.end_time)
            ),
            time_style,
        ),
        Span::styled(format!("  [{duration}]"), theme.muted()),
        Span::styled(format!("  {}", activity.project_label()), theme.accent()),
        Span::styled(format!("  {}", activity.status.label()), status_style),
    ]);

    let max_description = (width as usize).saturating_sub(6);
    let second = vec![
        Span::raw("    "),
        Span::styled(
            utils::truncate(&activity.description, max_description),
            theme.text(),
        ),
    ];

    let (mut first, mut second) = (Line::from(first), Line::from(second));
    if focused {
        first = first.style(theme.highlight());
        second = second.style(theme.highlight());
    }
    (first, second)
}
