use super::*;
use crate::time_utils::format_hours_hm;

pub fn render_profile_view(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let user = &app.current_user;
    let week_hours: f64 = app.weekly_stats_cache.iter().map(|s| s.hours).sum();

    let row = |label: &'static str, value: String| {
        Line::from(vec![
            Span::styled(format!("{label:<14}"), theme.muted()),
            Span::styled(value, theme.text()),
        ])
    };

    let mut lines = vec![
        Line::from(Span::styled(user.display_name(), theme.title())),
        Line::raw(""),
        row("First names", user.first_names.clone()),
        row("Last name", user.last_name.clone()),
        row("Role", user.role.label().to_string()),
        row("User id", user.id.clone()),
        Line::raw(""),
        row("Projects", app.projects.len().to_string()),
    ];
    // The weekly totals follow the shown agenda, so only report them for our own.
    if app.viewing_user.is_none() {
        lines.push(row("This week", format_hours_hm(week_hours)));
    }

    frame.render_widget(
        Paragraph::new(lines).block(utils::panel("My Profile", theme, false)),
        area,
    );
}
