use super::*;
use crate::time_utils::format_hours_hm;

pub fn render_projects_view(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let title = format!("Projects ({})", app.projects.len());
    let block = utils::panel(&title, theme, false);

    if app.projects.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled("No projects available", theme.muted())).block(block),
            area,
        );
        return;
    }

    let items: Vec<ListItem> = app
        .projects
        .iter()
        .map(|project| {
            let week = app
                .weekly_stats_cache
                .iter()
                .find(|stat| stat.label == project.name);
            let hours = match week {
                Some(stat) => Span::styled(
                    format!("  {} this week", format_hours_hm(stat.hours)),
                    theme.success(),
                ),
                None => Span::styled("  no hours this week", theme.muted()),
            };
            ListItem::new(Line::from(vec![
                Span::styled("● ", theme.accent()),
                Span::styled(project.name.clone(), theme.text()),
                hours,
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
