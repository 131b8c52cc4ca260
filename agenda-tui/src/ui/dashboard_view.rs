use super::*;
use crate::time_utils::{format_hhmm, format_hours_hm, relative_day_label};
use ratatui::widgets::Gauge;

pub fn render_dashboard(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(5),
            Constraint::Min(8),
        ])
        .split(area);

    let greeting = Paragraph::new(vec![
        Line::from(Span::styled(app.greeting(), theme.title())),
        Line::from(Span::styled(
            "Here is what is happening with your activities.",
            theme.muted(),
        )),
    ]);
    frame.render_widget(greeting, rows[0].inner(ratatui::layout::Margin::new(1, 0)));

    render_cards(frame, rows[1], app, theme);

    let lower = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[2]);
    render_recent(frame, lower[0], app, theme);
    render_project_progress(frame, lower[1], app, theme);
}

fn render_cards(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let cards = app.dashboard_cards();
    let constraints = vec![Constraint::Ratio(1, cards.len() as u32); cards.len()];
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (card, col) in cards.iter().zip(cols.iter()) {
        let lines = vec![
            Line::from(Span::styled(
                card.value.clone(),
                theme.title().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(card.detail.clone(), theme.muted())),
        ];
        frame.render_widget(
            Paragraph::new(lines).block(utils::panel(&card.title, theme, false)),
            *col,
        );
    }
}

fn render_recent(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let recent = app.recent_activities();
    let block = utils::panel("Recent activities", theme, false);

    if recent.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled("No recent activities", theme.muted())).block(block),
            area,
        );
        return;
    }

    let width = area.width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = recent
        .iter()
        .map(|activity| {
            let status_style = if activity.is_submitted() {
                theme.success()
            } else {
                theme.warning()
            };
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(
                        format!(
                            "{} {}-{} ",
                            relative_day_label(activity.date, app.today),
                            format_hhmm(activity.start_time),
                            format_hhmm(activity.end_time)
                        ),
                        theme.muted(),
                    ),
                    Span::styled(activity.status.label(), status_style),
                ]),
                Line::from(Span::styled(
                    utils::truncate(
                        &format!("{} · {}", activity.project_label(), activity.description),
                        width,
                    ),
                    theme.text(),
                )),
            ])
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

fn render_project_progress(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let block = utils::panel("Project progress this week", theme, false);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let stats = &app.weekly_stats_cache;
    if stats.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled("No hours logged this week", theme.muted())),
            inner,
        );
        return;
    }

    let rows_per_stat = 2u16;
    let max_rows = (inner.height / rows_per_stat) as usize;
    for (i, stat) in stats.iter().take(max_rows).enumerate() {
        let y = inner.y + i as u16 * rows_per_stat;
        let label_area = Rect::new(inner.x, y, inner.width, 1);
        let gauge_area = Rect::new(inner.x, y + 1, inner.width, 1);
        let color = statistics_view::PALETTE[i % statistics_view::PALETTE.len()];

        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("■ ", Style::default().fg(color)),
                Span::styled(stat.label.clone(), theme.text()),
                Span::styled(format!("  {}", format_hours_hm(stat.hours)), theme.muted()),
            ])),
            label_area,
        );
        frame.render_widget(
            Gauge::default()
                .gauge_style(Style::default().fg(color))
                .ratio((stat.percentage / 100.0).clamp(0.0, 1.0))
                .label(format!("{:.0}%", stat.percentage)),
            gauge_area,
        );
    }
}
