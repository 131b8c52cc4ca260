use super::*;
use crate::agenda::{week_bounds, DayStat};
use crate::time_utils::{format_date, format_hours_hm};

/// Project colours, shared by the pie slices, the daily bars and the dashboard gauges.
pub const PALETTE: [Color; 12] = [
    Color::Blue,
    Color::Green,
    Color::Yellow,
    Color::Magenta,
    Color::Cyan,
    Color::Red,
    Color::LightBlue,
    Color::LightGreen,
    Color::LightYellow,
    Color::LightMagenta,
    Color::LightCyan,
    Color::LightRed,
];

fn palette_color(index: usize) -> Color {
    PALETTE[index % PALETTE.len()]
}

pub fn render_statistics_view(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let (monday, sunday) = week_bounds(app.selected_date);
    let title = format!(
        "Statistics · week {} to {}",
        format_date(monday),
        format_date(sunday)
    );
    let block = utils::panel(&title, theme, false);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(inner);

    let padded = |r: Rect| Rect {
        x: r.x + 2,
        y: r.y + 1,
        width: r.width.saturating_sub(4),
        height: r.height.saturating_sub(1),
    };

    render_project_share(frame, padded(panels[0]), app, theme);
    render_week_bars(frame, padded(panels[1]), app, theme);
}

fn render_project_share(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    use tui_piechart::{PieChart, PieSlice};

    let stats = &app.weekly_stats_cache;
    if stats.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled("No hours logged this week", theme.muted()))
                .alignment(Alignment::Center),
            area,
        );
        return;
    }

    let slices: Vec<PieSlice> = stats
        .iter()
        .enumerate()
        .map(|(i, stat)| PieSlice::new(stat.label.as_str(), stat.percentage, palette_color(i)))
        .collect();

    // One legend row per project plus the total row.
    let legend_rows = stats.len() as u16 + 2;
    let pie_height = (area.width / 2)
        .min(area.height / 2)
        .min(area.height.saturating_sub(legend_rows));

    let split = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(pie_height), Constraint::Min(0)])
        .split(area);

    frame.render_widget(
        PieChart::new(slices)
            .show_legend(false)
            .show_percentages(false),
        split[0],
    );

    let total: f64 = stats.iter().map(|s| s.hours).sum();
    let mut legend: Vec<Line> = stats
        .iter()
        .enumerate()
        .map(|(i, stat)| {
            Line::from(vec![
                Span::styled("■ ", Style::default().fg(palette_color(i))),
                Span::styled(stat.label.clone(), theme.text()),
                Span::styled(
                    format!(
                        "  {} ({:.0}%)",
                        format_hours_hm(stat.hours),
                        stat.percentage
                    ),
                    theme.muted(),
                ),
            ])
        })
        .collect();
    legend.push(Line::raw(""));
    legend.push(Line::from(vec![
        Span::styled("Total ", theme.muted()),
        Span::styled(format_hours_hm(total), theme.title()),
    ]));

    frame.render_widget(
        Paragraph::new(legend).block(Block::default().padding(ratatui::widgets::Padding::top(1))),
        split[1],
    );
}

fn render_week_bars(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let days = &app.weekly_daily_stats_cache;
    let busiest = days.iter().map(|d| d.total_hours).fold(0.0_f64, f64::max);

    // Day label takes 4 columns and the hour total 9.
    let bar_width = (area.width as usize).saturating_sub(4 + 9).max(1);

    let mut lines: Vec<Line> = Vec::new();
    for day in days {
        let selected = day.date == app.selected_date;
        let label_style = if selected { theme.accent() } else { theme.text() };
        let mut spans = vec![Span::styled(format!("{:<4}", day.day_name), label_style)];
        spans.extend(bar_spans(day, busiest, bar_width, theme));
        lines.push(Line::from(spans));

        for project in &day.projects {
            lines.push(Line::from(vec![
                Span::raw("    "),
                Span::styled("■ ", Style::default().fg(palette_color(project.color_index))),
                Span::styled(
                    format!("{} {}", project.label, format_hours_hm(project.hours)),
                    theme.muted(),
                ),
            ]));
        }
    }

    frame.render_widget(Paragraph::new(lines), area);
}

/// Stacked bar for one day, scaled against the busiest day of the week.
fn bar_spans(day: &DayStat, busiest: f64, width: usize, theme: &Theme) -> Vec<Span<'static>> {
    if day.total_hours <= 0.0 || busiest <= 0.0 {
        return vec![
            Span::styled("─".repeat(width), theme.muted()),
            Span::raw(" ".repeat(9)),
        ];
    }

    let filled = (((day.total_hours / busiest) * width as f64).round() as usize).min(width);
    let mut left = filled;
    let mut spans = Vec::new();
    for (i, project) in day.projects.iter().enumerate() {
        if left == 0 {
            break;
        }
        let cols = if i + 1 == day.projects.len() {
            left
        } else {
            (((project.hours / day.total_hours) * filled as f64).round() as usize).min(left)
        };
        if cols > 0 {
            spans.push(Span::styled(
                "█".repeat(cols),
                Style::default().fg(palette_color(project.color_index)),
            ));
            left -= cols;
        }
    }
    if filled < width {
        spans.push(Span::styled("░".repeat(width - filled), theme.muted()));
    }
    spans.push(Span::styled(
        format!(" {:>8}", format_hours_hm(day.total_hours)),
        theme.text(),
    ));
    spans
}
