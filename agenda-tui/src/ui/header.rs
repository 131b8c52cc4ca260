use super::*;

const LABEL: &str = " Agenda";

pub fn render_header(frame: &mut Frame, area: Rect, app: &mut App, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(theme.border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(LABEL.len() as u16 + 2),
            Constraint::Min(0),
            Constraint::Length(40),
        ])
        .split(inner);

    // Throbber spins while a load is in flight.
    let throbber_area = Rect {
        x: cols[0].x + 1,
        y: cols[0].y,
        width: 1,
        height: 1,
    };
    let label_area = Rect {
        x: throbber_area.x + 1,
        y: cols[0].y,
        width: cols[0].width.saturating_sub(2),
        height: 1,
    };
    let throbber = throbber_widgets_tui::Throbber::default()
        .style(theme.accent())
        .throbber_style(theme.accent())
        .throbber_set(throbber_widgets_tui::BRAILLE_SIX)
        .use_type(if app.is_loading {
            throbber_widgets_tui::WhichUse::Spin
        } else {
            throbber_widgets_tui::WhichUse::Full
        });
    frame.render_stateful_widget(throbber, throbber_area, &mut app.throbber_state);
    frame.render_widget(
        Paragraph::new(Span::styled(LABEL, theme.title())),
        label_area,
    );

    let mut context = vec![Span::styled(
        format!("  {}", app.section.title()),
        theme.text(),
    )];
    if let Some(viewing) = &app.viewing_user {
        context.push(Span::styled(
            format!("  · viewing {}", viewing.display_name()),
            theme.warning(),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(context)), cols[1]);

    let mode = if app.preferences.dark_mode {
        "☾ dark"
    } else {
        "☀ light"
    };
    let mut user = vec![
        Span::styled(app.current_user.display_name(), theme.text()),
        Span::styled(format!(" ({})", app.current_user.role.label()), theme.muted()),
        Span::styled(format!("  {mode}"), theme.muted()),
    ];
    if app.preferences.large_font {
        user.push(Span::styled("  A+", theme.muted()));
    }
    frame.render_widget(
        Paragraph::new(Line::from(user)).alignment(Alignment::Right),
        cols[2],
    );
}
