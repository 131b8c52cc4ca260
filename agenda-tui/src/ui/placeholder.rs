use super::*;

pub fn render_placeholder(frame: &mut Frame, area: Rect, section: Section, theme: &Theme) {
    let lines = vec![
        Line::raw(""),
        Line::from(Span::styled(section.title(), theme.title())),
        Line::raw(""),
        Line::from(Span::styled("This section is under development.", theme.muted())),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(utils::panel(section.title(), theme, false)),
        area,
    );
}
