use super::*;
use crate::app::ProjectPickerState;
use ratatui::widgets::ListState;

pub fn render_project_picker(frame: &mut Frame, picker: &ProjectPickerState, theme: &Theme) {
    let area = utils::centered_rect(56, 18, frame.area());
    frame.render_widget(Clear, area);

    let block = utils::panel("Select project", theme, true).style(theme.base());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(inner);

    let (before, after) = picker.search.split_at_cursor();
    let search = Paragraph::new(Line::from(vec![
        Span::styled(before.to_string(), theme.text()),
        Span::styled("█", theme.accent()),
        Span::styled(after.to_string(), theme.text()),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.focused_border())
            .title(Span::styled(" Search ", theme.accent())),
    );
    frame.render_widget(search, rows[0]);

    if picker.filtered.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled("No matching projects", theme.muted()))
                .alignment(Alignment::Center),
            rows[1],
        );
        return;
    }

    let items: Vec<ListItem> = picker
        .filtered
        .iter()
        .map(|project| ListItem::new(Line::from(Span::styled(project.name.clone(), theme.text()))))
        .collect();
    let list = List::new(items)
        .highlight_style(theme.highlight())
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    state.select(Some(picker.index));
    frame.render_stateful_widget(list, rows[1], &mut state);
}
