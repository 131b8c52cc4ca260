use super::*;
use ratatui::widgets::ListState;

pub fn render_personnel_view(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let title = format!("Personnel ({})", app.personnel.len());
    let block = utils::panel(&title, theme, true);

    if app.personnel.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled("No personnel loaded", theme.muted())).block(block),
            area,
        );
        return;
    }

    let viewing = app.viewing_user.as_ref().map(|u| u.id.as_str());
    let items: Vec<ListItem> = app
        .personnel
        .iter()
        .map(|person| {
            let mut spans = vec![
                Span::styled(person.display_name(), theme.text()),
                Span::styled(format!("  {}", person.role.label()), theme.muted()),
            ];
            if viewing == Some(person.id.as_str()) {
                spans.push(Span::styled("  (viewing)", theme.accent()));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(theme.highlight())
        .highlight_symbol("▶ ");
    let mut state = ListState::default();
    state.select(Some(app.personnel_index));
    frame.render_stateful_widget(list, area, &mut state);
}
