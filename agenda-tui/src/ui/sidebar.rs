use super::*;
use crate::app::Category;

pub fn render_sidebar(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let collapsed = app.preferences.sidebar_collapsed;
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(theme.border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut items: Vec<ListItem> = Vec::new();
    let mut current_category: Option<Category> = None;

    for section in app.visible_sections() {
        let category = section.category();
        if current_category != Some(category) {
            current_category = Some(category);
            items.push(ListItem::new(Line::raw("")));
            if !collapsed {
                items.push(ListItem::new(Line::from(Span::styled(
                    format!(" {}", category.label()),
                    theme.muted(),
                ))));
            }
        }

        let active = section == app.section;
        let style = if active {
            theme.highlight().fg(theme.accent)
        } else {
            theme.text()
        };

        let mut spans = vec![Span::styled(format!(" {} ", section.icon()), style)];
        if !collapsed {
            spans.push(Span::styled(section.title(), style));
        }
        if let Some(badge) = app.section_badge(section) {
            let badge_text = if collapsed {
                format!("{badge}")
            } else {
                format!(" ({badge})")
            };
            spans.push(Span::styled(
                badge_text,
                Style::default()
                    .fg(theme.warning)
                    .add_modifier(Modifier::BOLD),
            ));
        }
        items.push(ListItem::new(Line::from(spans)));
    }

    frame.render_widget(List::new(items), inner);
}
