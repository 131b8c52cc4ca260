use super::*;
use crate::app::SettingsItem;

pub fn render_settings_view(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let block = utils::panel("Settings", theme, true);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        Line::from(Span::styled("Display preferences", theme.title())),
        Line::raw(""),
    ];
    for (i, item) in SettingsItem::ALL.iter().enumerate() {
        let selected = i == app.settings_index;
        let enabled = app.setting_enabled(*item);
        let (mark, mark_style) = if enabled {
            ("[on] ", theme.success())
        } else {
            ("[off]", theme.muted())
        };
        let mut line = Line::from(vec![
            Span::styled(if selected { "▶ " } else { "  " }, theme.accent()),
            Span::styled(mark, mark_style),
            Span::styled(format!(" {}", item.label()), theme.text()),
        ]);
        if selected {
            line = line.style(theme.highlight());
        }
        lines.push(line);
    }
    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        "Changes are saved immediately.",
        theme.muted(),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}
