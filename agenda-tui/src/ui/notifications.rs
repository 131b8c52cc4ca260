use super::*;
use crate::app::NotificationKind;

const WIDTH: u16 = 48;

/// Stack of transient messages in the top-right corner, newest at the bottom.
pub fn render_notifications(frame: &mut Frame, app: &App, theme: &Theme) {
    let screen = frame.area();
    let width = WIDTH.min(screen.width);
    let mut y = screen.y + 2;

    for notification in &app.notifications {
        if y + 3 > screen.bottom() {
            break;
        }
        let (style, label) = match notification.kind {
            NotificationKind::Info => (theme.accent(), " Info "),
            NotificationKind::Success => (theme.success(), " Done "),
            NotificationKind::Error => (theme.error(), " Error "),
        };
        let area = Rect {
            x: screen.right().saturating_sub(width + 1),
            y,
            width,
            height: 3,
        };
        frame.render_widget(Clear, area);
        frame.render_widget(
            Paragraph::new(Span::styled(
                utils::truncate(&notification.message, width.saturating_sub(4) as usize),
                theme.text(),
            ))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(style)
                    .title(Span::styled(label, style))
                    .style(theme.base()),
            ),
            area,
        );
        y += 3;
    }
}
