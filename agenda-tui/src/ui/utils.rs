use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Padding},
};

use super::theme::Theme;

/// Helper function to create a centered rectangle
pub fn centered_rect(width: u16, height: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((r.height.saturating_sub(height)) / 2),
            Constraint::Length(height.min(r.height)),
            Constraint::Length((r.height.saturating_sub(height)) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((r.width.saturating_sub(width)) / 2),
            Constraint::Length(width.min(r.width)),
            Constraint::Length((r.width.saturating_sub(width)) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Bordered panel with a padded title, the frame every section body uses.
pub fn panel<'a>(title: &'a str, theme: &Theme, focused: bool) -> Block<'a> {
    let border = if focused {
        theme.focused_border()
    } else {
        theme.border()
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(Span::styled(format!(" {title} "), theme.title()))
        .padding(Padding::horizontal(1))
}

/// `key: label` pairs rendered as a single hint line.
pub fn key_hints<'a>(pairs: &[(&'a str, &'a str)], theme: &Theme) -> Line<'a> {
    let mut spans = Vec::with_capacity(pairs.len() * 2);
    for (key, label) in pairs {
        spans.push(Span::styled(*key, theme.key_hint()));
        spans.push(Span::styled(format!(": {label}  "), Style::default().fg(theme.muted)));
    }
    Line::from(spans)
}

/// Cut `s` to at most `max` chars, marking the cut with an ellipsis.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let kept: String = s.chars().take(max.saturating_sub(1)).collect();
    format!("{kept}…")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_fits_inside() {
        let outer = Rect::new(0, 0, 100, 40);
        let inner = centered_rect(60, 20, outer);
        assert_eq!(inner, Rect::new(20, 10, 60, 20));
    }

    #[test]
    fn truncate_counts_chars() {
        assert_eq!(truncate("Gestión", 10), "Gestión");
        assert_eq!(truncate("Sistema de Gestión", 8), "Sistema…");
    }
}
