use super::*;
use crate::app::ConfirmState;

pub fn render_confirm_dialog(frame: &mut Frame, state: &ConfirmState, theme: &Theme) {
    let width = (state.message.chars().count() as u16 + 8).clamp(36, 70);
    let area = utils::centered_rect(width, 7, frame.area());
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(Span::styled(state.message.clone(), theme.text())),
        Line::raw(""),
        Line::from(vec![
            Span::styled("[Y] ", theme.key_hint()),
            Span::styled(state.confirm_label.clone(), theme.error()),
            Span::raw("    "),
            Span::styled("[N] ", theme.key_hint()),
            Span::styled(state.cancel_label.clone(), theme.text()),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.warning())
        .title(Span::styled(format!(" {} ", state.title), theme.warning()))
        .padding(ratatui::widgets::Padding::uniform(1))
        .style(theme.base());

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(ratatui::widgets::Wrap { trim: true })
            .block(block),
        area,
    );
}
