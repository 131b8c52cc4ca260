use super::*;
use crate::agenda::validation::{
    duration_preview, DurationPreview, FormField, MAX_DESCRIPTION_CHARS,
};
use crate::agenda::format_duration;
use crate::app::{FormState, TextInput};

// Wide enough that the longest field message fits under a half-width time input.
const DIALOG_WIDTH: u16 = 92;
const DIALOG_HEIGHT: u16 = 22;

pub fn render_form_dialog(frame: &mut Frame, form: &FormState, theme: &Theme) {
    let area = utils::centered_rect(DIALOG_WIDTH, DIALOG_HEIGHT, frame.area());
    frame.render_widget(Clear, area);

    let block = utils::panel(form.title(), theme, true).style(theme.base());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // date
            Constraint::Length(3), // start + end
            Constraint::Length(1), // duration preview
            Constraint::Length(3), // project
            Constraint::Min(4),    // description
        ])
        .split(inner);

    render_text_field(frame, rows[0], form, FormField::Date, &form.date, theme);

    let times = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);
    render_text_field(frame, times[0], form, FormField::StartTime, &form.start_time, theme);
    render_text_field(frame, times[1], form, FormField::EndTime, &form.end_time, theme);

    render_duration(frame, rows[2], form, theme);
    render_project_field(frame, rows[3], form, theme);
    render_text_field(
        frame,
        rows[4],
        form,
        FormField::Description,
        &form.description,
        theme,
    );
}

fn field_block<'a>(form: &FormState, field: FormField, title: &'a str, theme: &Theme) -> Block<'a> {
    let focused = form.focused_field == field;
    let border = if form.errors.get(field).is_some() {
        theme.error()
    } else if focused {
        theme.focused_border()
    } else {
        theme.border()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(Span::styled(title, if focused { theme.accent() } else { theme.muted() }));
    match form.errors.get(field) {
        Some(message) => block.title_bottom(Span::styled(format!(" {message} "), theme.error())),
        None => block,
    }
}

fn render_text_field(
    frame: &mut Frame,
    area: Rect,
    form: &FormState,
    field: FormField,
    input: &TextInput,
    theme: &Theme,
) {
    let title = if field == FormField::Description {
        format!(
            " {} ({} / {MAX_DESCRIPTION_CHARS}) ",
            field.label(),
            form.draft().description_len()
        )
    } else {
        format!(" {} ", field.label())
    };

    let line = if form.focused_field == field {
        let (before, after) = input.split_at_cursor();
        Line::from(vec![
            Span::styled(before.to_string(), theme.text()),
            Span::styled("█", theme.accent()),
            Span::styled(after.to_string(), theme.text()),
        ])
    } else {
        Line::from(Span::styled(input.value.clone(), theme.text()))
    };

    let mut paragraph = Paragraph::new(line).block(field_block(form, field, &title, theme));
    if field == FormField::Description {
        paragraph = paragraph.wrap(ratatui::widgets::Wrap { trim: false });
    }
    frame.render_widget(paragraph, area);
}

fn render_duration(frame: &mut Frame, area: Rect, form: &FormState, theme: &Theme) {
    let span = match duration_preview(&form.start_time.value, &form.end_time.value) {
        DurationPreview::Valid(d) => Span::styled(format!("Duration: {}", format_duration(d)), theme.muted()),
        DurationPreview::Invalid => Span::styled("Invalid time range", theme.error()),
        DurationPreview::Empty => Span::raw(""),
    };
    frame.render_widget(Paragraph::new(Line::from(span)).alignment(Alignment::Right), area);
}

fn render_project_field(frame: &mut Frame, area: Rect, form: &FormState, theme: &Theme) {
    let content = match &form.project {
        Some(project) => Span::styled(project.name.clone(), theme.text()),
        None => Span::styled("No project (Enter to choose)", theme.muted()),
    };
    let title = format!(" {} ", FormField::Project.label());
    frame.render_widget(
        Paragraph::new(Line::from(content)).block(field_block(form, FormField::Project, &title, theme)),
        area,
    );
}
