use crate::app::{App, Overlay, Section};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

mod confirm_dialog;
mod daily_view;
mod dashboard_view;
mod form_dialog;
mod header;
mod notifications;
mod personnel_view;
mod placeholder;
mod profile_view;
mod project_picker;
mod projects_view;
mod settings_view;
mod sidebar;
mod statistics_view;
pub(super) mod theme;
pub(super) mod utils;

use theme::Theme;

const SIDEBAR_WIDTH: u16 = 26;
const SIDEBAR_COLLAPSED_WIDTH: u16 = 6;

pub fn render(frame: &mut Frame, app: &mut App) {
    let theme = Theme::from_preferences(&app.preferences);
    frame.render_widget(Block::default().style(theme.base()), frame.area());

    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    header::render_header(frame, root[0], app, &theme);

    let sidebar_width = if app.preferences.sidebar_collapsed {
        SIDEBAR_COLLAPSED_WIDTH
    } else {
        SIDEBAR_WIDTH
    };
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(sidebar_width), Constraint::Min(0)])
        .split(root[1]);

    sidebar::render_sidebar(frame, columns[0], app, &theme);

    let body = columns[1];
    match app.section {
        Section::Dashboard => dashboard_view::render_dashboard(frame, body, app, &theme),
        Section::DailyActivities => daily_view::render_daily_view(frame, body, app, &theme),
        Section::Projects => projects_view::render_projects_view(frame, body, app, &theme),
        Section::Personnel => personnel_view::render_personnel_view(frame, body, app, &theme),
        Section::Statistics => statistics_view::render_statistics_view(frame, body, app, &theme),
        Section::Profile => profile_view::render_profile_view(frame, body, app, &theme),
        Section::Settings => settings_view::render_settings_view(frame, body, app, &theme),
        Section::Assignments | Section::Reports => {
            placeholder::render_placeholder(frame, body, app.section, &theme)
        }
    }

    render_footer(frame, root[2], app, &theme);

    match &app.overlay {
        Some(Overlay::ActivityForm(form)) => {
            form_dialog::render_form_dialog(frame, form, &theme);
        }
        Some(Overlay::ProjectPicker(picker)) => {
            project_picker::render_project_picker(frame, picker, &theme);
        }
        Some(Overlay::Confirm(state)) => {
            confirm_dialog::render_confirm_dialog(frame, state, &theme);
        }
        None => {}
    }

    notifications::render_notifications(frame, app, &theme);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let mut pairs: Vec<(&str, &str)> = match (&app.overlay, app.section) {
        (Some(Overlay::ActivityForm(_)), _) => vec![
            ("Tab", "Next field"),
            ("Enter", "Save / pick project"),
            ("Esc", "Cancel"),
        ],
        (Some(Overlay::ProjectPicker(_)), _) => vec![
            ("Type", "Filter"),
            ("↑↓", "Move"),
            ("Enter", "Select"),
            ("Esc", "Back"),
        ],
        (Some(Overlay::Confirm(_)), _) => vec![("Y / Enter", "Confirm"), ("N / Esc", "Cancel")],
        (None, _) if app.date_input.is_some() => vec![("Enter", "Go to date"), ("Esc", "Cancel")],
        (None, Section::DailyActivities) => vec![
            ("←→", "Day"),
            ("T", "Today"),
            ("G", "Go to date"),
            ("N", "New"),
            ("E", "Edit"),
            ("Space", "Toggle status"),
            ("X", "Delete"),
        ],
        (None, Section::Dashboard) => vec![("←→", "Day"), ("T", "Today"), ("Enter", "Open day")],
        (None, Section::Personnel) => vec![("↑↓", "Move"), ("Enter", "View agenda")],
        (None, Section::Settings) => vec![("↑↓", "Move"), ("Space", "Toggle")],
        (None, _) => vec![],
    };

    if app.overlay.is_none() && app.date_input.is_none() {
        pairs.extend([
            ("Tab", "Section"),
            ("B", "Sidebar"),
            ("L", "Log out"),
            ("Q", "Quit"),
        ]);
    }

    let hints = Paragraph::new(utils::key_hints(&pairs, theme)).alignment(Alignment::Center);
    frame.render_widget(hints, area);
}
