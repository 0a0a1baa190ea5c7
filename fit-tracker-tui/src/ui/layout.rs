// fit-tracker-tui/src/ui/layout.rs
use crate::{
    app::{ActiveModal, App},
    ui::{
        // Use sibling UI modules
        form::render_add_form,
        list::render_workout_list,
        modals::render_modal,
        status_bar::render_status_bar,
    },
};
use chrono::Utc;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    widgets::Paragraph,
    Frame,
};

// Main UI rendering function
pub fn render_ui(f: &mut Frame, app: &mut App) {
    let size = f.size();

    // Title on top, add form below it, list takes the rest, status bar at bottom
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(6), // Add form
            Constraint::Min(0),    // Workout list
            Constraint::Length(1), // Status Bar
        ])
        .split(size);

    render_title(f, main_chunks[0]);
    render_add_form(f, app, main_chunks[1]);
    render_workout_list(f, app, main_chunks[2]);
    render_status_bar(f, app, main_chunks[3]);

    // Render dialog last if active
    if app.active_modal != ActiveModal::None {
        render_modal(f, app);
    }
}

fn render_title(f: &mut Frame, area: Rect) {
    let today = Utc::now().date_naive().format("%Y-%m-%d");
    let title = Paragraph::new(format!("Fitness Tracker ({today})"))
        .style(Style::new().bold())
        .alignment(ratatui::layout::Alignment::Center);
    f.render_widget(title, area);
}

// The configured theme color for the focused pane border; unknown names fall
// back to yellow.
pub fn theme_highlight_color(app: &App) -> Color {
    match app
        .service
        .config
        .theme
        .highlight_color
        .to_lowercase()
        .as_str()
    {
        "red" => Color::Red,
        "green" => Color::Green,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "white" => Color::White,
        _ => Color::Yellow,
    }
}

/// Helper function to create a centered rectangle for modals
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let percent_x = percent_x.min(100);
    let percent_y = percent_y.min(100);
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Like `centered_rect`, but with a fixed size in cells.
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect {
        x: r.x + (r.width - width) / 2,
        y: r.y + (r.height - height) / 2,
        width,
        height,
    }
}
