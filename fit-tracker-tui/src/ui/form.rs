// fit-tracker-tui/src/ui/form.rs
use crate::{
    app::{ActiveModal, App, FormField, PaneFocus},
    ui::layout::theme_highlight_color,
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Style, Stylize},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render_add_form(f: &mut Frame, app: &App, area: Rect) {
    let form_focused = app.focus == PaneFocus::Form;

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Add Workout")
        .border_style(if form_focused {
            Style::default().fg(theme_highlight_color(app))
        } else {
            Style::default().fg(Color::DarkGray)
        });
    f.render_widget(block, area);

    let inner_area = area.inner(&Margin {
        vertical: 1,
        horizontal: 1,
    });

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Field labels
            Constraint::Length(1), // Field inputs
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Add button
        ])
        .split(inner_area);

    let column_constraints = [
        Constraint::Percentage(25),
        Constraint::Percentage(45),
        Constraint::Percentage(30),
    ];
    let label_columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(column_constraints)
        .split(rows[0]);
    let input_columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(column_constraints)
        .split(rows[1]);

    f.render_widget(Paragraph::new("Date (YYYY-MM-DD):"), label_columns[0]);
    f.render_widget(Paragraph::new("Workout:"), label_columns[1]);
    f.render_widget(Paragraph::new("Duration (hours):"), label_columns[2]);

    let base_input_style = Style::default().fg(Color::White);
    let input_margin = Margin {
        vertical: 0,
        horizontal: 1,
    };

    let field_style = |field: FormField| {
        if form_focused && app.form_focus == field {
            base_input_style.reversed()
        } else {
            base_input_style
        }
    };

    let date_area = input_columns[0].inner(&input_margin);
    f.render_widget(
        Paragraph::new(app.date_input.as_str()).style(field_style(FormField::Date)),
        date_area,
    );
    let name_area = input_columns[1].inner(&input_margin);
    f.render_widget(
        Paragraph::new(app.name_input.as_str()).style(field_style(FormField::Name)),
        name_area,
    );
    let duration_area = input_columns[2].inner(&input_margin);
    f.render_widget(
        Paragraph::new(app.duration_input.as_str()).style(field_style(FormField::Duration)),
        duration_area,
    );

    let add_button = Paragraph::new(" Add Workout ")
        .alignment(ratatui::layout::Alignment::Center)
        .style(field_style(FormField::Add));
    f.render_widget(add_button, rows[3]);

    // Cursor in the focused text field, but not under an open dialog
    if form_focused && app.active_modal == ActiveModal::None {
        let cursor_target = match app.form_focus {
            FormField::Date => Some((date_area, app.date_input.chars().count())),
            FormField::Name => Some((name_area, app.name_input.chars().count())),
            FormField::Duration => Some((duration_area, app.duration_input.chars().count())),
            FormField::Add => None,
        };
        if let Some((field_area, len)) = cursor_target {
            let cursor_x =
                (field_area.x + len as u16).min(field_area.right().saturating_sub(1));
            f.set_cursor(cursor_x, field_area.y);
        }
    }
}
