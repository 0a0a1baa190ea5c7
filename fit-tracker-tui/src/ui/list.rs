// fit-tracker-tui/src/ui/list.rs
use crate::{
    app::{actions::format_duration, App, PaneFocus},
    ui::layout::theme_highlight_color,
};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

pub fn render_workout_list(f: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Workouts ({})", app.workouts.len()))
        .border_style(if app.focus == PaneFocus::List {
            Style::default().fg(theme_highlight_color(app))
        } else {
            Style::default().fg(Color::DarkGray)
        });

    if app.workouts.is_empty() {
        // First-load failures also land here: an empty list, no error banner.
        let empty = Paragraph::new("No workouts logged.").block(block);
        f.render_widget(empty, area);
        return;
    }

    let header = Row::new(vec![
        Cell::from("Date").style(Style::default().fg(Color::LightBlue)),
        Cell::from("Workout").style(Style::default().fg(Color::LightBlue)),
        Cell::from("Duration (hours)").style(Style::default().fg(Color::LightBlue)),
    ])
    .height(1)
    .bottom_margin(1);

    // Rows stay in service order; no client-side sorting.
    let rows: Vec<Row> = app
        .workouts
        .iter()
        .map(|w| {
            Row::new(vec![
                Cell::from(w.date.as_str()),
                Cell::from(w.workout_name.as_str()),
                Cell::from(format_duration(w.duration)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(12),
        Constraint::Min(20),
        Constraint::Length(16),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    f.render_stateful_widget(table, area, &mut app.table_state);
}
