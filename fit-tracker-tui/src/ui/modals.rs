// fit-tracker-tui/src/ui/modals.rs
use crate::{
    app::{ActiveModal, App, EditField},
    ui::layout::centered_rect,
    ui::layout::centered_rect_fixed,
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Margin},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn render_modal(f: &mut Frame, app: &App) {
    match &app.active_modal {
        ActiveModal::Help => render_help_modal(f),
        ActiveModal::Alert { .. } => render_alert_modal(f, app),
        ActiveModal::EditWorkout { .. } => render_edit_workout_modal(f, app),
        ActiveModal::ConfirmDelete { .. } => render_confirmation_modal(f, app),
        ActiveModal::None => {} // Should not happen if called correctly
    }
}

fn render_help_modal(f: &mut Frame) {
    let block = Block::default()
        .title("Help (?)")
        .borders(Borders::ALL)
        .title_style(Style::new().bold())
        .border_style(Style::new().yellow());
    let area = centered_rect(60, 60, f.size());
    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let help_text = vec![
        Line::from("--- Add Form ---").style(Style::new().bold().underlined()),
        Line::from(" Type into the focused field"),
        Line::from(" Tab / Enter: Next Field"),
        Line::from(" Enter on [Add Workout]: Submit"),
        Line::from(" Esc: Jump to Workout List"),
        Line::from(""),
        Line::from("--- Workout List ---").style(Style::new().bold().underlined()),
        Line::from(" k / ↑: Navigate Up"),
        Line::from(" j / ↓: Navigate Down"),
        Line::from(" e / Enter: Edit Selected Workout"),
        Line::from(" d / Delete: Delete Selected Workout"),
        Line::from(" Tab / Esc: Jump to Add Form"),
        Line::from(" ?: Show/Hide This Help"),
        Line::from(" q: Quit Application"),
        Line::from(""),
        Line::from("--- Dialogs ---").style(Style::new().bold().underlined()),
        Line::from(" Tab / ↑↓: Navigate Fields"),
        Line::from(" Enter: Confirm / Next Field"),
        Line::from(" Esc: Cancel"),
        Line::from(""),
        Line::from(Span::styled(
            " Press Esc, ?, or Enter to close ",
            Style::new().italic().yellow(),
        )),
    ];

    let paragraph = Paragraph::new(help_text).wrap(Wrap { trim: false });
    f.render_widget(
        paragraph,
        area.inner(&Margin {
            vertical: 1,
            horizontal: 1,
        }),
    );
}

// The blocking validation alert: a message plus a dismiss hint, nothing else.
fn render_alert_modal(f: &mut Frame, app: &App) {
    if let ActiveModal::Alert { message } = &app.active_modal {
        let block = Block::default()
            .title("Alert")
            .borders(Borders::ALL)
            .border_style(Style::new().fg(Color::Red).add_modifier(Modifier::BOLD));

        let hint = "[Enter/Esc] OK";
        let text_width = (message.len().max(hint.len())) as u16;
        let modal_width = text_width + 4;
        let modal_height = 5;

        let area = centered_rect_fixed(modal_width, modal_height, f.size());
        f.render_widget(Clear, area);
        f.render_widget(block, area);

        let inner_area = area.inner(&Margin {
            vertical: 1,
            horizontal: 1,
        });
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Message
                Constraint::Length(1), // Dismiss hint
            ])
            .split(inner_area);

        f.render_widget(
            Paragraph::new(message.as_str()).alignment(ratatui::layout::Alignment::Center),
            chunks[0],
        );
        f.render_widget(
            Paragraph::new(hint)
                .alignment(ratatui::layout::Alignment::Center)
                .style(Style::new().italic()),
            chunks[1],
        );
    }
}

fn render_edit_workout_modal(f: &mut Frame, app: &App) {
    if let ActiveModal::EditWorkout {
        date_input,
        name_input,
        duration_input,
        focused_field,
        ..
    } = &app.active_modal
    {
        let block = Block::default()
            .title("Edit Workout")
            .borders(Borders::ALL)
            .border_style(Style::new().yellow());

        // --- Calculate Fixed Height ---
        let mut required_height = 2; // Borders/Padding
        required_height += 1; // Date label
        required_height += 1; // Date input
        required_height += 1; // Workout label
        required_height += 1; // Workout input
        required_height += 1; // Duration label
        required_height += 1; // Duration input
        required_height += 1; // Spacer
        required_height += 1; // Buttons row

        let fixed_width = 60;
        let area = centered_rect_fixed(fixed_width, required_height, f.size());
        f.render_widget(Clear, area);
        f.render_widget(block, area);

        let inner_area = area.inner(&Margin {
            vertical: 1,
            horizontal: 1,
        });

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Date label
                Constraint::Length(1), // Date input
                Constraint::Length(1), // Workout label
                Constraint::Length(1), // Workout input
                Constraint::Length(1), // Duration label
                Constraint::Length(1), // Duration input
                Constraint::Length(1), // Spacer
                Constraint::Length(1), // Buttons row
                Constraint::Min(0),    // Remainder
            ])
            .split(inner_area);

        let base_input_style = Style::default().fg(Color::White);
        let input_margin = Margin {
            vertical: 0,
            horizontal: 1,
        };

        f.render_widget(Paragraph::new("Date (YYYY-MM-DD):"), chunks[0]);
        let date_style = if *focused_field == EditField::Date {
            base_input_style.reversed()
        } else {
            base_input_style
        };
        let date_area = chunks[1].inner(&input_margin);
        f.render_widget(Paragraph::new(date_input.as_str()).style(date_style), date_area);

        f.render_widget(Paragraph::new("Workout:"), chunks[2]);
        let name_style = if *focused_field == EditField::Name {
            base_input_style.reversed()
        } else {
            base_input_style
        };
        let name_area = chunks[3].inner(&input_margin);
        f.render_widget(Paragraph::new(name_input.as_str()).style(name_style), name_area);

        f.render_widget(Paragraph::new("Duration (hours):"), chunks[4]);
        let duration_style = if *focused_field == EditField::Duration {
            base_input_style.reversed()
        } else {
            base_input_style
        };
        let duration_area = chunks[5].inner(&input_margin);
        f.render_widget(
            Paragraph::new(duration_input.as_str()).style(duration_style),
            duration_area,
        );

        // Buttons
        let base_button_style = Style::default().fg(Color::White);
        let button_layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[7]);
        let ok_button = Paragraph::new(" Update Workout ")
            .alignment(ratatui::layout::Alignment::Center)
            .style(if *focused_field == EditField::Confirm {
                base_button_style.reversed()
            } else {
                base_button_style
            });
        f.render_widget(ok_button, button_layout[0]);
        let cancel_button = Paragraph::new(" Cancel ")
            .alignment(ratatui::layout::Alignment::Center)
            .style(if *focused_field == EditField::Cancel {
                base_button_style.reversed()
            } else {
                base_button_style
            });
        f.render_widget(cancel_button, button_layout[1]);

        // --- Cursor Positioning ---
        let cursor_target = match focused_field {
            EditField::Date => Some((date_area, date_input.chars().count())),
            EditField::Name => Some((name_area, name_input.chars().count())),
            EditField::Duration => Some((duration_area, duration_input.chars().count())),
            _ => None, // No cursor for buttons
        };
        if let Some((field_area, len)) = cursor_target {
            let cursor_x = (field_area.x + len as u16).min(field_area.right().saturating_sub(1));
            f.set_cursor(cursor_x, field_area.y);
        }
    }
}

fn render_confirmation_modal(f: &mut Frame, app: &App) {
    if let ActiveModal::ConfirmDelete { workout_name, .. } = &app.active_modal {
        let block = Block::default()
            .title("Confirm Deletion")
            .borders(Borders::ALL)
            .border_style(Style::new().fg(Color::Red).add_modifier(Modifier::BOLD));

        let question = format!("Are you sure you want to delete '{workout_name}'?");
        let options = "[Y]es / [N]o (Esc)";

        // Calculate text width for centering
        let question_width = question.len() as u16;
        let options_width = options.len() as u16;
        let text_width = question_width.max(options_width);
        let modal_width = text_width + 4; // Add padding
        let modal_height = 5;

        let area = centered_rect_fixed(modal_width, modal_height, f.size());
        f.render_widget(Clear, area);
        f.render_widget(block, area);

        let inner_area = area.inner(&Margin {
            vertical: 1,
            horizontal: 1,
        });

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Question
                Constraint::Length(1), // Options
            ])
            .split(inner_area);

        f.render_widget(
            Paragraph::new(question).alignment(ratatui::layout::Alignment::Center),
            chunks[0],
        );
        f.render_widget(
            Paragraph::new(options).alignment(ratatui::layout::Alignment::Center),
            chunks[1],
        );
    }
}
