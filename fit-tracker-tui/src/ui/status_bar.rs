// fit-tracker-tui/src/ui/status_bar.rs
use crate::app::{ActiveModal, App, PaneFocus};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

pub fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    // Remote failures are deliberately absent here; they only go to the log.
    let status_text = match app.active_modal {
        ActiveModal::None => match app.focus {
            PaneFocus::Form => {
                " [Tab/Enter] Next Field | [Enter on Add] Submit | [Esc] List | [?] Help (from list) "
            }
            PaneFocus::List => {
                " [Tab/Esc] Form | [↑↓/jk] Nav | [e]dit | [d]elete | [?] Help | [q]uit "
            }
        },
        ActiveModal::Help => " [Esc/Enter/?] Close Help ",
        ActiveModal::Alert { .. } => " [Esc/Enter] Dismiss ",
        ActiveModal::EditWorkout { .. } => " [Esc] Cancel | [Enter] Confirm/Next | [Tab/↑↓] Navigate ",
        ActiveModal::ConfirmDelete { .. } => " [Y] Delete | [N/Esc] Keep ",
    };

    let status_paragraph =
        Paragraph::new(status_text).style(Style::default().bg(Color::DarkGray).fg(Color::White));
    f.render_widget(status_paragraph, area);
}
