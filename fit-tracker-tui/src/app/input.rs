// src/app/input.rs
use super::navigation::{list_next, list_previous};
use super::state::{ActiveModal, App, EditField, FormField, PaneFocus};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

// Main key event handler method on App
impl App {
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // Handle based on active dialog first
        if self.active_modal != ActiveModal::None {
            self.handle_modal_input(key);
            return;
        }

        match self.focus {
            PaneFocus::Form => self.handle_form_input(key),
            PaneFocus::List => self.handle_list_input(key),
        }
    }

    // --- Dialog Input Handling ---
    fn handle_modal_input(&mut self, key: KeyEvent) {
        match self.active_modal {
            ActiveModal::Help => {
                if matches!(
                    key.code,
                    KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?') | KeyCode::Char('q')
                ) {
                    self.active_modal = ActiveModal::None;
                }
            }
            ActiveModal::Alert { .. } => {
                // Blocking alert: nothing else happens until it is dismissed.
                if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                    self.active_modal = ActiveModal::None;
                }
            }
            ActiveModal::EditWorkout { .. } => self.handle_edit_modal_input(key),
            ActiveModal::ConfirmDelete { .. } => self.handle_confirm_delete_input(key),
            ActiveModal::None => {}
        }
    }

    // --- Add Form Input Handling ---
    fn handle_form_input(&mut self, key: KeyEvent) {
        match self.form_focus {
            FormField::Date => match key.code {
                KeyCode::Char(c) => self.date_input.push(c),
                KeyCode::Backspace => {
                    self.date_input.pop();
                }
                KeyCode::Enter | KeyCode::Tab | KeyCode::Down => {
                    self.form_focus = FormField::Name;
                }
                KeyCode::BackTab | KeyCode::Up => self.form_focus = FormField::Add, // Wrap around
                KeyCode::Esc => self.focus = PaneFocus::List,
                _ => {}
            },
            FormField::Name => match key.code {
                KeyCode::Char(c) => self.name_input.push(c),
                KeyCode::Backspace => {
                    self.name_input.pop();
                }
                KeyCode::Enter | KeyCode::Tab | KeyCode::Down => {
                    self.form_focus = FormField::Duration;
                }
                KeyCode::BackTab | KeyCode::Up => self.form_focus = FormField::Date,
                KeyCode::Esc => self.focus = PaneFocus::List,
                _ => {}
            },
            FormField::Duration => match key.code {
                // Digits-and-dot filter, the terminal analog of a number input
                KeyCode::Char(c) if "0123456789.".contains(c) => self.duration_input.push(c),
                KeyCode::Backspace => {
                    self.duration_input.pop();
                }
                KeyCode::Enter | KeyCode::Tab | KeyCode::Down => {
                    self.form_focus = FormField::Add;
                }
                KeyCode::BackTab | KeyCode::Up => self.form_focus = FormField::Name,
                KeyCode::Esc => self.focus = PaneFocus::List,
                _ => {}
            },
            FormField::Add => match key.code {
                KeyCode::Enter => self.submit_add_workout(),
                KeyCode::Tab | KeyCode::Down => self.form_focus = FormField::Date, // Wrap around
                KeyCode::BackTab | KeyCode::Up => self.form_focus = FormField::Duration,
                KeyCode::Esc => self.focus = PaneFocus::List,
                _ => {}
            },
        }
    }

    // --- Workout List Input Handling ---
    fn handle_list_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.active_modal = ActiveModal::Help,
            KeyCode::Char('k') | KeyCode::Up => list_previous(self),
            KeyCode::Char('j') | KeyCode::Down => list_next(self),
            KeyCode::Tab | KeyCode::Esc => self.focus = PaneFocus::Form,
            KeyCode::Char('e') | KeyCode::Enter => self.open_edit_modal(),
            KeyCode::Char('d') | KeyCode::Delete => self.open_delete_modal(),
            _ => {}
        }
    }

    // --- Edit Dialog ---
    fn handle_edit_modal_input(&mut self, key: KeyEvent) {
        let mut should_submit = false;

        if let ActiveModal::EditWorkout {
            ref mut date_input,
            ref mut name_input,
            ref mut duration_input,
            ref mut focused_field,
            ..
        } = self.active_modal
        {
            // Handle Shift+Tab for reverse navigation
            if key.modifiers == KeyModifiers::SHIFT && key.code == KeyCode::BackTab {
                *focused_field = match *focused_field {
                    EditField::Date => EditField::Cancel, // Wrap around up
                    EditField::Name => EditField::Date,
                    EditField::Duration => EditField::Name,
                    EditField::Confirm => EditField::Duration,
                    EditField::Cancel => EditField::Confirm,
                };
            } else {
                match *focused_field {
                    EditField::Date => match key.code {
                        KeyCode::Char(c) => date_input.push(c),
                        KeyCode::Backspace => {
                            date_input.pop();
                        }
                        KeyCode::Enter | KeyCode::Tab | KeyCode::Down => {
                            *focused_field = EditField::Name;
                        }
                        KeyCode::Up => *focused_field = EditField::Cancel,
                        KeyCode::Esc => {
                            self.active_modal = ActiveModal::None;
                            return;
                        }
                        _ => {}
                    },
                    EditField::Name => match key.code {
                        KeyCode::Char(c) => name_input.push(c),
                        KeyCode::Backspace => {
                            name_input.pop();
                        }
                        KeyCode::Enter | KeyCode::Tab | KeyCode::Down => {
                            *focused_field = EditField::Duration;
                        }
                        KeyCode::Up => *focused_field = EditField::Date,
                        KeyCode::Esc => {
                            self.active_modal = ActiveModal::None;
                            return;
                        }
                        _ => {}
                    },
                    EditField::Duration => match key.code {
                        KeyCode::Char(c) if "0123456789.".contains(c) => duration_input.push(c),
                        KeyCode::Backspace => {
                            duration_input.pop();
                        }
                        KeyCode::Enter | KeyCode::Tab | KeyCode::Down => {
                            *focused_field = EditField::Confirm;
                        }
                        KeyCode::Up => *focused_field = EditField::Name,
                        KeyCode::Esc => {
                            self.active_modal = ActiveModal::None;
                            return;
                        }
                        _ => {}
                    },
                    EditField::Confirm => match key.code {
                        KeyCode::Enter => {
                            should_submit = true;
                        }
                        KeyCode::Left | KeyCode::Backspace => *focused_field = EditField::Cancel,
                        KeyCode::Up => *focused_field = EditField::Duration,
                        KeyCode::Right | KeyCode::Tab | KeyCode::Down => {
                            *focused_field = EditField::Cancel;
                        }
                        KeyCode::Esc => {
                            self.active_modal = ActiveModal::None;
                            return;
                        }
                        _ => {}
                    },
                    EditField::Cancel => match key.code {
                        KeyCode::Enter | KeyCode::Esc => {
                            self.active_modal = ActiveModal::None;
                            return;
                        }
                        KeyCode::Right => *focused_field = EditField::Confirm,
                        KeyCode::Up => *focused_field = EditField::Duration,
                        KeyCode::Left | KeyCode::Backspace => *focused_field = EditField::Confirm,
                        KeyCode::Tab | KeyCode::Down => *focused_field = EditField::Date, // Wrap around
                        _ => {}
                    },
                }
            }
        } // End mutable borrow of self.active_modal

        if should_submit {
            self.submit_edit_workout();
        }
    }

    // --- Delete Confirmation Dialog ---
    fn handle_confirm_delete_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                self.submit_delete_workout();
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                // Declining drops the transient selection without any call
                self.active_modal = ActiveModal::None;
            }
            _ => {}
        }
    }
}
