//src/app/state.rs
use fit_tracker_lib::{WorkoutRecord, WorkoutService};
use ratatui::widgets::TableState;

// Which pane owns keyboard input while no dialog is open
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaneFocus {
    Form,
    List,
}

// Fields of the add form, in focus order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Date,
    Name,
    Duration,
    Add,
}

// Fields within the edit dialog, in focus order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditField {
    Date,
    Name,
    Duration,
    Confirm,
    Cancel,
}

// Represents the state of active dialogs. `EditWorkout` and `ConfirmDelete`
// own the transient copy of the record they operate on; closing either one
// (cancel or success) drops that copy and returns to `None`.
#[derive(Clone, Debug, PartialEq)]
pub enum ActiveModal {
    None,
    Help,
    Alert {
        message: String,
    },
    EditWorkout {
        workout_id: i64,
        date_input: String,
        name_input: String,
        duration_input: String,
        focused_field: EditField,
    },
    ConfirmDelete {
        workout_id: i64,
        workout_name: String,
    },
}

// Holds the application state
pub struct App {
    pub service: WorkoutService,
    pub should_quit: bool,
    pub active_modal: ActiveModal,
    pub focus: PaneFocus,

    // === Add form ===
    pub date_input: String,
    pub name_input: String,
    pub duration_input: String,
    pub form_focus: FormField,

    // === Workout list ===
    pub workouts: Vec<WorkoutRecord>,
    pub table_state: TableState,
}

impl App {
    pub fn new(service: WorkoutService) -> Self {
        let mut app = App {
            service,
            should_quit: false,
            active_modal: ActiveModal::None,
            focus: PaneFocus::Form,
            date_input: String::new(),
            name_input: String::new(),
            duration_input: String::new(),
            form_focus: FormField::Date,
            workouts: Vec::new(),
            table_state: TableState::default(),
        };
        // Initial fetch; a failure just leaves the list empty.
        app.refresh_workouts();
        app
    }

    pub fn selected_workout(&self) -> Option<&WorkoutRecord> {
        self.table_state
            .selected()
            .and_then(|i| self.workouts.get(i))
    }
}
