use super::state::App;

// --- Workout List Navigation ---

pub fn list_next(app: &mut App) {
    let max_index = app.workouts.len().saturating_sub(1);
    let i = match app.table_state.selected() {
        Some(i) => {
            if i >= max_index {
                0
            } else {
                i + 1
            }
        }
        None => 0,
    };
    if !app.workouts.is_empty() {
        app.table_state.select(Some(i));
    }
}

pub fn list_previous(app: &mut App) {
    let max_index = app.workouts.len().saturating_sub(1);
    let i = match app.table_state.selected() {
        Some(i) => {
            if i == 0 {
                max_index
            } else {
                i - 1
            }
        }
        None => 0,
    };
    if !app.workouts.is_empty() {
        app.table_state.select(Some(i));
    }
}
