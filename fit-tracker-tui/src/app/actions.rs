// fit-tracker-tui/src/app/actions.rs
use super::state::{ActiveModal, App, EditField, FormField};
use super::AppInputError;
use fit_tracker_lib::WorkoutPayload;
use tracing::{error, warn};

// Duration strings come through a digits-and-dot keystroke filter, so parsing
// only fails on empty or multi-dot input.
fn parse_duration(input: &str) -> Result<f64, AppInputError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(AppInputError::MissingFields);
    }
    trimmed
        .parse::<f64>()
        .map_err(|_| AppInputError::InvalidDuration)
}

pub fn format_duration(duration: f64) -> String {
    if duration.fract() == 0.0 {
        format!("{}", duration as i64)
    } else {
        format!("{duration}")
    }
}

impl App {
    // --- Dialog openers ---

    pub(crate) fn open_edit_modal(&mut self) {
        if let Some(workout) = self.selected_workout() {
            // The dialog edits a copy; the list keeps the persisted record
            // until the update succeeds and the re-fetch lands.
            self.active_modal = ActiveModal::EditWorkout {
                workout_id: workout.workout_id,
                date_input: workout.date.clone(),
                name_input: workout.workout_name.clone(),
                duration_input: format_duration(workout.duration),
                focused_field: EditField::Date,
            };
        }
    }

    pub(crate) fn open_delete_modal(&mut self) {
        if let Some(workout) = self.selected_workout() {
            self.active_modal = ActiveModal::ConfirmDelete {
                workout_id: workout.workout_id,
                workout_name: workout.workout_name.clone(),
            };
        }
    }

    // --- Submission Logic ---

    // Add-form submission. Validation failures become the blocking alert and
    // no request is made; remote failures keep the inputs for retry.
    pub(crate) fn submit_add_workout(&mut self) {
        let payload = match self.build_add_payload() {
            Ok(payload) => payload,
            Err(e) => {
                self.active_modal = ActiveModal::Alert {
                    message: e.to_string(),
                };
                return;
            }
        };

        match self.service.create_workout(&payload) {
            Ok(_) => {
                self.date_input.clear();
                self.name_input.clear();
                self.duration_input.clear();
                self.form_focus = FormField::Date;
                self.refresh_workouts();
            }
            Err(e) => error!("Error adding workout: {e:#}"),
        }
    }

    fn build_add_payload(&self) -> Result<WorkoutPayload, AppInputError> {
        if self.date_input.trim().is_empty()
            || self.name_input.trim().is_empty()
            || self.duration_input.trim().is_empty()
        {
            return Err(AppInputError::MissingFields);
        }
        Ok(WorkoutPayload {
            date: self.date_input.trim().to_string(),
            workout_name: self.name_input.trim().to_string(),
            duration: parse_duration(&self.duration_input)?,
        })
    }

    // Edit-dialog submission: full replace of the selected record. On any
    // failure the dialog stays open with the edited values intact.
    pub(crate) fn submit_edit_workout(&mut self) {
        let (workout_id, payload) = if let ActiveModal::EditWorkout {
            workout_id,
            date_input,
            name_input,
            duration_input,
            ..
        } = &self.active_modal
        {
            let duration = match duration_input.trim().parse::<f64>() {
                Ok(d) => d,
                Err(_) => {
                    // The edit dialog has no validation UI; an unparseable
                    // duration just leaves it open.
                    warn!("Edit submission skipped: duration {duration_input:?} is not a number");
                    return;
                }
            };
            (
                *workout_id,
                WorkoutPayload {
                    date: date_input.trim().to_string(),
                    workout_name: name_input.trim().to_string(),
                    duration,
                },
            )
        } else {
            return;
        };

        match self.service.update_workout(workout_id, &payload) {
            Ok(_) => {
                self.active_modal = ActiveModal::None;
                self.refresh_workouts();
            }
            Err(e) => error!("Error updating workout: {e:#}"),
        }
    }

    pub(crate) fn submit_delete_workout(&mut self) {
        let workout_id = if let ActiveModal::ConfirmDelete { workout_id, .. } = &self.active_modal {
            *workout_id
        } else {
            return;
        };

        match self.service.delete_workout(workout_id) {
            Ok(()) => {
                self.active_modal = ActiveModal::None;
                self.refresh_workouts();
            }
            Err(e) => error!("Error deleting workout: {e:#}"),
        }
    }
}
