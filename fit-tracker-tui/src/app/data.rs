use super::state::App;
use tracing::error;

// Make refresh logic methods on App
impl App {
    // Replaces the local collection with a full fetch, in service order.
    // On failure the previous state stays visible; the error only goes to
    // the diagnostic log.
    pub fn refresh_workouts(&mut self) {
        match self.service.list_workouts() {
            Ok(records) => {
                self.workouts = records;

                // Clamp selection to the new collection
                if self.table_state.selected().unwrap_or(0) >= self.workouts.len() {
                    self.table_state.select(if self.workouts.is_empty() {
                        None
                    } else {
                        Some(self.workouts.len() - 1)
                    });
                } else if self.table_state.selected().is_none() && !self.workouts.is_empty() {
                    self.table_state.select(Some(0));
                }
            }
            Err(e) => error!("Error fetching workouts: {e:#}"),
        }
    }
}
