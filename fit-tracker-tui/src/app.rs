// fit-tracker-tui/src/app.rs
use thiserror::Error;

// Declare the modules within the app directory
pub mod actions;
pub mod data;
pub mod input;
pub mod navigation;
pub mod state;

#[cfg(test)]
mod tests;

// Re-export the main App struct and other necessary types for convenience
pub use state::{ActiveModal, App, EditField, FormField, PaneFocus};

// Input failures that surface as the blocking alert dialog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppInputError {
    #[error("Please fill in all fields")]
    MissingFields,
    #[error("Duration must be a number")]
    InvalidDuration,
}
