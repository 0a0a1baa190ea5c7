// src/lib.rs
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

// --- Declare modules ---
pub mod client;
mod config;

// --- Expose public types ---
pub use client::{Error as ClientError, WorkoutClient, WorkoutPayload, WorkoutRecord};
pub use config::{
    get_config_path as get_config_path_util,
    load as load_config_util,
    save as save_config_util,
    Config,
    Error as ConfigError, // Renamed from Error
    Theme,
    DEFAULT_SERVER_URL,
};

pub struct WorkoutService {
    pub config: Config,
    pub client: WorkoutClient,
    pub config_path: PathBuf,
}

impl WorkoutService {
    /// Initializes the service from the on-disk configuration. The remote
    /// base URL comes from the config, never from call sites.
    ///
    /// # Errors
    ///
    /// Returns `anyhow::Error` if the config path cannot be determined or the
    /// config file fails to load.
    pub fn initialize() -> Result<Self> {
        let config_path =
            config::get_config_path().context("Failed to determine configuration file path")?;
        let config = config::load(&config_path)
            .with_context(|| format!("Failed to load config from {config_path:?}"))?;

        let client = WorkoutClient::new(&config.server_url);

        Ok(Self {
            config,
            client,
            config_path,
        })
    }

    pub fn get_config_path(&self) -> &Path {
        &self.config_path
    }

    /// Saves the current configuration state.
    /// # Errors
    /// Returns `ConfigError` if saving fails.
    pub fn save_config(&self) -> Result<(), ConfigError> {
        config::save(&self.config_path, &self.config)
    }

    /// Fetches the full workout collection. The caller replaces its local
    /// state with the result; there is no pagination or filtering.
    ///
    /// # Errors
    ///
    /// Returns `anyhow::Error` (wrapping `ClientError`) on any remote failure.
    pub fn list_workouts(&self) -> Result<Vec<WorkoutRecord>> {
        self.client
            .list_workouts()
            .context("Failed to fetch workouts from the remote service")
    }

    /// Creates a record from the three user-supplied fields.
    ///
    /// # Errors
    ///
    /// Returns `anyhow::Error` (wrapping `ClientError`) on any remote failure.
    pub fn create_workout(&self, payload: &WorkoutPayload) -> Result<WorkoutRecord> {
        self.client
            .create_workout(payload)
            .context("Failed to create workout on the remote service")
    }

    /// Full replace of one record, addressed by id.
    ///
    /// # Errors
    ///
    /// Returns `anyhow::Error` (wrapping `ClientError`) on any remote failure.
    pub fn update_workout(&self, id: i64, payload: &WorkoutPayload) -> Result<WorkoutRecord> {
        self.client
            .update_workout(id, payload)
            .with_context(|| format!("Failed to update workout {id} on the remote service"))
    }

    /// Deletes one record, addressed by id.
    ///
    /// # Errors
    ///
    /// Returns `anyhow::Error` (wrapping `ClientError`) on any remote failure.
    pub fn delete_workout(&self, id: i64) -> Result<()> {
        self.client
            .delete_workout(id)
            .with_context(|| format!("Failed to delete workout {id} on the remote service"))
    }
}
