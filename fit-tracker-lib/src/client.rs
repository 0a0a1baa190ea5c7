//src/client.rs
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error, info};

#[derive(Error, Debug)]
pub enum Error {
    #[error("Request to workout service failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Workout service returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
}

/// A workout entry as stored by the remote service.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutRecord {
    pub workout_id: i64,
    pub date: String,
    pub workout_name: String,
    pub duration: f64,
}

/// The three user-supplied fields sent on create and update. Ids are never
/// generated client-side, so this type carries none.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPayload {
    pub date: String,
    pub workout_name: String,
    pub duration: f64,
}

pub struct WorkoutClient {
    http: reqwest::blocking::Client,
    server_url: String,
}

impl WorkoutClient {
    #[must_use]
    pub fn new(server_url: &str) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            server_url: server_url.trim_end_matches('/').to_string(),
        }
    }

    #[must_use]
    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    /// Fetches the full collection, in the order the service returns it.
    ///
    /// # Errors
    ///
    /// Returns `Error` if the request fails, the service answers with a
    /// non-success status, or the response body does not deserialize.
    pub fn list_workouts(&self) -> Result<Vec<WorkoutRecord>, Error> {
        let url = format!("{}/get-workouts", self.server_url);
        debug!("GET {url}");
        let response = check_status(self.http.get(&url).send()?)?;
        let records: Vec<WorkoutRecord> = response.json()?;
        info!("Fetched {} workout(s)", records.len());
        Ok(records)
    }

    /// Creates a record from the payload. The id on the returned record is
    /// assigned by the service.
    ///
    /// # Errors
    ///
    /// Returns `Error` on transport failure or a non-success status.
    pub fn create_workout(&self, payload: &WorkoutPayload) -> Result<WorkoutRecord, Error> {
        let url = format!("{}/create-workout", self.server_url);
        debug!("POST {url} ({})", payload.workout_name);
        let response = check_status(self.http.post(&url).json(payload).send()?)?;
        Ok(response.json()?)
    }

    /// Replaces the record's date, name and duration wholesale.
    ///
    /// # Errors
    ///
    /// Returns `Error` on transport failure or a non-success status.
    pub fn update_workout(&self, id: i64, payload: &WorkoutPayload) -> Result<WorkoutRecord, Error> {
        let url = format!("{}/update-workout/{id}", self.server_url);
        debug!("PUT {url}");
        let response = check_status(self.http.put(&url).json(payload).send()?)?;
        Ok(response.json()?)
    }

    /// Deletes the record addressed by `id`. No payload either way.
    ///
    /// # Errors
    ///
    /// Returns `Error` on transport failure or a non-success status.
    pub fn delete_workout(&self, id: i64) -> Result<(), Error> {
        let url = format!("{}/delete-workout/{id}", self.server_url);
        debug!("DELETE {url}");
        check_status(self.http.delete(&url).send()?)?;
        Ok(())
    }
}

// Non-success statuses carry the response body so the log has something to
// diagnose with.
fn check_status(
    response: reqwest::blocking::Response,
) -> Result<reqwest::blocking::Response, Error> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response
        .text()
        .unwrap_or_else(|_| "<unreadable body>".to_string());
    error!("Workout service returned {status}: {body}");
    Err(Error::Status { status, body })
}
