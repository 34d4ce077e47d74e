use serde::de::DeserializeOwned;

use crate::error::{Error, Result};
use crate::project::ProjectRecord;

/// Turns a response status into `Error::Fetch` when it is not a success.
pub fn check_status(success: bool, status_text: &str) -> Result<()> {
    if success {
        Ok(())
    } else {
        Err(Error::Fetch {
            status: status_text.to_string(),
        })
    }
}

/// Decodes a JSON body; no schema checks beyond the structure of `T`.
pub fn decode_json<T: DeserializeOwned>(body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(Into::into)
}

pub fn decode_projects(body: &str) -> Result<Vec<ProjectRecord>> {
    decode_json(body)
}

/// Logs the outcome of a project load and degrades a failure to no data.
pub fn settle_projects(source: &str, result: Result<Vec<ProjectRecord>>) -> Vec<ProjectRecord> {
    match result {
        Ok(records) => {
            tracing::info!("loaded {} projects from {source}", records.len());
            records
        }
        Err(error) => {
            tracing::error!("error loading projects from {source}: {error}");
            Vec::new()
        }
    }
}
