use std::collections::BTreeMap;
use std::io::Read;

use serde::Deserialize;

use super::domain::Application;
use super::roster::ProfileStatus;

/// Contents of a seed file: applications plus profile statuses by employee id.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SeedDocument {
    pub applications: Vec<Application>,
    pub profile_statuses: BTreeMap<String, ProfileStatus>,
}

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("unable to read snapshot: {0}")]
    Io(#[from] std::io::Error),
    #[error("snapshot is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("application at index {index} has no applicationId")]
    MissingId { index: usize },
}

/// Reads one application document; a literal `null` yields `None`.
pub fn read_application<R: Read>(reader: R) -> Result<Option<Application>, SnapshotError> {
    Ok(serde_json::from_reader(reader)?)
}

/// Reads a seed document and checks that every application can be keyed.
pub fn read_seed<R: Read>(reader: R) -> Result<SeedDocument, SnapshotError> {
    let seed: SeedDocument = serde_json::from_reader(reader)?;

    if let Some(index) = seed.applications.iter().position(|app| app.id().is_none()) {
        return Err(SnapshotError::MissingId { index });
    }

    Ok(seed)
}
