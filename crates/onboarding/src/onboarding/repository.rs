use super::domain::{Application, ApplicationId};
use super::roster::ProfileStatus;

/// Source of application snapshots; the fetch mechanism lives with the caller.
pub trait ApplicationRepository: Send + Sync {
    fn fetch(&self, id: &ApplicationId) -> Result<Option<Application>, RepositoryError>;
}

/// Per-employee onboarding status, keyed by employee record id.
pub trait ProfileStatusLookup: Send + Sync {
    fn profile_status(&self, employee_id: &str) -> Result<Option<ProfileStatus>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
