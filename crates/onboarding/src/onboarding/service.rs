use std::sync::Arc;

use tracing::{debug, info};

use super::domain::{Application, ApplicationId};
use super::render::evaluate;
use super::render::views::Evaluation;
use super::repository::{ApplicationRepository, ProfileStatusLookup, RepositoryError};
use super::roster::{roster_rows, EmployeeRecord, RosterRow};

/// Glues the collaborators to the evaluator. Holds no state of its own.
pub struct OnboardingService<R, L> {
    repository: Arc<R>,
    statuses: Arc<L>,
}

impl<R, L> OnboardingService<R, L>
where
    R: ApplicationRepository + 'static,
    L: ProfileStatusLookup + 'static,
{
    pub fn new(repository: Arc<R>, statuses: Arc<L>) -> Self {
        Self {
            repository,
            statuses,
        }
    }

    /// Fetch an application by id and render it.
    pub fn view(&self, id: &ApplicationId) -> Result<Evaluation, OnboardingServiceError> {
        let application = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;

        let evaluation = evaluate(Some(&application));
        if let Some(view) = evaluation.view() {
            debug!(
                application_id = %id,
                stages = ?view.stages.iter().map(|stage| stage.status).collect::<Vec<_>>(),
                "rendered onboarding application"
            );
        }
        Ok(evaluation)
    }

    /// Render a snapshot supplied directly by the caller.
    pub fn render(&self, application: Option<&Application>) -> Evaluation {
        if application.is_none() {
            info!("render requested without an application snapshot");
        }
        evaluate(application)
    }

    pub fn roster(
        &self,
        employees: &[EmployeeRecord],
    ) -> Result<Vec<RosterRow>, OnboardingServiceError> {
        let rows = roster_rows(employees, self.statuses.as_ref())?;
        debug!(rows = rows.len(), "built onboarding roster");
        Ok(rows)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum OnboardingServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
