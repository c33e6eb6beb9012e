use metrics_exporter_prometheus::PrometheusHandle;
use onboarding::onboarding::{
    read_seed, Application, ApplicationId, ApplicationRepository, ProfileStatus,
    ProfileStatusLookup, RepositoryError, SeedDocument, SnapshotError,
};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Stand-in for the upstream application store.
#[derive(Default, Clone)]
pub(crate) struct InMemoryApplicationRepository {
    records: Arc<Mutex<HashMap<ApplicationId, Application>>>,
}

impl InMemoryApplicationRepository {
    pub(crate) fn insert(&self, application: Application) -> Option<ApplicationId> {
        let id = application.id()?;
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        guard.insert(id.clone(), application);
        Some(id)
    }

    pub(crate) fn len(&self) -> usize {
        self.records.lock().expect("repository mutex poisoned").len()
    }
}

impl ApplicationRepository for InMemoryApplicationRepository {
    fn fetch(&self, id: &ApplicationId) -> Result<Option<Application>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

/// Stand-in for the per-employee profile status service.
#[derive(Default, Clone)]
pub(crate) struct InMemoryProfileStatuses {
    statuses: Arc<Mutex<HashMap<String, ProfileStatus>>>,
}

impl InMemoryProfileStatuses {
    pub(crate) fn insert(&self, employee_id: impl Into<String>, status: ProfileStatus) {
        let mut guard = self.statuses.lock().expect("status mutex poisoned");
        guard.insert(employee_id.into(), status);
    }
}

impl ProfileStatusLookup for InMemoryProfileStatuses {
    fn profile_status(&self, employee_id: &str) -> Result<Option<ProfileStatus>, RepositoryError> {
        let guard = self.statuses.lock().expect("status mutex poisoned");
        Ok(guard.get(employee_id).cloned())
    }
}

/// Builds both stores from a seed document.
pub(crate) fn seeded_stores(
    seed: SeedDocument,
) -> (InMemoryApplicationRepository, InMemoryProfileStatuses) {
    let repository = InMemoryApplicationRepository::default();
    for application in seed.applications {
        repository.insert(application);
    }

    let statuses = InMemoryProfileStatuses::default();
    for (employee_id, status) in seed.profile_statuses {
        statuses.insert(employee_id, status);
    }

    (repository, statuses)
}

pub(crate) fn load_seed(path: &Path) -> Result<SeedDocument, SnapshotError> {
    let file = File::open(path)?;
    let seed = read_seed(BufReader::new(file))?;
    info!(
        path = %path.display(),
        applications = seed.applications.len(),
        profile_statuses = seed.profile_statuses.len(),
        "loaded onboarding seed"
    );
    Ok(seed)
}
