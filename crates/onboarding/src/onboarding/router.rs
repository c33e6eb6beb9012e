use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, warn};

use super::domain::{Application, ApplicationId};
use super::repository::{ApplicationRepository, ProfileStatusLookup, RepositoryError};
use super::roster::EmployeeRecord;
use super::service::{OnboardingService, OnboardingServiceError};

/// Body of `POST /api/v1/onboarding/render`; `application` may be `null`.
#[derive(Debug, Default, Deserialize)]
pub struct RenderRequest {
    #[serde(default)]
    pub application: Option<Application>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RosterRequest {
    #[serde(default)]
    pub employees: Vec<EmployeeRecord>,
}

pub fn onboarding_router<R, L>(service: Arc<OnboardingService<R, L>>) -> Router
where
    R: ApplicationRepository + 'static,
    L: ProfileStatusLookup + 'static,
{
    Router::new()
        .route(
            "/api/v1/onboarding/applications/:application_id",
            get(view_handler::<R, L>),
        )
        .route("/api/v1/onboarding/render", post(render_handler::<R, L>))
        .route("/api/v1/onboarding/roster", post(roster_handler::<R, L>))
        .with_state(service)
}

pub(crate) async fn view_handler<R, L>(
    State(service): State<Arc<OnboardingService<R, L>>>,
    Path(application_id): Path<String>,
) -> Response
where
    R: ApplicationRepository + 'static,
    L: ProfileStatusLookup + 'static,
{
    let id = ApplicationId(application_id);
    match service.view(&id) {
        Ok(evaluation) => (StatusCode::OK, axum::Json(evaluation)).into_response(),
        Err(OnboardingServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "application_id": id.0,
                "error": "application not found",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => internal_error(other),
    }
}

pub(crate) async fn render_handler<R, L>(
    State(service): State<Arc<OnboardingService<R, L>>>,
    payload: Result<axum::Json<RenderRequest>, JsonRejection>,
) -> Response
where
    R: ApplicationRepository + 'static,
    L: ProfileStatusLookup + 'static,
{
    let axum::Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return rejected_body(rejection),
    };
    let evaluation = service.render(request.application.as_ref());
    (StatusCode::OK, axum::Json(evaluation)).into_response()
}

pub(crate) async fn roster_handler<R, L>(
    State(service): State<Arc<OnboardingService<R, L>>>,
    payload: Result<axum::Json<RosterRequest>, JsonRejection>,
) -> Response
where
    R: ApplicationRepository + 'static,
    L: ProfileStatusLookup + 'static,
{
    let axum::Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return rejected_body(rejection),
    };
    match service.roster(&request.employees) {
        Ok(rows) => (StatusCode::OK, axum::Json(json!({ "rows": rows }))).into_response(),
        Err(other) => internal_error(other),
    }
}

fn internal_error(error: OnboardingServiceError) -> Response {
    warn!(%error, "onboarding request failed");
    let payload = json!({ "error": error.to_string() });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
}

/// Malformed bodies keep axum's status code but share the `{"error"}` shape.
fn rejected_body(rejection: JsonRejection) -> Response {
    let status = rejection.status();
    debug!(%status, reason = %rejection.body_text(), "rejected onboarding request body");
    let payload = json!({ "error": rejection.body_text() });
    (status, axum::Json(payload)).into_response()
}
