mod achievements;
mod confidential;
mod profile;
pub mod views;

use super::domain::Application;
use super::presentation::display_text;
use super::stages::{OnboardingStage, StageGate, StageStatus};
use views::{ApplicationView, Evaluation, FieldGroup, StageView};

const CONFIDENTIAL_PLACEHOLDER: &str = "Confidential and statutory details have not been submitted yet.";
const ACHIEVEMENTS_PLACEHOLDER: &str = "Unlocks once confidential details are approved.";

/// Derives stage badges and formatted field groups for one snapshot.
pub fn evaluate(application: Option<&Application>) -> Evaluation {
    let Some(application) = application else {
        return Evaluation::NoData;
    };

    let gate = StageGate::evaluate(application);

    let stages = OnboardingStage::ordered()
        .into_iter()
        .map(|stage| stage_view(stage, &gate, application))
        .collect();

    Evaluation::Ready(ApplicationView {
        application_id: display_text(application.application_id.as_deref()),
        applicant_name: display_text(application.personal_details.full_name().as_deref()),
        status_code: application
            .status
            .as_ref()
            .map(|status| status.code().to_string()),
        status_label: display_text(application.status.as_ref().map(|status| status.label())),
        stages,
    })
}

fn stage_view(stage: OnboardingStage, gate: &StageGate, application: &Application) -> StageView {
    let status = gate.status(stage);

    let (placeholder, groups): (Option<&'static str>, Vec<FieldGroup>) = match stage {
        OnboardingStage::ProfileAndProfessional => (None, profile::groups(application)),
        OnboardingStage::ConfidentialAndStatutory if gate.confidential_started => {
            (None, confidential::groups(application))
        }
        OnboardingStage::ConfidentialAndStatutory => (Some(CONFIDENTIAL_PLACEHOLDER), Vec::new()),
        OnboardingStage::Achievements if status == StageStatus::Locked => {
            (Some(ACHIEVEMENTS_PLACEHOLDER), Vec::new())
        }
        OnboardingStage::Achievements => (None, achievements::groups(application)),
    };

    StageView {
        stage,
        number: stage.number(),
        label: stage.label(),
        status,
        status_label: status.label(),
        placeholder,
        groups,
    }
}
