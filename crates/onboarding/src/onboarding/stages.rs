use serde::Serialize;

use super::domain::{Application, ApplicationStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingStage {
    ProfileAndProfessional,
    ConfidentialAndStatutory,
    Achievements,
}

impl OnboardingStage {
    pub const fn ordered() -> [Self; 3] {
        [
            Self::ProfileAndProfessional,
            Self::ConfidentialAndStatutory,
            Self::Achievements,
        ]
    }

    pub const fn number(self) -> u8 {
        match self {
            Self::ProfileAndProfessional => 1,
            Self::ConfidentialAndStatutory => 2,
            Self::Achievements => 3,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::ProfileAndProfessional => "Profile & Professional",
            Self::ConfidentialAndStatutory => "Confidential & Statutory",
            Self::Achievements => "Achievements",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StageStatus {
    Locked,
    NotStarted,
    InProgress,
    Completed,
}

impl StageStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Locked => "Locked",
            Self::NotStarted => "Not Started",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }
}

/// Stage 2 has started as soon as the confidential bag holds any key.
pub fn has_any_confidential_field(application: &Application) -> bool {
    !application.confidential_data.is_empty()
}

/// Derived stage badges for one application snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageGate {
    pub profile: StageStatus,
    pub confidential: StageStatus,
    pub achievements: StageStatus,
    pub confidential_started: bool,
}

impl StageGate {
    pub fn evaluate(application: &Application) -> Self {
        let status = application.status.as_ref();
        let reached =
            |milestone: ApplicationStatus| status.is_some_and(|s| s.has_reached(&milestone));

        // Reaching this view at all means stage 1 was submitted.
        let profile = StageStatus::Completed;

        let confidential_started = has_any_confidential_field(application);
        let confidential = after(profile, || {
            if reached(ApplicationStatus::Stage2Approved) {
                StageStatus::Completed
            } else if confidential_started {
                StageStatus::InProgress
            } else {
                StageStatus::NotStarted
            }
        });

        let achievements = after(confidential, || {
            if reached(ApplicationStatus::Completed) {
                StageStatus::Completed
            } else {
                StageStatus::InProgress
            }
        });

        Self {
            profile,
            confidential,
            achievements,
            confidential_started,
        }
    }

    pub fn status(&self, stage: OnboardingStage) -> StageStatus {
        match stage {
            OnboardingStage::ProfileAndProfessional => self.profile,
            OnboardingStage::ConfidentialAndStatutory => self.confidential,
            OnboardingStage::Achievements => self.achievements,
        }
    }

    pub fn is_locked(&self, stage: OnboardingStage) -> bool {
        self.status(stage) == StageStatus::Locked
    }
}

/// A stage stays locked until the one before it is completed.
fn after(previous: StageStatus, unlocked: impl FnOnce() -> StageStatus) -> StageStatus {
    if previous == StageStatus::Completed {
        unlocked()
    } else {
        StageStatus::Locked
    }
}
