//! Onboarding application rendering: stage gating, field presentation, and
//! the roster badges shown next to uploaded employees.

pub mod domain;
mod lenient;
pub mod presentation;
pub mod render;
pub mod repository;
pub mod roster;
pub mod router;
pub mod service;
pub mod snapshot;
pub mod stages;

#[cfg(test)]
mod tests;

pub use domain::{
    AchievementRecord, Address, Application, ApplicationId, ApplicationStatus, ConfidentialData,
    DocumentRef, Education, EducationLevel, EducationRecord, HigherEducation, PersonalDetails,
    ProjectRecord, SecondaryEducation, SkillRecord, WorkExperience,
};
pub use presentation::{FieldValue, NOT_PROVIDED};
pub use render::evaluate;
pub use render::views::{ApplicationView, Evaluation, Field, FieldGroup, StageView};
pub use repository::{ApplicationRepository, ProfileStatusLookup, RepositoryError};
pub use roster::{
    roster_rows, BadgeTone, EmployeeRecord, OnboardingStatus, ProfileBadge, ProfileStatus,
    RosterRow,
};
pub use router::onboarding_router;
pub use service::{OnboardingService, OnboardingServiceError};
pub use snapshot::{read_application, read_seed, SeedDocument, SnapshotError};
pub use stages::{has_any_confidential_field, OnboardingStage, StageGate, StageStatus};
