//! Badges for the uploaded-employee table.

use serde::{Deserialize, Deserializer, Serialize};

use super::lenient::{deserialize_object, Fields, FromFields};
use super::presentation::display_text;
use super::repository::{ProfileStatusLookup, RepositoryError};

/// Row of the uploaded employee sheet, as stored by the upload collaborator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRecord {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub department: Option<String>,
    pub designation: Option<String>,
}

impl FromFields for EmployeeRecord {
    fn from_fields(fields: &Fields<'_>) -> Self {
        Self {
            id: fields.identifier(&["id", "_id"]).unwrap_or_default(),
            name: fields.text(&["name"]),
            email: fields.text(&["email"]),
            department: fields.text(&["department"]),
            designation: fields.text(&["designation"]),
        }
    }
}

impl<'de> Deserialize<'de> for EmployeeRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_object(deserializer)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OnboardingStatus {
    NotInvited,
    Invited,
    InProgress,
    Submitted,
    Completed,
}

impl OnboardingStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::NotInvited => "Not Invited",
            Self::Invited => "Invited",
            Self::InProgress => "In Progress",
            Self::Submitted => "Submitted",
            Self::Completed => "Completed",
        }
    }

    pub const fn tone(self) -> BadgeTone {
        match self {
            Self::NotInvited => BadgeTone::Neutral,
            Self::Invited => BadgeTone::Info,
            Self::InProgress | Self::Submitted => BadgeTone::Warning,
            Self::Completed => BadgeTone::Success,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeTone {
    Neutral,
    Info,
    Warning,
    Success,
}

/// Status reported by the profile-status collaborator for one employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileStatus {
    pub status: OnboardingStatus,
    #[serde(default)]
    pub progress: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileBadge {
    pub status: OnboardingStatus,
    pub label: &'static str,
    pub tone: BadgeTone,
    pub progress: u8,
}

impl ProfileBadge {
    pub fn from_status(status: Option<&ProfileStatus>) -> Self {
        let (status, progress) = match status {
            Some(found) => (found.status, clamp_progress(found.progress)),
            None => (OnboardingStatus::NotInvited, 0),
        };

        Self {
            status,
            label: status.label(),
            tone: status.tone(),
            progress,
        }
    }
}

/// Rounds into `0..=100`; NaN and infinities read as zero.
pub fn clamp_progress(raw: f64) -> u8 {
    if !raw.is_finite() {
        return 0;
    }
    raw.round().clamp(0.0, 100.0) as u8
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterRow {
    pub employee_id: String,
    pub name: String,
    pub email: String,
    pub department: String,
    pub designation: String,
    pub badge: ProfileBadge,
}

pub fn roster_rows<L>(employees: &[EmployeeRecord], lookup: &L) -> Result<Vec<RosterRow>, RepositoryError>
where
    L: ProfileStatusLookup + ?Sized,
{
    employees
        .iter()
        .map(|employee| {
            let status = lookup.profile_status(&employee.id)?;
            Ok(RosterRow {
                employee_id: employee.id.clone(),
                name: display_text(employee.name.as_deref()),
                email: display_text(employee.email.as_deref()),
                department: display_text(employee.department.as_deref()),
                designation: display_text(employee.designation.as_deref()),
                badge: ProfileBadge::from_status(status.as_ref()),
            })
        })
        .collect()
}
