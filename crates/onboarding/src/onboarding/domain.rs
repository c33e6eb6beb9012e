use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::lenient::{deserialize_object, scalar_text, Fields, FromFields};

/// Opaque identifier assigned to an application by the onboarding workflow.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ApplicationId(pub String);

impl fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One read of an onboarding application as handed over by the workflow system.
///
/// Every nested structure is optional on the wire: missing keys, explicit
/// `null`, and values of the wrong JSON type all collapse to empty defaults so
/// that rendering never has to deal with absent sub-objects. Where a key has
/// more than one accepted spelling, the first usable one wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub application_id: Option<String>,
    pub status: Option<ApplicationStatus>,
    pub personal_details: PersonalDetails,
    pub current_address: Address,
    pub permanent_address: Address,
    pub education: Vec<EducationRecord>,
    pub work_experience: Vec<WorkExperience>,
    pub projects: Vec<ProjectRecord>,
    pub skills: Vec<SkillRecord>,
    pub achievements: Vec<AchievementRecord>,
    pub confidential_data: ConfidentialData,
    pub resume: Option<DocumentRef>,
}

impl FromFields for Application {
    fn from_fields(fields: &Fields<'_>) -> Self {
        Self {
            application_id: fields.identifier(&["applicationId", "_id", "id"]),
            status: fields
                .text(&["status"])
                .map(|raw| ApplicationStatus::parse(&raw)),
            personal_details: fields.record(&["personalDetails"]),
            current_address: fields.record(&["currentAddress"]),
            permanent_address: fields.record(&["permanentAddress"]),
            education: fields.records(&["education"]),
            work_experience: fields.records(&["workExperience"]),
            projects: fields.records(&["projects"]),
            skills: fields.records(&["skills"]),
            achievements: fields.records(&["achievements"]),
            confidential_data: ConfidentialData(fields.bag(&["confidentialData"])),
            resume: fields.document(&["resume"]),
        }
    }
}

impl<'de> Deserialize<'de> for Application {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_object(deserializer)
    }
}

impl Application {
    pub fn id(&self) -> Option<ApplicationId> {
        self.application_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(|id| ApplicationId(id.to_string()))
    }

    pub fn has_work_experience(&self) -> bool {
        !self.work_experience.is_empty()
    }
}

/// Lifecycle states reported by the workflow system, in the order they are reached.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ApplicationStatus {
    Invited,
    Stage1Submitted,
    Stage1Approved,
    Stage2Submitted,
    Stage2Approved,
    HrReviewStage3,
    Completed,
    /// A state this crate does not know about; it has not reached any gate.
    Unrecognized(String),
}

impl ApplicationStatus {
    pub fn parse(raw: &str) -> Self {
        let normalized: String = raw
            .trim()
            .chars()
            .map(|c| match c {
                '-' | ' ' => '_',
                other => other.to_ascii_uppercase(),
            })
            .collect();

        match normalized.as_str() {
            "INVITED" => Self::Invited,
            "STAGE1_SUBMITTED" | "SUBMITTED" => Self::Stage1Submitted,
            "STAGE1_APPROVED" => Self::Stage1Approved,
            "STAGE2_SUBMITTED" => Self::Stage2Submitted,
            "STAGE2_APPROVED" => Self::Stage2Approved,
            "HR_REVIEW_STG3" | "HR_REVIEW_STAGE3" => Self::HrReviewStage3,
            "COMPLETED" => Self::Completed,
            _ => Self::Unrecognized(raw.trim().to_string()),
        }
    }

    /// Wire code as emitted by the workflow system.
    pub fn code(&self) -> &str {
        match self {
            Self::Invited => "INVITED",
            Self::Stage1Submitted => "STAGE1_SUBMITTED",
            Self::Stage1Approved => "STAGE1_APPROVED",
            Self::Stage2Submitted => "STAGE2_SUBMITTED",
            Self::Stage2Approved => "STAGE2_APPROVED",
            Self::HrReviewStage3 => "HR_REVIEW_STG3",
            Self::Completed => "COMPLETED",
            Self::Unrecognized(raw) => raw,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Invited => "Invited",
            Self::Stage1Submitted => "Stage 1 Submitted",
            Self::Stage1Approved => "Stage 1 Approved",
            Self::Stage2Submitted => "Stage 2 Submitted",
            Self::Stage2Approved => "Stage 2 Approved",
            Self::HrReviewStage3 => "HR Review (Stage 3)",
            Self::Completed => "Completed",
            Self::Unrecognized(raw) => raw,
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Self::Unrecognized(_) => 0,
            Self::Invited => 1,
            Self::Stage1Submitted => 2,
            Self::Stage1Approved => 3,
            Self::Stage2Submitted => 4,
            Self::Stage2Approved => 5,
            Self::HrReviewStage3 => 6,
            Self::Completed => 7,
        }
    }

    /// True when this status sits at or beyond `milestone` in the lifecycle.
    /// Unrecognized statuses never reach anything.
    pub fn has_reached(&self, milestone: &ApplicationStatus) -> bool {
        let rank = self.rank();
        rank > 0 && rank >= milestone.rank()
    }
}

impl From<String> for ApplicationStatus {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<ApplicationStatus> for String {
    fn from(value: ApplicationStatus) -> Self {
        value.code().to_string()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalDetails {
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<String>,
    pub gender: Option<String>,
    pub marital_status: Option<String>,
    pub blood_group: Option<String>,
    pub nationality: Option<String>,
}

impl FromFields for PersonalDetails {
    fn from_fields(fields: &Fields<'_>) -> Self {
        Self {
            first_name: fields.text(&["firstName"]),
            middle_name: fields.text(&["middleName"]),
            last_name: fields.text(&["lastName"]),
            email: fields.text(&["email"]),
            phone: fields.text(&["phone", "phoneNumber"]),
            date_of_birth: fields.text(&["dateOfBirth", "dob"]),
            gender: fields.text(&["gender"]),
            marital_status: fields.text(&["maritalStatus"]),
            blood_group: fields.text(&["bloodGroup"]),
            nationality: fields.text(&["nationality"]),
        }
    }
}

impl PersonalDetails {
    /// Joins the non-blank name parts; `None` when every part is blank.
    pub fn full_name(&self) -> Option<String> {
        let parts: Vec<&str> = [&self.first_name, &self.middle_name, &self.last_name]
            .into_iter()
            .filter_map(|part| part.as_deref())
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub line1: Option<String>,
    pub line2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub postal_code: Option<String>,
}

impl FromFields for Address {
    fn from_fields(fields: &Fields<'_>) -> Self {
        Self {
            line1: fields.text(&["line1", "addressLine1"]),
            line2: fields.text(&["line2", "addressLine2"]),
            city: fields.text(&["city"]),
            state: fields.text(&["state"]),
            country: fields.text(&["country"]),
            postal_code: fields.text(&["postalCode", "pinCode", "zipCode"]),
        }
    }
}

/// Education level as captured by the profile form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EducationLevel {
    Secondary,
    HigherSecondary,
    Diploma,
    Undergraduate,
    Postgraduate,
    Doctorate,
    Other(String),
}

impl EducationLevel {
    pub fn parse(raw: &str) -> Self {
        let normalized: String = raw
            .trim()
            .chars()
            .map(|c| match c {
                '-' | ' ' => '_',
                other => other.to_ascii_uppercase(),
            })
            .collect();

        match normalized.as_str() {
            "SECONDARY" => Self::Secondary,
            "HIGHER_SECONDARY" => Self::HigherSecondary,
            "DIPLOMA" => Self::Diploma,
            "UNDERGRADUATE" | "GRADUATION" | "BACHELORS" => Self::Undergraduate,
            "POSTGRADUATE" | "POST_GRADUATION" | "MASTERS" => Self::Postgraduate,
            "DOCTORATE" | "PHD" => Self::Doctorate,
            _ => Self::Other(raw.trim().to_string()),
        }
    }

    /// The two school levels record board results instead of a degree.
    pub fn is_school_level(&self) -> bool {
        matches!(self, Self::Secondary | Self::HigherSecondary)
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Secondary => "Secondary (10th)",
            Self::HigherSecondary => "Higher Secondary (12th)",
            Self::Diploma => "Diploma",
            Self::Undergraduate => "Undergraduate",
            Self::Postgraduate => "Postgraduate",
            Self::Doctorate => "Doctorate",
            Self::Other(raw) => raw,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationRecord {
    pub education_level: Option<String>,
    pub institution: Option<String>,
    pub board: Option<String>,
    pub degree: Option<String>,
    pub specialization: Option<String>,
    pub status: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub year_of_passing: Option<String>,
    pub grade: Option<String>,
    pub certificate: Option<DocumentRef>,
}

impl FromFields for EducationRecord {
    fn from_fields(fields: &Fields<'_>) -> Self {
        Self {
            education_level: fields.text(&["educationLevel"]),
            institution: fields.text(&["institution", "institutionName"]),
            board: fields.text(&["board"]),
            degree: fields.text(&["degree"]),
            specialization: fields.text(&["specialization"]),
            status: fields.text(&["status"]),
            start_date: fields.text(&["startDate"]),
            end_date: fields.text(&["endDate"]),
            year_of_passing: fields.text(&["yearOfPassing", "passingYear"]),
            grade: fields.text(&["grade", "percentage"]),
            certificate: fields.document(&["certificate"]),
        }
    }
}

impl EducationRecord {
    /// `None` when the record carries no level at all.
    pub fn level(&self) -> Option<EducationLevel> {
        self.education_level
            .as_deref()
            .filter(|raw| !raw.trim().is_empty())
            .map(EducationLevel::parse)
    }

    pub fn is_pursuing(&self) -> bool {
        self.status
            .as_deref()
            .is_some_and(|status| status.trim().eq_ignore_ascii_case("PURSUING"))
    }

    /// Splits the record by which set of fields applies to its level.
    /// Records without a level fall on the degree side.
    pub fn classify(&self) -> Education<'_> {
        let level = self.level();
        match level {
            Some(level) if level.is_school_level() => Education::Secondary(SecondaryEducation {
                level,
                record: self,
            }),
            level => Education::Higher(HigherEducation {
                level,
                record: self,
            }),
        }
    }
}

pub enum Education<'a> {
    Secondary(SecondaryEducation<'a>),
    Higher(HigherEducation<'a>),
}

pub struct SecondaryEducation<'a> {
    pub level: EducationLevel,
    pub record: &'a EducationRecord,
}

pub struct HigherEducation<'a> {
    pub level: Option<EducationLevel>,
    pub record: &'a EducationRecord,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperience {
    pub company_name: Option<String>,
    pub designation: Option<String>,
    pub employment_type: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub currently_work_here: bool,
    pub responsibilities: Option<String>,
}

impl FromFields for WorkExperience {
    fn from_fields(fields: &Fields<'_>) -> Self {
        Self {
            company_name: fields.text(&["companyName", "company"]),
            designation: fields.text(&["designation", "jobTitle"]),
            employment_type: fields.text(&["employmentType"]),
            location: fields.text(&["location"]),
            start_date: fields.text(&["startDate"]),
            end_date: fields.text(&["endDate"]),
            currently_work_here: fields.flag(&["currentlyWorkHere"]),
            responsibilities: fields.text(&["responsibilities", "description"]),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub title: Option<String>,
    pub role: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub url: Option<DocumentRef>,
}

impl FromFields for ProjectRecord {
    fn from_fields(fields: &Fields<'_>) -> Self {
        Self {
            title: fields.text(&["title", "projectName"]),
            role: fields.text(&["role"]),
            description: fields.text(&["description"]),
            start_date: fields.text(&["startDate"]),
            end_date: fields.text(&["endDate"]),
            url: fields.document(&["url", "link"]),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillRecord {
    pub name: Option<String>,
    pub proficiency: Option<String>,
    pub years_of_experience: Option<String>,
}

impl FromFields for SkillRecord {
    fn from_fields(fields: &Fields<'_>) -> Self {
        Self {
            name: fields.text(&["name", "skillName"]),
            proficiency: fields.text(&["proficiency", "level"]),
            years_of_experience: fields.text(&["yearsOfExperience"]),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementRecord {
    pub title: Option<String>,
    pub issuer: Option<String>,
    pub date: Option<String>,
    pub description: Option<String>,
    pub certificate: Option<DocumentRef>,
}

impl FromFields for AchievementRecord {
    fn from_fields(fields: &Fields<'_>) -> Self {
        Self {
            title: fields.text(&["title"]),
            issuer: fields.text(&["issuer", "issuedBy"]),
            date: fields.text(&["date", "issueDate"]),
            description: fields.text(&["description"]),
            certificate: fields.document(&["certificate"]),
        }
    }
}

/// Stored file reference. Accepts either a bare URL string or `{ "url", "name" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentRef {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl DocumentRef {
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(url) => Some(Self {
                url: url.clone(),
                name: None,
            }),
            Value::Object(fields) => {
                let url = fields
                    .get("url")
                    .or_else(|| fields.get("fileUrl"))
                    .and_then(Value::as_str)?;
                let name = fields
                    .get("name")
                    .or_else(|| fields.get("fileName"))
                    .and_then(Value::as_str)
                    .map(str::to_string);
                Some(Self {
                    url: url.to_string(),
                    name,
                })
            }
            _ => None,
        }
    }
}

/// Stage 2 attribute bag. Any key, even one holding `null`, means the
/// applicant has started the confidential stage.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ConfidentialData(BTreeMap<String, Value>);

impl ConfidentialData {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Scalar value rendered as text; objects, arrays and `null` read as absent.
    pub fn text(&self, key: &str) -> Option<String> {
        self.0.get(key).and_then(scalar_text)
    }

    pub fn document(&self, key: &str) -> Option<DocumentRef> {
        self.0.get(key).and_then(DocumentRef::from_value)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for ConfidentialData {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_parsing_accepts_both_stage_three_spellings() {
        assert_eq!(
            ApplicationStatus::parse("HR_REVIEW_STG3"),
            ApplicationStatus::HrReviewStage3
        );
        assert_eq!(
            ApplicationStatus::parse("hr-review-stage3"),
            ApplicationStatus::HrReviewStage3
        );
        assert_eq!(
            ApplicationStatus::parse(" Stage2 Approved "),
            ApplicationStatus::Stage2Approved
        );
    }

    #[test]
    fn reached_is_monotonic_and_unknown_states_reach_nothing() {
        let gate = ApplicationStatus::Stage2Approved;
        assert!(!ApplicationStatus::Stage2Submitted.has_reached(&gate));
        assert!(ApplicationStatus::Stage2Approved.has_reached(&gate));
        assert!(ApplicationStatus::HrReviewStage3.has_reached(&gate));
        assert!(ApplicationStatus::Completed.has_reached(&gate));

        let unknown = ApplicationStatus::parse("ON_HOLD");
        assert_eq!(unknown.code(), "ON_HOLD");
        assert!(!unknown.has_reached(&ApplicationStatus::Invited));
    }

    #[test]
    fn status_serializes_back_to_its_wire_code() {
        let encoded = serde_json::to_value(ApplicationStatus::HrReviewStage3).expect("encodes");
        assert_eq!(encoded, json!("HR_REVIEW_STG3"));
    }

    #[test]
    fn nulls_and_wrong_types_collapse_to_defaults() {
        let application: Application = serde_json::from_value(json!({
            "applicationId": 42,
            "status": null,
            "personalDetails": null,
            "currentAddress": "somewhere",
            "education": null,
            "workExperience": [null, { "companyName": "Acme", "currentlyWorkHere": "true" }],
            "skills": { "name": "not a list" },
            "confidentialData": ["not", "a", "bag"],
            "resume": { "name": "cv.pdf" }
        }))
        .expect("lenient decode");

        assert_eq!(application.id(), Some(ApplicationId("42".to_string())));
        assert!(application.status.is_none());
        assert_eq!(application.personal_details, PersonalDetails::default());
        assert_eq!(application.current_address, Address::default());
        assert!(application.education.is_empty());
        assert_eq!(application.work_experience.len(), 1);
        assert!(application.work_experience[0].currently_work_here);
        assert!(application.skills.is_empty());
        assert!(application.confidential_data.is_empty());
        assert!(application.resume.is_none());
    }

    #[test]
    fn document_id_and_application_id_together_decode() {
        let application: Application = serde_json::from_value(json!({
            "_id": { "$oid": "65f0c2e1" },
            "applicationId": "APP-1",
            "status": "COMPLETED"
        }))
        .expect("both id spellings decode");

        assert_eq!(application.id(), Some(ApplicationId("APP-1".to_string())));
        assert_eq!(application.status, Some(ApplicationStatus::Completed));

        let mongo_only: Application = serde_json::from_value(json!({ "_id": { "$oid": "65f0" } }))
            .expect("object id decodes");
        assert_eq!(mongo_only.id(), Some(ApplicationId("65f0".to_string())));
    }

    #[test]
    fn records_with_both_spellings_keep_every_field() {
        let application: Application = serde_json::from_value(json!({
            "personalDetails": {
                "firstName": "Ravi",
                "phone": "",
                "phoneNumber": "9000000001",
                "dob": "1990-01-02",
                "dateOfBirth": "1990-01-01"
            },
            "currentAddress": { "pinCode": 560001, "postalCode": "560002" },
            "workExperience": [
                { "company": "Acme", "companyName": "Acme Pvt", "currentlyWorkHere": true,
                  "description": "old", "responsibilities": "new" }
            ],
            "skills": [{ "name": "Rust", "level": "Expert", "proficiency": "Advanced" }]
        }))
        .expect("duplicate spellings decode");

        let details = &application.personal_details;
        assert_eq!(details.first_name.as_deref(), Some("Ravi"));
        assert_eq!(details.phone.as_deref(), Some("9000000001"));
        assert_eq!(details.date_of_birth.as_deref(), Some("1990-01-01"));
        assert_eq!(application.current_address.postal_code.as_deref(), Some("560002"));

        assert!(application.has_work_experience());
        let job = &application.work_experience[0];
        assert_eq!(job.company_name.as_deref(), Some("Acme Pvt"));
        assert_eq!(job.responsibilities.as_deref(), Some("new"));
        assert!(job.currently_work_here);

        assert_eq!(application.skills[0].proficiency.as_deref(), Some("Advanced"));
    }

    #[test]
    fn non_object_documents_are_rejected() {
        let result = serde_json::from_value::<Application>(json!("APP-1"));
        assert!(result.is_err());
    }

    #[test]
    fn confidential_key_with_null_value_still_counts() {
        let application: Application = serde_json::from_value(json!({
            "confidentialData": { "bankName": null }
        }))
        .expect("decodes");

        assert_eq!(application.confidential_data.len(), 1);
        assert_eq!(application.confidential_data.text("bankName"), None);
    }

    #[test]
    fn education_dispatch_follows_level() {
        let secondary = EducationRecord {
            education_level: Some("HIGHER-SECONDARY".to_string()),
            ..EducationRecord::default()
        };
        assert!(matches!(secondary.classify(), Education::Secondary(_)));

        let degree = EducationRecord {
            education_level: Some("UNDERGRADUATE".to_string()),
            ..EducationRecord::default()
        };
        assert!(matches!(degree.classify(), Education::Higher(_)));

        let unlabelled = EducationRecord::default();
        assert!(matches!(
            unlabelled.classify(),
            Education::Higher(HigherEducation { level: None, .. })
        ));
    }

    #[test]
    fn full_name_skips_blank_parts() {
        let details = PersonalDetails {
            first_name: Some("Asha".to_string()),
            middle_name: Some("  ".to_string()),
            last_name: Some("Rao".to_string()),
            ..PersonalDetails::default()
        };
        assert_eq!(details.full_name().as_deref(), Some("Asha Rao"));
        assert_eq!(PersonalDetails::default().full_name(), None);
    }
}
