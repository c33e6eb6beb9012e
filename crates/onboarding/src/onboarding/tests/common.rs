use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde_json::json;

use crate::onboarding::domain::{
    AchievementRecord, Address, Application, ApplicationId, ApplicationStatus, ConfidentialData,
    DocumentRef, EducationRecord, PersonalDetails, SkillRecord, WorkExperience,
};
use crate::onboarding::repository::{ApplicationRepository, ProfileStatusLookup, RepositoryError};
use crate::onboarding::roster::{OnboardingStatus, ProfileStatus};
use crate::onboarding::service::OnboardingService;

pub(super) fn personal_details() -> PersonalDetails {
    PersonalDetails {
        first_name: Some("Meera".to_string()),
        middle_name: None,
        last_name: Some("Iyer".to_string()),
        email: Some("meera.iyer@example.com".to_string()),
        phone: Some("+91 98450 12345".to_string()),
        date_of_birth: Some("1996-07-21".to_string()),
        gender: Some("Female".to_string()),
        marital_status: None,
        blood_group: Some("  ".to_string()),
        nationality: Some("Indian".to_string()),
    }
}

pub(super) fn address() -> Address {
    Address {
        line1: Some("14 Lake View Road".to_string()),
        line2: None,
        city: Some("Bengaluru".to_string()),
        state: Some("Karnataka".to_string()),
        country: Some("India".to_string()),
        postal_code: Some("560001".to_string()),
    }
}

pub(super) fn secondary_education() -> EducationRecord {
    EducationRecord {
        education_level: Some("SECONDARY".to_string()),
        institution: Some("Kendriya Vidyalaya".to_string()),
        board: Some("CBSE".to_string()),
        degree: Some("should never render".to_string()),
        specialization: Some("should never render".to_string()),
        year_of_passing: Some("2012".to_string()),
        grade: Some("9.4 CGPA".to_string()),
        certificate: Some(DocumentRef {
            url: "https://files.example.com/meera/class10.pdf".to_string(),
            name: Some("class10.pdf".to_string()),
        }),
        ..EducationRecord::default()
    }
}

pub(super) fn degree(status: &str) -> EducationRecord {
    EducationRecord {
        education_level: Some("POSTGRADUATE".to_string()),
        institution: Some("IISc".to_string()),
        degree: Some("M.Tech".to_string()),
        specialization: Some("Computer Science".to_string()),
        status: Some(status.to_string()),
        start_date: Some("2022-08-01".to_string()),
        end_date: Some("2024-06-30".to_string()),
        grade: Some("8.7".to_string()),
        ..EducationRecord::default()
    }
}

pub(super) fn current_job() -> WorkExperience {
    WorkExperience {
        company_name: Some("Northwind Analytics".to_string()),
        designation: Some("Data Engineer".to_string()),
        employment_type: Some("Full-time".to_string()),
        location: Some("Bengaluru".to_string()),
        start_date: Some("2020-01-06".to_string()),
        end_date: Some("2023-03-31".to_string()),
        currently_work_here: true,
        responsibilities: None,
    }
}

pub(super) fn confidential_data() -> ConfidentialData {
    [
        ("bankName", json!("State Bank of India")),
        ("accountNumber", json!("1234567890123456")),
        ("ifscCode", json!("SBIN0000813")),
        ("aadhaarNumber", json!(123456789012u64)),
        ("panNumber", json!("ABCDE1234F")),
        ("offerLetter", json!({ "url": "https://files.example.com/meera/offer.pdf" })),
        ("uanNumber", json!("100200300400")),
    ]
    .into_iter()
    .collect()
}

/// Fully populated snapshot at the given lifecycle status.
pub(super) fn application(status: &str) -> Application {
    Application {
        application_id: Some("app-1001".to_string()),
        status: Some(ApplicationStatus::parse(status)),
        personal_details: personal_details(),
        current_address: address(),
        permanent_address: Address::default(),
        education: vec![secondary_education(), degree("COMPLETED")],
        work_experience: vec![current_job()],
        projects: Vec::new(),
        skills: vec![SkillRecord {
            name: Some("Rust".to_string()),
            proficiency: Some("Advanced".to_string()),
            years_of_experience: Some("4".to_string()),
        }],
        achievements: vec![AchievementRecord {
            title: Some("Hackathon Winner".to_string()),
            issuer: Some("DevFest".to_string()),
            date: Some("2023-11-18".to_string()),
            description: None,
            certificate: None,
        }],
        confidential_data: confidential_data(),
        resume: None,
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    records: Arc<Mutex<HashMap<ApplicationId, Application>>>,
}

impl MemoryRepository {
    pub(super) fn with(applications: Vec<Application>) -> Self {
        let repository = Self::default();
        {
            let mut guard = repository.records.lock().expect("repository mutex poisoned");
            for application in applications {
                let id = application.id().expect("fixture has an id");
                guard.insert(id, application);
            }
        }
        repository
    }
}

impl ApplicationRepository for MemoryRepository {
    fn fetch(&self, id: &ApplicationId) -> Result<Option<Application>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

pub(super) struct UnavailableRepository;

impl ApplicationRepository for UnavailableRepository {
    fn fetch(&self, _id: &ApplicationId) -> Result<Option<Application>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryStatuses {
    statuses: Arc<Mutex<HashMap<String, ProfileStatus>>>,
}

impl MemoryStatuses {
    pub(super) fn with(entries: &[(&str, OnboardingStatus, f64)]) -> Self {
        let lookup = Self::default();
        {
            let mut guard = lookup.statuses.lock().expect("status mutex poisoned");
            for (id, status, progress) in entries {
                guard.insert(
                    id.to_string(),
                    ProfileStatus {
                        status: *status,
                        progress: *progress,
                    },
                );
            }
        }
        lookup
    }
}

impl ProfileStatusLookup for MemoryStatuses {
    fn profile_status(&self, employee_id: &str) -> Result<Option<ProfileStatus>, RepositoryError> {
        let guard = self.statuses.lock().expect("status mutex poisoned");
        Ok(guard.get(employee_id).cloned())
    }
}

pub(super) fn service_with(
    applications: Vec<Application>,
) -> OnboardingService<MemoryRepository, MemoryStatuses> {
    OnboardingService::new(
        Arc::new(MemoryRepository::with(applications)),
        Arc::new(MemoryStatuses::with(&[
            ("emp-1", OnboardingStatus::InProgress, 55.4),
            ("emp-2", OnboardingStatus::Completed, 120.0),
        ])),
    )
}
