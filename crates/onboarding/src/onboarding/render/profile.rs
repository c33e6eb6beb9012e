use super::super::domain::{
    Address, Application, Education, EducationRecord, HigherEducation, PersonalDetails,
    ProjectRecord, SecondaryEducation, SkillRecord, WorkExperience,
};
use super::super::presentation::{present, FieldValue, PRESENT, PURSUING};
use super::views::FieldGroup;

pub(super) fn groups(application: &Application) -> Vec<FieldGroup> {
    let mut groups = vec![
        personal_details(&application.personal_details),
        address("Current Address", &application.current_address),
        address("Permanent Address", &application.permanent_address),
    ];

    groups.extend(
        application
            .education
            .iter()
            .enumerate()
            .map(|(index, record)| education(index + 1, record)),
    );
    groups.extend(
        application
            .work_experience
            .iter()
            .enumerate()
            .map(|(index, record)| work_experience(index + 1, record)),
    );
    groups.extend(
        application
            .projects
            .iter()
            .enumerate()
            .map(|(index, record)| project(index + 1, record)),
    );
    groups.push(skills(&application.skills));
    groups.push(
        FieldGroup::new("Resume").field("Resume", FieldValue::document(application.resume.as_ref())),
    );

    groups
}

fn personal_details(details: &PersonalDetails) -> FieldGroup {
    FieldGroup::new("Personal Details")
        .field("Full Name", FieldValue::text(details.full_name().as_deref()))
        .field("Email", FieldValue::text(details.email.as_deref()))
        .field("Phone", FieldValue::text(details.phone.as_deref()))
        .field("Date of Birth", FieldValue::date(details.date_of_birth.as_deref()))
        .field("Gender", FieldValue::text(details.gender.as_deref()))
        .field("Marital Status", FieldValue::text(details.marital_status.as_deref()))
        .field("Blood Group", FieldValue::text(details.blood_group.as_deref()))
        .field("Nationality", FieldValue::text(details.nationality.as_deref()))
}

fn address(title: &str, address: &Address) -> FieldGroup {
    FieldGroup::new(title)
        .field("Address Line 1", FieldValue::text(address.line1.as_deref()))
        .field("Address Line 2", FieldValue::text(address.line2.as_deref()))
        .field("City", FieldValue::text(address.city.as_deref()))
        .field("State", FieldValue::text(address.state.as_deref()))
        .field("Country", FieldValue::text(address.country.as_deref()))
        .field("Postal Code", FieldValue::text(address.postal_code.as_deref()))
}

fn education(position: usize, record: &EducationRecord) -> FieldGroup {
    match record.classify() {
        Education::Secondary(entry) => secondary_education(position, entry),
        Education::Higher(entry) => higher_education(position, entry),
    }
}

fn secondary_education(position: usize, entry: SecondaryEducation<'_>) -> FieldGroup {
    let record = entry.record;
    FieldGroup::new(format!("Education {position}: {}", entry.level.label()))
        .field("Institution", FieldValue::text(record.institution.as_deref()))
        .field("Board", FieldValue::text(record.board.as_deref()))
        .field("Year of Passing", FieldValue::text(record.year_of_passing.as_deref()))
        .field("Grade", FieldValue::text(record.grade.as_deref()))
        .field("Certificate", FieldValue::document(record.certificate.as_ref()))
}

fn higher_education(position: usize, entry: HigherEducation<'_>) -> FieldGroup {
    let record = entry.record;
    let title = match &entry.level {
        Some(level) => format!("Education {position}: {}", level.label()),
        None => format!("Education {position}"),
    };

    let pursuing = record.is_pursuing();
    let end_date = if pursuing {
        FieldValue::literal(PURSUING)
    } else {
        FieldValue::date(record.end_date.as_deref())
    };
    let grade_label = if pursuing { "Latest Grade" } else { "Final Grade" };

    FieldGroup::new(title)
        .field("Institution", FieldValue::text(record.institution.as_deref()))
        .field("Degree", FieldValue::text(record.degree.as_deref()))
        .field("Specialization", FieldValue::text(record.specialization.as_deref()))
        .field("Status", FieldValue::text(record.status.as_deref()))
        .field("Start Date", FieldValue::date(record.start_date.as_deref()))
        .field("End Date", end_date)
        .field(grade_label, FieldValue::text(record.grade.as_deref()))
        .field("Certificate", FieldValue::document(record.certificate.as_ref()))
}

fn work_experience(position: usize, record: &WorkExperience) -> FieldGroup {
    // A current role ignores whatever end date was stored.
    let end_date = if record.currently_work_here {
        FieldValue::literal(PRESENT)
    } else {
        FieldValue::date(record.end_date.as_deref())
    };

    FieldGroup::new(format!("Work Experience {position}"))
        .field("Company", FieldValue::text(record.company_name.as_deref()))
        .field("Designation", FieldValue::text(record.designation.as_deref()))
        .field("Employment Type", FieldValue::text(record.employment_type.as_deref()))
        .field("Location", FieldValue::text(record.location.as_deref()))
        .field("Start Date", FieldValue::date(record.start_date.as_deref()))
        .field("End Date", end_date)
        .field("Responsibilities", FieldValue::text(record.responsibilities.as_deref()))
}

fn project(position: usize, record: &ProjectRecord) -> FieldGroup {
    FieldGroup::new(format!("Project {position}"))
        .field("Title", FieldValue::text(record.title.as_deref()))
        .field("Role", FieldValue::text(record.role.as_deref()))
        .field("Description", FieldValue::text(record.description.as_deref()))
        .field("Start Date", FieldValue::date(record.start_date.as_deref()))
        .field("End Date", FieldValue::date(record.end_date.as_deref()))
        .field("Link", FieldValue::document(record.url.as_ref()))
}

fn skills(records: &[SkillRecord]) -> FieldGroup {
    if records.is_empty() {
        return FieldGroup::new("Skills").field("Skills", FieldValue::text(None));
    }

    records.iter().fold(FieldGroup::new("Skills"), |group, record| {
        let summary = skill_summary(record);
        group.field("Skill", FieldValue::text(summary.as_deref()))
    })
}

fn skill_summary(record: &SkillRecord) -> Option<String> {
    let name = present(record.name.as_deref())?;
    let detail: Vec<String> = [
        present(record.proficiency.as_deref()).map(str::to_string),
        present(record.years_of_experience.as_deref()).map(|years| format!("{years} yrs")),
    ]
    .into_iter()
    .flatten()
    .collect();

    if detail.is_empty() {
        Some(name.to_string())
    } else {
        Some(format!("{name} ({})", detail.join(", ")))
    }
}
