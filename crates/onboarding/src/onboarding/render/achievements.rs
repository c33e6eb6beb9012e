use super::super::domain::{AchievementRecord, Application};
use super::super::presentation::FieldValue;
use super::views::FieldGroup;

pub(super) fn groups(application: &Application) -> Vec<FieldGroup> {
    if application.achievements.is_empty() {
        return vec![FieldGroup::new("Achievements").field("Achievements", FieldValue::text(None))];
    }

    application
        .achievements
        .iter()
        .enumerate()
        .map(|(index, record)| achievement(index + 1, record))
        .collect()
}

fn achievement(position: usize, record: &AchievementRecord) -> FieldGroup {
    FieldGroup::new(format!("Achievement {position}"))
        .field("Title", FieldValue::text(record.title.as_deref()))
        .field("Issued By", FieldValue::text(record.issuer.as_deref()))
        .field("Date", FieldValue::date(record.date.as_deref()))
        .field("Description", FieldValue::text(record.description.as_deref()))
        .field("Certificate", FieldValue::document(record.certificate.as_ref()))
}
