use super::super::domain::{Application, ConfidentialData};
use super::super::presentation::FieldValue;
use super::views::FieldGroup;

const PRIOR_EXPERIENCE_DOCUMENTS: &str = "Prior Experience Documents";
const STATUTORY_NUMBERS: &str = "Statutory Numbers";

pub(super) fn groups(application: &Application) -> Vec<FieldGroup> {
    let data = &application.confidential_data;

    let mut groups = vec![identity(data), bank(data), emergency_contact(data)];

    // Only applicants with prior employment have these to submit.
    if application.has_work_experience() {
        groups.push(prior_experience(data));
        groups.push(statutory(data));
    }

    groups
}

fn identity(data: &ConfidentialData) -> FieldGroup {
    FieldGroup::new("Identity Documents")
        .field("PAN Number", FieldValue::text(data.text("panNumber").as_deref()))
        .field("PAN Card", FieldValue::document(data.document("panCard").as_ref()))
        .field(
            "Aadhaar Number",
            FieldValue::masked(data.text("aadhaarNumber").as_deref()),
        )
        .field(
            "Aadhaar Card",
            FieldValue::document(data.document("aadhaarCard").as_ref()),
        )
        .field(
            "Passport Number",
            FieldValue::text(data.text("passportNumber").as_deref()),
        )
        .field("Passport", FieldValue::document(data.document("passport").as_ref()))
}

fn bank(data: &ConfidentialData) -> FieldGroup {
    FieldGroup::new("Bank Details")
        .field("Bank Name", FieldValue::text(data.text("bankName").as_deref()))
        .field(
            "Account Holder",
            FieldValue::text(data.text("accountHolderName").as_deref()),
        )
        .field(
            "Account Number",
            FieldValue::masked(data.text("accountNumber").as_deref()),
        )
        .field("IFSC Code", FieldValue::text(data.text("ifscCode").as_deref()))
        .field("Branch", FieldValue::text(data.text("branchName").as_deref()))
        .field(
            "Cancelled Cheque",
            FieldValue::document(data.document("cancelledCheque").as_ref()),
        )
}

fn emergency_contact(data: &ConfidentialData) -> FieldGroup {
    FieldGroup::new("Emergency Contact")
        .field(
            "Name",
            FieldValue::text(data.text("emergencyContactName").as_deref()),
        )
        .field(
            "Relationship",
            FieldValue::text(data.text("emergencyContactRelation").as_deref()),
        )
        .field(
            "Phone",
            FieldValue::text(data.text("emergencyContactPhone").as_deref()),
        )
}

fn prior_experience(data: &ConfidentialData) -> FieldGroup {
    FieldGroup::new(PRIOR_EXPERIENCE_DOCUMENTS)
        .field(
            "Offer Letter",
            FieldValue::document(data.document("offerLetter").as_ref()),
        )
        .field(
            "Relieving Letter",
            FieldValue::document(data.document("relievingLetter").as_ref()),
        )
        .field(
            "Experience Letter",
            FieldValue::document(data.document("experienceLetter").as_ref()),
        )
        .field(
            "Salary Slips",
            FieldValue::document(data.document("salarySlips").as_ref()),
        )
}

fn statutory(data: &ConfidentialData) -> FieldGroup {
    FieldGroup::new(STATUTORY_NUMBERS)
        .field("UAN Number", FieldValue::text(data.text("uanNumber").as_deref()))
        .field("PF Number", FieldValue::text(data.text("pfNumber").as_deref()))
        .field("ESIC Number", FieldValue::text(data.text("esicNumber").as_deref()))
}
