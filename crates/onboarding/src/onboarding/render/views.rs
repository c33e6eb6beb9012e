use serde::Serialize;

use super::super::presentation::FieldValue;
use super::super::stages::{OnboardingStage, StageStatus};

/// Result of evaluating one snapshot. `NoData` is returned instead of any
/// partial rendering when there is no application at all.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Evaluation {
    NoData,
    Ready(ApplicationView),
}

impl Evaluation {
    pub fn view(&self) -> Option<&ApplicationView> {
        match self {
            Self::NoData => None,
            Self::Ready(view) => Some(view),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApplicationView {
    pub application_id: String,
    pub applicant_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<String>,
    pub status_label: String,
    pub stages: Vec<StageView>,
}

impl ApplicationView {
    pub fn stage(&self, stage: OnboardingStage) -> Option<&StageView> {
        self.stages.iter().find(|view| view.stage == stage)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageView {
    pub stage: OnboardingStage,
    pub number: u8,
    pub label: &'static str,
    pub status: StageStatus,
    pub status_label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<FieldGroup>,
}

impl StageView {
    pub fn group(&self, title: &str) -> Option<&FieldGroup> {
        self.groups.iter().find(|group| group.title == title)
    }

    pub fn group_titles(&self) -> Vec<&str> {
        self.groups.iter().map(|group| group.title.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldGroup {
    pub title: String,
    pub fields: Vec<Field>,
}

impl FieldGroup {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, label: &'static str, value: FieldValue) -> Self {
        self.fields.push(Field { label, value });
        self
    }

    pub fn value(&self, label: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|field| field.label == label)
            .map(|field| &field.value)
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.fields.iter().map(|field| field.label).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    pub label: &'static str,
    pub value: FieldValue,
}
