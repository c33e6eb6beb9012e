//! Leaf formatting shared by every rendered field.
//!
//! None of these functions can fail: anything missing, blank, or unparseable
//! comes back as [`NOT_PROVIDED`].

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Serialize;

use super::domain::DocumentRef;

pub const NOT_PROVIDED: &str = "Not Provided";
pub const PRESENT: &str = "Present";
pub const PURSUING: &str = "Pursuing";

const MASK: &str = "••••••••";
const VISIBLE_TAIL: usize = 4;
const DOCUMENT_LABEL: &str = "View Document";

pub(crate) fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

pub fn display_text(value: Option<&str>) -> String {
    present(value).unwrap_or(NOT_PROVIDED).to_string()
}

/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps (calendar date in the stored
/// offset), and naive `YYYY-MM-DDTHH:MM:SS[.f]` timestamps.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(stamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(stamp.date_naive());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|stamp| stamp.date())
}

/// Renders as `15 March 2024`.
pub fn display_date(value: Option<&str>) -> String {
    present(value)
        .and_then(parse_date)
        .map(|date| date.format("%-d %B %Y").to_string())
        .unwrap_or_else(|| NOT_PROVIDED.to_string())
}

/// Keeps the last four characters behind a fixed eight-character mask.
pub fn mask_sensitive(value: Option<&str>) -> String {
    let Some(value) = present(value) else {
        return NOT_PROVIDED.to_string();
    };

    let chars: Vec<char> = value.chars().collect();
    if chars.len() <= VISIBLE_TAIL {
        return value.to_string();
    }

    let tail: String = chars[chars.len() - VISIBLE_TAIL..].iter().collect();
    format!("{MASK}{tail}")
}

/// Formatted leaf value. Documents with a URL become links; everything else
/// is text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldValue {
    Text { text: String },
    Link { url: String, label: String },
}

impl FieldValue {
    pub fn text(value: Option<&str>) -> Self {
        Self::Text {
            text: display_text(value),
        }
    }

    pub fn literal(text: &str) -> Self {
        Self::Text {
            text: text.to_string(),
        }
    }

    pub fn date(value: Option<&str>) -> Self {
        Self::Text {
            text: display_date(value),
        }
    }

    pub fn masked(value: Option<&str>) -> Self {
        Self::Text {
            text: mask_sensitive(value),
        }
    }

    /// A missing document falls through [`FieldValue::text`] like any other
    /// missing field.
    pub fn document(document: Option<&DocumentRef>) -> Self {
        let link = document.and_then(|document| {
            present(Some(&document.url)).map(|url| Self::Link {
                url: url.to_string(),
                label: present(document.name.as_deref())
                    .unwrap_or(DOCUMENT_LABEL)
                    .to_string(),
            })
        });

        link.unwrap_or_else(|| Self::text(None))
    }

    /// Text shown to the reader: the text itself, or a link's label.
    pub fn display(&self) -> &str {
        match self {
            Self::Text { text } => text,
            Self::Link { label, .. } => label,
        }
    }

    pub fn is_provided(&self) -> bool {
        match self {
            Self::Text { text } => text != NOT_PROVIDED,
            Self::Link { .. } => true,
        }
    }
}
