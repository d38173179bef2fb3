use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Payload of `GET /api/row-counts`
///
/// The backend answers either with a summary or with `{ "error": "..." }`.
/// A non-empty `error` wins over any other field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RowCountPayload", into = "RowCountPayload")]
pub enum RowCountResponse {
    Success(RowCountSummary),
    Failure { error: String },
}

/// Row counts for the whole document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowCountSummary {
    pub total_rows: i64,
    /// Sections in document order
    pub sections: Vec<Section>,
}

/// Named contiguous range of the counted document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub section_title: String,
    pub row_count: i64,
    /// First row of the section, None when the counter found no row numbers
    #[serde(default)]
    pub start_row: Option<i64>,
    /// Last row of the section
    #[serde(default)]
    pub end_row: Option<i64>,
}

impl Section {
    /// Start row worth showing: present and non-zero
    pub fn visible_start_row(&self) -> Option<i64> {
        self.start_row.filter(|row| *row != 0)
    }

    /// End row worth showing: present and non-zero
    pub fn visible_end_row(&self) -> Option<i64> {
        self.end_row.filter(|row| *row != 0)
    }
}

/// Ошибки валидации ответа row-counts
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayloadError {
    #[error("missing field `{0}` in row counts payload")]
    MissingField(&'static str),
}

/// Loose wire shape, validated into [`RowCountResponse`]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct RowCountPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    total_rows: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sections: Option<Vec<Section>>,
}

impl TryFrom<RowCountPayload> for RowCountResponse {
    type Error = PayloadError;

    fn try_from(payload: RowCountPayload) -> Result<Self, Self::Error> {
        if let Some(error) = payload.error.filter(|e| !e.is_empty()) {
            return Ok(RowCountResponse::Failure { error });
        }

        let total_rows = payload
            .total_rows
            .ok_or(PayloadError::MissingField("total_rows"))?;
        let sections = payload
            .sections
            .ok_or(PayloadError::MissingField("sections"))?;

        Ok(RowCountResponse::Success(RowCountSummary {
            total_rows,
            sections,
        }))
    }
}

impl From<RowCountResponse> for RowCountPayload {
    fn from(response: RowCountResponse) -> Self {
        match response {
            RowCountResponse::Success(summary) => RowCountPayload {
                error: None,
                total_rows: Some(summary.total_rows),
                sections: Some(summary.sections),
            },
            RowCountResponse::Failure { error } => RowCountPayload {
                error: Some(error),
                ..Default::default()
            },
        }
    }
}
