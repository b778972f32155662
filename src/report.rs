//! Serializable result shape shared by the CLI and the HTTP service.

use serde::Serialize;

use crate::error::SummaryResult;
use crate::processing::{FrequencyTable, Summary};
use crate::summarizer::Summarizer;

/// Which column to rank and how many values to keep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopRequest {
    pub column: String,
    pub limit: usize,
}

impl TopRequest {
    pub fn new(column: impl Into<String>, limit: usize) -> Self {
        Self {
            column: column.into(),
            limit,
        }
    }
}

/// `{"total_rows": .., "summary": {..}, "top_values": [[value, count], ..]}`
///
/// `top_values` is omitted unless it was requested.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub total_rows: usize,
    pub summary: Summary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_values: Option<FrequencyTable>,
}

impl Report {
    /// Compute every view of the report. The first failing view aborts the whole report.
    pub fn build(summarizer: &Summarizer, top: Option<&TopRequest>) -> SummaryResult<Self> {
        let top_values = match top {
            Some(req) => Some(summarizer.top_values(&req.column, req.limit)?),
            None => None,
        };
        Ok(Self {
            total_rows: summarizer.row_count(),
            summary: summarizer.summarize()?,
            top_values,
        })
    }
}
