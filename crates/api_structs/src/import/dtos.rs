use crate::dtos::StudentDTO;
use edu_remind_domain::{ImportPreview, PreviewSummary};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewSummaryDTO {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
}

impl PreviewSummaryDTO {
    pub fn new(summary: PreviewSummary) -> Self {
        Self {
            total: summary.total,
            valid: summary.valid,
            invalid: summary.invalid,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportPreviewDTO {
    pub candidates: Vec<StudentDTO>,
    pub summary: PreviewSummaryDTO,
}

impl ImportPreviewDTO {
    pub fn new(preview: ImportPreview) -> Self {
        let summary = PreviewSummaryDTO::new(preview.summary());
        Self {
            candidates: preview
                .candidates()
                .iter()
                .cloned()
                .map(StudentDTO::new)
                .collect(),
            summary,
        }
    }
}
