use crate::dtos::ImportPreviewDTO;
use edu_remind_domain::ImportPreview;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportPreviewResponse {
    pub preview: ImportPreviewDTO,
}

impl ImportPreviewResponse {
    pub fn new(preview: ImportPreview) -> Self {
        Self {
            preview: ImportPreviewDTO::new(preview),
        }
    }
}

pub mod parse_import_text {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub text: String,
    }

    pub type APIResponse = ImportPreviewResponse;
}

/// The raw file is sent as the request body
pub mod parse_import_file {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct QueryParams {
        pub file_name: String,
    }

    pub type APIResponse = ImportPreviewResponse;
}

pub mod get_import_preview {
    use super::*;

    pub type APIResponse = ImportPreviewResponse;
}

pub mod clear_import_preview {
    use super::*;

    pub type APIResponse = ImportPreviewResponse;
}

pub mod commit_import {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub committed: usize,
        pub total_students: usize,
    }
}

/// Responds with the template workbook as an attachment
pub mod get_import_template {
    pub const CONTENT_TYPE: &str =
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
}
