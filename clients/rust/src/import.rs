use crate::{APIResponse, BaseClient};
use edu_remind_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

/// Bulk student import: parse into the preview, inspect it, then commit
#[derive(Clone)]
pub struct ImportClient {
    base: Arc<BaseClient>,
}

impl ImportClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn parse_text(&self, text: String) -> APIResponse<parse_import_text::APIResponse> {
        let body = parse_import_text::RequestBody { text };
        self.base
            .post(body, "students/import/text".into(), StatusCode::OK)
            .await
    }

    pub async fn parse_file(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> APIResponse<parse_import_file::APIResponse> {
        self.base
            .post_bytes(
                bytes,
                "students/import/file".into(),
                &parse_import_file::QueryParams {
                    file_name: file_name.to_string(),
                },
                StatusCode::OK,
            )
            .await
    }

    pub async fn get_preview(&self) -> APIResponse<get_import_preview::APIResponse> {
        self.base
            .get("students/import/preview".into(), StatusCode::OK)
            .await
    }

    pub async fn clear_preview(&self) -> APIResponse<clear_import_preview::APIResponse> {
        self.base
            .delete("students/import/preview".into(), StatusCode::OK)
            .await
    }

    pub async fn commit(&self) -> APIResponse<commit_import::APIResponse> {
        self.base
            .post((), "students/import/commit".into(), StatusCode::OK)
            .await
    }

    /// The template workbook as raw bytes
    pub async fn download_template(&self) -> APIResponse<Vec<u8>> {
        self.base
            .get_bytes("students/import/template".into(), StatusCode::OK)
            .await
    }
}
