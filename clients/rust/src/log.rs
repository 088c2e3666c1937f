use crate::{APIResponse, BaseClient};
use edu_remind_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct LogClient {
    base: Arc<BaseClient>,
}

impl LogClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn get_all(&self, search: Option<&str>) -> APIResponse<get_message_logs::APIResponse> {
        let query = get_message_logs::QueryParams {
            search: search.map(String::from),
        };
        self.base
            .get_with_query("logs".into(), &query, StatusCode::OK)
            .await
    }
}
