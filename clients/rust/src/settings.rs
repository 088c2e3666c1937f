use crate::{APIResponse, BaseClient};
use edu_remind_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct SettingsClient {
    base: Arc<BaseClient>,
}

pub type ApiConfigInput = set_api_config::RequestBody;

impl SettingsClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn get_api_config(&self) -> APIResponse<get_api_config::APIResponse> {
        self.base
            .get("settings/api-config".into(), StatusCode::OK)
            .await
    }

    pub async fn set_api_config(
        &self,
        input: ApiConfigInput,
    ) -> APIResponse<set_api_config::APIResponse> {
        self.base
            .put(input, "settings/api-config".into(), StatusCode::OK)
            .await
    }

    pub async fn get_admin_credentials(&self) -> APIResponse<get_admin_credentials::APIResponse> {
        self.base
            .get("settings/credentials".into(), StatusCode::OK)
            .await
    }

    pub async fn set_admin_credentials(
        &self,
        username: String,
        password: String,
    ) -> APIResponse<set_admin_credentials::APIResponse> {
        let body = set_admin_credentials::RequestBody { username, password };
        self.base
            .put(body, "settings/credentials".into(), StatusCode::OK)
            .await
    }

    pub async fn login(&self, username: String, password: String) -> APIResponse<login::APIResponse> {
        let body = login::RequestBody { username, password };
        self.base
            .post(body, "auth/login".into(), StatusCode::OK)
            .await
    }
}
