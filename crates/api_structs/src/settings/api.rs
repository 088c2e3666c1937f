use crate::dtos::ApiConfigDTO;
use edu_remind_domain::ApiConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiConfigResponse {
    pub config: ApiConfigDTO,
}

impl ApiConfigResponse {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config: ApiConfigDTO::new(config),
        }
    }
}

/// The password is never sent back
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUsernameResponse {
    pub username: String,
}

pub mod get_api_config {
    use super::*;

    pub type APIResponse = ApiConfigResponse;
}

pub mod set_api_config {
    use super::*;

    pub type RequestBody = ApiConfigDTO;
    pub type APIResponse = ApiConfigResponse;
}

pub mod get_admin_credentials {
    use super::*;

    pub type APIResponse = AdminUsernameResponse;
}

pub mod set_admin_credentials {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub username: String,
        pub password: String,
    }

    pub type APIResponse = AdminUsernameResponse;
}

pub mod login {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub username: String,
        pub password: String,
    }

    pub type APIResponse = AdminUsernameResponse;
}
