use edu_remind_domain::ApiConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiConfigDTO {
    pub phone_id: String,
    pub access_token: String,
    pub is_production: bool,
    pub use_fallback: bool,
}

impl ApiConfigDTO {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            phone_id: config.phone_id,
            access_token: config.access_token,
            is_production: config.is_production,
            use_fallback: config.use_fallback,
        }
    }
}
