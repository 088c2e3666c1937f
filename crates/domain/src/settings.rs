use serde::{Deserialize, Serialize};

pub const ADMIN_CREDENTIALS_KEY: &str = "edu_remind_admin_creds";
pub const API_CONFIG_KEY: &str = "edu_remind_api_config";

const DEFAULT_ADMIN_USERNAME: &str = "admin";
const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// Username and password of the dashboard operator.
/// Used when nothing has been saved yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

impl Default for AdminCredentials {
    fn default() -> Self {
        Self {
            username: DEFAULT_ADMIN_USERNAME.to_string(),
            password: DEFAULT_ADMIN_PASSWORD.to_string(),
        }
    }
}

impl AdminCredentials {
    pub fn verify(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }

    pub fn is_complete(&self) -> bool {
        !self.username.trim().is_empty() && !self.password.is_empty()
    }
}

/// WhatsApp Business API settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiConfig {
    pub phone_id: String,
    pub access_token: String,
    pub is_production: bool,
    pub use_fallback: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            phone_id: String::new(),
            access_token: String::new(),
            is_production: false,
            use_fallback: true,
        }
    }
}
