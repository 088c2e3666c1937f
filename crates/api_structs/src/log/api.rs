use crate::dtos::MessageLogDTO;
use edu_remind_domain::MessageLog;
use serde::{Deserialize, Serialize};

pub mod get_message_logs {
    use super::*;

    #[derive(Debug, Default, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct QueryParams {
        pub search: Option<String>,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub logs: Vec<MessageLogDTO>,
    }

    impl APIResponse {
        pub fn new(logs: Vec<MessageLog>) -> Self {
            Self {
                logs: logs.into_iter().map(MessageLogDTO::new).collect(),
            }
        }
    }
}
