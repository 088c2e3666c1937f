use crate::dtos::DashboardStatsDTO;
use serde::{Deserialize, Serialize};

pub mod get_dashboard {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub stats: DashboardStatsDTO,
    }
}
