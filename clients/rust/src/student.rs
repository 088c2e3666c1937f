use crate::{APIResponse, BaseClient, ID};
use edu_remind_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct StudentClient {
    base: Arc<BaseClient>,
}

pub type CreateStudentInput = create_student::RequestBody;

impl StudentClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn get_all(&self, search: Option<&str>) -> APIResponse<get_students::APIResponse> {
        let query = get_students::QueryParams {
            search: search.map(String::from),
        };
        self.base
            .get_with_query("students".into(), &query, StatusCode::OK)
            .await
    }

    pub async fn create(
        &self,
        input: CreateStudentInput,
    ) -> APIResponse<create_student::APIResponse> {
        self.base
            .post(input, "students".into(), StatusCode::CREATED)
            .await
    }

    pub async fn delete(&self, student_id: ID) -> APIResponse<delete_student::APIResponse> {
        self.base
            .delete(format!("students/{}", student_id), StatusCode::OK)
            .await
    }

    pub async fn toggle_opt_in(
        &self,
        student_id: ID,
    ) -> APIResponse<toggle_student_opt_in::APIResponse> {
        self.base
            .put((), format!("students/{}/opt-in", student_id), StatusCode::OK)
            .await
    }
}
