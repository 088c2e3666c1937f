use crate::dtos::StudentDTO;
use edu_remind_domain::{Student, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentResponse {
    pub student: StudentDTO,
}

impl StudentResponse {
    pub fn new(student: Student) -> Self {
        Self {
            student: StudentDTO::new(student),
        }
    }
}

pub mod get_students {
    use super::*;

    #[derive(Debug, Default, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct QueryParams {
        pub search: Option<String>,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub students: Vec<StudentDTO>,
    }

    impl APIResponse {
        pub fn new(students: Vec<Student>) -> Self {
            Self {
                students: students.into_iter().map(StudentDTO::new).collect(),
            }
        }
    }
}

pub mod create_student {
    use super::*;

    #[derive(Debug, Default, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub name: String,
        pub phone: String,
        #[serde(default)]
        pub email: Option<String>,
        #[serde(default)]
        pub department: Option<String>,
        #[serde(default)]
        pub batch: Option<String>,
    }

    pub type APIResponse = StudentResponse;
}

pub mod delete_student {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub student_id: ID,
    }

    pub type APIResponse = StudentResponse;
}

pub mod toggle_student_opt_in {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub student_id: ID,
    }

    pub type APIResponse = StudentResponse;
}
