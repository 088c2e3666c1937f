use edu_remind_domain::{Student, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentDTO {
    pub id: ID,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub department: Option<String>,
    pub batch: Option<String>,
    pub is_valid_phone: bool,
    pub has_opted_in: bool,
}

impl StudentDTO {
    pub fn new(student: Student) -> Self {
        Self {
            id: student.id,
            name: student.name,
            phone: student.phone,
            email: student.email,
            department: student.department,
            batch: student.batch,
            is_valid_phone: student.is_valid_phone,
            has_opted_in: student.has_opted_in,
        }
    }
}
