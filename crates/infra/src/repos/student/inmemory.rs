use super::IStudentRepo;
use crate::repos::shared::inmemory_repo::*;
use edu_remind_domain::{Student, ID};

pub struct InMemoryStudentRepo {
    students: std::sync::Mutex<Vec<Student>>,
}

impl InMemoryStudentRepo {
    pub fn new() -> Self {
        Self {
            students: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IStudentRepo for InMemoryStudentRepo {
    async fn insert(&self, student: &Student) -> anyhow::Result<()> {
        insert(student, &self.students);
        Ok(())
    }

    async fn insert_many(&self, students: &[Student]) -> anyhow::Result<()> {
        insert_many(students, &self.students);
        Ok(())
    }

    async fn find(&self, student_id: &ID) -> Option<Student> {
        find(student_id, &self.students)
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Student>> {
        Ok(find_all(&self.students))
    }

    async fn toggle_opt_in(&self, student_id: &ID) -> Option<Student> {
        update(student_id, &self.students, |s| s.toggle_opt_in())
    }

    async fn delete(&self, student_id: &ID) -> Option<Student> {
        delete(student_id, &self.students)
    }
}
