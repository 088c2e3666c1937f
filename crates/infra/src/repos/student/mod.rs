mod inmemory;

use edu_remind_domain::{Student, ID};
pub use inmemory::InMemoryStudentRepo;

#[async_trait::async_trait]
pub trait IStudentRepo: Send + Sync {
    async fn insert(&self, student: &Student) -> anyhow::Result<()>;
    /// Appends the students after the existing ones, keeping their order
    async fn insert_many(&self, students: &[Student]) -> anyhow::Result<()>;
    async fn find(&self, student_id: &ID) -> Option<Student>;
    /// All students in registry order
    async fn find_all(&self) -> anyhow::Result<Vec<Student>>;
    async fn toggle_opt_in(&self, student_id: &ID) -> Option<Student>;
    async fn delete(&self, student_id: &ID) -> Option<Student>;
}
