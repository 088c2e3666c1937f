use super::IImportPreviewRepo;
use edu_remind_domain::{ImportError, ImportPreview, Student};
use std::sync::{Mutex, MutexGuard, PoisonError};

pub struct InMemoryImportPreviewRepo {
    preview: Mutex<ImportPreview>,
}

impl InMemoryImportPreviewRepo {
    pub fn new() -> Self {
        Self {
            preview: Mutex::new(ImportPreview::new()),
        }
    }

    fn preview(&self) -> MutexGuard<'_, ImportPreview> {
        self.preview.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait::async_trait]
impl IImportPreviewRepo for InMemoryImportPreviewRepo {
    async fn get(&self) -> ImportPreview {
        self.preview().clone()
    }

    async fn set(&self, candidates: Vec<Student>) {
        self.preview().set(candidates);
    }

    async fn clear(&self) {
        self.preview().clear();
    }

    async fn take_for_commit(&self) -> Result<Vec<Student>, ImportError> {
        self.preview().take_for_commit()
    }
}
