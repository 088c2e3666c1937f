mod inmemory;

use edu_remind_domain::{ImportError, ImportPreview, Student};
pub use inmemory::InMemoryImportPreviewRepo;

/// Holds the single pending import of the operator
#[async_trait::async_trait]
pub trait IImportPreviewRepo: Send + Sync {
    async fn get(&self) -> ImportPreview;
    /// Replaces the pending candidates
    async fn set(&self, candidates: Vec<Student>);
    async fn clear(&self);
    /// Takes the candidates out and leaves the preview empty. Nothing changes
    /// when the preview is empty.
    async fn take_for_commit(&self) -> Result<Vec<Student>, ImportError>;
}

#[cfg(test)]
mod tests {
    use crate::EduRemindContext;
    use edu_remind_domain::import::parse_pasted_text;
    use edu_remind_domain::ImportError;

    #[tokio::test]
    async fn set_take_and_clear() {
        let ctx = EduRemindContext::create_inmemory();
        assert!(ctx.repos.import_preview.get().await.is_empty());
        assert_eq!(
            ctx.repos.import_preview.take_for_commit().await,
            Err(ImportError::EmptyPreview)
        );

        let candidates = parse_pasted_text("Rahul, 9876543210\nPriya, 12");
        ctx.repos.import_preview.set(candidates.clone()).await;
        assert_eq!(ctx.repos.import_preview.get().await.candidates(), &candidates[..]);

        assert_eq!(ctx.repos.import_preview.take_for_commit().await, Ok(candidates));
        assert!(ctx.repos.import_preview.get().await.is_empty());

        ctx.repos
            .import_preview
            .set(parse_pasted_text("Asha, 9000000000"))
            .await;
        ctx.repos.import_preview.clear().await;
        assert!(ctx.repos.import_preview.get().await.is_empty());
    }
}
