use crate::student::Student;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ImportError {
    #[error("There are no import candidates to commit")]
    EmptyPreview,
}

/// The candidates of a bulk import waiting for the operator to confirm them.
///
/// Re-parsing replaces the candidates wholesale, nothing accumulates.
#[derive(Debug, Clone, Default)]
pub struct ImportPreview {
    candidates: Vec<Student>,
}

impl ImportPreview {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn set(&mut self, candidates: Vec<Student>) {
        self.candidates = candidates;
    }

    pub fn clear(&mut self) {
        self.candidates.clear();
    }

    pub fn candidates(&self) -> &[Student] {
        &self.candidates
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Hands out the candidates for committing and leaves the preview empty.
    /// An empty preview cannot be committed.
    pub fn take_for_commit(&mut self) -> Result<Vec<Student>, ImportError> {
        if self.candidates.is_empty() {
            return Err(ImportError::EmptyPreview);
        }
        Ok(std::mem::take(&mut self.candidates))
    }

    /// Appends every candidate to `students` in preview order and clears the
    /// preview. Returns the number of committed students.
    pub fn commit(&mut self, students: &mut Vec<Student>) -> Result<usize, ImportError> {
        let candidates = self.take_for_commit()?;
        let count = candidates.len();
        students.extend(candidates);
        Ok(count)
    }

    pub fn summary(&self) -> PreviewSummary {
        let valid = self.candidates.iter().filter(|s| s.is_valid_phone).count();
        PreviewSummary {
            total: self.candidates.len(),
            valid,
            invalid: self.candidates.len() - valid,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewSummary {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::import::parse_pasted_text;

    #[test]
    fn setting_replaces_the_candidates() {
        let mut preview = ImportPreview::new();
        preview.set(parse_pasted_text("Rahul, 9876543210\nPriya, 9123456789"));
        assert_eq!(preview.candidates().len(), 2);
        preview.set(parse_pasted_text("Asha, 9000000000"));
        assert_eq!(preview.candidates().len(), 1);
        assert_eq!(preview.candidates()[0].name, "Asha");
        preview.clear();
        assert!(preview.is_empty());
    }

    #[test]
    fn commit_appends_in_order_and_clears() {
        let mut students = parse_pasted_text("Existing One, 9111111111\nExisting Two, 9222222222");
        let existing = students.clone();

        let mut preview = ImportPreview::new();
        preview.set(parse_pasted_text("New One, 9333333333\nNew Two, 123\nExisting One, 9111111111"));
        let candidates = preview.candidates().to_vec();

        let committed = preview.commit(&mut students).unwrap();
        assert_eq!(committed, 3);
        assert_eq!(students.len(), 5);
        assert_eq!(&students[..2], &existing[..]);
        assert_eq!(&students[2..], &candidates[..]);
        assert!(preview.is_empty());
    }

    #[test]
    fn committing_an_empty_preview_is_rejected() {
        let mut students = parse_pasted_text("Existing, 9111111111");
        let mut preview = ImportPreview::new();
        assert_eq!(preview.commit(&mut students), Err(ImportError::EmptyPreview));
        assert_eq!(students.len(), 1);
    }

    #[test]
    fn it_summarizes_phone_validity() {
        let mut preview = ImportPreview::new();
        preview.set(parse_pasted_text("A, 9876543210\nB, 12\nC"));
        assert_eq!(
            preview.summary(),
            PreviewSummary {
                total: 3,
                valid: 1,
                invalid: 2
            }
        );
    }
}
