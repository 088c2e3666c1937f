use crate::shared::entity::{Entity, ID};
use chrono::NaiveDate;

/// A posting in the placement job catalog
#[derive(Debug, Clone, PartialEq)]
pub struct Job {
    pub id: ID,
    pub title: String,
    pub company: String,
    pub deadline: Option<NaiveDate>,
    pub link: String,
    pub description: String,
}

impl Job {
    pub fn new(
        title: String,
        company: String,
        deadline: Option<NaiveDate>,
        link: String,
        description: String,
    ) -> Self {
        Self {
            id: Default::default(),
            title,
            company,
            deadline,
            link,
            description,
        }
    }

    /// The deadline as it is shown in messages, empty when there is none
    pub fn deadline_text(&self) -> String {
        self.deadline
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }
}

impl Entity for Job {
    fn id(&self) -> &ID {
        &self.id
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_formats_deadline() {
        let mut job = Job::new(
            "SDE Intern".into(),
            "Google".into(),
            NaiveDate::from_ymd_opt(2024, 12, 5),
            "https://careers.google.com".into(),
            "".into(),
        );
        assert_eq!(job.deadline_text(), "2024-12-05");
        job.deadline = None;
        assert_eq!(job.deadline_text(), "");
    }
}
