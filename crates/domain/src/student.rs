use crate::phone::{is_valid_phone, normalize_phone};
use crate::shared::entity::{Entity, ID};
use crate::shared::search::contains_ignore_case;

/// A `Student` is an entry in the global student registry and the
/// audience of job campaigns.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub id: ID,
    pub name: String,
    /// Canonical phone, see `normalize_phone`
    pub phone: String,
    pub email: Option<String>,
    pub department: Option<String>,
    pub batch: Option<String>,
    /// Computed from `phone` when the `Student` is created and never
    /// re-validated afterwards
    pub is_valid_phone: bool,
    /// Gate for being targeted by campaigns
    pub has_opted_in: bool,
}

/// The raw values a `Student` is registered with
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentFields {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub department: String,
    pub batch: String,
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

impl Student {
    pub fn new(fields: StudentFields, has_opted_in: bool) -> Self {
        let phone = normalize_phone(&fields.phone);
        Self {
            id: Default::default(),
            name: fields.name.trim().to_string(),
            is_valid_phone: is_valid_phone(&phone),
            phone,
            email: non_empty(&fields.email),
            department: non_empty(&fields.department),
            batch: non_empty(&fields.batch),
            has_opted_in,
        }
    }

    pub fn toggle_opt_in(&mut self) {
        self.has_opted_in = !self.has_opted_in;
    }

    /// Whether the `Student` can be targeted by a campaign
    pub fn is_reachable(&self) -> bool {
        self.is_valid_phone && self.has_opted_in
    }

    pub fn matches_search(&self, term: &str) -> bool {
        contains_ignore_case(&self.name, term) || self.phone.contains(term)
    }
}

impl Entity for Student {
    fn id(&self) -> &ID {
        &self.id
    }
}
