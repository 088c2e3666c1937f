/// Case insensitive substring match used by the registry search boxes.
/// An empty term matches everything.
pub fn contains_ignore_case(haystack: &str, term: &str) -> bool {
    haystack.to_lowercase().contains(&term.to_lowercase())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_matches_ignoring_case() {
        assert!(contains_ignore_case("Google Internship 2025", "intern"));
        assert!(contains_ignore_case("Priya Singh", "PRIYA"));
        assert!(contains_ignore_case("anything", ""));
        assert!(!contains_ignore_case("Rahul", "priya"));
    }
}
