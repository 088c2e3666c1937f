use super::row::Row;
use crate::student::{Student, StudentFields};

/// Name given to candidates whose row had no name
pub const UNKNOWN_STUDENT_NAME: &str = "Unknown Student";

/// How an uploaded import file is read
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ImportFileKind {
    /// Decoded by the spreadsheet codec into keyed rows
    Spreadsheet,
    /// Read as text and split like pasted data
    Text,
}

const SPREADSHEET_EXTENSIONS: [&str; 4] = [".xlsx", ".xls", ".xlsm", ".ods"];

impl ImportFileKind {
    pub fn from_file_name(file_name: &str) -> Self {
        let file_name = file_name.trim().to_lowercase();
        if SPREADSHEET_EXTENSIONS
            .iter()
            .any(|ext| file_name.ends_with(ext))
        {
            Self::Spreadsheet
        } else {
            Self::Text
        }
    }
}

/// Splits pasted text (or a plain text file) into positional rows.
///
/// The whole text is trimmed first, lines are separated by LF or CRLF and
/// cells by commas or tabs.
pub fn split_text_rows(text: &str) -> Vec<Row> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }

    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .map(|line| {
            Row::Positional(
                line.split(|c| c == ',' || c == '\t')
                    .map(|cell| cell.trim().to_string())
                    .collect(),
            )
        })
        .collect()
}

/// Decodes the bytes of an uploaded text file
pub fn decode_text_file(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    text.strip_prefix('\u{feff}').unwrap_or(&text).to_string()
}

fn build_candidate(row: &Row) -> Student {
    let fields = row.detect_fields();
    let name = if fields.name.is_empty() {
        UNKNOWN_STUDENT_NAME.to_string()
    } else {
        fields.name
    };
    Student::new(
        StudentFields {
            name,
            phone: fields.phone,
            email: fields.email,
            department: fields.department,
            batch: fields.batch,
        },
        true,
    )
}

/// Turns rows into import candidates, in row order.
///
/// A row is only dropped when it has neither a name nor a phone.
pub fn build_candidates(rows: &[Row]) -> Vec<Student> {
    rows.iter()
        .map(build_candidate)
        .filter(|s| s.name != UNKNOWN_STUDENT_NAME || !s.phone.is_empty())
        .collect()
}

pub fn parse_pasted_text(text: &str) -> Vec<Student> {
    build_candidates(&split_text_rows(text))
}

#[cfg(test)]
mod test {
    use super::*;

    fn positional(cells: &[&str]) -> Row {
        Row::Positional(cells.iter().map(|c| c.to_string()).collect())
    }

    /// Everything except the generated id
    fn shape(s: &Student) -> (String, String, Option<String>, Option<String>, Option<String>, bool, bool) {
        (
            s.name.clone(),
            s.phone.clone(),
            s.email.clone(),
            s.department.clone(),
            s.batch.clone(),
            s.is_valid_phone,
            s.has_opted_in,
        )
    }

    #[test]
    fn it_splits_comma_and_tab_separated_lines() {
        let rows = split_text_rows("Rahul, 919876543210\r\nPriya\t919123456789\t priya@edu.com\n");
        assert_eq!(
            rows,
            vec![
                positional(&["Rahul", "919876543210"]),
                positional(&["Priya", "919123456789", "priya@edu.com"]),
            ]
        );
    }

    #[test]
    fn blank_text_yields_no_rows() {
        assert!(split_text_rows("").is_empty());
        assert!(split_text_rows("  \n\r\n ").is_empty());
        assert!(parse_pasted_text(" ").is_empty());
    }

    #[test]
    fn it_builds_candidates_from_pasted_text() {
        let candidates = parse_pasted_text(
            "Rahul, 9876543210, rahul@edu.com, CS, 2024\nPriya, 919123456789, priya@edu.com, IT, 2025",
        );
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].name, "Rahul");
        assert_eq!(candidates[0].phone, "919876543210");
        assert_eq!(candidates[0].email.as_deref(), Some("rahul@edu.com"));
        assert_eq!(candidates[0].department.as_deref(), Some("CS"));
        assert_eq!(candidates[0].batch.as_deref(), Some("2024"));
        assert!(candidates[0].is_valid_phone);
        assert!(candidates[0].has_opted_in);
        assert_eq!(candidates[1].name, "Priya");
    }

    #[test]
    fn it_keeps_rows_with_either_name_or_phone() {
        let candidates = build_candidates(&[
            positional(&["", ""]),
            positional(&["", "919876543210"]),
            positional(&["Asha", ""]),
        ]);
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].name, UNKNOWN_STUDENT_NAME);
        assert_eq!(candidates[0].phone, "919876543210");
        assert_eq!(candidates[1].name, "Asha");
        assert_eq!(candidates[1].phone, "");
        assert!(!candidates[1].is_valid_phone);
    }

    #[test]
    fn invalid_phones_are_flagged_not_dropped() {
        let candidates = parse_pasted_text("Asha, 12345");
        assert_eq!(candidates.len(), 1);
        assert!(!candidates[0].is_valid_phone);
    }

    #[test]
    fn parsing_is_idempotent_apart_from_ids() {
        let text = "Rahul, 9876543210\n\nPriya, 919123456789, p@edu.com\n, \nAsha";
        let first = parse_pasted_text(text);
        let second = parse_pasted_text(text);
        assert_eq!(first.len(), 3);
        assert_eq!(
            first.iter().map(shape).collect::<Vec<_>>(),
            second.iter().map(shape).collect::<Vec<_>>()
        );
        for (a, b) in first.iter().zip(second.iter()) {
            assert_ne!(a.id, b.id);
        }
    }

    #[test]
    fn it_detects_file_kind_by_extension() {
        assert_eq!(ImportFileKind::from_file_name("Batch.XLSX"), ImportFileKind::Spreadsheet);
        assert_eq!(ImportFileKind::from_file_name("old.xls"), ImportFileKind::Spreadsheet);
        assert_eq!(ImportFileKind::from_file_name("students.csv"), ImportFileKind::Text);
        assert_eq!(ImportFileKind::from_file_name("students.txt"), ImportFileKind::Text);
        assert_eq!(ImportFileKind::from_file_name(""), ImportFileKind::Text);
    }

    #[test]
    fn it_decodes_text_files_dropping_the_bom() {
        assert_eq!(decode_text_file(b"\xEF\xBB\xBFAsha,1"), "Asha,1");
        assert_eq!(decode_text_file(b"Asha,1"), "Asha,1");
    }
}
