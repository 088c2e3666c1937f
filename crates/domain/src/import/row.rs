/// One row of tabular import data.
///
/// Pasted text and plain CSV files produce `Positional` rows, spreadsheets
/// produce `Keyed` rows where every cell is paired with the header of its
/// column. Keyed cells are kept in column order.
#[derive(Debug, Clone, PartialEq)]
pub enum Row {
    Positional(Vec<String>),
    Keyed(Vec<(String, String)>),
}

/// The student columns extracted from a `Row`, before phone normalization
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowFields {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub department: String,
    pub batch: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Field {
    Name,
    Phone,
    Email,
    Department,
    Batch,
}

/// Header synonyms per field. A header matches a field when its lowercase
/// text contains any of the synonyms. When several headers match, the first
/// one in column order wins.
const HEADER_SYNONYMS: [(Field, &[&str]); 5] = [
    (Field::Name, &["name", "student", "full name"]),
    (Field::Phone, &["phone", "mobile", "whatsapp", "number"]),
    (Field::Email, &["email", "mail"]),
    (Field::Department, &["dept", "department", "branch"]),
    (Field::Batch, &["batch", "year", "class"]),
];

fn synonyms(field: Field) -> &'static [&'static str] {
    HEADER_SYNONYMS
        .iter()
        .find(|(f, _)| *f == field)
        .map(|(_, synonyms)| *synonyms)
        .unwrap_or(&[])
}

fn find_keyed_value(cells: &[(String, String)], field: Field) -> String {
    let terms = synonyms(field);
    cells
        .iter()
        .find(|(header, _)| {
            let header = header.to_lowercase();
            terms.iter().any(|term| header.contains(term))
        })
        .map(|(_, value)| value.trim().to_string())
        .unwrap_or_default()
}

fn positional_value(cells: &[String], index: usize) -> String {
    cells
        .get(index)
        .map(|value| value.trim().to_string())
        .unwrap_or_default()
}

impl Row {
    /// Extracts the student columns from the row
    pub fn detect_fields(&self) -> RowFields {
        match self {
            Row::Positional(cells) => RowFields {
                name: positional_value(cells, 0),
                phone: positional_value(cells, 1),
                email: positional_value(cells, 2),
                department: positional_value(cells, 3),
                batch: positional_value(cells, 4),
            },
            Row::Keyed(cells) => RowFields {
                name: find_keyed_value(cells, Field::Name),
                phone: find_keyed_value(cells, Field::Phone),
                email: find_keyed_value(cells, Field::Email),
                department: find_keyed_value(cells, Field::Department),
                batch: find_keyed_value(cells, Field::Batch),
            },
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn keyed(cells: &[(&str, &str)]) -> Row {
        Row::Keyed(
            cells
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    fn positional(cells: &[&str]) -> Row {
        Row::Positional(cells.iter().map(|c| c.to_string()).collect())
    }

    #[test]
    fn it_maps_positional_cells_in_order() {
        let row = positional(&[" Rahul ", "919876543210", "rahul@edu.com", "CS", "2024"]);
        assert_eq!(
            row.detect_fields(),
            RowFields {
                name: "Rahul".into(),
                phone: "919876543210".into(),
                email: "rahul@edu.com".into(),
                department: "CS".into(),
                batch: "2024".into(),
            }
        );
    }

    #[test]
    fn it_defaults_missing_positions_to_empty() {
        let fields = positional(&["Priya", "9123456789"]).detect_fields();
        assert_eq!(fields.name, "Priya");
        assert_eq!(fields.phone, "9123456789");
        assert_eq!(fields.email, "");
        assert_eq!(fields.department, "");
        assert_eq!(fields.batch, "");

        assert_eq!(positional(&[]).detect_fields(), RowFields::default());
    }

    #[test]
    fn it_ignores_extra_positional_cells() {
        let fields = positional(&["A", "1", "a@b.c", "IT", "2025", "extra"]).detect_fields();
        assert_eq!(fields.batch, "2025");
    }

    #[test]
    fn it_matches_keyed_headers_by_synonym() {
        let row = keyed(&[
            ("Student Name", "Asha"),
            ("Mobile No", "9876543210"),
            ("Dept.", "CS"),
        ]);
        assert_eq!(
            row.detect_fields(),
            RowFields {
                name: "Asha".into(),
                phone: "9876543210".into(),
                email: "".into(),
                department: "CS".into(),
                batch: "".into(),
            }
        );
    }

    #[test]
    fn it_matches_headers_case_insensitively() {
        let row = keyed(&[
            ("NAME", "Rahul"),
            ("WhatsApp", "919876543210"),
            ("E-Mail", "rahul@edu.com"),
            ("Branch", "ECE"),
            ("Passing YEAR", "2024"),
        ]);
        let fields = row.detect_fields();
        assert_eq!(fields.name, "Rahul");
        assert_eq!(fields.phone, "919876543210");
        assert_eq!(fields.email, "rahul@edu.com");
        assert_eq!(fields.department, "ECE");
        assert_eq!(fields.batch, "2024");
    }

    #[test]
    fn first_matching_header_in_column_order_wins() {
        let row = keyed(&[
            ("Roll Number", "17"),
            ("Phone", "9876543210"),
            ("Name", "Asha"),
        ]);
        let fields = row.detect_fields();
        assert_eq!(fields.phone, "17");
        assert_eq!(fields.name, "Asha");
    }

    #[test]
    fn it_defaults_unmatched_keyed_fields_to_empty() {
        let fields = keyed(&[("Remarks", "late")]).detect_fields();
        assert_eq!(fields, RowFields::default());
    }
}
