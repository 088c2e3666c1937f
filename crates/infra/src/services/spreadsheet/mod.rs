use calamine::{open_workbook_auto_from_rs, Data, Reader};
use edu_remind_domain::Row;
use rust_xlsxwriter::Workbook;
use std::collections::HashMap;
use std::io::Cursor;
use thiserror::Error;

pub const IMPORT_TEMPLATE_FILE_NAME: &str = "Student_Registry_Template.xlsx";
pub const IMPORT_TEMPLATE_SHEET_NAME: &str = "Template";
pub const IMPORT_TEMPLATE_HEADERS: [&str; 5] = ["Name", "Phone", "Email", "Department", "Batch"];

const EMPTY_HEADER: &str = "__EMPTY";

#[derive(Error, Debug, PartialEq)]
pub enum SpreadsheetError {
    #[error("The spreadsheet could not be read: {0}")]
    Decode(String),
    #[error("The spreadsheet contains no rows")]
    Empty,
}

pub trait ISpreadsheetCodec: Send + Sync {
    /// Reads the first sheet into keyed rows. The first row holds the headers.
    fn decode(&self, bytes: &[u8]) -> Result<Vec<Row>, SpreadsheetError>;
    /// Workbook with a single header row the operator can fill in
    fn import_template(&self) -> anyhow::Result<Vec<u8>>;
}

pub struct XlsxSpreadsheetCodec;

/// Numeric cells holding whole numbers are written without a fraction, so a
/// phone stored as a number reads as digits only.
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", *f as i64),
        Data::Float(f) => f.to_string(),
        Data::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

/// Blank headers become `__EMPTY`, repeated headers get a `_1`, `_2`, ..
/// suffix in column order.
fn header_names(cells: &[Data]) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    cells
        .iter()
        .map(|cell| {
            let text = cell_to_string(cell);
            let base = if text.trim().is_empty() {
                EMPTY_HEADER.to_string()
            } else {
                text
            };
            let count = seen.entry(base.clone()).or_insert(0);
            let name = if *count == 0 {
                base
            } else {
                format!("{}_{}", base, count)
            };
            *count += 1;
            name
        })
        .collect()
}

impl ISpreadsheetCodec for XlsxSpreadsheetCodec {
    fn decode(&self, bytes: &[u8]) -> Result<Vec<Row>, SpreadsheetError> {
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))
            .map_err(|e| SpreadsheetError::Decode(e.to_string()))?;
        let range = workbook
            .worksheet_range_at(0)
            .ok_or(SpreadsheetError::Empty)?
            .map_err(|e| SpreadsheetError::Decode(e.to_string()))?;

        let mut rows = range.rows();
        let headers = match rows.next() {
            Some(cells) => header_names(cells),
            None => return Err(SpreadsheetError::Empty),
        };

        let keyed_rows = rows
            .map(|cells| {
                headers
                    .iter()
                    .zip(cells.iter())
                    .map(|(header, cell)| (header.clone(), cell_to_string(cell)))
                    .filter(|(_, value)| !value.is_empty())
                    .collect::<Vec<_>>()
            })
            .filter(|cells| !cells.is_empty())
            .map(Row::Keyed)
            .collect::<Vec<_>>();

        if keyed_rows.is_empty() {
            return Err(SpreadsheetError::Empty);
        }
        Ok(keyed_rows)
    }

    fn import_template(&self) -> anyhow::Result<Vec<u8>> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(IMPORT_TEMPLATE_SHEET_NAME)?;
        for (col, header) in IMPORT_TEMPLATE_HEADERS.iter().enumerate() {
            worksheet.write_string(0, col as u16, *header)?;
        }
        Ok(workbook.save_to_buffer()?)
    }
}
