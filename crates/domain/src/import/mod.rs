mod parser;
mod preview;
mod row;

pub use parser::{
    build_candidates, decode_text_file, parse_pasted_text, split_text_rows, ImportFileKind,
    UNKNOWN_STUDENT_NAME,
};
pub use preview::{ImportError, ImportPreview, PreviewSummary};
pub use row::{Row, RowFields};
