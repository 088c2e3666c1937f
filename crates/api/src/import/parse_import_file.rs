use crate::{
    error::EduRemindError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use edu_remind_api_structs::parse_import_file::*;
use edu_remind_domain::import::{
    build_candidates, decode_text_file, split_text_rows, ImportFileKind,
};
use edu_remind_domain::ImportPreview;
use edu_remind_infra::{EduRemindContext, SpreadsheetError};

fn handle_error(e: UseCaseErrors) -> EduRemindError {
    match e {
        UseCaseErrors::Unreadable(msg) => EduRemindError::BadClientData(format!(
            "The uploaded file could not be parsed: {}",
            msg
        )),
        UseCaseErrors::EmptySheet => {
            EduRemindError::EmptyImport("The uploaded spreadsheet has no student rows".into())
        }
    }
}

pub async fn parse_import_file_controller(
    query: web::Query<QueryParams>,
    body: web::Bytes,
    ctx: web::Data<EduRemindContext>,
) -> Result<HttpResponse, EduRemindError> {
    let usecase = ParseImportFileUseCase {
        file_name: query.0.file_name,
        bytes: body.to_vec(),
    };

    execute(usecase, &ctx)
        .await
        .map(|preview| HttpResponse::Ok().json(APIResponse::new(preview)))
        .map_err(handle_error)
}

/// Replaces the import preview with the students of an uploaded file.
/// A file that can not be read leaves the preview untouched.
pub struct ParseImportFileUseCase {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for ParseImportFileUseCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParseImportFileUseCase")
            .field("file_name", &self.file_name)
            .field("size", &self.bytes.len())
            .finish()
    }
}

#[derive(Debug, PartialEq)]
pub enum UseCaseErrors {
    Unreadable(String),
    EmptySheet,
}

#[async_trait::async_trait(?Send)]
impl UseCase for ParseImportFileUseCase {
    type Response = ImportPreview;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "ParseImportFile";

    async fn execute(&mut self, ctx: &EduRemindContext) -> Result<Self::Response, Self::Errors> {
        let rows = match ImportFileKind::from_file_name(&self.file_name) {
            ImportFileKind::Spreadsheet => ctx
                .services
                .spreadsheets
                .decode(&self.bytes)
                .map_err(|e| match e {
                    SpreadsheetError::Decode(msg) => UseCaseErrors::Unreadable(msg),
                    SpreadsheetError::Empty => UseCaseErrors::EmptySheet,
                })?,
            ImportFileKind::Text => split_text_rows(&decode_text_file(&self.bytes)),
        };

        ctx.repos.import_preview.set(build_candidates(&rows)).await;
        Ok(ctx.repos.import_preview.get().await)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use edu_remind_domain::import::parse_pasted_text;

    #[actix_web::test]
    async fn reads_text_files_like_pasted_text() {
        let ctx = EduRemindContext::create_inmemory();
        let mut usecase = ParseImportFileUseCase {
            file_name: "students.csv".into(),
            bytes: b"\xEF\xBB\xBFRahul,9876543210,rahul@edu.com\r\nPriya,9123456789\r\n".to_vec(),
        };
        let preview = usecase.execute(&ctx).await.unwrap();
        assert_eq!(preview.candidates().len(), 2);
        assert_eq!(preview.candidates()[0].name, "Rahul");
        assert_eq!(preview.candidates()[0].email.as_deref(), Some("rahul@edu.com"));
        assert_eq!(preview.summary().valid, 2);
    }

    #[actix_web::test]
    async fn reads_spreadsheets() {
        let ctx = EduRemindContext::create_inmemory();
        let mut workbook = rust_xlsxwriter::Workbook::new();
        let sheet = workbook.add_worksheet();
        for (col, header) in ["Full Name", "WhatsApp Number", "Branch"].iter().enumerate() {
            sheet.write_string(0, col as u16, *header).unwrap();
        }
        sheet.write_string(1, 0, "Asha").unwrap();
        sheet.write_number(1, 1, 9876543210.0).unwrap();
        sheet.write_string(1, 2, "CS").unwrap();

        let mut usecase = ParseImportFileUseCase {
            file_name: "Batch.xlsx".into(),
            bytes: workbook.save_to_buffer().unwrap(),
        };
        let preview = usecase.execute(&ctx).await.unwrap();
        assert_eq!(preview.candidates().len(), 1);
        let asha = &preview.candidates()[0];
        assert_eq!(asha.name, "Asha");
        assert_eq!(asha.phone, "919876543210");
        assert_eq!(asha.department.as_deref(), Some("CS"));
    }

    #[actix_web::test]
    async fn failures_leave_the_preview_untouched() {
        let ctx = EduRemindContext::create_inmemory();
        let existing = parse_pasted_text("Rahul, 9876543210");
        ctx.repos.import_preview.set(existing.clone()).await;

        let mut usecase = ParseImportFileUseCase {
            file_name: "broken.xlsx".into(),
            bytes: b"not a workbook".to_vec(),
        };
        assert!(matches!(
            usecase.execute(&ctx).await,
            Err(UseCaseErrors::Unreadable(_))
        ));

        let template = ctx.services.spreadsheets.import_template().unwrap();
        let mut usecase = ParseImportFileUseCase {
            file_name: "empty.xlsx".into(),
            bytes: template,
        };
        assert_eq!(usecase.execute(&ctx).await.unwrap_err(), UseCaseErrors::EmptySheet);

        assert_eq!(ctx.repos.import_preview.get().await.candidates(), &existing[..]);
    }
}
