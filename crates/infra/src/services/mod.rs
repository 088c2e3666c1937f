mod dispatch;
mod spreadsheet;
mod template_params;

pub use dispatch::{IMessageDispatcher, SimulatedDispatcher};
pub use spreadsheet::{
    ISpreadsheetCodec, SpreadsheetError, XlsxSpreadsheetCodec, IMPORT_TEMPLATE_FILE_NAME,
    IMPORT_TEMPLATE_HEADERS,
};
pub use template_params::{
    GeminiTemplateParamsProvider, ITemplateParamsProvider, UnavailableTemplateParamsProvider,
};
