mod config;
mod repos;
mod services;
mod system;

pub use config::Config;
pub use repos::{
    EventUpdateError, IEventRepo, IImportPreviewRepo, IJobRepo, IKVRepo, IMessageLogRepo, IReminderRepo,
    IStudentRepo, KeyValue, Repos,
};
pub use services::*;
use std::sync::Arc;
pub use system::ISys;
use system::RealSys;

#[derive(Clone)]
pub struct Services {
    pub dispatcher: Arc<dyn IMessageDispatcher>,
    pub template_params: Arc<dyn ITemplateParamsProvider>,
    pub spreadsheets: Arc<dyn ISpreadsheetCodec>,
}

impl Services {
    fn create(config: &Config) -> Self {
        let template_params: Arc<dyn ITemplateParamsProvider> = match &config.gemini_api_key {
            Some(api_key) => Arc::new(GeminiTemplateParamsProvider::new(
                api_key.clone(),
                config.gemini_model.clone(),
            )),
            None => Arc::new(UnavailableTemplateParamsProvider),
        };
        Self {
            dispatcher: Arc::new(SimulatedDispatcher),
            template_params,
            spreadsheets: Arc::new(XlsxSpreadsheetCodec),
        }
    }

    /// Services that never leave the process
    fn create_offline() -> Self {
        Self {
            dispatcher: Arc::new(SimulatedDispatcher),
            template_params: Arc::new(UnavailableTemplateParamsProvider),
            spreadsheets: Arc::new(XlsxSpreadsheetCodec),
        }
    }
}

#[derive(Clone)]
pub struct EduRemindContext {
    pub repos: Repos,
    pub services: Services,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
}

impl EduRemindContext {
    fn create() -> Self {
        let config = Config::new();
        Self {
            repos: Repos::create_inmemory(),
            services: Services::create(&config),
            config,
            sys: Arc::new(RealSys {}),
        }
    }

    /// In memory context without external services, used by tests
    pub fn create_inmemory() -> Self {
        Self {
            repos: Repos::create_inmemory(),
            services: Services::create_offline(),
            config: Config::new(),
            sys: Arc::new(RealSys {}),
        }
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> EduRemindContext {
    EduRemindContext::create()
}
