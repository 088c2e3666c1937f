mod campaign;
mod dashboard;
mod error;
mod event;
mod import;
mod job;
mod log;
mod settings;
mod shared;
mod status;
mod student;

use actix_cors::Cors;
use actix_web::{dev::Server, middleware, web, App, HttpServer};
use edu_remind_infra::EduRemindContext;
use settings::start_settings_audit;
use std::net::TcpListener;
use tracing::info;
use tracing_actix_web::TracingLogger;

pub fn configure_server_api(cfg: &mut web::ServiceConfig) {
    campaign::configure_routes(cfg);
    dashboard::configure_routes(cfg);
    event::configure_routes(cfg);
    import::configure_routes(cfg);
    job::configure_routes(cfg);
    log::configure_routes(cfg);
    settings::configure_routes(cfg);
    status::configure_routes(cfg);
    student::configure_routes(cfg);
}

pub struct Application {
    server: Server,
    port: u16,
}

impl Application {
    pub async fn new(context: EduRemindContext) -> Result<Self, std::io::Error> {
        let (server, port) = Application::configure_server(context.clone()).await?;
        Application::start_background_jobs(context);

        Ok(Self { server, port })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    fn start_background_jobs(context: EduRemindContext) {
        start_settings_audit(context);
    }

    async fn configure_server(
        context: EduRemindContext,
    ) -> Result<(Server, u16), std::io::Error> {
        let port = context.config.port;
        let address = format!("0.0.0.0:{}", port);
        let listener = TcpListener::bind(&address)?;
        let port = listener.local_addr()?.port();
        info!("Listening on port {}", port);

        let context = web::Data::new(context);
        let server = HttpServer::new(move || {
            App::new()
                .wrap(Cors::permissive())
                .wrap(middleware::Compress::default())
                .wrap(TracingLogger::default())
                .app_data(context.clone())
                .service(web::scope("/api/v1").configure(configure_server_api))
        })
        .listen(listener)?
        .workers(4)
        .run();

        Ok((server, port))
    }

    pub async fn start(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}
