use edu_remind_infra::EduRemindContext;
use tokio::sync::broadcast::error::RecvError;
use tracing::{info, warn};

/// Logs every change written to the settings store. Values are never logged
/// since they hold credentials.
pub fn start_settings_audit(ctx: EduRemindContext) {
    let mut changes = ctx.repos.settings.subscribe();
    actix_web::rt::spawn(async move {
        loop {
            match changes.recv().await {
                Ok(kv) => info!("Setting {} was updated", kv.key),
                Err(RecvError::Lagged(skipped)) => {
                    warn!("Settings audit fell behind, {} changes were not logged", skipped)
                }
                Err(RecvError::Closed) => break,
            }
        }
    });
}
