use edu_remind_domain::{MessageLog, OutgoingMessage};
use edu_remind_infra::EduRemindContext;
use futures::future::join_all;

/// Hands every message to the dispatcher and turns the results into logs,
/// keeping the order of `messages`
pub async fn dispatch_all(messages: Vec<OutgoingMessage>, ctx: &EduRemindContext) -> Vec<MessageLog> {
    let statuses = join_all(
        messages
            .iter()
            .map(|message| ctx.services.dispatcher.dispatch(message)),
    )
    .await;
    let sent_at = ctx.sys.get_timestamp_millis();

    messages
        .into_iter()
        .zip(statuses)
        .map(|(message, status)| message.into_log(status, sent_at))
        .collect()
}
