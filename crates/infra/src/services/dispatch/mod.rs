use edu_remind_domain::{DeliveryStatus, LogOrigin, OutgoingMessage};

/// Transport that hands rendered messages to the recipients
#[async_trait::async_trait]
pub trait IMessageDispatcher: Send + Sync {
    async fn dispatch(&self, message: &OutgoingMessage) -> DeliveryStatus;
}

/// Does not deliver anything. Event broadcasts are reported as delivered and
/// campaign messages as queued, the way the business API reports them.
pub struct SimulatedDispatcher;

#[async_trait::async_trait]
impl IMessageDispatcher for SimulatedDispatcher {
    async fn dispatch(&self, message: &OutgoingMessage) -> DeliveryStatus {
        match message.origin {
            LogOrigin::EventBroadcast { .. } => DeliveryStatus::Delivered,
            LogOrigin::Campaign { .. } => DeliveryStatus::Queued,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(origin: LogOrigin) -> OutgoingMessage {
        OutgoingMessage {
            origin,
            phone: "919876543210".into(),
            content: "Hi".into(),
            template_params: None,
        }
    }

    #[tokio::test]
    async fn reports_status_per_origin() {
        let dispatcher = SimulatedDispatcher;
        let broadcast = message(LogOrigin::EventBroadcast {
            event_id: Default::default(),
            event_name: "Drive".into(),
            recipient_name: "Rahul".into(),
        });
        let campaign = message(LogOrigin::Campaign {
            student_id: Default::default(),
            student_name: "Rahul".into(),
            reminder_id: Default::default(),
        });
        assert_eq!(dispatcher.dispatch(&broadcast).await, DeliveryStatus::Delivered);
        assert_eq!(dispatcher.dispatch(&campaign).await, DeliveryStatus::Queued);
    }
}
