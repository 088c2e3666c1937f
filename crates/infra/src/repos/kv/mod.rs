mod inmemory;

pub use inmemory::InMemoryKVRepo;
use tokio::sync::broadcast;

/// A stored settings blob
#[derive(Debug, Clone, PartialEq)]
pub struct KeyValue {
    pub key: String,
    pub value: serde_json::Value,
}

/// Settings store. Every successful `set` is published to the subscribers.
#[async_trait::async_trait]
pub trait IKVRepo: Send + Sync {
    async fn set(&self, kv: &KeyValue) -> anyhow::Result<()>;
    async fn get(&self, key: &str) -> Option<KeyValue>;
    fn subscribe(&self) -> broadcast::Receiver<KeyValue>;
}
