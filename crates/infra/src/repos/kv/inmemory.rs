use super::{IKVRepo, KeyValue};
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use tokio::sync::broadcast;

const CHANGES_CAPACITY: usize = 16;

pub struct InMemoryKVRepo {
    values: Mutex<HashMap<String, serde_json::Value>>,
    changes: broadcast::Sender<KeyValue>,
}

impl InMemoryKVRepo {
    pub fn new() -> Self {
        let (changes, _) = broadcast::channel(CHANGES_CAPACITY);
        Self {
            values: Mutex::new(HashMap::new()),
            changes,
        }
    }
}

#[async_trait::async_trait]
impl IKVRepo for InMemoryKVRepo {
    async fn set(&self, kv: &KeyValue) -> anyhow::Result<()> {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(kv.key.clone(), kv.value.clone());
        // Sending only fails when nobody is subscribed
        let _ = self.changes.send(kv.clone());
        Ok(())
    }

    async fn get(&self, key: &str) -> Option<KeyValue> {
        let values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        values.get(key).map(|value| KeyValue {
            key: key.to_string(),
            value: value.clone(),
        })
    }

    fn subscribe(&self) -> broadcast::Receiver<KeyValue> {
        self.changes.subscribe()
    }
}
