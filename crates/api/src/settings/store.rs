use edu_remind_domain::{AdminCredentials, ApiConfig, ADMIN_CREDENTIALS_KEY, API_CONFIG_KEY};
use edu_remind_infra::{EduRemindContext, KeyValue};
use serde::{de::DeserializeOwned, Serialize};
use tracing::warn;

/// Reads the blob stored under `key`. Missing or unreadable blobs give the default.
async fn load<T: DeserializeOwned + Default>(key: &str, ctx: &EduRemindContext) -> T {
    match ctx.repos.settings.get(key).await {
        Some(kv) => serde_json::from_value(kv.value).unwrap_or_else(|e| {
            warn!("Stored setting {} could not be read, using defaults: {:?}", key, e);
            T::default()
        }),
        None => T::default(),
    }
}

async fn store<T: Serialize>(key: &str, value: &T, ctx: &EduRemindContext) -> anyhow::Result<()> {
    let kv = KeyValue {
        key: key.to_string(),
        value: serde_json::to_value(value)?,
    };
    ctx.repos.settings.set(&kv).await
}

pub async fn load_admin_credentials(ctx: &EduRemindContext) -> AdminCredentials {
    load(ADMIN_CREDENTIALS_KEY, ctx).await
}

pub async fn store_admin_credentials(
    creds: &AdminCredentials,
    ctx: &EduRemindContext,
) -> anyhow::Result<()> {
    store(ADMIN_CREDENTIALS_KEY, creds, ctx).await
}

pub async fn load_api_config(ctx: &EduRemindContext) -> ApiConfig {
    load(API_CONFIG_KEY, ctx).await
}

pub async fn store_api_config(config: &ApiConfig, ctx: &EduRemindContext) -> anyhow::Result<()> {
    store(API_CONFIG_KEY, config, ctx).await
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[actix_web::test]
    async fn defaults_until_something_is_stored() {
        let ctx = EduRemindContext::create_inmemory();
        assert_eq!(load_admin_credentials(&ctx).await, AdminCredentials::default());
        assert_eq!(load_api_config(&ctx).await, ApiConfig::default());

        let config = ApiConfig {
            phone_id: "1234".into(),
            access_token: "token".into(),
            is_production: true,
            use_fallback: false,
        };
        store_api_config(&config, &ctx).await.unwrap();
        assert_eq!(load_api_config(&ctx).await, config);
    }

    #[actix_web::test]
    async fn unreadable_blob_gives_defaults() {
        let ctx = EduRemindContext::create_inmemory();
        ctx.repos
            .settings
            .set(&KeyValue {
                key: ADMIN_CREDENTIALS_KEY.into(),
                value: json!("not an object"),
            })
            .await
            .unwrap();
        assert_eq!(load_admin_credentials(&ctx).await, AdminCredentials::default());
    }
}
