use async_trait::async_trait;
use serde_json::Value;

use crate::{
    bot::client::GatewayClient,
    error::AppError,
    registry::{event::GUILD_CREATE, handler::EventListener},
};

/// Logs each guild as it becomes available.
pub struct GuildCreateListener;

#[async_trait]
impl EventListener for GuildCreateListener {
    fn event(&self) -> &str {
        GUILD_CREATE
    }

    async fn execute(&self, client: &GatewayClient, payload: &Value) -> Result<(), AppError> {
        let guild = GuildSummary::from_payload(payload)?;

        tracing::info!(
            "Guild {} ({}) available with {} members; {} guilds cached",
            guild.name,
            guild.id,
            guild.member_count,
            client.cache.guild_count()
        );

        Ok(())
    }
}

#[derive(Debug, PartialEq, Eq)]
struct GuildSummary {
    id: String,
    name: String,
    member_count: u64,
}

impl GuildSummary {
    fn from_payload(payload: &Value) -> Result<Self, AppError> {
        let id = match &payload["id"] {
            Value::String(id) => id.clone(),
            Value::Number(id) => id.to_string(),
            _ => return Err(AppError::Handler("guild_create payload without id".to_string())),
        };

        Ok(Self {
            id,
            name: payload["name"].as_str().unwrap_or("unknown").to_string(),
            member_count: payload["member_count"].as_u64().unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_guild_fields() {
        let payload = json!({ "id": "333", "name": "Test Guild", "member_count": 42 });

        assert_eq!(
            GuildSummary::from_payload(&payload).unwrap(),
            GuildSummary {
                id: "333".to_string(),
                name: "Test Guild".to_string(),
                member_count: 42,
            }
        );
    }

    /// Tests that a payload without an id is rejected so the event bus logs it.
    #[tokio::test]
    async fn rejects_payload_without_id() {
        let client = GatewayClient::offline();

        let result = GuildCreateListener
            .execute(&client, &json!({ "name": "Test Guild" }))
            .await;

        assert!(result.is_err());
    }
}
