use async_trait::async_trait;
use serde_json::Value;

use crate::{
    bot::client::GatewayClient,
    error::AppError,
    registry::{event::INVITE_CREATE, handler::EventListener},
};

/// Logs who created which invite.
pub struct InviteCreateListener;

#[async_trait]
impl EventListener for InviteCreateListener {
    fn event(&self) -> &str {
        INVITE_CREATE
    }

    async fn execute(&self, _client: &GatewayClient, payload: &Value) -> Result<(), AppError> {
        let code = payload["code"]
            .as_str()
            .ok_or_else(|| AppError::Handler("invite_create payload without code".to_string()))?;

        tracing::info!(
            "Invite {} created by {} in channel {} (max uses: {})",
            code,
            inviter(payload),
            payload["channel_id"],
            max_uses(payload)
        );

        Ok(())
    }
}

fn inviter(payload: &Value) -> &str {
    payload["inviter"]["username"].as_str().unwrap_or("unknown")
}

fn max_uses(payload: &Value) -> String {
    match payload["max_uses"].as_u64() {
        Some(0) | None => "unlimited".to_string(),
        Some(uses) => uses.to_string(),
    }
}
