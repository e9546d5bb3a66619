//! Forwarding of subscribed gateway events to registry listeners.

use serde::Serialize;
use serenity::all::Context;

use crate::{bot::client::GatewayClient, registry::event::EventBus};

/// Serializes a gateway event and runs its listeners.
///
/// Events nobody subscribed to are not serialized at all.
///
/// # Arguments
/// - `events` - Listener subscriptions from the registry
/// - `ctx` - Serenity context the event arrived with
/// - `name` - Gateway event name listeners subscribe to
/// - `payload` - The event data
pub async fn forward<T: Serialize>(events: &EventBus, ctx: &Context, name: &str, payload: &T) {
    if !events.is_subscribed(name) {
        return;
    }

    let payload = match serde_json::to_value(payload) {
        Ok(payload) => payload,
        Err(e) => {
            tracing::error!("Failed to serialize {} event: {}", name, e);
            return;
        }
    };

    let client = GatewayClient::from_context(ctx);
    let succeeded = events.emit(name, &client, &payload).await;

    tracing::debug!("Event {} handled by {} listener(s)", name, succeeded);
}
