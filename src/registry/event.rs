//! Gateway event subscriptions.
//!
//! The gateway adapter forwards the events named here to the `EventBus`, serialized as
//! JSON. Listeners subscribe by name when the registry is built.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

use crate::{bot::client::GatewayClient, registry::handler::EventListener};

pub const READY: &str = "ready";
pub const GUILD_CREATE: &str = "guild_create";
pub const MESSAGE: &str = "message";
pub const VOICE_STATE_UPDATE: &str = "voice_state_update";
pub const INVITE_CREATE: &str = "invite_create";
pub const INVITE_DELETE: &str = "invite_delete";

/// Every event name the gateway adapter emits.
pub const SUPPORTED_EVENTS: [&str; 6] = [
    READY,
    GUILD_CREATE,
    MESSAGE,
    VOICE_STATE_UPDATE,
    INVITE_CREATE,
    INVITE_DELETE,
];

/// Listeners keyed by gateway event name.
#[derive(Default)]
pub struct EventBus {
    listeners: HashMap<String, Vec<Arc<dyn EventListener>>>,
}

impl EventBus {
    pub(super) fn subscribe(&mut self, listener: Arc<dyn EventListener>) {
        self.listeners
            .entry(listener.event().to_string())
            .or_default()
            .push(listener);
    }

    pub fn is_subscribed(&self, event: &str) -> bool {
        self.listeners.contains_key(event)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.values().map(Vec::len).sum()
    }

    /// Runs every listener subscribed to `event`, in subscription order.
    ///
    /// A failing listener is logged and does not stop the remaining ones.
    ///
    /// # Arguments
    /// - `event` - Gateway event name
    /// - `client` - Gateway client passed to each listener
    /// - `payload` - The event serialized as JSON
    ///
    /// # Returns
    /// - Number of listeners that ran successfully
    pub async fn emit(&self, event: &str, client: &GatewayClient, payload: &Value) -> usize {
        let Some(listeners) = self.listeners.get(event) else {
            return 0;
        };

        let mut succeeded = 0;
        for listener in listeners {
            match listener.execute(client, payload).await {
                Ok(()) => succeeded += 1,
                Err(e) => tracing::error!("Listener for event {} failed: {}", event, e),
            }
        }

        succeeded
    }
}
