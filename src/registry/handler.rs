//! Handler traits.
//!
//! Commands, buttons, select menus, and context menus all implement
//! `InteractionHandler`; which table a handler lives in decides how the dispatcher
//! reaches it. Gateway event listeners implement `EventListener`.

use async_trait::async_trait;
use serde_json::Value;
use serenity::all::CreateCommand;

use crate::{
    bot::{client::GatewayClient, responder::InteractionResponder},
    error::AppError,
    model::{interaction::InteractionEvent, locale::Locale},
};

/// What a handler gets to work with besides the interaction itself.
#[derive(Clone, Copy)]
pub struct HandlerContext<'a> {
    pub responder: &'a dyn InteractionResponder,
    /// Gateway client, only passed to command handlers
    pub client: Option<&'a GatewayClient>,
    pub locale: Locale,
}

#[async_trait]
pub trait InteractionHandler: Send + Sync {
    /// Lookup key: the command name, context-menu name, or a fixed component key.
    fn name(&self) -> &str;

    /// Application command definition published on ready, for commands and context menus.
    fn definition(&self) -> Option<CreateCommand> {
        None
    }

    async fn execute(
        &self,
        ctx: HandlerContext<'_>,
        event: &InteractionEvent,
    ) -> Result<(), AppError>;
}

#[async_trait]
pub trait EventListener: Send + Sync {
    /// Gateway event this listener subscribes to, e.g. `guild_create`.
    fn event(&self) -> &str;

    async fn execute(&self, client: &GatewayClient, payload: &Value) -> Result<(), AppError>;
}
