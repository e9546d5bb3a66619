use std::sync::Arc;

use sea_orm::DatabaseConnection;
use serenity::all::{
    Context, EventHandler, Guild, Interaction, InviteCreateEvent, InviteDeleteEvent, Message,
    Ready, VoiceState,
};
use serenity::async_trait;

use crate::{
    dispatch::Dispatcher,
    model::diagnostic::DiagnosticQuery,
    registry::{event, Registry},
};

pub mod gateway_event;
pub mod interaction;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub db: DatabaseConnection,
    pub registry: Arc<Registry>,
    pub dispatcher: Arc<Dispatcher>,
    pub diagnostic_query: Option<DiagnosticQuery>,
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(
            &self.db,
            &self.registry,
            self.diagnostic_query.clone(),
            &ctx,
            &ready,
        )
        .await;
        gateway_event::forward(self.registry.events(), &ctx, event::READY, &ready).await;
    }

    /// Called for every interaction: commands, components, context menus, modals
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction_create(&self.dispatcher, ctx, interaction).await;
    }

    /// Called when a guild becomes available or the bot joins a new guild
    async fn guild_create(&self, ctx: Context, guild: Guild, _is_new: Option<bool>) {
        gateway_event::forward(self.registry.events(), &ctx, event::GUILD_CREATE, &guild).await;
    }

    /// Called when a message is sent in a channel
    async fn message(&self, ctx: Context, message: Message) {
        gateway_event::forward(self.registry.events(), &ctx, event::MESSAGE, &message).await;
    }

    /// Called when a user joins, leaves, or changes state in a voice channel
    async fn voice_state_update(&self, ctx: Context, _old: Option<VoiceState>, new: VoiceState) {
        gateway_event::forward(self.registry.events(), &ctx, event::VOICE_STATE_UPDATE, &new)
            .await;
    }

    async fn invite_create(&self, ctx: Context, data: InviteCreateEvent) {
        gateway_event::forward(self.registry.events(), &ctx, event::INVITE_CREATE, &data).await;
    }

    async fn invite_delete(&self, ctx: Context, data: InviteDeleteEvent) {
        gateway_event::forward(self.registry.events(), &ctx, event::INVITE_DELETE, &data).await;
    }
}
