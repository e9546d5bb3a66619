use serenity::all::{Context, Interaction};

use crate::{
    bot::client::GatewayClient, dispatch::Dispatcher, model::interaction::InteractionEvent,
};

/// Converts an incoming interaction and hands it to the dispatcher.
///
/// The gateway client doubles as the responder, so replies go straight to Discord's
/// interaction callback endpoint.
///
/// # Arguments
/// - `dispatcher` - Dispatcher holding the handler registry
/// - `ctx` - Serenity context the interaction arrived with
/// - `interaction` - The raw interaction
pub async fn handle_interaction_create(
    dispatcher: &Dispatcher,
    ctx: Context,
    interaction: Interaction,
) {
    let Some(event) = InteractionEvent::from_interaction(&interaction, &ctx.cache) else {
        tracing::debug!("Ignoring interaction {} without a user", interaction.id());
        return;
    };

    let client = GatewayClient::from_context(&ctx);
    let outcome = dispatcher.dispatch(&client, &client, &event).await;

    tracing::debug!(
        "Interaction {} ({}) dispatched: {:?}",
        event.id,
        event.kind,
        outcome
    );
}
