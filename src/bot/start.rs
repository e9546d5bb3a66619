use std::sync::Arc;

use sea_orm::DatabaseConnection;
use serenity::all::{Client, GatewayIntents};

use crate::{
    bot::handler::Handler, config::Config, dispatch::Dispatcher, error::AppError,
    registry::Registry,
};

/// Gateway intents the bot subscribes to.
pub fn intents() -> GatewayIntents {
    GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::GUILD_INVITES
        | GatewayIntents::GUILD_VOICE_STATES
}

/// Builds the Discord client with the event handler wired to the dispatcher.
///
/// The registry must already be built: gateway events only start flowing once the
/// returned client is started, so every handler is registered before `ready`.
///
/// # Arguments
/// - `config` - Application configuration holding the bot token
/// - `db` - Database connection used by the ready handler's diagnostics
/// - `registry` - Fully built handler registry
/// - `dispatcher` - Dispatcher for incoming interactions
///
/// # Returns
/// - `Ok(Client)` - Client ready to be started
/// - `Err(AppError::DiscordErr)` - Client construction failed (e.g. malformed token)
pub async fn init_bot(
    config: &Config,
    db: DatabaseConnection,
    registry: Arc<Registry>,
    dispatcher: Arc<Dispatcher>,
) -> Result<Client, AppError> {
    let handler = Handler {
        db,
        registry,
        dispatcher,
        diagnostic_query: config.diagnostic_query.clone(),
    };

    let client = Client::builder(&config.discord_bot_token, intents())
        .event_handler(handler)
        .await?;

    Ok(client)
}

/// Logs in and runs the gateway connection until it shuts down.
///
/// # Returns
/// - `Ok(())` - The connection closed cleanly
/// - `Err(AppError::DiscordErr)` - Login or the gateway connection failed
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
