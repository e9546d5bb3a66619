use async_trait::async_trait;
use serenity::all::CreateCommand;

use crate::{
    bot::responder::Reply,
    error::AppError,
    model::interaction::InteractionEvent,
    registry::handler::{HandlerContext, InteractionHandler},
};

/// `/ping`: answers with the number of guilds the bot is serving.
pub struct PingCommand;

#[async_trait]
impl InteractionHandler for PingCommand {
    fn name(&self) -> &str {
        "ping"
    }

    fn definition(&self) -> Option<CreateCommand> {
        Some(CreateCommand::new("ping").description("Check that the bot is responding"))
    }

    async fn execute(
        &self,
        ctx: HandlerContext<'_>,
        event: &InteractionEvent,
    ) -> Result<(), AppError> {
        let guilds = ctx
            .client
            .map(|client| client.cache.guild_count())
            .unwrap_or_default();

        ctx.responder.reply(event, Reply::public(pong(guilds))).await
    }
}

fn pong(guilds: usize) -> String {
    match guilds {
        1 => "Pong! Serving 1 guild.".to_string(),
        n => format!("Pong! Serving {} guilds.", n),
    }
}
