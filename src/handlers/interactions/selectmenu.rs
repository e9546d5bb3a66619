use async_trait::async_trait;

use crate::{
    bot::responder::Reply,
    dispatch::SELECT_MENU_HANDLER,
    error::AppError,
    model::interaction::InteractionEvent,
    registry::handler::{HandlerContext, InteractionHandler},
};

/// Receives every select-menu submission and echoes the selection back.
pub struct SelectMenuHandler;

#[async_trait]
impl InteractionHandler for SelectMenuHandler {
    fn name(&self) -> &str {
        SELECT_MENU_HANDLER
    }

    async fn execute(
        &self,
        ctx: HandlerContext<'_>,
        event: &InteractionEvent,
    ) -> Result<(), AppError> {
        let content = if event.values.is_empty() {
            "Nothing selected.".to_string()
        } else {
            format!("Selected: {}", event.values.join(", "))
        };

        ctx.responder.reply(event, Reply::ephemeral(content)).await
    }
}
