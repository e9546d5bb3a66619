use async_trait::async_trait;

use crate::{
    bot::responder::Reply,
    dispatch::BUTTON_HANDLER,
    error::AppError,
    model::interaction::InteractionEvent,
    registry::handler::{HandlerContext, InteractionHandler},
};

/// Receives every button press.
pub struct ButtonHandler;

#[async_trait]
impl InteractionHandler for ButtonHandler {
    fn name(&self) -> &str {
        BUTTON_HANDLER
    }

    async fn execute(
        &self,
        ctx: HandlerContext<'_>,
        event: &InteractionEvent,
    ) -> Result<(), AppError> {
        let custom_id = event.custom_id.as_deref().unwrap_or_default();

        tracing::debug!("Button {} pressed by {}", custom_id, event.user.id);

        ctx.responder
            .reply(
                event,
                Reply::ephemeral(format!("Button `{}` pressed.", custom_id)),
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::test::{button_event, RecordingResponder};

    #[tokio::test]
    async fn acknowledges_press_with_custom_id() {
        let responder = RecordingResponder::default();
        let event = button_event("confirm");
        let ctx = HandlerContext {
            responder: &responder,
            client: None,
            locale: Default::default(),
        };

        ButtonHandler.execute(ctx, &event).await.unwrap();

        assert_eq!(
            responder.replies(),
            vec![(event.id, Reply::ephemeral("Button `confirm` pressed."))]
        );
    }
}
