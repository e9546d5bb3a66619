//! Interaction replies.

use async_trait::async_trait;
use serenity::all::{CreateInteractionResponse, CreateInteractionResponseMessage, InteractionId};

use crate::{bot::client::GatewayClient, error::AppError, model::interaction::InteractionEvent};

/// A message sent in response to an interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub content: String,
    /// Only visible to the user who triggered the interaction
    pub ephemeral: bool,
}

impl Reply {
    pub fn ephemeral(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ephemeral: true,
        }
    }

    pub fn public(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ephemeral: false,
        }
    }
}

#[async_trait]
pub trait InteractionResponder: Send + Sync {
    /// Sends the initial response to an interaction.
    ///
    /// Discord accepts one initial response per interaction; replying to an interaction
    /// that was already answered fails with an HTTP error.
    async fn reply(&self, event: &InteractionEvent, reply: Reply) -> Result<(), AppError>;
}

#[async_trait]
impl InteractionResponder for GatewayClient {
    async fn reply(&self, event: &InteractionEvent, reply: Reply) -> Result<(), AppError> {
        let message = CreateInteractionResponseMessage::new()
            .content(reply.content)
            .ephemeral(reply.ephemeral);

        self.http
            .create_interaction_response(
                InteractionId::new(event.id),
                &event.token,
                &CreateInteractionResponse::Message(message),
                Vec::new(),
            )
            .await?;

        Ok(())
    }
}
