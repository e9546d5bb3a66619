//! "User Info" user context menu.
//!
//! Tells the invoking user when the targeted account was created. The creation time is
//! encoded in the snowflake itself, so no API call is needed.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serenity::all::{CommandType, CreateCommand};

use crate::{
    bot::responder::Reply,
    error::AppError,
    model::interaction::InteractionEvent,
    registry::handler::{HandlerContext, InteractionHandler},
};

pub const NAME: &str = "User Info";

/// Discord epoch (2015-01-01T00:00:00Z) in milliseconds.
const DISCORD_EPOCH_MS: u64 = 1_420_070_400_000;

pub struct UserInfoMenu;

#[async_trait]
impl InteractionHandler for UserInfoMenu {
    fn name(&self) -> &str {
        NAME
    }

    fn definition(&self) -> Option<CreateCommand> {
        Some(CreateCommand::new(NAME).kind(CommandType::User))
    }

    async fn execute(
        &self,
        ctx: HandlerContext<'_>,
        event: &InteractionEvent,
    ) -> Result<(), AppError> {
        let target = event
            .target_id
            .ok_or_else(|| AppError::Handler(format!("{} invoked without a target", NAME)))?;

        let created_at = snowflake_timestamp(target).ok_or_else(|| {
            AppError::Handler(format!("User id {} has no valid timestamp", target))
        })?;

        let content = format!(
            "<@{}> created their account on {}.",
            target,
            created_at.format("%Y-%m-%d")
        );

        ctx.responder.reply(event, Reply::ephemeral(content)).await
    }
}

/// Creation time encoded in the upper 42 bits of a Discord snowflake.
fn snowflake_timestamp(id: u64) -> Option<DateTime<Utc>> {
    let millis = (id >> 22).checked_add(DISCORD_EPOCH_MS)?;
    DateTime::from_timestamp_millis(i64::try_from(millis).ok()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::test::{context_menu_event, RecordingResponder};

    /// Tests decoding the creation time of a known snowflake.
    ///
    /// Expected: 175928847299117063 was created on 2016-04-30
    #[test]
    fn decodes_snowflake_timestamp() {
        let created_at = snowflake_timestamp(175_928_847_299_117_063).unwrap();

        assert_eq!(created_at.format("%Y-%m-%d").to_string(), "2016-04-30");
    }

    #[tokio::test]
    async fn replies_with_target_creation_date() {
        let responder = RecordingResponder::default();
        let event = context_menu_event(NAME);
        let ctx = HandlerContext {
            responder: &responder,
            client: None,
            locale: Default::default(),
        };

        UserInfoMenu.execute(ctx, &event).await.unwrap();

        assert_eq!(
            responder.replies(),
            vec![(
                event.id,
                Reply::ephemeral("<@175928847299117063> created their account on 2016-04-30.")
            )]
        );
    }

    /// Tests that a menu invocation without a target fails instead of replying.
    #[tokio::test]
    async fn fails_without_target() {
        let responder = RecordingResponder::default();
        let mut event = context_menu_event(NAME);
        event.target_id = None;
        let ctx = HandlerContext {
            responder: &responder,
            client: None,
            locale: Default::default(),
        };

        let result = UserInfoMenu.execute(ctx, &event).await;

        assert!(matches!(result, Err(AppError::Handler(_))));
        assert!(responder.replies().is_empty());
    }
}
