//! Interaction dispatcher.
//!
//! Routes each `InteractionEvent` to its handler and owns the failure boundary around
//! handler execution. Routing, in priority order:
//!
//! 1. Buttons go to the interaction handler registered as `"button"`.
//! 2. Context menus go to the interaction handler named after the command. Without one,
//!    the user gets an ephemeral "not implemented" reply.
//! 3. Select menus go to the interaction handler registered as `"selectmenu"`.
//! 4. Slash commands go to the command handler of the same name. Unknown commands are
//!    ignored without any reply or telemetry.
//! 5. Everything else is ignored.
//!
//! Every routed interaction gets one telemetry transaction, finished exactly once no
//! matter how the handler ends. Matched interactions are also recorded for analytics in
//! the background, without holding up the handler. Handler errors and panics are captured, logged, and
//! answered with an ephemeral failure message; they never leave `dispatch`.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures_util::FutureExt;
use serde_json::Value;

use crate::{
    bot::{
        client::GatewayClient,
        responder::{InteractionResponder, Reply},
    },
    error::AppError,
    model::{
        analytics::AnalyticsCategory,
        interaction::{InteractionEvent, InteractionKind},
        locale::Locale,
    },
    registry::{
        handler::{HandlerContext, InteractionHandler},
        Registry,
    },
    service::analytics::Analytics,
    telemetry::{
        Breadcrumb, ErrorReport, SpanStatus, Telemetry, TelemetryUser, TransactionContext,
        TransactionGuard,
    },
};

/// Interaction handler key every button is routed to.
pub const BUTTON_HANDLER: &str = "button";
/// Interaction handler key every select menu is routed to.
pub const SELECT_MENU_HANDLER: &str = "selectmenu";

/// How a dispatch ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The handler ran and succeeded
    Handled,
    /// The handler failed, panicked, or was missing; the user was told
    Failed,
    /// Context menu without a handler; the user was told
    NotImplemented,
    /// Nothing to do for this interaction
    Ignored,
}

pub struct Dispatcher {
    registry: Arc<Registry>,
    telemetry: Arc<dyn Telemetry>,
    analytics: Arc<dyn Analytics>,
    locale: Locale,
}

/// A routed interaction, ready to run.
struct Route<'a> {
    handler: Option<Arc<dyn InteractionHandler>>,
    /// Key the handler was looked up under
    key: &'a str,
    category: AnalyticsCategory,
    identifier: &'a str,
    /// Whether the handler receives the gateway client
    with_client: bool,
}

impl Dispatcher {
    pub fn new(
        registry: Arc<Registry>,
        telemetry: Arc<dyn Telemetry>,
        analytics: Arc<dyn Analytics>,
        locale: Locale,
    ) -> Self {
        Self {
            registry,
            telemetry,
            analytics,
            locale,
        }
    }

    /// Routes one interaction to its handler and runs it inside the failure boundary.
    ///
    /// # Arguments
    /// - `client` - Gateway client handed to command handlers
    /// - `responder` - Sends replies for this interaction
    /// - `event` - The interaction to dispatch
    ///
    /// # Returns
    /// - `DispatchOutcome` describing which path the interaction took
    pub async fn dispatch(
        &self,
        client: &GatewayClient,
        responder: &dyn InteractionResponder,
        event: &InteractionEvent,
    ) -> DispatchOutcome {
        self.telemetry.set_user(TelemetryUser::from_event(event));
        self.telemetry.add_breadcrumb(Breadcrumb {
            category: "interaction",
            message: format!("New interaction with id: {}", event.id),
            data: raw_event(event),
        });

        let identifier = match event.kind {
            InteractionKind::Button | InteractionKind::SelectMenu => event.custom_id.as_deref(),
            _ => event.command_name.as_deref(),
        }
        .unwrap_or_default();

        let route = match event.kind {
            InteractionKind::Button => Route {
                handler: self.registry.interaction(BUTTON_HANDLER).cloned(),
                key: BUTTON_HANDLER,
                category: AnalyticsCategory::Button,
                identifier,
                with_client: false,
            },
            InteractionKind::ContextMenu => {
                let Some(handler) = self.registry.interaction(identifier).cloned() else {
                    return self.not_implemented(responder, event).await;
                };
                Route {
                    handler: Some(handler),
                    key: identifier,
                    category: AnalyticsCategory::ContextMenu,
                    identifier,
                    with_client: false,
                }
            }
            InteractionKind::SelectMenu => Route {
                handler: self.registry.interaction(SELECT_MENU_HANDLER).cloned(),
                key: SELECT_MENU_HANDLER,
                category: AnalyticsCategory::SelectMenu,
                identifier,
                with_client: false,
            },
            InteractionKind::Command => {
                let Some(handler) = self.registry.command(identifier).cloned() else {
                    tracing::debug!("No command handler registered for '{}'", identifier);
                    return DispatchOutcome::Ignored;
                };
                Route {
                    handler: Some(handler),
                    key: identifier,
                    category: AnalyticsCategory::Command,
                    identifier,
                    with_client: true,
                }
            }
            InteractionKind::Other => return DispatchOutcome::Ignored,
        };

        let ctx = HandlerContext {
            responder,
            client: route.with_client.then_some(client),
            locale: self.locale,
        };

        self.run(route, ctx, event).await
    }

    /// Answers a context menu that has no handler.
    ///
    /// The transaction is opened and finished without a status.
    async fn not_implemented(
        &self,
        responder: &dyn InteractionResponder,
        event: &InteractionEvent,
    ) -> DispatchOutcome {
        let transaction = self.open_transaction(event);

        let reply = Reply::ephemeral(self.locale.not_implemented());
        if let Err(e) = responder.reply(event, reply).await {
            tracing::warn!(
                "Failed to send not-implemented reply for interaction {}: {}",
                event.id,
                e
            );
        }

        transaction.finish();
        DispatchOutcome::NotImplemented
    }

    async fn run(
        &self,
        route: Route<'_>,
        ctx: HandlerContext<'_>,
        event: &InteractionEvent,
    ) -> DispatchOutcome {
        let mut transaction = self.open_transaction(event);

        self.record_analytics(route.category, route.identifier, event);

        let result = match route.handler {
            Some(handler) => AssertUnwindSafe(handler.execute(ctx, event))
                .catch_unwind()
                .await
                .unwrap_or_else(|panic| Err(AppError::HandlerPanicked(panic_message(panic)))),
            None => Err(AppError::HandlerNotFound(route.key.to_string())),
        };

        let outcome = match result {
            Ok(()) => {
                transaction.set_status(SpanStatus::Ok);
                DispatchOutcome::Handled
            }
            Err(error) => {
                transaction.set_status(SpanStatus::InternalError);
                self.report_failure(ctx.responder, event, &error).await;
                DispatchOutcome::Failed
            }
        };

        transaction.finish();
        outcome
    }

    /// Records the interaction for analytics in a background task.
    ///
    /// The handler never waits on the analytics sink; failures are logged by the task.
    fn record_analytics(
        &self,
        category: AnalyticsCategory,
        identifier: &str,
        event: &InteractionEvent,
    ) {
        let analytics = self.analytics.clone();
        let identifier = identifier.to_string();
        let event = event.clone();

        tokio::spawn(async move {
            if let Err(e) = analytics.record(category, &identifier, &event).await {
                tracing::warn!(
                    "Failed to record {} analytics for interaction {}: {}",
                    category.as_str(),
                    event.id,
                    e
                );
            }
        });
    }

    fn open_transaction(&self, event: &InteractionEvent) -> TransactionGuard {
        TransactionGuard::start(
            self.telemetry.as_ref(),
            TransactionContext::for_interaction(event),
        )
    }

    /// Logs and captures a handler failure, then tells the user.
    ///
    /// The reply is sent even if the handler already answered the interaction, in which
    /// case Discord rejects it and the rejection is only logged.
    async fn report_failure(
        &self,
        responder: &dyn InteractionResponder,
        event: &InteractionEvent,
        error: &AppError,
    ) {
        tracing::error!(
            "Interaction {} ({}) failed: {}",
            event.id,
            event.kind,
            error
        );

        self.telemetry.capture_error(
            error,
            ErrorReport {
                user: TelemetryUser::from_event(event),
                tags: vec![("bug", "interaction".to_string())],
                extra: serde_json::json!({ "interaction": raw_event(event) }),
            },
        );

        let reply = Reply::ephemeral(self.locale.interaction_failed(event.id, event.kind.as_str()));
        if let Err(e) = responder.reply(event, reply).await {
            tracing::warn!(
                "Failed to send failure reply for interaction {}: {}",
                event.id,
                e
            );
        }
    }
}

fn raw_event(event: &InteractionEvent) -> Value {
    serde_json::to_value(event).unwrap_or(Value::Null)
}

fn panic_message(panic: Box<dyn Any + Send>) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

#[cfg(test)]
pub(crate) mod test;
