//! Recording fakes for the dispatcher's collaborators, plus interaction builders.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::{
    bot::{
        client::GatewayClient,
        responder::{InteractionResponder, Reply},
    },
    dispatch::{DispatchOutcome, Dispatcher, BUTTON_HANDLER, SELECT_MENU_HANDLER},
    error::AppError,
    model::{
        analytics::AnalyticsCategory,
        interaction::{ChannelRef, GuildRef, InteractionEvent, InteractionKind, InteractionUser},
        locale::Locale,
    },
    registry::{
        handler::{HandlerContext, InteractionHandler},
        RegistryBuilder,
    },
    service::analytics::Analytics,
    telemetry::{
        Breadcrumb, ErrorReport, SpanStatus, Telemetry, TelemetryUser, Transaction,
        TransactionContext,
    },
};

mod button;
mod other;

pub const TOKEN: &str = "interaction-token";

/// Everything the recording telemetry saw, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum TelemetryRecord {
    User(u64),
    Breadcrumb(String),
    Opened { op: String, name: String },
    Status(SpanStatus),
    Finished,
    Captured { tags: Vec<(&'static str, String)>, error: String },
}

#[derive(Default, Clone)]
pub struct RecordingTelemetry {
    pub records: Arc<Mutex<Vec<TelemetryRecord>>>,
}

impl RecordingTelemetry {
    pub fn records(&self) -> Vec<TelemetryRecord> {
        self.records.lock().unwrap().clone()
    }

    pub fn count(&self, predicate: impl Fn(&TelemetryRecord) -> bool) -> usize {
        self.records().iter().filter(|record| predicate(*record)).count()
    }

    pub fn opened(&self) -> usize {
        self.count(|record| matches!(record, TelemetryRecord::Opened { .. }))
    }

    pub fn finished(&self) -> usize {
        self.count(|record| matches!(record, TelemetryRecord::Finished))
    }

    pub fn statuses(&self) -> Vec<SpanStatus> {
        self.records()
            .into_iter()
            .filter_map(|record| match record {
                TelemetryRecord::Status(status) => Some(status),
                _ => None,
            })
            .collect()
    }

    pub fn captured(&self) -> Vec<(Vec<(&'static str, String)>, String)> {
        self.records()
            .into_iter()
            .filter_map(|record| match record {
                TelemetryRecord::Captured { tags, error } => Some((tags, error)),
                _ => None,
            })
            .collect()
    }
}

struct RecordingTransaction(Arc<Mutex<Vec<TelemetryRecord>>>);

impl Transaction for RecordingTransaction {
    fn set_status(&mut self, status: SpanStatus) {
        self.0.lock().unwrap().push(TelemetryRecord::Status(status));
    }

    fn finish(self: Box<Self>) {
        self.0.lock().unwrap().push(TelemetryRecord::Finished);
    }
}

impl Telemetry for RecordingTelemetry {
    fn set_user(&self, user: TelemetryUser) {
        self.records.lock().unwrap().push(TelemetryRecord::User(user.id));
    }

    fn start_transaction(&self, context: TransactionContext) -> Box<dyn Transaction> {
        self.records.lock().unwrap().push(TelemetryRecord::Opened {
            op: context.op,
            name: context.name,
        });
        Box::new(RecordingTransaction(self.records.clone()))
    }

    fn add_breadcrumb(&self, breadcrumb: Breadcrumb) {
        self.records
            .lock()
            .unwrap()
            .push(TelemetryRecord::Breadcrumb(breadcrumb.message));
    }

    fn capture_error(&self, error: &AppError, report: ErrorReport) {
        self.records.lock().unwrap().push(TelemetryRecord::Captured {
            tags: report.tags,
            error: error.to_string(),
        });
    }
}

#[derive(Default, Clone)]
pub struct RecordingAnalytics {
    pub calls: Arc<Mutex<Vec<(AnalyticsCategory, String, u64)>>>,
    pub fail: bool,
    /// Never completes a recording, like a sink stuck on a dead connection
    pub hang: bool,
}

impl RecordingAnalytics {
    pub fn calls(&self) -> Vec<(AnalyticsCategory, String, u64)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Analytics for RecordingAnalytics {
    async fn record(
        &self,
        category: AnalyticsCategory,
        identifier: &str,
        event: &InteractionEvent,
    ) -> Result<(), AppError> {
        self.calls
            .lock()
            .unwrap()
            .push((category, identifier.to_string(), event.id));
        if self.hang {
            std::future::pending::<()>().await;
        }
        if self.fail {
            return Err(AppError::Handler("analytics unavailable".to_string()));
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingResponder {
    pub replies: Mutex<Vec<(u64, Reply)>>,
    pub fail: bool,
}

impl RecordingResponder {
    pub fn replies(&self) -> Vec<(u64, Reply)> {
        self.replies.lock().unwrap().clone()
    }
}

#[async_trait]
impl InteractionResponder for RecordingResponder {
    async fn reply(&self, event: &InteractionEvent, reply: Reply) -> Result<(), AppError> {
        self.replies.lock().unwrap().push((event.id, reply));
        if self.fail {
            return Err(AppError::Handler("interaction already acknowledged".to_string()));
        }
        Ok(())
    }
}

/// What a `ScriptedHandler` does when executed.
#[derive(Clone, Copy)]
pub enum Script {
    Succeed,
    /// Reply to the interaction, then succeed
    Reply,
    /// Reply to the interaction, then fail
    ReplyThenFail,
    Fail,
    Panic,
}

/// One recorded execution: interaction id and whether a client was passed.
pub type Call = (u64, bool);

pub struct ScriptedHandler {
    pub name: &'static str,
    pub script: Script,
    pub calls: Arc<Mutex<Vec<Call>>>,
}

impl ScriptedHandler {
    pub fn new(name: &'static str, script: Script) -> (Self, Arc<Mutex<Vec<Call>>>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                name,
                script,
                calls: calls.clone(),
            },
            calls,
        )
    }
}

#[async_trait]
impl InteractionHandler for ScriptedHandler {
    fn name(&self) -> &str {
        self.name
    }

    async fn execute(
        &self,
        ctx: HandlerContext<'_>,
        event: &InteractionEvent,
    ) -> Result<(), AppError> {
        self.calls
            .lock()
            .unwrap()
            .push((event.id, ctx.client.is_some()));

        match self.script {
            Script::Succeed => Ok(()),
            Script::Reply => ctx.responder.reply(event, Reply::public("done")).await,
            Script::ReplyThenFail => {
                ctx.responder.reply(event, Reply::public("partial")).await?;
                Err(AppError::Handler("failed after replying".to_string()))
            }
            Script::Fail => Err(AppError::Handler("handler exploded".to_string())),
            Script::Panic => panic!("handler panicked on purpose"),
        }
    }
}

/// Dispatcher wired to recording fakes.
pub struct Harness {
    pub dispatcher: Dispatcher,
    pub telemetry: RecordingTelemetry,
    pub analytics: RecordingAnalytics,
    pub responder: RecordingResponder,
    pub client: GatewayClient,
}

impl Harness {
    pub fn new(builder: RegistryBuilder) -> Self {
        Self::with(builder, RecordingAnalytics::default(), RecordingResponder::default())
    }

    pub fn with(
        builder: RegistryBuilder,
        analytics: RecordingAnalytics,
        responder: RecordingResponder,
    ) -> Self {
        let telemetry = RecordingTelemetry::default();
        let dispatcher = Dispatcher::new(
            Arc::new(builder.build().unwrap()),
            Arc::new(telemetry.clone()),
            Arc::new(analytics.clone()),
            Locale::En,
        );

        Self {
            dispatcher,
            telemetry,
            analytics,
            responder,
            client: GatewayClient::offline(),
        }
    }

    pub async fn dispatch(&self, event: &InteractionEvent) -> DispatchOutcome {
        self.dispatcher
            .dispatch(&self.client, &self.responder, event)
            .await
    }

    /// Analytics calls once at least `expected` background recordings have run.
    ///
    /// Gives up after a second and returns whatever was recorded by then.
    pub async fn recorded(&self, expected: usize) -> Vec<(AnalyticsCategory, String, u64)> {
        let wait = async {
            loop {
                let calls = self.analytics.calls();
                if calls.len() >= expected {
                    return calls;
                }
                tokio::task::yield_now().await;
            }
        };

        tokio::time::timeout(Duration::from_secs(1), wait)
            .await
            .unwrap_or_else(|_| self.analytics.calls())
    }
}

static NEXT_ID: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1_000);

fn event(kind: InteractionKind) -> InteractionEvent {
    InteractionEvent {
        id: NEXT_ID.fetch_add(1, std::sync::atomic::Ordering::SeqCst),
        kind,
        command_name: None,
        custom_id: None,
        token: TOKEN.to_string(),
        user: InteractionUser {
            id: 111,
            name: "tester".to_string(),
            avatar_url: Some("https://cdn.discordapp.com/avatars/111/abc.png".to_string()),
        },
        channel: Some(ChannelRef {
            id: 222,
            name: Some("general".to_string()),
        }),
        guild: Some(GuildRef {
            id: 333,
            name: Some("Test Guild".to_string()),
        }),
        options: None,
        values: Vec::new(),
        target_id: None,
    }
}

pub fn command_event(name: &str) -> InteractionEvent {
    let mut event = event(InteractionKind::Command);
    event.command_name = Some(name.to_string());
    event.options = Some(serde_json::json!([]));
    event
}

pub fn context_menu_event(name: &str) -> InteractionEvent {
    let mut event = event(InteractionKind::ContextMenu);
    event.command_name = Some(name.to_string());
    event.options = Some(serde_json::json!([]));
    event.target_id = Some(175_928_847_299_117_063);
    event
}

pub fn button_event(custom_id: &str) -> InteractionEvent {
    let mut event = event(InteractionKind::Button);
    event.custom_id = Some(custom_id.to_string());
    event
}

pub fn select_menu_event(custom_id: &str, values: &[&str]) -> InteractionEvent {
    let mut event = event(InteractionKind::SelectMenu);
    event.custom_id = Some(custom_id.to_string());
    event.values = values.iter().map(|value| value.to_string()).collect();
    event
}

pub fn other_event() -> InteractionEvent {
    let mut event = event(InteractionKind::Other);
    event.custom_id = Some("modal".to_string());
    event
}
