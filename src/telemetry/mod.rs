//! Error-reporting and tracing collaborator.
//!
//! The dispatcher reports through the `Telemetry` trait: it sets the user scope, drops a
//! breadcrumb per interaction, opens a transaction around handler execution, and
//! captures handler failures. Implementations are best effort; none of these calls can
//! fail from the dispatcher's point of view.
//!
//! Transactions are handed out behind a `TransactionGuard`, which finishes the
//! transaction when dropped, so every opened transaction is finished exactly once.

pub mod span;

use serde_json::Value;

use crate::{
    error::AppError,
    model::interaction::{InteractionEvent, InteractionSnapshot},
};

pub use span::TracingTelemetry;

/// User scope attached to subsequent telemetry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryUser {
    pub id: u64,
    pub username: String,
    pub avatar_url: Option<String>,
}

impl TelemetryUser {
    pub fn from_event(event: &InteractionEvent) -> Self {
        Self {
            id: event.user.id,
            username: event.user.name.clone(),
            avatar_url: event.user.avatar_url.clone(),
        }
    }
}

/// What a transaction is opened for.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionContext {
    /// Operation, `interaction@<type>`
    pub op: String,
    /// Transaction name, the interaction id
    pub name: String,
    pub data: InteractionSnapshot,
}

impl TransactionContext {
    pub fn for_interaction(event: &InteractionEvent) -> Self {
        Self {
            op: format!("interaction@{}", event.kind),
            name: event.id.to_string(),
            data: event.snapshot(),
        }
    }
}

/// Outcome recorded on a transaction before it is finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanStatus {
    Ok,
    InternalError,
}

impl SpanStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::InternalError => "internal_error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Breadcrumb {
    pub category: &'static str,
    pub message: String,
    pub data: Value,
}

/// Context captured alongside an error.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorReport {
    pub user: TelemetryUser,
    pub tags: Vec<(&'static str, String)>,
    pub extra: Value,
}

pub trait Telemetry: Send + Sync {
    fn set_user(&self, user: TelemetryUser);

    fn start_transaction(&self, context: TransactionContext) -> Box<dyn Transaction>;

    fn add_breadcrumb(&self, breadcrumb: Breadcrumb);

    fn capture_error(&self, error: &AppError, report: ErrorReport);
}

/// An open transaction. `finish` consumes it, so it cannot be finished twice.
pub trait Transaction: Send {
    fn set_status(&mut self, status: SpanStatus);

    fn finish(self: Box<Self>);
}

/// Owns an open transaction and finishes it on every exit path.
pub struct TransactionGuard {
    inner: Option<Box<dyn Transaction>>,
}

impl TransactionGuard {
    pub fn start(telemetry: &dyn Telemetry, context: TransactionContext) -> Self {
        Self {
            inner: Some(telemetry.start_transaction(context)),
        }
    }

    pub fn set_status(&mut self, status: SpanStatus) {
        if let Some(transaction) = self.inner.as_mut() {
            transaction.set_status(status);
        }
    }

    pub fn finish(mut self) {
        if let Some(transaction) = self.inner.take() {
            transaction.finish();
        }
    }
}

impl Drop for TransactionGuard {
    fn drop(&mut self) {
        if let Some(transaction) = self.inner.take() {
            transaction.finish();
        }
    }
}
