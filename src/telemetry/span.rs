//! `Telemetry` backed by `tracing`.
//!
//! Transactions become spans, breadcrumbs become debug events, and captured errors
//! become structured error events carrying the user, tags, and extra data. Whatever
//! subscriber is installed decides where they end up.

use std::sync::Mutex;
use std::time::Instant;

use tracing::{field, Span};

use crate::{
    error::AppError,
    telemetry::{
        Breadcrumb, ErrorReport, SpanStatus, Telemetry, TelemetryUser, Transaction,
        TransactionContext,
    },
};

#[derive(Default)]
pub struct TracingTelemetry {
    /// Last user set; interleaved dispatches may overwrite each other's scope.
    user: Mutex<Option<TelemetryUser>>,
}

impl TracingTelemetry {
    pub fn new() -> Self {
        Self::default()
    }

    fn scope_user_id(&self) -> Option<u64> {
        self.user
            .lock()
            .ok()
            .and_then(|user| user.as_ref().map(|user| user.id))
    }
}

impl Telemetry for TracingTelemetry {
    fn set_user(&self, user: TelemetryUser) {
        if let Ok(mut scope) = self.user.lock() {
            *scope = Some(user);
        }
    }

    fn start_transaction(&self, context: TransactionContext) -> Box<dyn Transaction> {
        let span = tracing::info_span!(
            "transaction",
            op = %context.op,
            name = %context.name,
            status = field::Empty,
        );

        match serde_json::to_string(&context.data) {
            Ok(data) => span.in_scope(|| tracing::debug!(data = %data, "Transaction started")),
            Err(e) => span.in_scope(|| tracing::warn!("Failed to serialize transaction data: {}", e)),
        }

        Box::new(SpanTransaction {
            span,
            started: Instant::now(),
            status: None,
        })
    }

    fn add_breadcrumb(&self, breadcrumb: Breadcrumb) {
        tracing::debug!(
            category = breadcrumb.category,
            user_id = ?self.scope_user_id(),
            data = %breadcrumb.data,
            "{}",
            breadcrumb.message
        );
    }

    fn capture_error(&self, error: &AppError, report: ErrorReport) {
        let tags = report
            .tags
            .iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect::<Vec<_>>()
            .join(",");

        tracing::error!(
            user_id = report.user.id,
            username = %report.user.username,
            tags = %tags,
            extra = %report.extra,
            "Captured error: {}",
            error
        );
    }
}

struct SpanTransaction {
    span: Span,
    started: Instant,
    status: Option<SpanStatus>,
}

impl Transaction for SpanTransaction {
    fn set_status(&mut self, status: SpanStatus) {
        self.status = Some(status);
        self.span.record("status", status.as_str());
    }

    fn finish(self: Box<Self>) {
        let elapsed = self.started.elapsed();
        let status = self.status.map(|status| status.as_str()).unwrap_or("unset");

        self.span.in_scope(|| {
            tracing::info!(
                elapsed_ms = elapsed.as_millis() as u64,
                status,
                "Transaction finished"
            )
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::test::button_event;

    /// Tests that the most recent user replaces the previous scope.
    #[test]
    fn keeps_last_user_in_scope() {
        let telemetry = TracingTelemetry::new();
        let mut event = button_event("confirm");

        telemetry.set_user(TelemetryUser::from_event(&event));
        event.user.id = 999;
        telemetry.set_user(TelemetryUser::from_event(&event));

        assert_eq!(telemetry.scope_user_id(), Some(999));
    }

    #[test]
    fn transaction_runs_without_subscriber() {
        let telemetry = TracingTelemetry::new();
        let event = button_event("confirm");

        let mut transaction =
            telemetry.start_transaction(TransactionContext::for_interaction(&event));
        transaction.set_status(SpanStatus::InternalError);
        transaction.finish();

        telemetry.capture_error(
            &AppError::HandlerNotFound("button".to_string()),
            ErrorReport {
                user: TelemetryUser::from_event(&event),
                tags: vec![("bug", "interaction".to_string())],
                extra: serde_json::Value::Null,
            },
        );
    }
}
