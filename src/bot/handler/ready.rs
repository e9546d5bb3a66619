//! Ready event handler.
//!
//! Fired once per gateway session after the handshake. The registry is already built by
//! then, so this handler only reports on it, publishes the application command
//! definitions, and kicks off the diagnostic query in the background.

use sea_orm::DatabaseConnection;
use serenity::all::{Command, Context, Ready};

use crate::{
    data::diagnostic::DiagnosticRepository,
    model::diagnostic::DiagnosticQuery,
    registry::Registry,
    service::analytics::AnalyticsService,
};

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `db` - Database connection for the background diagnostics
/// - `registry` - Handler registry to report on and publish definitions from
/// - `diagnostic_query` - Sanity-check query to run, if configured
/// - `ctx` - Discord context used to publish commands
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(
    db: &DatabaseConnection,
    registry: &Registry,
    diagnostic_query: Option<DiagnosticQuery>,
    ctx: &Context,
    ready: &Ready,
) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    let summary = registry.summary();
    tracing::info!(
        "Handlers loaded: {} commands, {} interactions, {} event listeners",
        summary.commands,
        summary.interactions,
        summary.listeners
    );

    publish_commands(ctx, registry).await;

    let db = db.clone();
    tokio::spawn(async move {
        run_diagnostics(&db, diagnostic_query.as_ref()).await;
    });
}

/// Replaces the global application commands with the registry's definitions.
async fn publish_commands(ctx: &Context, registry: &Registry) {
    let definitions = registry.command_definitions();
    if definitions.is_empty() {
        return;
    }

    match Command::set_global_commands(&ctx.http, definitions).await {
        Ok(commands) => tracing::info!("Published {} application commands", commands.len()),
        Err(e) => tracing::error!("Failed to publish application commands: {:?}", e),
    }
}

/// Logs the analytics totals and the diagnostic query result. Errors are only logged.
async fn run_diagnostics(db: &DatabaseConnection, diagnostic_query: Option<&DiagnosticQuery>) {
    match AnalyticsService::new(db).summarize().await {
        Ok(totals) => {
            for (category, count) in totals {
                tracing::info!("Analytics: {} {} events recorded", count, category.as_str());
            }
        }
        Err(e) => tracing::warn!("Failed to summarize analytics: {}", e),
    }

    let Some(query) = diagnostic_query else {
        return;
    };

    match DiagnosticRepository::new(db).run(query).await {
        Ok(rows) => tracing::info!(
            "Diagnostic query on {} returned {} row(s): {:?}",
            query.table,
            rows.len(),
            rows
        ),
        Err(e) => tracing::warn!("Diagnostic query on {} failed: {}", query.table, e),
    }
}
